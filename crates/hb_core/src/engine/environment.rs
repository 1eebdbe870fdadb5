//! Game-day atmosphere: air density from park conditions and a per-game
//! wind vector sampled once at first pitch.

use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use super::config::EnvironmentConfig;
use super::physics_constants::{air, convert};

/// Immutable per-game atmospheric state.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    /// Air density (slug/ft^3).
    pub air_density: f64,
    /// Wind velocity (ft/s) in field coordinates. Horizontal only.
    pub wind: Vector3<f64>,
}

impl Environment {
    /// Still air at the configured park conditions.
    pub fn calm(cfg: &EnvironmentConfig) -> Self {
        Self { air_density: air_density(cfg), wind: Vector3::zeros() }
    }

    /// Sample the game's wind from the environment stream.
    pub fn for_game(cfg: &EnvironmentConfig, rng: &mut ChaCha8Rng) -> Self {
        let wind = if cfg.wind_sigma_mph <= 0.0 && cfg.wind_mean_mph == 0.0 {
            Vector3::zeros()
        } else {
            let speed_dist = Normal::new(cfg.wind_mean_mph, cfg.wind_sigma_mph.max(1e-9))
                .expect("finite wind parameters");
            let speed_mph = speed_dist.sample(rng).abs();
            let dir: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let speed = speed_mph * convert::MPH_TO_FTPS;
            Vector3::new(speed * dir.sin(), speed * dir.cos(), 0.0)
        };
        Self { air_density: air_density(cfg), wind }
    }
}

/// Air density from temperature, altitude, and humidity.
///
/// Ideal-gas temperature correction and an exponential altitude lapse;
/// humid air is slightly lighter than dry air at the same conditions.
pub fn air_density(cfg: &EnvironmentConfig) -> f64 {
    let temp_rankine = cfg.temperature_f + 459.67;
    let reference_rankine = 59.0 + 459.67;
    let temp_factor = reference_rankine / temp_rankine;
    let altitude_factor = (-cfg.altitude_ft / air::ALTITUDE_SCALE_FT).exp();
    let humidity_factor = 1.0 - 0.004 * cfg.relative_humidity.clamp(0.0, 1.0);
    air::RHO_SEA_LEVEL * temp_factor * altitude_factor * humidity_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;

    #[test]
    fn test_hotter_air_is_thinner() {
        let mut warm = EnvironmentConfig::default();
        warm.temperature_f = 95.0;
        let mut cold = EnvironmentConfig::default();
        cold.temperature_f = 40.0;
        assert!(air_density(&warm) < air_density(&cold));
    }

    #[test]
    fn test_altitude_thins_air() {
        let mut denver = EnvironmentConfig::default();
        denver.altitude_ft = 5280.0;
        let sea = EnvironmentConfig::default();
        let ratio = air_density(&denver) / air_density(&sea);
        assert!(ratio > 0.80 && ratio < 0.87, "ratio {}", ratio);
    }

    #[test]
    fn test_calm_has_zero_wind() {
        let env = Environment::calm(&EnvironmentConfig::default());
        assert_eq!(env.wind, Vector3::zeros());
    }

    #[test]
    fn test_wind_sampling_is_deterministic() {
        let cfg = EnvironmentConfig { wind_mean_mph: 8.0, wind_sigma_mph: 4.0, ..Default::default() };
        let mut a = ChaCha8Rng::seed_from_u64(11);
        let mut b = ChaCha8Rng::seed_from_u64(11);
        let e1 = Environment::for_game(&cfg, &mut a);
        let e2 = Environment::for_game(&cfg, &mut b);
        assert_eq!(e1, e2);
        // Wind is horizontal.
        assert_eq!(e1.wind.z, 0.0);
    }
}
