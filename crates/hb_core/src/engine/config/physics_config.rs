//! Aerodynamics and integrator tuning.

use serde::{Deserialize, Serialize};

use crate::engine::timestep;

/// Drag/lift coefficient model and integrator step configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    // === Integrator steps (s) ===
    pub dt_normal_s: f64,
    pub dt_fast_s: f64,
    pub dt_ultra_s: f64,
    /// Hard cap on integrated flight time (s).
    pub max_flight_time_s: f64,

    // === Drag model ===
    /// Cd below the drag crisis.
    pub cd_low: f64,
    /// Cd above the drag crisis.
    pub cd_high: f64,
    /// Speed band (ft/s) across which Cd transitions.
    pub drag_crisis_lo_ftps: f64,
    pub drag_crisis_hi_ftps: f64,
    /// Cd increase per unit of spin parameter, saturating at `spin_sat`.
    pub cd_spin_coeff: f64,

    // === Lift model ===
    /// Saturation value of the lift coefficient.
    pub cl_max: f64,
    /// Spin-parameter scale of the tanh lift curve.
    pub cl_scale: f64,
    /// Spin parameter beyond which coefficients stop growing.
    pub spin_sat: f64,

    // === Release execution noise ===
    /// Per-pitch scatter around the arsenal's mean release speed (mph).
    pub release_speed_sigma_mph: f64,
    /// Per-pitch scatter around the mean spin rate (rpm).
    pub release_spin_sigma_rpm: f64,

    // === Lookup-table mode ===
    /// Tabulate (speed, spin) -> (Cd, Cl) instead of evaluating exactly.
    pub use_lookup_table: bool,
    /// Grid resolution (ft/s).
    pub lookup_speed_step_ftps: f64,
    /// Grid resolution (rpm).
    pub lookup_spin_step_rpm: f64,
    /// Upper speed bound of the table (ft/s).
    pub lookup_speed_max_ftps: f64,
    /// Upper spin bound of the table (rpm).
    pub lookup_spin_max_rpm: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            dt_normal_s: timestep::DT_NORMAL,
            dt_fast_s: timestep::DT_FAST,
            dt_ultra_s: timestep::DT_ULTRA,
            max_flight_time_s: timestep::MAX_FLIGHT_TIME,

            cd_low: 0.35,
            cd_high: 0.30,
            drag_crisis_lo_ftps: 50.0,
            drag_crisis_hi_ftps: 90.0,
            cd_spin_coeff: 0.20,

            cl_max: 0.30,
            cl_scale: 0.18,
            spin_sat: 0.30,

            release_speed_sigma_mph: 1.0,
            release_spin_sigma_rpm: 120.0,

            use_lookup_table: false,
            lookup_speed_step_ftps: 1.0,
            lookup_spin_step_rpm: 100.0,
            lookup_speed_max_ftps: 300.0,
            lookup_spin_max_rpm: 3600.0,
        }
    }
}

/// Atmospheric conditions and per-game wind sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub temperature_f: f64,
    pub altitude_ft: f64,
    /// Relative humidity, 0..1.
    pub relative_humidity: f64,
    /// Mean wind speed (mph); per-game speed is |N(mean, sigma)|.
    pub wind_mean_mph: f64,
    pub wind_sigma_mph: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            temperature_f: 70.0,
            altitude_ft: 0.0,
            relative_humidity: 0.50,
            wind_mean_mph: 0.0,
            wind_sigma_mph: 5.0,
        }
    }
}

impl EnvironmentConfig {
    /// Calm reference conditions for physics regression tests.
    pub fn calm() -> Self {
        Self { wind_mean_mph: 0.0, wind_sigma_mph: 0.0, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_steps_match_presets() {
        let cfg = PhysicsConfig::default();
        assert_eq!(cfg.dt_normal_s, 0.001);
        assert_eq!(cfg.dt_fast_s, 0.002);
        assert_eq!(cfg.dt_ultra_s, 0.005);
    }

    #[test]
    fn test_calm_environment_has_no_wind() {
        let env = EnvironmentConfig::calm();
        assert_eq!(env.wind_mean_mph, 0.0);
        assert_eq!(env.wind_sigma_mph, 0.0);
    }
}
