//! Aerodynamic force model: drag and Magnus lift on a spinning baseball.
//!
//! Coefficients come either from the closed-form model or, in bulk mode,
//! from a pre-built (speed, spin) lookup grid with bilinear interpolation.
//! Gravity is applied by the integrator, not here.

use nalgebra::Vector3;

use super::ball::BallState;
use super::config::PhysicsConfig;
use super::environment::Environment;
use super::physics_constants::ball;
use crate::error::AeroError;

/// Speeds below this produce no aerodynamic force (numerically negligible).
const MIN_AERO_SPEED_FTPS: f64 = 1e-6;

#[derive(Debug, Clone)]
pub struct AeroModel {
    cfg: PhysicsConfig,
    table: Option<CoeffTable>,
}

impl AeroModel {
    pub fn new(cfg: &PhysicsConfig) -> Self {
        let table = cfg.use_lookup_table.then(|| CoeffTable::build(cfg));
        Self { cfg: cfg.clone(), table }
    }

    /// Drag and lift coefficients at the given air-relative speed and spin.
    pub fn coefficients(&self, speed_ftps: f64, spin_rpm: f64) -> (f64, f64) {
        match &self.table {
            Some(table) => table.lookup(speed_ftps, spin_rpm),
            None => self.coefficients_exact(speed_ftps, spin_rpm),
        }
    }

    /// Closed-form coefficient model.
    ///
    /// Cd sits at `cd_low` below the drag crisis, descends smoothly to
    /// `cd_high` across the crisis band, and grows with spin. Cl follows a
    /// saturating tanh of the spin parameter S = r*omega/v.
    pub fn coefficients_exact(&self, speed_ftps: f64, spin_rpm: f64) -> (f64, f64) {
        let c = &self.cfg;
        let spin_parameter = if speed_ftps > MIN_AERO_SPEED_FTPS {
            ball::RADIUS_FT * spin_rpm * super::physics_constants::convert::RPM_TO_RADPS
                / speed_ftps
        } else {
            0.0
        };

        let t = ((speed_ftps - c.drag_crisis_lo_ftps)
            / (c.drag_crisis_hi_ftps - c.drag_crisis_lo_ftps))
            .clamp(0.0, 1.0);
        let crisis = t * t * (3.0 - 2.0 * t);
        let cd_base = c.cd_low + (c.cd_high - c.cd_low) * crisis;
        let cd = cd_base + c.cd_spin_coeff * spin_parameter.min(c.spin_sat);

        let cl = c.cl_max * (spin_parameter / c.cl_scale).tanh();
        (cd, cl)
    }

    /// Total aerodynamic force (lbf) on the ball.
    pub fn force(&self, state: &BallState, env: &Environment) -> Result<Vector3<f64>, AeroError> {
        if !state.is_finite() || !env.air_density.is_finite() || !env.wind.iter().all(|w| w.is_finite())
        {
            return Err(AeroError::NonFiniteForce);
        }

        let v_air = state.vel - env.wind;
        let speed = v_air.norm();
        if speed < MIN_AERO_SPEED_FTPS {
            return Ok(Vector3::zeros());
        }
        let v_hat = v_air / speed;

        let (cd, cl) = self.coefficients(speed, state.spin_rpm);
        let q = 0.5 * env.air_density * ball::AREA_FT2 * speed * speed;

        let drag = -q * cd * v_hat;
        // |axis x v_hat| = sin(angle): gyro-dominant spin breaks less.
        let magnus = q * cl * state.spin_axis.cross(&v_hat);

        let total = drag + magnus;
        if total.iter().all(|f| f.is_finite()) {
            Ok(total)
        } else {
            Err(AeroError::NonFiniteForce)
        }
    }
}

/// Tabulated (Cd, Cl) on a regular (speed, spin) grid.
#[derive(Debug, Clone)]
struct CoeffTable {
    speed_step: f64,
    spin_step: f64,
    speeds: usize,
    spins: usize,
    // Row-major: [speed_index * spins + spin_index].
    cd: Vec<f64>,
    cl: Vec<f64>,
}

impl CoeffTable {
    fn build(cfg: &PhysicsConfig) -> Self {
        let exact = AeroModel { cfg: cfg.clone(), table: None };
        let speeds = (cfg.lookup_speed_max_ftps / cfg.lookup_speed_step_ftps).ceil() as usize + 1;
        let spins = (cfg.lookup_spin_max_rpm / cfg.lookup_spin_step_rpm).ceil() as usize + 1;
        let mut cd = Vec::with_capacity(speeds * spins);
        let mut cl = Vec::with_capacity(speeds * spins);
        for i in 0..speeds {
            let speed = i as f64 * cfg.lookup_speed_step_ftps;
            for j in 0..spins {
                let spin = j as f64 * cfg.lookup_spin_step_rpm;
                let (d, l) = exact.coefficients_exact(speed, spin);
                cd.push(d);
                cl.push(l);
            }
        }
        Self {
            speed_step: cfg.lookup_speed_step_ftps,
            spin_step: cfg.lookup_spin_step_rpm,
            speeds,
            spins,
            cd,
            cl,
        }
    }

    fn lookup(&self, speed: f64, spin: f64) -> (f64, f64) {
        let si = (speed / self.speed_step).clamp(0.0, (self.speeds - 1) as f64);
        let ri = (spin / self.spin_step).clamp(0.0, (self.spins - 1) as f64);
        let s0 = (si as usize).min(self.speeds - 2);
        let r0 = (ri as usize).min(self.spins - 2);
        let fs = si - s0 as f64;
        let fr = ri - r0 as f64;

        let idx = |s: usize, r: usize| s * self.spins + r;
        let bilerp = |grid: &[f64]| {
            let v00 = grid[idx(s0, r0)];
            let v01 = grid[idx(s0, r0 + 1)];
            let v10 = grid[idx(s0 + 1, r0)];
            let v11 = grid[idx(s0 + 1, r0 + 1)];
            let lo = v00 + (v01 - v00) * fr;
            let hi = v10 + (v11 - v10) * fr;
            lo + (hi - lo) * fs
        };
        (bilerp(&self.cd), bilerp(&self.cl))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::EnvironmentConfig;

    fn model() -> AeroModel {
        AeroModel::new(&PhysicsConfig::default())
    }

    fn calm() -> Environment {
        Environment::calm(&EnvironmentConfig::calm())
    }

    #[test]
    fn test_cd_drag_crisis() {
        let m = model();
        let (cd_slow, _) = m.coefficients_exact(30.0, 0.0);
        let (cd_mid, _) = m.coefficients_exact(70.0, 0.0);
        let (cd_fast, _) = m.coefficients_exact(120.0, 0.0);
        assert_eq!(cd_slow, 0.35);
        assert!(cd_mid < cd_slow && cd_mid > cd_fast);
        assert_eq!(cd_fast, 0.30);
    }

    #[test]
    fn test_cd_rises_with_spin() {
        let m = model();
        let (cd_none, _) = m.coefficients_exact(130.0, 0.0);
        let (cd_spun, _) = m.coefficients_exact(130.0, 2400.0);
        assert!(cd_spun > cd_none);
    }

    #[test]
    fn test_cl_monotone_and_saturating() {
        let m = model();
        let speed = 130.0;
        let mut prev = 0.0;
        for rpm in [0.0, 500.0, 1000.0, 2000.0, 3000.0] {
            let (_, cl) = m.coefficients_exact(speed, rpm);
            assert!(cl >= prev);
            prev = cl;
        }
        // S >= 0.3 is deep in saturation.
        let high_s_rpm = 0.35 * speed / ball::RADIUS_FT
            / crate::engine::physics_constants::convert::RPM_TO_RADPS;
        let (_, cl) = m.coefficients_exact(speed, high_s_rpm);
        assert!(cl > 0.28 && cl <= 0.30, "cl {}", cl);
    }

    #[test]
    fn test_drag_opposes_motion() {
        let m = model();
        let state = BallState::new(
            Vector3::zeros(),
            Vector3::new(0.0, -130.0, 0.0),
            0.0,
            Vector3::new(-1.0, 0.0, 0.0),
        );
        let f = m.force(&state, &calm()).unwrap();
        assert!(f.y > 0.0, "drag should oppose -y motion");
        assert!(f.x.abs() < 1e-12 && f.z.abs() < 1e-12);
    }

    #[test]
    fn test_backspin_lifts_pitch() {
        let m = model();
        // Pitch toward the plate (-y) with four-seam backspin axis (-x).
        let state = BallState::new(
            Vector3::zeros(),
            Vector3::new(0.0, -130.0, 0.0),
            2300.0,
            Vector3::new(-1.0, 0.0, 0.0),
        );
        let f = m.force(&state, &calm()).unwrap();
        assert!(f.z > 0.0, "backspin should produce lift, got {:?}", f);
    }

    #[test]
    fn test_gyro_spin_produces_no_magnus() {
        let m = model();
        // Spin axis parallel to velocity: bullet spin.
        let state = BallState::new(
            Vector3::zeros(),
            Vector3::new(0.0, -130.0, 0.0),
            2400.0,
            Vector3::new(0.0, -1.0, 0.0),
        );
        let f = m.force(&state, &calm()).unwrap();
        // Pure drag: force along +y only.
        assert!(f.x.abs() < 1e-9 && f.z.abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let m = model();
        let state = BallState::new(
            Vector3::new(f64::NAN, 0.0, 0.0),
            Vector3::new(0.0, -130.0, 0.0),
            2300.0,
            Vector3::new(-1.0, 0.0, 0.0),
        );
        assert_eq!(m.force(&state, &calm()), Err(AeroError::NonFiniteForce));
    }

    #[test]
    fn test_lookup_matches_exact_closely() {
        let mut cfg = PhysicsConfig::default();
        cfg.use_lookup_table = true;
        let table_model = AeroModel::new(&cfg);
        let exact_model = model();
        for speed in [45.5, 88.2, 132.7, 176.4] {
            for spin in [150.0, 1250.0, 2350.0, 3250.0] {
                let (cd_t, cl_t) = table_model.coefficients(speed, spin);
                let (cd_e, cl_e) = exact_model.coefficients_exact(speed, spin);
                assert!((cd_t - cd_e).abs() / cd_e < 0.01, "cd at v={speed} rpm={spin}");
                assert!((cl_t - cl_e).abs() < 0.01, "cl at v={speed} rpm={spin}");
            }
        }
    }

    #[test]
    fn test_wind_shifts_drag_frame() {
        let m = model();
        let state = BallState::new(
            Vector3::zeros(),
            Vector3::new(0.0, 100.0, 0.0),
            0.0,
            Vector3::new(-1.0, 0.0, 0.0),
        );
        // Tailwind reduces air-relative speed, so less drag.
        let calm_env = calm();
        let mut tail = calm_env.clone();
        tail.wind = Vector3::new(0.0, 20.0, 0.0);
        let f_calm = m.force(&state, &calm_env).unwrap();
        let f_tail = m.force(&state, &tail).unwrap();
        assert!(f_tail.norm() < f_calm.norm());
    }
}
