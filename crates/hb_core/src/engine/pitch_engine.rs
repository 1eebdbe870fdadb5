//! Release solving: find the release velocity that lands a pitch on the
//! aim point despite gravity and Magnus drift, then apply command noise.
//!
//! The solver is a fixed-point iteration: throw at the aim, measure the miss
//! at the plate, move the aim by 0.9x the miss, repeat. Real pitch
//! trajectories are nearly linear in the aim point, so this converges in a
//! handful of iterations; when it does not, the best aim so far is used and
//! the pitch is flagged rather than failing the at-bat.

use nalgebra::Vector3;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use super::aerodynamics::AeroModel;
use super::ball::BallState;
use super::buffer_pool::TrajectoryBuffer;
use super::config::PhysicsConfig;
use super::environment::Environment;
use super::integrator::{integrate, IntegratorSettings, StopReason};
use super::physics_constants::{convert, plate};
use crate::error::IntegrationError;
use crate::models::{ArsenalPitch, PlateCrossing};

/// Targeting is converged when the plate miss is under half a centimeter.
const CONVERGENCE_FT: f64 = 0.005 * 3.2808;
/// Fixed-point correction gain.
const CORRECTION_GAIN: f64 = 0.9;
/// Iteration cap.
const MAX_ITERATIONS: usize = 5;

/// A pitch in flight, solved and thrown.
#[derive(Debug, Clone)]
pub struct ThrownPitch {
    /// Ball state at release.
    pub release: BallState,
    /// Ball state as it crosses the plate plane.
    pub plate: BallState,
    pub crossing: PlateCrossing,
    /// Set when the targeting iteration failed to converge.
    pub targeting_degraded: bool,
}

pub struct PitchEngine<'a> {
    aero: &'a AeroModel,
    dt: f64,
    speed_sigma_mph: f64,
    spin_sigma_rpm: f64,
}

impl<'a> PitchEngine<'a> {
    pub fn new(aero: &'a AeroModel, physics: &PhysicsConfig) -> Self {
        Self {
            aero,
            dt: physics.dt_normal_s,
            speed_sigma_mph: physics.release_speed_sigma_mph,
            spin_sigma_rpm: physics.release_spin_sigma_rpm,
        }
    }

    /// Solve for the aim point that lands `pitch` on `target`, then throw
    /// with Gaussian command noise of `command_sigma_in` applied to the aim
    /// and per-pitch release execution noise around the arsenal means.
    ///
    /// `target` is (x, z) on the plate plane in feet.
    pub fn throw(
        &self,
        pitch: &ArsenalPitch,
        release_point: Vector3<f64>,
        target: (f64, f64),
        command_sigma_in: f64,
        env: &Environment,
        rng: &mut ChaCha8Rng,
        buf: &mut TrajectoryBuffer,
    ) -> Result<ThrownPitch, IntegrationError> {
        let speed_ftps = pitch.speed_mph * convert::MPH_TO_FTPS;
        let axis = pitch.axis();
        let settings = IntegratorSettings::pitch(self.dt, plate::CROSSING_PLANE_Y_FT);

        let mut aim = target;
        let mut best_aim = aim;
        let mut best_err = f64::MAX;
        let mut degraded = false;

        for _ in 0..MAX_ITERATIONS {
            let state = release_state(release_point, aim, speed_ftps, pitch.spin_rpm, axis);
            let landing = integrate(&state, &settings, |s| self.aero.force(s, env), buf)?;
            let err = (target.0 - landing.pos.x, target.1 - landing.pos.z);
            let err_norm = (err.0 * err.0 + err.1 * err.1).sqrt();

            if err_norm < best_err {
                best_err = err_norm;
                best_aim = aim;
            } else {
                // Diverging: keep the best aim seen and stop correcting.
                degraded = true;
                break;
            }
            if err_norm < CONVERGENCE_FT {
                break;
            }
            aim = (aim.0 + CORRECTION_GAIN * err.0, aim.1 + CORRECTION_GAIN * err.1);
        }

        // Command noise is the dominant source of zone-rate variance; it
        // perturbs the aim point, not the already-solved drift correction.
        let sigma_ft = command_sigma_in * convert::IN_TO_FT;
        let noisy_aim = if sigma_ft > 0.0 {
            let noise = Normal::new(0.0, sigma_ft).expect("finite command sigma");
            (best_aim.0 + noise.sample(rng), best_aim.1 + noise.sample(rng))
        } else {
            best_aim
        };

        // The arsenal holds mean release values; the delivered pitch varies
        // around them, and the targeting solve does not see that variation.
        let exec_speed_ftps = if self.speed_sigma_mph > 0.0 {
            let jitter = Normal::new(0.0, self.speed_sigma_mph).expect("finite speed sigma");
            (pitch.speed_mph + jitter.sample(rng)).max(40.0) * convert::MPH_TO_FTPS
        } else {
            speed_ftps
        };
        let exec_spin_rpm = if self.spin_sigma_rpm > 0.0 {
            let jitter = Normal::new(0.0, self.spin_sigma_rpm).expect("finite spin sigma");
            (pitch.spin_rpm + jitter.sample(rng)).max(0.0)
        } else {
            pitch.spin_rpm
        };

        let release = release_state(release_point, noisy_aim, exec_speed_ftps, exec_spin_rpm, axis);
        let landing = integrate(&release, &settings, |s| self.aero.force(s, env), buf)?;

        let crossing = PlateCrossing {
            x_ft: landing.pos.x,
            z_ft: landing.pos.z,
            speed_mph: landing.vel.norm() * convert::FTPS_TO_MPH,
            time_s: landing.time,
        };
        let plate_ball = BallState::new(landing.pos, landing.vel, exec_spin_rpm, axis);
        // A pitch that hits the dirt before the plate still "crosses" at the
        // bounce point; the umpire will not call that a strike.
        debug_assert!(matches!(landing.reason, StopReason::Plane | StopReason::Ground));

        Ok(ThrownPitch { release, plate: plate_ball, crossing, targeting_degraded: degraded })
    }
}

/// Release state aimed straight at a point on the plate plane.
fn release_state(
    release_point: Vector3<f64>,
    aim: (f64, f64),
    speed_ftps: f64,
    spin_rpm: f64,
    axis: Vector3<f64>,
) -> BallState {
    let aim_point = Vector3::new(aim.0, plate::CROSSING_PLANE_Y_FT, aim.1);
    let dir = (aim_point - release_point).normalize();
    BallState::new(release_point, dir * speed_ftps, spin_rpm, axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::EnvironmentConfig;
    use crate::engine::timestep;
    use crate::models::PitchType;
    use rand_chacha::rand_core::SeedableRng;

    /// Physics with release execution noise switched off, for the
    /// zero-noise reference scenarios.
    fn quiet_physics() -> PhysicsConfig {
        PhysicsConfig {
            release_speed_sigma_mph: 0.0,
            release_spin_sigma_rpm: 0.0,
            ..PhysicsConfig::default()
        }
    }

    fn engine_parts() -> (AeroModel, Environment) {
        (AeroModel::new(&quiet_physics()), Environment::calm(&EnvironmentConfig::calm()))
    }

    fn buffer() -> TrajectoryBuffer {
        TrajectoryBuffer::with_capacity(timestep::steps_required(2.0, timestep::DT_NORMAL))
    }

    fn test_pitch(spin_rpm: f64) -> ArsenalPitch {
        ArsenalPitch {
            pitch_type: PitchType::Fastball,
            speed_mph: 94.0,
            spin_rpm,
            spin_axis: [-1.0, 0.0, 0.0],
            base_whiff: 0.18,
            usage: 1.0,
        }
    }

    #[test]
    fn test_zero_spin_targeting_within_an_inch() {
        // Reference scenario: release at (5, 55, 6), target (0, 2.5), no
        // wind, no spin. Five iterations must land within one inch.
        let (aero, env) = engine_parts();
        let engine = PitchEngine::new(&aero, &quiet_physics());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut buf = buffer();
        let thrown = engine
            .throw(
                &test_pitch(0.0),
                Vector3::new(5.0, 55.0, 6.0),
                (0.0, 2.5),
                0.0,
                &env,
                &mut rng,
                &mut buf,
            )
            .unwrap();
        assert!(!thrown.targeting_degraded);
        let miss_in = ((thrown.crossing.x_ft - 0.0).powi(2)
            + (thrown.crossing.z_ft - 2.5).powi(2))
        .sqrt()
            * 12.0;
        assert!(miss_in < 1.0, "missed target by {:.3} in", miss_in);
    }

    #[test]
    fn test_spinning_pitch_still_converges() {
        let (aero, env) = engine_parts();
        let engine = PitchEngine::new(&aero, &quiet_physics());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut buf = buffer();
        let thrown = engine
            .throw(
                &test_pitch(2300.0),
                Vector3::new(-2.0, 55.0, 6.0),
                (0.3, 2.0),
                0.0,
                &env,
                &mut rng,
                &mut buf,
            )
            .unwrap();
        let miss_in = ((thrown.crossing.x_ft - 0.3).powi(2)
            + (thrown.crossing.z_ft - 2.0).powi(2))
        .sqrt()
            * 12.0;
        assert!(miss_in < 1.0, "missed target by {:.3} in", miss_in);
    }

    #[test]
    fn test_zero_noise_is_reproducible() {
        let (aero, env) = engine_parts();
        let engine = PitchEngine::new(&aero, &quiet_physics());
        let mut buf = buffer();
        let throw = |rng: &mut ChaCha8Rng, buf: &mut TrajectoryBuffer| {
            engine
                .throw(
                    &test_pitch(2300.0),
                    Vector3::new(-2.0, 55.0, 6.0),
                    (0.0, 2.5),
                    0.0,
                    &env,
                    rng,
                    buf,
                )
                .unwrap()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let a = throw(&mut rng, &mut buf);
        let b = throw(&mut rng, &mut buf);
        assert_eq!(a.crossing, b.crossing);
    }

    #[test]
    fn test_command_noise_spreads_crossings() {
        let (aero, env) = engine_parts();
        let engine = PitchEngine::new(&aero, &quiet_physics());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut buf = buffer();
        let mut xs = Vec::new();
        for _ in 0..50 {
            let thrown = engine
                .throw(
                    &test_pitch(2300.0),
                    Vector3::new(-2.0, 55.0, 6.0),
                    (0.0, 2.5),
                    4.3,
                    &env,
                    &mut rng,
                    &mut buf,
                )
                .unwrap();
            xs.push(thrown.crossing.x_ft);
        }
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / xs.len() as f64;
        // Sigma of 4.3 in = 0.358 ft; sample sigma should be the same order.
        let sigma = var.sqrt();
        assert!(sigma > 0.15 && sigma < 0.65, "sigma {}", sigma);
    }
}
