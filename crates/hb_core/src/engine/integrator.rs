//! Fixed-step RK4 integration of the 6-DOF ball state.
//!
//! The force closure supplies aerodynamic force only; gravity is added here.
//! Termination is by ground contact, an optional stop plane (the plate), or
//! the flight-time cap, with the final step linearly interpolated to the
//! crossing. All reference-mode arithmetic is f64.

use nalgebra::Vector3;

use super::ball::BallState;
use super::buffer_pool::{TrajectoryBuffer, TrajectorySample};
use super::physics_constants::{ball, gravity, sanity};
use crate::error::{AeroError, IntegrationError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorSettings {
    /// Fixed step (s).
    pub dt: f64,
    /// Flight-time cap (s).
    pub max_time: f64,
    /// Ground plane (ft).
    pub ground_level: f64,
    /// Optional plate plane: terminate when y descends through this value.
    pub stop_plane_y: Option<f64>,
}

impl IntegratorSettings {
    pub fn batted_ball(dt: f64, max_time: f64) -> Self {
        Self { dt, max_time, ground_level: 0.0, stop_plane_y: None }
    }

    pub fn pitch(dt: f64, plate_plane_y: f64) -> Self {
        // A pitch is over in well under a second.
        Self { dt, max_time: 2.0, ground_level: 0.0, stop_plane_y: Some(plate_plane_y) }
    }
}

/// Why the trajectory ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Ground,
    Plane,
    MaxTime,
}

/// Terminal state of a completed trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub pos: Vector3<f64>,
    pub vel: Vector3<f64>,
    pub time: f64,
    pub reason: StopReason,
}

/// Integrate a flight, tracing every step into `buf`.
///
/// Classical RK4: four force evaluations per step. The spin state is
/// constant over a flight, so acceleration depends on velocity alone.
pub fn integrate<F>(
    initial: &BallState,
    settings: &IntegratorSettings,
    force: F,
    buf: &mut TrajectoryBuffer,
) -> Result<Landing, IntegrationError>
where
    F: Fn(&BallState) -> Result<Vector3<f64>, AeroError>,
{
    let g = Vector3::new(0.0, 0.0, -gravity::G_FTPS2);
    let dt = settings.dt;

    let mut probe = initial.clone();
    let mut accel = |vel: Vector3<f64>, probe: &mut BallState| -> Result<Vector3<f64>, AeroError> {
        probe.vel = vel;
        Ok(force(probe)? / ball::MASS_SLUG + g)
    };

    let mut pos = initial.pos;
    let mut vel = initial.vel;
    let mut t = 0.0;

    buf.clear();
    if !buf.push(TrajectorySample { t, pos, vel }) {
        return Err(IntegrationError::TrajectoryTooLong { capacity: buf.capacity() });
    }

    loop {
        let last = *buf.last().expect("buffer holds at least the initial sample");

        if t >= settings.max_time {
            return Ok(Landing { pos, vel, time: t, reason: StopReason::MaxTime });
        }

        let step = (|| -> Result<(Vector3<f64>, Vector3<f64>), AeroError> {
            let k1v = vel;
            let k1a = accel(k1v, &mut probe)?;
            let k2v = vel + k1a * (dt / 2.0);
            let k2a = accel(k2v, &mut probe)?;
            let k3v = vel + k2a * (dt / 2.0);
            let k3a = accel(k3v, &mut probe)?;
            let k4v = vel + k3a * dt;
            let k4a = accel(k4v, &mut probe)?;
            let new_pos = pos + (k1v + k2v * 2.0 + k3v * 2.0 + k4v) * (dt / 6.0);
            let new_vel = vel + (k1a + k2a * 2.0 + k3a * 2.0 + k4a) * (dt / 6.0);
            Ok((new_pos, new_vel))
        })();

        let (new_pos, new_vel) = match step {
            Ok(s) => s,
            Err(_) => return Err(IntegrationError::Aborted { last }),
        };

        // Sanity: a diverging integration shows up as runaway speed.
        if !new_vel.iter().all(|v| v.is_finite()) || new_vel.norm() > sanity::MAX_SPEED_FTPS {
            return Err(IntegrationError::Aborted { last });
        }

        let new_t = t + dt;

        // Plate-plane crossing (pitch flight) takes precedence: the plane
        // sits above the ground along the whole pitch corridor.
        if let Some(plane_y) = settings.stop_plane_y {
            if new_pos.y <= plane_y && pos.y > plane_y {
                let f = (pos.y - plane_y) / (pos.y - new_pos.y);
                return Ok(interpolated(pos, vel, new_pos, new_vel, t, dt, f, StopReason::Plane));
            }
        }

        if new_pos.z <= settings.ground_level && pos.z > settings.ground_level {
            let f = (pos.z - settings.ground_level) / (pos.z - new_pos.z);
            return Ok(interpolated(pos, vel, new_pos, new_vel, t, dt, f, StopReason::Ground));
        }

        pos = new_pos;
        vel = new_vel;
        t = new_t;

        if !buf.push(TrajectorySample { t, pos, vel }) {
            return Err(IntegrationError::TrajectoryTooLong { capacity: buf.capacity() });
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn interpolated(
    pos: Vector3<f64>,
    vel: Vector3<f64>,
    new_pos: Vector3<f64>,
    new_vel: Vector3<f64>,
    t: f64,
    dt: f64,
    f: f64,
    reason: StopReason,
) -> Landing {
    let f = f.clamp(0.0, 1.0);
    Landing {
        pos: pos + (new_pos - pos) * f,
        vel: vel + (new_vel - vel) * f,
        time: t + dt * f,
        reason,
    }
}
