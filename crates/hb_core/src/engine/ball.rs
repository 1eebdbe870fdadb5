//! The 6-DOF ball state integrated by the trajectory solver.
//!
//! A `BallState` lives for exactly one flight: created at release or off the
//! bat, destroyed when the trajectory terminates.

use nalgebra::Vector3;

use super::physics_constants::convert;

#[derive(Debug, Clone, PartialEq)]
pub struct BallState {
    /// Position (ft): x lateral (+ first base), y toward the mound/outfield,
    /// z up.
    pub pos: Vector3<f64>,
    /// Velocity (ft/s).
    pub vel: Vector3<f64>,
    /// Spin rate (rpm), scalar.
    pub spin_rpm: f64,
    /// Spin axis, unit vector.
    pub spin_axis: Vector3<f64>,
}

impl BallState {
    pub fn new(pos: Vector3<f64>, vel: Vector3<f64>, spin_rpm: f64, spin_axis: Vector3<f64>) -> Self {
        let n = spin_axis.norm();
        let spin_axis = if n > 0.0 { spin_axis / n } else { Vector3::new(-1.0, 0.0, 0.0) };
        Self { pos, vel, spin_rpm, spin_axis }
    }

    /// A batted ball leaving the plate area.
    ///
    /// `spray_deg` is measured from straightaway center, positive toward +x;
    /// `spin_rpm` signed (positive backspin, negative topspin).
    pub fn off_bat(exit_velo_mph: f64, launch_deg: f64, spray_deg: f64, spin_rpm: f64) -> Self {
        let speed = exit_velo_mph * convert::MPH_TO_FTPS;
        let launch = launch_deg * convert::DEG_TO_RAD;
        let spray = spray_deg * convert::DEG_TO_RAD;
        let horizontal = speed * launch.cos();
        let vel = Vector3::new(
            horizontal * spray.sin(),
            horizontal * spray.cos(),
            speed * launch.sin(),
        );
        // Backspin on a ball headed out to +y lifts it: axis points toward -x
        // rotated with the spray direction. Topspin flips the axis.
        let axis = Vector3::new(-spray.cos(), spray.sin(), 0.0);
        let (axis, spin) = if spin_rpm >= 0.0 { (axis, spin_rpm) } else { (-axis, -spin_rpm) };
        Self::new(Vector3::new(0.0, 0.0, 3.0), vel, spin, axis)
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    #[inline]
    pub fn speed_mph(&self) -> f64 {
        self.speed() * convert::FTPS_TO_MPH
    }

    /// Angular speed (rad/s).
    #[inline]
    pub fn spin_radps(&self) -> f64 {
        self.spin_rpm * convert::RPM_TO_RADPS
    }

    pub fn is_finite(&self) -> bool {
        self.pos.iter().all(|v| v.is_finite())
            && self.vel.iter().all(|v| v.is_finite())
            && self.spin_rpm.is_finite()
            && self.spin_axis.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_bat_velocity_components() {
        let ball = BallState::off_bat(100.0, 30.0, 0.0, 1800.0);
        // Straightaway: no lateral component.
        assert!(ball.vel.x.abs() < 1e-9);
        assert!(ball.vel.y > 0.0);
        assert!(ball.vel.z > 0.0);
        let speed_mph = ball.speed_mph();
        assert!((speed_mph - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_off_bat_topspin_flips_axis() {
        let back = BallState::off_bat(90.0, 10.0, 0.0, 1500.0);
        let top = BallState::off_bat(90.0, 10.0, 0.0, -1500.0);
        assert!((back.spin_axis + top.spin_axis).norm() < 1e-12);
        assert_eq!(back.spin_rpm, 1500.0);
        assert_eq!(top.spin_rpm, 1500.0);
    }

    #[test]
    fn test_axis_normalization() {
        let ball = BallState::new(
            Vector3::zeros(),
            Vector3::new(0.0, -100.0, 0.0),
            2000.0,
            Vector3::new(0.0, 0.0, 5.0),
        );
        assert!((ball.spin_axis.norm() - 1.0).abs() < 1e-12);
    }
}
