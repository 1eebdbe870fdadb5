//! Fence geometry queries.
//!
//! The park is described by a surveyed table every 5 degrees of spray angle;
//! queries interpolate linearly between survey points.

use super::config::{ParkConfig, SURVEY_POINTS, SURVEY_STEP_DEG};
use super::physics_constants::spray;

/// Fence cross-section at one spray angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fence {
    pub distance_ft: f64,
    pub height_ft: f64,
}

#[derive(Debug, Clone)]
pub struct Ballpark {
    distances: Vec<f64>,
    heights: Vec<f64>,
}

impl Ballpark {
    /// Config is validated at load time, so the table shape is trusted here.
    pub fn new(cfg: &ParkConfig) -> Self {
        debug_assert_eq!(cfg.fence_distance_ft.len(), SURVEY_POINTS);
        debug_assert_eq!(cfg.fence_height_ft.len(), SURVEY_POINTS);
        Self { distances: cfg.fence_distance_ft.clone(), heights: cfg.fence_height_ft.clone() }
    }

    /// Fence at a spray angle. `None` outside the foul lines: there is no
    /// fence to query in foul territory.
    pub fn fence_at(&self, spray_deg: f64) -> Option<Fence> {
        if spray_deg.abs() > spray::FOUL_LINE_DEG {
            return None;
        }
        let pos = (spray_deg + spray::FOUL_LINE_DEG) / SURVEY_STEP_DEG;
        let i0 = (pos.floor() as usize).min(SURVEY_POINTS - 2);
        let f = pos - i0 as f64;
        Some(Fence {
            distance_ft: self.distances[i0] + (self.distances[i0 + 1] - self.distances[i0]) * f,
            height_ft: self.heights[i0] + (self.heights[i0 + 1] - self.heights[i0]) * f,
        })
    }

    /// Shortest fence distance, used to pre-screen obvious non-homers.
    pub fn min_fence_distance(&self) -> f64 {
        self.distances.iter().copied().fold(f64::MAX, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn park() -> Ballpark {
        Ballpark::new(&ParkConfig::neutral())
    }

    #[test]
    fn test_survey_points_exact() {
        let p = park();
        let center = p.fence_at(0.0).unwrap();
        assert_eq!(center.distance_ft, 400.0);
        let line = p.fence_at(45.0).unwrap();
        assert_eq!(line.distance_ft, 330.0);
        assert_eq!(line.height_ft, 10.0);
    }

    #[test]
    fn test_interpolation_between_points() {
        let p = park();
        // Halfway between the 0-degree (400) and 5-degree (399) posts.
        let f = p.fence_at(2.5).unwrap();
        assert!((f.distance_ft - 399.5).abs() < 1e-9);
    }

    #[test]
    fn test_foul_territory_has_no_fence() {
        let p = park();
        assert!(p.fence_at(45.1).is_none());
        assert!(p.fence_at(-60.0).is_none());
    }

    #[test]
    fn test_symmetric_park() {
        let p = park();
        for deg in [5.0, 17.3, 30.0, 44.9] {
            let a = p.fence_at(deg).unwrap();
            let b = p.fence_at(-deg).unwrap();
            assert!((a.distance_ft - b.distance_ft).abs() < 1e-9);
        }
    }

    #[test]
    fn test_min_fence() {
        assert_eq!(park().min_fence_distance(), 330.0);
    }
}
