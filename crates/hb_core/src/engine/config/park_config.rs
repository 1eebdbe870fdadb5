//! Park geometry: surveyed fence distance and height every 5 degrees of
//! spray angle from the left-field line to the right-field line.

use serde::{Deserialize, Serialize};

/// Number of survey points: -45..=45 degrees in 5-degree steps.
pub const SURVEY_POINTS: usize = 19;
/// Angular spacing of survey points (degrees).
pub const SURVEY_STEP_DEG: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkConfig {
    pub name: String,
    /// Fence distance (ft) at each survey angle, left line to right line.
    pub fence_distance_ft: Vec<f64>,
    /// Fence height (ft) at each survey angle.
    pub fence_height_ft: Vec<f64>,
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self::neutral()
    }
}

impl ParkConfig {
    /// Neutral park: 330 down the lines, 375 alleys, 400 to center.
    pub fn neutral() -> Self {
        Self {
            name: "Neutral Park".to_string(),
            fence_distance_ft: vec![
                330.0, 342.0, 355.0, 366.0, 375.0, 383.0, 390.0, 396.0, 399.0, 400.0, 399.0,
                396.0, 390.0, 383.0, 375.0, 366.0, 355.0, 342.0, 330.0,
            ],
            fence_height_ft: vec![
                10.0, 10.0, 9.0, 9.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0,
                9.0, 9.0, 10.0, 10.0,
            ],
        }
    }
}
