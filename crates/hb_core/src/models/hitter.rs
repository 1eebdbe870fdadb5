use serde::{Deserialize, Serialize};

/// Static hitter attributes. All skill scalars are normalized to 0..1 with
/// 0.5 meaning league average; reaction time is physical milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitterAttributes {
    pub name: String,
    /// Bat-to-ball skill. Drives whiff suppression and contact tightness.
    pub contact: f64,
    /// Raw power. Drives mean bat speed.
    pub power: f64,
    /// Chase avoidance on pitches outside the zone.
    pub discipline: f64,
    /// Pitch-recognition reaction time (ms). Elite ~150, poor ~250.
    pub reaction_ms: f64,
    /// Maps to the mean vertical bat-path angle within the configured range.
    pub attack_angle_control: f64,
    /// Pull/spray bias: 0 = extreme spray, 0.5 = neutral, 1 = extreme pull.
    pub spray_tendency: f64,
    /// Running speed, normalized. Affects infield-hit conversion.
    pub speed: f64,
}

impl HitterAttributes {
    /// A league-average hitter; calibration scenarios perturb from here.
    pub fn league_average(name: &str) -> Self {
        Self {
            name: name.to_string(),
            contact: 0.5,
            power: 0.5,
            discipline: 0.5,
            reaction_ms: 200.0,
            attack_angle_control: 0.5,
            spray_tendency: 0.5,
            speed: 0.5,
        }
    }

    /// Reaction quality normalized to 0..1 (1 = elite 150 ms, 0 = 250 ms).
    pub fn reaction_quality(&self) -> f64 {
        ((250.0 - self.reaction_ms) / 100.0).clamp(0.0, 1.0)
    }
}
