//! Pitcher attribute records.
//!
//! Attribute records are immutable for the duration of a game; the only
//! mutable pitcher state is [`PitcherGameState`], which resets at game end.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::pitch::PitchType;

/// One pitch in a pitcher's arsenal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArsenalPitch {
    pub pitch_type: PitchType,
    /// Mean release speed (mph).
    pub speed_mph: f64,
    /// Mean spin rate (rpm).
    pub spin_rpm: f64,
    /// Mean spin axis (unit vector, engine frame: +x first base, +y toward
    /// the mound, +z up).
    pub spin_axis: [f64; 3],
    /// Base rate of swings that miss against this pitch.
    pub base_whiff: f64,
    /// Usage weight for pitch selection (relative, not normalized).
    pub usage: f64,
}

impl ArsenalPitch {
    pub fn axis(&self) -> Vector3<f64> {
        let v = Vector3::new(self.spin_axis[0], self.spin_axis[1], self.spin_axis[2]);
        let n = v.norm();
        if n > 0.0 {
            v / n
        } else {
            Vector3::new(-1.0, 0.0, 0.0)
        }
    }
}

/// Static pitcher attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherAttributes {
    pub name: String,
    /// Location noise around the aim point (inches, 1-sigma per axis).
    /// Elite 2.7, average 4.3, poor 6.3.
    pub command_sigma_in: f64,
    /// Shifts intention selection toward the zone (0 = wild, 1 = zone-heavy).
    pub control_zone_bias: f64,
    /// Release point (ft): lateral offset, distance from the plate plane, height.
    pub release_point: [f64; 3],
    pub arsenal: Vec<ArsenalPitch>,
}

impl PitcherAttributes {
    pub fn pitch(&self, pitch_type: PitchType) -> Option<&ArsenalPitch> {
        self.arsenal.iter().find(|p| p.pitch_type == pitch_type)
    }

    pub fn release(&self) -> Vector3<f64> {
        Vector3::new(self.release_point[0], self.release_point[1], self.release_point[2])
    }
}

/// In-game mutable pitcher state. Owned by the game loop, reset between games.
#[derive(Debug, Clone, Default)]
pub struct PitcherGameState {
    pub pitches_thrown: u32,
}

impl PitcherGameState {
    /// Fatigue multiplier applied to command sigma. Command degrades slowly
    /// once the pitch count passes the fatigue onset.
    pub fn command_fatigue_factor(&self, onset: u32, per_pitch: f64) -> f64 {
        let over = self.pitches_thrown.saturating_sub(onset);
        1.0 + over as f64 * per_pitch
    }
}
