//! Count-dependent pitch intention tables and target derivation geometry.
//!
//! The tables are configuration, not code: calibration changes them without
//! touching selection logic.

use serde::{Deserialize, Serialize};

use crate::models::{Count, PitchIntention};

/// Selection weights for the five intentions at one count, in
/// [`PitchIntention::ALL`] order. Rows must sum to 1.
pub type IntentionWeights = [f64; 5];

/// One row per live count, indexed `[balls][strikes]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentionConfig {
    pub tables: [[IntentionWeights; 3]; 4],

    // === Target derivation (inches relative to the zone boundary) ===
    /// Width of the inside-the-edge band for competitive strikes.
    pub competitive_band_in: f64,
    /// How deep into the corner a corner target sits.
    pub corner_depth_in: f64,
    /// Distance outside the zone for chase pitches.
    pub waste_outside_in: f64,
    /// Range outside the zone for intentional balls.
    pub intentional_min_in: f64,
    pub intentional_max_in: f64,

    /// Two-strike usage multiplier on high-whiff secondary pitches.
    pub putaway_usage_bonus: f64,
    /// Strength of `control_zone_bias` on intention selection.
    pub zone_bias_gain: f64,
}

impl Default for IntentionConfig {
    fn default() -> Self {
        // [looking, competitive, corner, waste, intentional]
        // The 0-0, 3-0, and 0-2 rows are calibration anchors; the rest are
        // chosen so the plate-appearance-weighted mix lands near
        // looking 35-40%, competitive 30-38%, corner 10-15%, waste 5-8%,
        // intentional 6-10%.
        let t = |b: usize, s: usize| -> IntentionWeights {
            match (b, s) {
                (0, 0) => [0.60, 0.20, 0.10, 0.05, 0.05],
                (1, 0) => [0.40, 0.34, 0.12, 0.06, 0.08],
                (2, 0) => [0.48, 0.34, 0.08, 0.04, 0.06],
                (3, 0) => [0.80, 0.15, 0.02, 0.01, 0.02],
                (0, 1) => [0.25, 0.38, 0.17, 0.12, 0.08],
                (1, 1) => [0.28, 0.38, 0.16, 0.10, 0.08],
                (2, 1) => [0.38, 0.36, 0.12, 0.06, 0.08],
                (3, 1) => [0.55, 0.30, 0.07, 0.03, 0.05],
                (0, 2) => [0.10, 0.20, 0.25, 0.30, 0.15],
                (1, 2) => [0.12, 0.24, 0.25, 0.25, 0.14],
                (2, 2) => [0.20, 0.34, 0.22, 0.14, 0.10],
                (3, 2) => [0.35, 0.40, 0.15, 0.05, 0.05],
                _ => unreachable!("count out of range"),
            }
        };
        let tables =
            std::array::from_fn(|b| std::array::from_fn(|s| t(b, s)));
        Self {
            tables,
            competitive_band_in: 2.0,
            corner_depth_in: 2.0,
            waste_outside_in: 3.0,
            intentional_min_in: 8.0,
            intentional_max_in: 12.0,
            putaway_usage_bonus: 1.6,
            zone_bias_gain: 0.5,
        }
    }
}

impl IntentionConfig {
    pub fn weights(&self, count: Count) -> &IntentionWeights {
        &self.tables[count.balls as usize][count.strikes as usize]
    }

    /// All rows sum to 1 within tolerance.
    pub fn rows_normalized(&self) -> bool {
        self.tables.iter().flatten().all(|row| {
            let sum: f64 = row.iter().sum();
            (sum - 1.0).abs() < 1e-6 && row.iter().all(|w| *w >= 0.0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rows_normalized() {
        assert!(IntentionConfig::default().rows_normalized());
    }

    #[test]
    fn test_spec_anchor_rows() {
        let cfg = IntentionConfig::default();
        let row_00 = cfg.weights(Count::new(0, 0));
        assert_eq!(row_00[PitchIntention::StrikeLooking.index()], 0.60);
        let row_30 = cfg.weights(Count::new(3, 0));
        assert_eq!(row_30[PitchIntention::StrikeLooking.index()], 0.80);
        let row_02 = cfg.weights(Count::new(0, 2));
        assert_eq!(row_02[PitchIntention::WasteChase.index()], 0.30);
    }

    #[test]
    fn test_two_strike_rows_deprioritize_looking() {
        let cfg = IntentionConfig::default();
        for b in 0..3u8 {
            let row = cfg.weights(Count::new(b, 2));
            let ahead = cfg.weights(Count::new(b, 0));
            assert!(
                row[PitchIntention::StrikeLooking.index()]
                    < ahead[PitchIntention::StrikeLooking.index()]
            );
        }
    }
}
