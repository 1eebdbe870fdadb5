//! Swing-decision and umpire tuning.

use serde::{Deserialize, Serialize};

/// Swing probability model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingConfig {
    /// Base swing probability on a pitch down the middle.
    pub center_swing_prob: f64,
    /// Base swing probability at the zone edge.
    pub edge_swing_prob: f64,
    /// Linear decay per foot over the first foot outside the zone.
    pub outside_decay_per_ft: f64,
    /// Steeper decay beyond the chase band: nobody offers at pitches a
    /// foot and a half off the plate.
    pub chase_band_ft: f64,
    pub far_decay_per_ft: f64,
    /// Floor for pitches far off the plate.
    pub min_swing_prob: f64,

    /// Chase suppression: out-of-zone probability is multiplied by
    /// `1 - discipline_multiplier * hitter.discipline`.
    pub discipline_multiplier: f64,

    /// Velocity penalty applies above this pitch speed.
    pub velocity_threshold_mph: f64,
    /// Penalty per mph over the threshold, scaled by poor reaction.
    pub velocity_penalty_per_mph: f64,

    /// Chase bonus on breaking pitches just off the zone.
    pub tunnel_bonus: f64,
    /// Width of the tunneling band outside the zone (ft).
    pub tunnel_band_ft: f64,

    /// Two-strike protection swing boost.
    pub two_strike_boost: f64,
    /// Three-ball take multiplier.
    pub three_ball_cut: f64,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            center_swing_prob: 0.80,
            edge_swing_prob: 0.65,
            outside_decay_per_ft: 0.30,
            chase_band_ft: 0.5,
            far_decay_per_ft: 1.10,
            min_swing_prob: 0.03,
            discipline_multiplier: 0.12,
            velocity_threshold_mph: 95.0,
            velocity_penalty_per_mph: 0.02,
            tunnel_bonus: 0.15,
            tunnel_band_ft: 0.5,
            two_strike_boost: 1.25,
            three_ball_cut: 0.85,
        }
    }
}

/// Umpire boundary model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UmpireConfig {
    /// Sigmoid transition half-width around the zone edge (inches).
    pub transition_in: f64,
    /// Pitches this far inside the edge are always strikes (inches).
    pub certain_strike_margin_in: f64,
    /// Pitches this far outside are always balls (inches).
    pub certain_ball_margin_in: f64,
    /// Inches of edge shift per unit of framing above/below average.
    pub framing_gain_in: f64,
}

impl Default for UmpireConfig {
    fn default() -> Self {
        Self {
            transition_in: 2.0,
            certain_strike_margin_in: 2.0,
            certain_ball_margin_in: 6.0,
            framing_gain_in: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_knobs() {
        let cfg = SwingConfig::default();
        assert_eq!(cfg.discipline_multiplier, 0.12);
        assert_eq!(cfg.two_strike_boost, 1.25);
    }

    #[test]
    fn test_edge_prob_between_center_and_floor() {
        let cfg = SwingConfig::default();
        assert!(cfg.edge_swing_prob < cfg.center_swing_prob);
        assert!(cfg.min_swing_prob < cfg.edge_swing_prob);
    }
}
