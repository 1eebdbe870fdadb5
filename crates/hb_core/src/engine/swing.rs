//! Swing decision model.
//!
//! All functions are pure - they take the pitch, the count, and the hitter
//! and return probabilities. The only randomness is the final Bernoulli
//! draw, which comes from the swing stream.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::config::SwingConfig;
use super::physics_constants::zone;
use crate::models::{Count, HitterAttributes, PitchType, PlateCrossing};

/// Base swing probability from location alone.
///
/// Roughly 0.80 on a pitch down the middle, sliding to the edge value at
/// the zone boundary and decaying linearly outside it.
#[inline]
pub fn location_swing_probability(cfg: &SwingConfig, crossing: &PlateCrossing) -> f64 {
    let edge_ft = zone::edge_distance(crossing.x_ft, crossing.z_ft);
    if edge_ft <= 0.0 {
        // Inside: interpolate center -> edge over the zone half-extent.
        let half_extent = zone::HALF_WIDTH_FT.max((zone::TOP_FT - zone::BOTTOM_FT) / 2.0);
        let depth = (-edge_ft / half_extent).clamp(0.0, 1.0);
        cfg.edge_swing_prob + (cfg.center_swing_prob - cfg.edge_swing_prob) * depth
    } else if edge_ft <= cfg.chase_band_ft {
        (cfg.edge_swing_prob - cfg.outside_decay_per_ft * edge_ft).max(cfg.min_swing_prob)
    } else {
        let at_band = cfg.edge_swing_prob - cfg.outside_decay_per_ft * cfg.chase_band_ft;
        (at_band - cfg.far_decay_per_ft * (edge_ft - cfg.chase_band_ft)).max(cfg.min_swing_prob)
    }
}

/// Full swing probability with discipline, velocity, tunneling, and count
/// modifiers applied.
pub fn swing_probability(
    cfg: &SwingConfig,
    crossing: &PlateCrossing,
    pitch_type: PitchType,
    count: Count,
    hitter: &HitterAttributes,
) -> f64 {
    let mut p = location_swing_probability(cfg, crossing);
    let edge_ft = zone::edge_distance(crossing.x_ft, crossing.z_ft);
    let out_of_zone = edge_ft > 0.0;

    if out_of_zone {
        p *= 1.0 - cfg.discipline_multiplier * hitter.discipline.clamp(0.0, 1.0);
        // Breaking stuff just off the edge looks like a strike out of hand.
        if pitch_type.is_breaking() && edge_ft <= cfg.tunnel_band_ft {
            p *= 1.0 + cfg.tunnel_bonus;
        }
    }

    if crossing.speed_mph > cfg.velocity_threshold_mph {
        let over = crossing.speed_mph - cfg.velocity_threshold_mph;
        let slow = 1.0 - hitter.reaction_quality();
        p *= 1.0 - cfg.velocity_penalty_per_mph * over * slow;
    }

    if count.two_strikes() {
        p *= cfg.two_strike_boost;
    } else if count.three_balls() {
        p *= cfg.three_ball_cut;
    }

    p.clamp(0.0, 0.99)
}

/// Bernoulli draw on the swing stream.
pub fn decide_swing(
    cfg: &SwingConfig,
    crossing: &PlateCrossing,
    pitch_type: PitchType,
    count: Count,
    hitter: &HitterAttributes,
    rng: &mut ChaCha8Rng,
) -> bool {
    rng.gen::<f64>() < swing_probability(cfg, crossing, pitch_type, count, hitter)
}
