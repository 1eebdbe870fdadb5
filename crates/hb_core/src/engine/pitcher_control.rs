//! Pitch selection: what to throw and where to aim it.
//!
//! Intention probabilities come from the count-indexed configuration tables,
//! tilted by the pitcher's zone bias; the aim point is then derived from the
//! chosen intention's geometry.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::config::IntentionConfig;
use super::physics_constants::{convert, zone};
use crate::models::{Count, PitchIntention, PitcherAttributes, PitchType};

/// The pitcher's plan for one pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchCall {
    pub pitch_type: PitchType,
    pub intention: PitchIntention,
    /// Aim point (x, z) on the plate plane, feet.
    pub target: (f64, f64),
}

pub struct PitcherControl<'a> {
    cfg: &'a IntentionConfig,
}

impl<'a> PitcherControl<'a> {
    pub fn new(cfg: &'a IntentionConfig) -> Self {
        Self { cfg }
    }

    pub fn call_pitch(
        &self,
        pitcher: &PitcherAttributes,
        count: Count,
        rng: &mut ChaCha8Rng,
    ) -> PitchCall {
        let intention = self.select_intention(pitcher, count, rng);
        let pitch_type = self.select_pitch_type(pitcher, count, rng);
        let target = self.derive_target(intention, rng);
        PitchCall { pitch_type, intention, target }
    }

    /// Weighted intention draw from the count table, tilted by zone bias.
    fn select_intention(
        &self,
        pitcher: &PitcherAttributes,
        count: Count,
        rng: &mut ChaCha8Rng,
    ) -> PitchIntention {
        let base = self.cfg.weights(count);
        let tilt = (pitcher.control_zone_bias.clamp(0.0, 1.0) - 0.5) * self.cfg.zone_bias_gain;
        let mut weights = *base;
        // Zone-positive pitchers shift mass from free balls toward strikes.
        weights[PitchIntention::StrikeLooking.index()] *= 1.0 + tilt;
        weights[PitchIntention::WasteChase.index()] *= 1.0 - tilt;
        weights[PitchIntention::BallIntentional.index()] *= 1.0 - tilt;

        let total: f64 = weights.iter().sum();
        let mut draw = rng.gen::<f64>() * total;
        for intention in PitchIntention::ALL {
            draw -= weights[intention.index()];
            if draw <= 0.0 {
                return intention;
            }
        }
        PitchIntention::BallIntentional
    }

    /// Usage-weighted arsenal draw; with two strikes, high-whiff secondaries
    /// get the put-away bonus.
    fn select_pitch_type(
        &self,
        pitcher: &PitcherAttributes,
        count: Count,
        rng: &mut ChaCha8Rng,
    ) -> PitchType {
        let putaway = count.two_strikes();
        let weight = |p: &crate::models::ArsenalPitch| {
            let mut w = p.usage.max(0.0);
            if putaway && p.pitch_type.is_breaking() {
                w *= self.cfg.putaway_usage_bonus;
            }
            w
        };
        let total: f64 = pitcher.arsenal.iter().map(weight).sum();
        if total <= 0.0 {
            return PitchType::Fastball;
        }
        let mut draw = rng.gen::<f64>() * total;
        for p in &pitcher.arsenal {
            draw -= weight(p);
            if draw <= 0.0 {
                return p.pitch_type;
            }
        }
        pitcher.arsenal.last().map(|p| p.pitch_type).unwrap_or(PitchType::Fastball)
    }

    /// Aim point geometry per intention.
    fn derive_target(&self, intention: PitchIntention, rng: &mut ChaCha8Rng) -> (f64, f64) {
        let c = self.cfg;
        let half_w = zone::HALF_WIDTH_FT;
        let side = if rng.gen::<bool>() { 1.0 } else { -1.0 };
        match intention {
            PitchIntention::StrikeLooking => {
                // The heart of the zone, not a single point: get-me-over
                // strikes scatter across the middle.
                let x = (rng.gen::<f64>() - 0.5) * 0.80;
                let z = zone::CENTER_Z_FT + (rng.gen::<f64>() - 0.5) * 0.90;
                (x, z)
            }
            PitchIntention::StrikeCompetitive => {
                // Uniform inside a band along a randomly chosen edge.
                let band = c.competitive_band_in * convert::IN_TO_FT;
                let depth = rng.gen::<f64>() * band;
                if rng.gen::<bool>() {
                    // Horizontal edge.
                    let z = zone::BOTTOM_FT + rng.gen::<f64>() * (zone::TOP_FT - zone::BOTTOM_FT);
                    (side * (half_w - depth), z)
                } else {
                    // Vertical edge.
                    let x = (rng.gen::<f64>() - 0.5) * 2.0 * half_w;
                    let z = if side > 0.0 { zone::TOP_FT - depth } else { zone::BOTTOM_FT + depth };
                    (x, z)
                }
            }
            PitchIntention::StrikeCorner => {
                let depth = c.corner_depth_in * convert::IN_TO_FT;
                let z = if rng.gen::<bool>() { zone::TOP_FT - depth } else { zone::BOTTOM_FT + depth };
                (side * (half_w - depth), z)
            }
            PitchIntention::WasteChase => {
                let out = c.waste_outside_in * convert::IN_TO_FT;
                if rng.gen::<bool>() {
                    (side * (half_w + out), zone::CENTER_Z_FT - 0.4)
                } else {
                    // Chase pitches below the zone far outnumber ones above.
                    let z = if rng.gen::<f64>() < 0.8 { zone::BOTTOM_FT - out } else { zone::TOP_FT + out };
                    ((rng.gen::<f64>() - 0.5) * half_w, z)
                }
            }
            PitchIntention::BallIntentional => {
                let out = (c.intentional_min_in
                    + rng.gen::<f64>() * (c.intentional_max_in - c.intentional_min_in))
                    * convert::IN_TO_FT;
                (side * (half_w + out), zone::CENTER_Z_FT)
            }
        }
    }
}
