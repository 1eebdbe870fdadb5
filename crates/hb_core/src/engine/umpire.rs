//! Called strikes on taken pitches.
//!
//! Pure sigmoid boundary model: far inside the zone is always a strike, far
//! outside always a ball, and the transition band tilts with catcher
//! framing. Anything more elaborate belongs behind this same seam.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::config::UmpireConfig;
use super::physics_constants::{convert, zone};
use crate::models::PlateCrossing;

pub struct Umpire<'a> {
    cfg: &'a UmpireConfig,
    /// Catcher framing quality, 0..1 with 0.5 average.
    framing: f64,
}

impl<'a> Umpire<'a> {
    pub fn new(cfg: &'a UmpireConfig, framing: f64) -> Self {
        Self { cfg, framing: framing.clamp(0.0, 1.0) }
    }

    /// Probability a taken pitch at this crossing is called a strike.
    pub fn strike_probability(&self, crossing: &PlateCrossing) -> f64 {
        // Edge distance in inches, negative inside the zone. Good framing
        // shifts the perceived edge outward.
        let edge_in = zone::edge_distance(crossing.x_ft, crossing.z_ft) * convert::FT_TO_IN;
        let shift = (self.framing - 0.5) * 2.0 * self.cfg.framing_gain_in;
        let d = edge_in - shift;

        if d <= -self.cfg.certain_strike_margin_in {
            return 1.0;
        }
        if d >= self.cfg.certain_ball_margin_in {
            return 0.0;
        }
        1.0 / (1.0 + (d / (self.cfg.transition_in / 2.0)).exp())
    }

    /// Call a taken pitch. Deterministic given the umpire RNG stream.
    pub fn call(&self, crossing: &PlateCrossing, rng: &mut ChaCha8Rng) -> bool {
        rng.gen::<f64>() < self.strike_probability(crossing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crossing(x_ft: f64, z_ft: f64) -> PlateCrossing {
        PlateCrossing { x_ft, z_ft, speed_mph: 88.0, time_s: 0.43 }
    }

    fn umpire(cfg: &UmpireConfig) -> Umpire<'_> {
        Umpire::new(cfg, 0.5)
    }

    #[test]
    fn test_center_always_strike() {
        let cfg = UmpireConfig::default();
        let ump = umpire(&cfg);
        assert_eq!(ump.strike_probability(&crossing(0.0, zone::CENTER_Z_FT)), 1.0);
    }

    #[test]
    fn test_far_outside_always_ball() {
        let cfg = UmpireConfig::default();
        let ump = umpire(&cfg);
        // Seven inches off the plate.
        let x = zone::HALF_WIDTH_FT + 7.0 * convert::IN_TO_FT;
        assert_eq!(ump.strike_probability(&crossing(x, zone::CENTER_Z_FT)), 0.0);
    }

    #[test]
    fn test_edge_is_a_coin_flip() {
        let cfg = UmpireConfig::default();
        let ump = umpire(&cfg);
        let p = ump.strike_probability(&crossing(zone::HALF_WIDTH_FT, zone::CENTER_Z_FT));
        assert!((p - 0.5).abs() < 0.02, "edge probability {}", p);
    }

    #[test]
    fn test_probability_monotone_outward() {
        let cfg = UmpireConfig::default();
        let ump = umpire(&cfg);
        let mut prev = 1.0;
        for off_in in [-1.0, 0.0, 1.0, 2.0, 3.0] {
            let x = zone::HALF_WIDTH_FT + off_in * convert::IN_TO_FT;
            let p = ump.strike_probability(&crossing(x, zone::CENTER_Z_FT));
            assert!(p <= prev);
            prev = p;
        }
    }

    #[test]
    fn test_framing_widens_calls() {
        let cfg = UmpireConfig::default();
        let good = Umpire::new(&cfg, 0.9);
        let bad = Umpire::new(&cfg, 0.1);
        let x = zone::HALF_WIDTH_FT + 1.0 * convert::IN_TO_FT;
        let at_edge = crossing(x, zone::CENTER_Z_FT);
        assert!(good.strike_probability(&at_edge) > bad.strike_probability(&at_edge));
    }
}
