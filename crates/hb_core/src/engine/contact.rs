//! Bat-ball collision model.
//!
//! A swing either misses or produces a [`ContactResult`]. The chain is:
//! whiff check, vertical contact offset, collision efficiency, the BBS
//! equation for exit velocity, launch/spray geometry, imparted spin, and
//! finally the foul rules. Every threshold lives in [`ContactConfig`].

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use super::config::ContactConfig;
use super::physics_constants::{spray, zone};
use crate::models::{ContactQuality, ContactResult, Count, HitterAttributes, PlateCrossing};

/// Outcome of a swing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwingResult {
    Whiff,
    Contact(ContactResult),
}

/// Probability this swing misses entirely.
pub fn whiff_probability(
    cfg: &ContactConfig,
    crossing: &PlateCrossing,
    base_whiff: f64,
    count: Count,
    hitter: &HitterAttributes,
) -> f64 {
    let skill = cfg.whiff_contact_base - cfg.whiff_contact_slope * hitter.contact.clamp(0.0, 1.0);
    let mut p = base_whiff * skill.max(0.1);

    // Chasing costs contact: the farther off the zone, the emptier the swing.
    let edge_ft = zone::edge_distance(crossing.x_ft, crossing.z_ft);
    if edge_ft > 0.0 {
        p *= 1.0 + cfg.chase_whiff_per_ft * edge_ft;
    }

    if count.two_strikes() {
        p *= cfg.two_strike_whiff_bonus;
    }
    p.clamp(0.02, 0.95)
}

/// Resolve a swing against a pitch at the plate.
pub fn attempt(
    cfg: &ContactConfig,
    crossing: &PlateCrossing,
    base_whiff: f64,
    count: Count,
    hitter: &HitterAttributes,
    rng: &mut ChaCha8Rng,
) -> SwingResult {
    if rng.gen::<f64>() < whiff_probability(cfg, crossing, base_whiff, count, hitter) {
        return SwingResult::Whiff;
    }

    // Timing error (ms): positive is early. Reaction tightens the spread.
    let timing_sigma =
        cfg.timing_sigma_ms * (1.3 - cfg.timing_reaction_scale * hitter.reaction_quality());
    let timing_ms = sample_normal(rng, 0.0, timing_sigma);

    // Vertical contact offset (in): positive means the barrel passed under
    // the ball center. Mistimed swings also miss vertically.
    let offset_sigma =
        cfg.offset_sigma_in * (1.0 + cfg.offset_timing_widen * timing_ms.abs() / 100.0);
    let offset_in = sample_normal(rng, 0.0, offset_sigma);

    // Collision efficiency decays off-barrel, and with it the quality band.
    let q_eff = cfg.collision_efficiency_max
        * (-(offset_in / cfg.offset_efficiency_scale_in).powi(2)).exp();
    let quality = if q_eff >= cfg.solid_q_threshold {
        ContactQuality::Solid
    } else if q_eff >= cfg.weak_q_threshold {
        ContactQuality::Fair
    } else {
        ContactQuality::Weak
    };

    // BBS equation: EV = q * v_pitch + (1 + q) * v_bat, with the effective
    // bat speed reduced by the same off-barrel geometry.
    let bat_mean = cfg.bat_speed_base_mph + cfg.bat_speed_range_mph * hitter.power.clamp(0.0, 1.0);
    let bat_speed = sample_normal(rng, bat_mean, cfg.bat_speed_sigma_mph).max(30.0);
    let bat_eff = bat_speed * (-(offset_in / cfg.bat_speed_offset_scale_in).powi(2)).exp();
    let exit_velo_mph = (q_eff * crossing.speed_mph + (1.0 + q_eff) * bat_eff).max(5.0);

    // Launch angle: bat path plus lift from under-center contact.
    let attack_mean = cfg.mean_attack_angle_deg(hitter.attack_angle_control);
    let attack_deg = sample_normal(rng, attack_mean, cfg.attack_angle_sigma_deg);
    let launch_deg = (attack_deg + cfg.launch_per_inch_deg * offset_in).clamp(-75.0, 85.0);

    // Spray: early swings pull, late swings go the other way.
    let pull_shift = timing_ms * cfg.pull_deg_per_ms
        + (hitter.spray_tendency.clamp(0.0, 1.0) - 0.5) * 2.0 * cfg.spray_tendency_range_deg;
    let spray_deg = sample_normal(rng, pull_shift, cfg.spray_sigma_deg).clamp(-85.0, 85.0);

    // Imparted spin: under-center contact adds backspin, over-center topspin.
    let spin_mag =
        (cfg.spin_base_rpm + cfg.spin_per_inch_rpm * offset_in.abs()).min(cfg.spin_max_rpm);
    let spin_rpm = spin_mag * offset_in.signum();

    let foul = is_foul(cfg, launch_deg, spray_deg, quality, count, rng);

    SwingResult::Contact(ContactResult {
        exit_velo_mph,
        launch_deg,
        spray_deg,
        spin_rpm,
        quality,
        foul,
    })
}

fn is_foul(
    cfg: &ContactConfig,
    launch_deg: f64,
    spray_deg: f64,
    quality: ContactQuality,
    count: Count,
    rng: &mut ChaCha8Rng,
) -> bool {
    // Geometry first: topped or skied balls, and anything outside the lines.
    if launch_deg < cfg.foul_launch_min_deg || launch_deg > cfg.foul_launch_max_deg {
        return true;
    }
    if spray_deg.abs() > spray::FOUL_LINE_DEG {
        return true;
    }
    if quality == ContactQuality::Weak && rng.gen::<f64>() < cfg.weak_contact_foul_prob {
        return true;
    }
    // Two-strike protection: deliberately spoiling pitches extends at-bats.
    if count.two_strikes() {
        let p = match quality {
            ContactQuality::Solid => cfg.protection_foul_solid,
            ContactQuality::Fair => cfg.protection_foul_fair,
            ContactQuality::Weak => cfg.protection_foul_weak,
        };
        if rng.gen::<f64>() < p {
            return true;
        }
    }
    false
}

#[inline]
fn sample_normal(rng: &mut ChaCha8Rng, mean: f64, sigma: f64) -> f64 {
    if sigma <= 0.0 {
        return mean;
    }
    Normal::new(mean, sigma).expect("finite distribution parameters").sample(rng)
}
