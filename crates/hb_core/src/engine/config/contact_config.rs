//! Bat-ball collision calibration. Every numeric threshold of the contact
//! model lives here so calibration never edits the model itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    // === Whiff ===
    /// Whiff modifier slope on hitter contact skill:
    /// `mult = whiff_contact_base - whiff_contact_slope * contact`.
    pub whiff_contact_base: f64,
    pub whiff_contact_slope: f64,
    /// Put-away multiplier with two strikes.
    pub two_strike_whiff_bonus: f64,
    /// Whiff growth per foot of chase outside the zone.
    pub chase_whiff_per_ft: f64,

    // === Contact offset (vertical miss, inches) ===
    /// 1-sigma offset for a perfectly timed swing.
    pub offset_sigma_in: f64,
    /// Widening of the offset sigma per 100 ms of timing error.
    pub offset_timing_widen: f64,

    // === Collision efficiency ===
    /// Peak wood-bat collision efficiency (q in the BBS equation).
    pub collision_efficiency_max: f64,
    /// Gaussian decay scale of q with offset (inches).
    pub offset_efficiency_scale_in: f64,
    /// Gaussian decay scale of effective bat speed with offset (inches).
    pub bat_speed_offset_scale_in: f64,
    /// Quality bands on effective q.
    pub solid_q_threshold: f64,
    pub weak_q_threshold: f64,

    // === Swing kinematics ===
    /// Mean bat speed = base + range * hitter.power (mph).
    pub bat_speed_base_mph: f64,
    pub bat_speed_range_mph: f64,
    pub bat_speed_sigma_mph: f64,
    /// Attack angle range the hitter's control maps into (degrees).
    pub attack_angle_min_deg: f64,
    pub attack_angle_max_deg: f64,
    pub attack_angle_sigma_deg: f64,
    /// Timing error sigma (ms) for an average-reaction hitter.
    pub timing_sigma_ms: f64,
    /// Timing sigma scale from reaction quality: `1.3 - 0.6 * quality`.
    pub timing_reaction_scale: f64,

    // === Ball flight off the bat ===
    /// Launch angle added per inch of under-center contact (deg/in).
    pub launch_per_inch_deg: f64,
    /// Global spray sigma (degrees).
    pub spray_sigma_deg: f64,
    /// Pull shift per ms of early timing (deg/ms).
    pub pull_deg_per_ms: f64,
    /// Pull shift from spray tendency at the extremes (degrees).
    pub spray_tendency_range_deg: f64,

    // === Spin off the bat ===
    pub spin_base_rpm: f64,
    pub spin_per_inch_rpm: f64,
    pub spin_max_rpm: f64,

    // === Foul rules ===
    pub foul_launch_min_deg: f64,
    pub foul_launch_max_deg: f64,
    pub weak_contact_foul_prob: f64,
    /// Two-strike protection fouls by contact quality.
    pub protection_foul_solid: f64,
    pub protection_foul_fair: f64,
    pub protection_foul_weak: f64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whiff_contact_base: 1.6,
            whiff_contact_slope: 1.2,
            two_strike_whiff_bonus: 1.1,
            chase_whiff_per_ft: 0.8,

            offset_sigma_in: 0.9,
            offset_timing_widen: 0.8,

            collision_efficiency_max: 0.21,
            offset_efficiency_scale_in: 1.1,
            bat_speed_offset_scale_in: 2.8,
            solid_q_threshold: 0.15,
            weak_q_threshold: 0.05,

            bat_speed_base_mph: 64.0,
            bat_speed_range_mph: 16.0,
            bat_speed_sigma_mph: 3.0,
            attack_angle_min_deg: -5.0,
            attack_angle_max_deg: 25.0,
            attack_angle_sigma_deg: 7.0,
            timing_sigma_ms: 14.0,
            timing_reaction_scale: 0.6,

            launch_per_inch_deg: 14.0,
            spray_sigma_deg: 27.0,
            pull_deg_per_ms: 0.25,
            spray_tendency_range_deg: 20.0,

            spin_base_rpm: 1000.0,
            spin_per_inch_rpm: 1400.0,
            spin_max_rpm: 3500.0,

            foul_launch_min_deg: -8.0,
            foul_launch_max_deg: 65.0,
            weak_contact_foul_prob: 0.35,
            protection_foul_solid: 0.10,
            protection_foul_fair: 0.15,
            protection_foul_weak: 0.05,
        }
    }
}

impl ContactConfig {
    /// Mean attack angle for a hitter's control value (0..1).
    pub fn mean_attack_angle_deg(&self, control: f64) -> f64 {
        let c = control.clamp(0.0, 1.0);
        self.attack_angle_min_deg + c * (self.attack_angle_max_deg - self.attack_angle_min_deg)
    }
}
