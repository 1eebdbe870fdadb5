//! # Engine Configuration
//!
//! Every calibration constant in the engine is reachable from [`SimConfig`].
//! A config is validated once at load time and is immutable afterwards; a
//! game never sees a config error mid-flight. Multiple configs can run side
//! by side in the same process for A/B calibration.

mod contact_config;
mod intention_config;
mod park_config;
mod physics_config;
mod swing_config;

pub use contact_config::ContactConfig;
pub use intention_config::{IntentionConfig, IntentionWeights};
pub use park_config::{ParkConfig, SURVEY_POINTS, SURVEY_STEP_DEG};
pub use physics_config::{EnvironmentConfig, PhysicsConfig};
pub use swing_config::{SwingConfig, UmpireConfig};

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ArsenalPitch, PitchType};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported config extension: {0}")]
    UnsupportedExtension(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game-rule and at-bat bookkeeping knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Hard cap on pitches in one plate appearance.
    pub max_pitches_per_pa: u8,
    /// Inside distance (ft from plate center) where a pitch can hit the batter.
    pub hbp_inside_ft: f64,
    /// Chance a pitch that far inside actually hits him.
    pub hbp_prob: f64,
    pub innings_per_game: u8,
    /// Pitch count where command starts degrading.
    pub fatigue_onset_pitches: u32,
    /// Fractional sigma growth per pitch past the onset.
    pub fatigue_sigma_per_pitch: f64,
    /// Command sigma tiers (inches) for roster construction.
    pub command_sigma_elite_in: f64,
    pub command_sigma_average_in: f64,
    pub command_sigma_poor_in: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_pitches_per_pa: 20,
            hbp_inside_ft: 2.2,
            hbp_prob: 0.85,
            innings_per_game: 9,
            fatigue_onset_pitches: 75,
            fatigue_sigma_per_pitch: 0.01,
            command_sigma_elite_in: 2.7,
            command_sigma_average_in: 4.3,
            command_sigma_poor_in: 6.3,
        }
    }
}

/// Built-in arsenal profiles: speed, spin, axis, whiff, usage per pitch type.
///
/// Axis convention: the pitch travels toward -y, so an axis of (-1, 0, 0)
/// produces pure lift (four-seam backspin) and (1, 0, 0) pure drop.
pub fn default_arsenal() -> Vec<ArsenalPitch> {
    let p = |pitch_type, speed_mph, spin_rpm, spin_axis, base_whiff, usage| ArsenalPitch {
        pitch_type,
        speed_mph,
        spin_rpm,
        spin_axis,
        base_whiff,
        usage,
    };
    vec![
        p(PitchType::Fastball, 94.0, 2300.0, [-1.0, 0.0, 0.0], 0.18, 0.34),
        p(PitchType::TwoSeam, 92.5, 2150.0, [-0.8, 0.0, 0.6], 0.16, 0.12),
        p(PitchType::Cutter, 89.0, 2400.0, [-0.707, 0.0, -0.707], 0.22, 0.10),
        p(PitchType::Slider, 85.0, 2450.0, [0.0, -0.87, -0.5], 0.32, 0.16),
        p(PitchType::Curveball, 79.0, 2500.0, [1.0, 0.0, 0.0], 0.30, 0.10),
        p(PitchType::Changeup, 85.0, 1750.0, [-0.6, 0.0, 0.8], 0.28, 0.11),
        p(PitchType::Splitter, 86.0, 1200.0, [-1.0, 0.0, 0.0], 0.34, 0.07),
    ]
}

/// The complete, immutable simulation configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
    #[serde(default)]
    pub intention: IntentionConfig,
    #[serde(default)]
    pub swing: SwingConfig,
    #[serde(default)]
    pub umpire: UmpireConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub park: ParkConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

impl SimConfig {
    /// Default tuning aimed at MLB aggregate rates.
    pub fn realistic() -> Self {
        Self::default()
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a `.json`, `.yaml`, or `.yml` file. Fails at startup,
    /// never mid-game.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            other => Err(ConfigError::UnsupportedExtension(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.physics.dt_normal_s <= 0.0
            || self.physics.dt_fast_s <= 0.0
            || self.physics.dt_ultra_s <= 0.0
        {
            return invalid("integrator steps must be positive".into());
        }
        if self.physics.max_flight_time_s <= 0.0 {
            return invalid("max flight time must be positive".into());
        }
        if self.physics.drag_crisis_hi_ftps <= self.physics.drag_crisis_lo_ftps {
            return invalid("drag crisis band must have positive width".into());
        }
        if !self.intention.rows_normalized() {
            return invalid("intention table rows must be non-negative and sum to 1".into());
        }
        if self.park.fence_distance_ft.len() != SURVEY_POINTS
            || self.park.fence_height_ft.len() != SURVEY_POINTS
        {
            return invalid(format!(
                "park survey must have exactly {} points",
                SURVEY_POINTS
            ));
        }
        if self.park.fence_distance_ft.iter().any(|d| !(200.0..=600.0).contains(d)) {
            return invalid("fence distances must be within 200..600 ft".into());
        }
        if self.park.fence_height_ft.iter().any(|h| !(0.0..=60.0).contains(h)) {
            return invalid("fence heights must be within 0..60 ft".into());
        }
        if self.contact.collision_efficiency_max <= 0.0
            || self.contact.collision_efficiency_max >= 1.0
        {
            return invalid("collision efficiency must be in (0, 1)".into());
        }
        if self.contact.attack_angle_max_deg <= self.contact.attack_angle_min_deg {
            return invalid("attack angle range must have positive width".into());
        }
        if self.rules.max_pitches_per_pa == 0 || self.rules.innings_per_game == 0 {
            return invalid("pitch cap and innings must be positive".into());
        }
        for p in [
            self.contact.weak_contact_foul_prob,
            self.contact.protection_foul_solid,
            self.contact.protection_foul_fair,
            self.contact.protection_foul_weak,
            self.rules.hbp_prob,
        ] {
            if !(0.0..=1.0).contains(&p) {
                return invalid("probabilities must be within 0..1".into());
            }
        }
        Ok(())
    }
}
