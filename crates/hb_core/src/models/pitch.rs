//! Pitch-level types: pitch repertoire, intention categories, and the
//! immutable per-pitch record emitted by the at-bat state machine.

use serde::{Deserialize, Serialize};

use super::count::Count;
use super::outcome::ContactResult;

/// The seven-pitch repertoire the engine models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchType {
    Fastball,
    TwoSeam,
    Cutter,
    Slider,
    Curveball,
    Changeup,
    Splitter,
}

impl PitchType {
    pub const ALL: [PitchType; 7] = [
        PitchType::Fastball,
        PitchType::TwoSeam,
        PitchType::Cutter,
        PitchType::Slider,
        PitchType::Curveball,
        PitchType::Changeup,
        PitchType::Splitter,
    ];

    /// Breaking and off-speed pitches get a tunneling-based chase bonus.
    pub fn is_breaking(self) -> bool {
        matches!(
            self,
            PitchType::Slider | PitchType::Curveball | PitchType::Changeup | PitchType::Splitter
        )
    }
}

/// What the pitcher is trying to do with this pitch.
///
/// Replaces the string labels of ad-hoc designs with a closed set the
/// selection tables and target derivation can match on exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchIntention {
    /// Throw a clear strike over the middle.
    StrikeLooking,
    /// Attack the edge of the zone.
    StrikeCompetitive,
    /// Paint a corner.
    StrikeCorner,
    /// Tempt a chase just off the zone.
    WasteChase,
    /// Throw a deliberate ball well outside.
    BallIntentional,
}

impl PitchIntention {
    pub const ALL: [PitchIntention; 5] = [
        PitchIntention::StrikeLooking,
        PitchIntention::StrikeCompetitive,
        PitchIntention::StrikeCorner,
        PitchIntention::WasteChase,
        PitchIntention::BallIntentional,
    ];

    /// Index into intention weight arrays.
    pub fn index(self) -> usize {
        match self {
            PitchIntention::StrikeLooking => 0,
            PitchIntention::StrikeCompetitive => 1,
            PitchIntention::StrikeCorner => 2,
            PitchIntention::WasteChase => 3,
            PitchIntention::BallIntentional => 4,
        }
    }
}

/// State of the pitch as it crosses the front plane of the plate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateCrossing {
    /// Horizontal location (ft, catcher's view, + toward first base).
    pub x_ft: f64,
    /// Height above ground (ft).
    pub z_ft: f64,
    /// Speed at the plate (mph).
    pub speed_mph: f64,
    /// Flight time from release (s).
    pub time_s: f64,
}

/// How a single pitch resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchOutcome {
    TakenBall,
    TakenStrike,
    SwingingStrike,
    Foul,
    InPlay,
    HitByPitch,
}

/// Immutable record of one pitch, complete once the pitch resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    /// 1-based pitch number within the at-bat.
    pub number: u8,
    pub count_before: Count,
    pub pitch_type: PitchType,
    pub intention: PitchIntention,
    /// Aim point before command noise (ft at the plate plane).
    pub target_x_ft: f64,
    pub target_z_ft: f64,
    /// Actual crossing location.
    pub plate_x_ft: f64,
    pub plate_z_ft: f64,
    pub release_speed_mph: f64,
    pub spin_rpm: f64,
    pub in_zone: bool,
    /// Set when the targeting iteration failed to converge.
    pub targeting_degraded: bool,
    pub swung: bool,
    pub outcome: PitchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactResult>,
}

impl PitchRecord {
    /// Command error: distance from aim point to actual crossing (inches).
    pub fn command_error_in(&self) -> f64 {
        let dx = self.plate_x_ft - self.target_x_ft;
        let dz = self.plate_z_ft - self.target_z_ft;
        (dx * dx + dz * dz).sqrt() * 12.0
    }
}
