//! Result records: contact, at-bat, and game. These are value types that
//! flow out of the engine; debug logs and calibration snapshots copy from
//! them rather than holding references.

use serde::{Deserialize, Serialize};

use super::count::Count;
use super::pitch::PitchRecord;

/// Contact quality by collision-efficiency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactQuality {
    Solid,
    Fair,
    Weak,
}

/// The batted ball as it leaves the bat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactResult {
    pub exit_velo_mph: f64,
    pub launch_deg: f64,
    /// Spray angle (deg): 0 straightaway, + toward the pull side.
    pub spray_deg: f64,
    /// Signed spin (rpm): positive backspin, negative topspin.
    pub spin_rpm: f64,
    pub quality: ContactQuality,
    pub foul: bool,
}

/// Kinds of in-play outs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutKind {
    GroundOut,
    FlyOut,
    LineOut,
    PopOut,
    FoulOut,
}

/// Terminal result of a plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtBatOutcome {
    Strikeout,
    Walk,
    HitByPitch,
    Single,
    Double,
    Triple,
    HomeRun,
    Out(OutKind),
}

impl AtBatOutcome {
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            AtBatOutcome::Single | AtBatOutcome::Double | AtBatOutcome::Triple | AtBatOutcome::HomeRun
        )
    }

    pub fn is_out_in_play(self) -> bool {
        matches!(self, AtBatOutcome::Out(_))
    }

    /// Bases the batter takes (0 for outs, K, and 4 for a home run).
    pub fn bases(self) -> u8 {
        match self {
            AtBatOutcome::Single | AtBatOutcome::Walk | AtBatOutcome::HitByPitch => 1,
            AtBatOutcome::Double => 2,
            AtBatOutcome::Triple => 3,
            AtBatOutcome::HomeRun => 4,
            AtBatOutcome::Strikeout | AtBatOutcome::Out(_) => 0,
        }
    }
}

/// Complete record of one plate appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtBatRecord {
    pub outcome: AtBatOutcome,
    pub final_count: Count,
    pub pitches: Vec<PitchRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactResult>,
}

/// One team's counting line for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamLine {
    pub plate_appearances: u32,
    pub runs: u32,
    pub strikeouts: u32,
    pub walks: u32,
    pub hit_by_pitch: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub outs_in_play: u32,
    pub pitches_seen: u32,
}

impl TeamLine {
    pub fn hits(&self) -> u32 {
        self.singles + self.doubles + self.triples + self.home_runs
    }

    pub fn record(&mut self, ab: &AtBatRecord) {
        self.plate_appearances += 1;
        self.pitches_seen += ab.pitches.len() as u32;
        match ab.outcome {
            AtBatOutcome::Strikeout => self.strikeouts += 1,
            AtBatOutcome::Walk => self.walks += 1,
            AtBatOutcome::HitByPitch => self.hit_by_pitch += 1,
            AtBatOutcome::Single => self.singles += 1,
            AtBatOutcome::Double => self.doubles += 1,
            AtBatOutcome::Triple => self.triples += 1,
            AtBatOutcome::HomeRun => self.home_runs += 1,
            AtBatOutcome::Out(_) => self.outs_in_play += 1,
        }
    }
}

/// Final result of one simulated game. `PartialEq` + serde make the
/// byte-for-byte determinism property directly testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub game_index: u64,
    pub seed: u64,
    pub home: TeamLine,
    pub away: TeamLine,
    pub innings_played: u8,
}
