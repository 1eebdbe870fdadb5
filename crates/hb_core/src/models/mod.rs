//! Typed records for players, pitches, and results.

pub mod count;
pub mod defense;
pub mod hitter;
pub mod outcome;
pub mod pitch;
pub mod pitcher;

pub use count::{Count, CountTransition};
pub use defense::{Defense, Fielder, FielderSpot};
pub use hitter::HitterAttributes;
pub use outcome::{
    AtBatOutcome, AtBatRecord, ContactQuality, ContactResult, GameResult, OutKind, TeamLine,
};
pub use pitch::{PitchIntention, PitchOutcome, PitchRecord, PitchType, PlateCrossing};
pub use pitcher::{ArsenalPitch, PitcherAttributes, PitcherGameState};
