//! # hb_core - Deterministic Pitch-and-At-Bat Simulation Engine
//!
//! A physics-based baseball plate-appearance engine: RK4 ball flight with
//! drag and Magnus lift, a probabilistic pitch/swing/contact decision stack,
//! and a bat-ball collision model, calibrated to MLB aggregate rates.
//!
//! ## Features
//! - 100% deterministic: same seed + same config = byte-identical results,
//!   regardless of thread count
//! - Per-entity ChaCha8 RNG streams derived from `(base_seed, game_index)`
//! - Every calibration constant exposed through [`SimConfig`]
//! - Opt-in per-pitch JSON-lines decision logging for calibration work

// Game engine APIs often require many parameters for physics, state, etc.
#![allow(clippy::too_many_arguments)]
// Struct initialization pattern used intentionally in configs and tests
#![allow(clippy::field_reassign_with_default)]
// Exhaustive f64 comparisons in tests are deliberate
#![allow(clippy::float_cmp)]

pub mod calibration;
pub mod engine;
pub mod error;
pub mod models;

// Re-export the main simulation surface.
pub use engine::config::{ConfigError, SimConfig};
pub use engine::game::{neutral_team, run_games, GameSim, TeamSheet};
pub use engine::{
    AeroModel, AtBatContext, BallState, Ballpark, BufferPool, Environment, PitchLogCollector,
    SimStreams,
};
pub use error::{AeroError, GameError, IntegrationError, Result};
pub use models::{
    AtBatOutcome, AtBatRecord, ContactResult, Count, GameResult, HitterAttributes,
    PitcherAttributes, PitchIntention, PitchRecord, PitchType,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
