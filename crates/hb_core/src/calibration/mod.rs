//! Statistical calibration support.
//!
//! The engine's behavioral targets are league aggregate rates, checked by
//! regression tests over seeded scenario batches. This module provides:
//! - StatSnapshot: per-batch rate accumulation
//! - ScenarioRunner: deterministic at-bat/game batches against fixed
//!   attribute profiles

pub mod scenario_runner;
pub mod stat_snapshot;

pub use scenario_runner::{hitters, tier_pitcher, CommandTier, ScenarioRunner};
pub use stat_snapshot::StatSnapshot;
