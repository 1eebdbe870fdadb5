//! The simulation engine: physics, decisions, and the game loop.
//!
//! Layering, bottom up:
//! - L1 physics: `aerodynamics`, `integrator`, `ball`, `environment`
//! - L2 pure decision models: `umpire`, `swing`, `contact`, `pitcher_control`
//! - L3 stateful orchestration: `pitch_engine`, `at_bat`, `play_resolution`,
//!   `game`

pub mod aerodynamics;
pub mod at_bat;
pub mod ball;
pub mod ballpark;
pub mod buffer_pool;
pub mod config;
pub mod contact;
pub mod debug_log;
pub mod environment;
pub mod game;
pub mod integrator;
pub mod physics_constants;
pub mod pitch_engine;
pub mod pitcher_control;
pub mod play_resolution;
pub mod rng;
pub mod swing;
pub mod timestep;
pub mod umpire;

pub use aerodynamics::AeroModel;
pub use at_bat::{simulate_at_bat, AtBatContext};
pub use ball::BallState;
pub use ballpark::{Ballpark, Fence};
pub use buffer_pool::{BufferPool, TrajectoryBuffer, TrajectorySample};
pub use config::SimConfig;
pub use debug_log::{PitchLogCollector, PitchLogEntry};
pub use environment::Environment;
pub use game::{neutral_team, run_games, GameSim, TeamSheet};
pub use integrator::{integrate, IntegratorSettings, Landing, StopReason};
pub use pitch_engine::{PitchEngine, ThrownPitch};
pub use pitcher_control::{PitchCall, PitcherControl};
pub use rng::{derive_seed, SimStreams};
pub use umpire::Umpire;
