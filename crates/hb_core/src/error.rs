use std::fmt;

use crate::engine::buffer_pool::TrajectorySample;

/// Errors raised by the aerodynamic force model.
#[derive(Debug, Clone, PartialEq)]
pub enum AeroError {
    /// An input to the force calculation was NaN or infinite. The integrator
    /// must abort the current trajectory when it sees this.
    NonFiniteForce,
}

/// Errors raised by a single trajectory integration.
#[derive(Debug, Clone)]
pub enum IntegrationError {
    /// Force evaluation failed or the speed sanity cap was exceeded; the last
    /// valid sample is preserved for diagnostics.
    Aborted { last: TrajectorySample },
    /// The step count would exceed the caller-provided buffer capacity.
    TrajectoryTooLong { capacity: usize },
}

/// Errors that end a game rather than a single trajectory.
#[derive(Debug, Clone)]
pub enum GameError {
    /// The trajectory buffer pool was drained. Pools are sized for the worst
    /// case, so this is an invariant violation, not a recoverable condition.
    BufferPoolExhausted,
    /// A team sheet was structurally unusable (empty lineup, no arsenal).
    InvalidTeamSheet(String),
    /// The worker thread pool could not be built.
    WorkerPool(String),
}

impl fmt::Display for AeroError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AeroError::NonFiniteForce => {
                write!(f, "non-finite input to aerodynamic force calculation")
            }
        }
    }
}

impl std::error::Error for AeroError {}

impl fmt::Display for IntegrationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IntegrationError::Aborted { last } => {
                write!(f, "trajectory aborted at t={:.4}s", last.t)
            }
            IntegrationError::TrajectoryTooLong { capacity } => {
                write!(f, "trajectory exceeded buffer capacity of {} steps", capacity)
            }
        }
    }
}

impl std::error::Error for IntegrationError {}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::BufferPoolExhausted => {
                write!(f, "trajectory buffer pool exhausted")
            }
            GameError::InvalidTeamSheet(msg) => {
                write!(f, "invalid team sheet: {}", msg)
            }
            GameError::WorkerPool(msg) => {
                write!(f, "worker pool error: {}", msg)
            }
        }
    }
}

impl std::error::Error for GameError {}

pub type Result<T> = std::result::Result<T, GameError>;
