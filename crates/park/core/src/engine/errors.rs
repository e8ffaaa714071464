//! Error types for the action pipeline.

use crate::action::{ActionTransition, WallPlaceAction};
use crate::error::{ActionStatus, ErrorSeverity, GameError};

/// Identifies which phase of the transaction produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    Query,
    Execute,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::Query => "query",
            TransitionPhase::Execute => "execute",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while running an action through the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("wall place action failed: {0}")]
    WallPlace(TransitionPhaseError<<WallPlaceAction as ActionTransition>::Error>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::WallPlace(error) => error.phase,
        }
    }

    /// The action's own error, for player feedback.
    pub fn source_error(&self) -> &dyn GameError {
        match self {
            ExecuteError::WallPlace(error) => &error.error,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.source_error().severity()
    }

    fn status(&self) -> ActionStatus {
        self.source_error().status()
    }

    fn title(&self) -> &'static str {
        self.source_error().title()
    }

    fn detail(&self) -> Option<String> {
        self.source_error().detail()
    }

    fn error_code(&self) -> &'static str {
        self.source_error().error_code()
    }
}
