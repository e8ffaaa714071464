//! Action execution pipeline.
//!
//! The [`ActionEngine`] is the only place that mutates [`ParkState`] on behalf
//! of a command. It runs Query before Execute and tags failures with the
//! phase that produced them. Query-only dry runs power previews and cost
//! estimates.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionOutcome, ActionResult};
use crate::config::ValidationContext;
use crate::env::ParkEnv;
use crate::state::ParkState;

/// Drives actions against a park.
pub struct ActionEngine<'a> {
    state: &'a mut ParkState,
    ctx: ValidationContext,
}

impl<'a> ActionEngine<'a> {
    pub fn new(state: &'a mut ParkState) -> Self {
        Self::with_context(state, ValidationContext::standard())
    }

    pub fn with_context(state: &'a mut ParkState, ctx: ValidationContext) -> Self {
        Self { state, ctx }
    }

    pub fn context(&self) -> &ValidationContext {
        &self.ctx
    }

    pub fn state(&self) -> &ParkState {
        self.state
    }

    /// Validates `action` without mutating the park.
    pub fn query(
        &self,
        env: ParkEnv<'_>,
        action: &Action,
    ) -> Result<ActionOutcome<ActionResult>, ExecuteError> {
        transition::query_transition(action, self.state, &env, &self.ctx)
    }

    /// Validates and commits `action`.
    pub fn execute(
        &mut self,
        env: ParkEnv<'_>,
        action: &Action,
    ) -> Result<ActionOutcome<ActionResult>, ExecuteError> {
        transition::execute_transition(action, self.state, &env, &self.ctx)
    }
}
