//! Action dispatch through the query/execute pipeline.

use crate::action::{Action, ActionOutcome, ActionResult, ActionTransition};
use crate::config::ValidationContext;
use crate::env::ParkEnv;
use crate::state::ParkState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Runs Query against the current state, then Execute.
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut ParkState,
    env: &ParkEnv<'_>,
    ctx: &ValidationContext,
) -> Result<ActionOutcome<T::Output>, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .query(state, env, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Query, error))?;

    transition.execute(state, env, ctx).map_err(|error| {
        tracing::warn!(%error, "execute failed after a successful query");
        TransitionPhaseError::new(TransitionPhase::Execute, error)
    })
}

fn drive_query<T>(
    transition: &T,
    state: &ParkState,
    env: &ParkEnv<'_>,
    ctx: &ValidationContext,
) -> Result<ActionOutcome<T::Output>, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .query(state, env, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Query, error))
}

fn wrap<T>(
    outcome: ActionOutcome<T>,
    variant: impl FnOnce(T) -> ActionResult,
) -> ActionOutcome<ActionResult> {
    ActionOutcome {
        cost: outcome.cost,
        position: outcome.position,
        data: variant(outcome.data),
    }
}

pub(super) fn query_transition(
    action: &Action,
    state: &ParkState,
    env: &ParkEnv<'_>,
    ctx: &ValidationContext,
) -> Result<ActionOutcome<ActionResult>, ExecuteError> {
    match action {
        Action::WallPlace(transition) => {
            let outcome =
                drive_query(transition, state, env, ctx).map_err(ExecuteError::WallPlace)?;
            Ok(wrap(outcome, ActionResult::WallPlace))
        }
    }
}

pub(super) fn execute_transition(
    action: &Action,
    state: &mut ParkState,
    env: &ParkEnv<'_>,
    ctx: &ValidationContext,
) -> Result<ActionOutcome<ActionResult>, ExecuteError> {
    match action {
        Action::WallPlace(transition) => {
            let outcome =
                drive_transition(transition, state, env, ctx).map_err(ExecuteError::WallPlace)?;
            Ok(wrap(outcome, ActionResult::WallPlace))
        }
    }
}
