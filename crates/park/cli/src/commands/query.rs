//! Dry-run a wall placement.

use anyhow::Result;
use clap::Parser;
use park_core::{Action, ActionEngine};

use super::{WallArgs, report};

/// Check whether a wall can be placed, without changing the park
#[derive(Parser)]
pub struct Query {
    #[command(flatten)]
    wall: WallArgs,
}

impl Query {
    pub fn execute(self) -> Result<()> {
        let mut session = self.wall.open()?;
        let action = self.wall.action();
        let command = Action::from(action.clone());

        let engine = ActionEngine::with_context(&mut session.state, session.ctx);
        let result = engine.query(session.content.env(), &command);
        if let Err(error) = &result {
            tracing::debug!(%error, "query rejected");
        }
        report(self.wall.format(), "query", &action, &result)
    }
}
