//! Place a wall, optionally saving the resulting park.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use park_core::{Action, ActionEngine};

use super::{WallArgs, report, save_state};

/// Place a wall and report the result
#[derive(Parser)]
pub struct Place {
    #[command(flatten)]
    wall: WallArgs,

    /// Write the park to FILE after a successful placement
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,
}

impl Place {
    pub fn execute(self) -> Result<()> {
        let mut session = self.wall.open()?;
        let action = self.wall.action();
        let command = Action::from(action.clone());

        let mut engine = ActionEngine::with_context(&mut session.state, session.ctx);
        let result = engine.execute(session.content.env(), &command);
        report(self.wall.format(), "place", &action, &result)?;

        let tile = action.location.to_tile();
        tracing::info!(
            %tile,
            elements = session.state.tiles().elements_at(tile).len(),
            banners = session.state.banners.len(),
            "wall placed"
        );

        if let Some(path) = &self.save {
            save_state(path, &session.state)?;
            tracing::info!(path = %path.display(), "park saved");
        }
        Ok(())
    }
}
