//! Park construction command line.
//!
//! Loads a content directory and a scenario, then runs wall placement
//! commands against it.
//!
//! ```bash
//! park query --data-dir data --scenario meadow --wall 5 --x 32 --y 32 --edge 0
//! park place --data-dir data --scenario meadow --wall 6 --x 128 --y 160 --edge 0 --format json
//! ```

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Place, Query};

/// Park construction tools
#[derive(Parser)]
#[command(name = "park")]
#[command(about = "Validate and place park scenery from the command line", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Check whether a wall can be placed, without changing the park
    Query(Query),

    /// Place a wall and report the result
    Place(Place),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Query(cmd) => cmd.execute(),
        Command::Place(cmd) => cmd.execute(),
    }
}
