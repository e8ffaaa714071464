//! Subcommands and the arguments they share.

mod place;
mod query;

pub use place::Place;
pub use query::Query;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use park_content::ContentFactory;
use park_core::{
    ActionFlags, ActionOutcome, ActionResult, Colour, ContentSnapshot, CoordsXYZ, ExecuteError,
    GameError, ObjectEntryIndex, ParkState, ValidationContext, WallPlaceAction,
};

/// Where the park comes from and which wall to place.
#[derive(Args, Debug)]
pub struct WallArgs {
    /// Content directory holding settings.toml, catalog.ron and scenarios/
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Scenario to load from scenarios/<NAME>.ron
    #[arg(short, long, value_name = "NAME", required_unless_present = "state")]
    scenario: Option<String>,

    /// Saved park to start from instead of a scenario
    #[arg(long, value_name = "FILE", conflicts_with = "scenario")]
    state: Option<PathBuf>,

    /// Wall object id from the catalog
    #[arg(short, long, value_name = "ID")]
    wall: u16,

    /// World x coordinate
    #[arg(short)]
    x: i32,

    /// World y coordinate
    #[arg(short)]
    y: i32,

    /// World z coordinate; 0 follows the terrain
    #[arg(short, default_value_t = 0)]
    z: i32,

    /// Tile edge: 0 west, 1 north, 2 east, 3 south
    #[arg(short, long)]
    edge: u8,

    #[arg(long, default_value_t = 0)]
    primary: u8,

    #[arg(long, default_value_t = 0)]
    secondary: u8,

    #[arg(long, default_value_t = 0)]
    tertiary: u8,

    /// Place a preview ghost
    #[arg(long)]
    ghost: bool,

    /// Skip ownership and obstruction checks as path additions do
    #[arg(long)]
    path_scenery: bool,

    /// Ignore land ownership
    #[arg(long)]
    sandbox: bool,

    /// Skip water, ground and obstruction checks
    #[arg(long)]
    no_clearance: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Summary,
    /// JSON object on stdout
    Json,
}

/// A loaded park ready to run commands against.
pub struct Session {
    pub state: ParkState,
    pub content: ContentSnapshot,
    pub ctx: ValidationContext,
}

impl WallArgs {
    pub fn open(&self) -> Result<Session> {
        let factory = ContentFactory::new(&self.data_dir);
        let settings = factory.load_settings()?;
        let content = factory.load_catalog()?;

        let state = match (&self.state, &self.scenario) {
            (Some(path), _) => load_state(path)?,
            (None, Some(name)) => factory.load_scenario(name, &settings.park)?,
            (None, None) => anyhow::bail!("either --scenario or --state is required"),
        };

        let mut ctx = settings.validation;
        ctx.sandbox_mode |= self.sandbox;
        ctx.disable_clearance_checks |= self.no_clearance;

        tracing::info!(
            data_dir = %self.data_dir.display(),
            walls = content.walls.len(),
            rides = content.rides.len(),
            elements = state.tiles().element_count(),
            "park loaded"
        );
        Ok(Session {
            state,
            content,
            ctx,
        })
    }

    pub fn action(&self) -> WallPlaceAction {
        let mut flags = ActionFlags::empty();
        if self.ghost {
            flags |= ActionFlags::GHOST;
        }
        if self.path_scenery {
            flags |= ActionFlags::PATH_SCENERY;
        }
        WallPlaceAction::new(
            ObjectEntryIndex(self.wall),
            CoordsXYZ::new(self.x, self.y, self.z),
            self.edge,
        )
        .with_colours(
            Colour(self.primary),
            Colour(self.secondary),
            Colour(self.tertiary),
        )
        .with_flags(flags)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

pub fn load_state(path: &Path) -> Result<ParkState> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read state file: {}", path.display()))?;
    bincode::deserialize(&bytes)
        .with_context(|| format!("Failed to deserialize state file: {}", path.display()))
}

pub fn save_state(path: &Path, state: &ParkState) -> Result<()> {
    let bytes = bincode::serialize(state).context("Failed to serialize park state")?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write state file: {}", path.display()))
}

/// Prints the outcome of a command; rejected commands become an error.
pub fn report(
    format: OutputFormat,
    verb: &str,
    action: &WallPlaceAction,
    result: &Result<ActionOutcome<ActionResult>, ExecuteError>,
) -> Result<()> {
    match format {
        OutputFormat::Summary => print_summary(verb, action, result),
        OutputFormat::Json => print_json(result)?,
    }
    match result {
        Ok(_) => Ok(()),
        Err(error) => anyhow::bail!("{} rejected: {}", verb, error),
    }
}

fn print_summary(
    verb: &str,
    action: &WallPlaceAction,
    result: &Result<ActionOutcome<ActionResult>, ExecuteError>,
) {
    println!(
        "{} wall {} at {} edge {}",
        verb, action.wall_type, action.location, action.edge
    );
    match result {
        Ok(outcome) => {
            let ActionResult::WallPlace(placed) = &outcome.data;
            println!("  cost:     {}", outcome.cost);
            println!("  position: {}", outcome.position);
            println!("  height:   {}", placed.base_height);
            if let Some(banner) = placed.banner {
                println!("  banner:   {}", banner);
            }
        }
        Err(error) => {
            match error.detail() {
                Some(detail) => println!("  {}: {}", error.title(), detail),
                None => println!("  {}", error.title()),
            }
            println!(
                "  status:   {} ({} phase, {})",
                error.status(),
                error.phase().as_str(),
                error.error_code()
            );
        }
    }
}

fn print_json(result: &Result<ActionOutcome<ActionResult>, ExecuteError>) -> Result<()> {
    let value = match result {
        Ok(outcome) => serde_json::json!({
            "ok": true,
            "cost": outcome.cost,
            "position": outcome.position,
            "result": outcome.data,
        }),
        Err(error) => serde_json::json!({
            "ok": false,
            "phase": error.phase().as_str(),
            "status": error.status(),
            "code": error.error_code(),
            "title": error.title(),
            "detail": error.detail(),
        }),
    };
    let json = serde_json::to_string_pretty(&value).context("Failed to serialize outcome")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use park_core::{Action, ActionEngine};
    use std::fs;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: WallArgs,
    }

    fn data_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("settings.toml"), "[park]\nmap_size = 10\n").unwrap();
        fs::write(
            dir.path().join("catalog.ron"),
            r#"(walls: [(id: 5, name: "Wooden fence", price: 30, height: 4)])"#,
        )
        .unwrap();
        fs::create_dir(dir.path().join("scenarios")).unwrap();
        fs::write(dir.path().join("scenarios").join("meadow.ron"), "()").unwrap();
        dir
    }

    fn parse(dir: &TempDir, extra: &[&str]) -> WallArgs {
        let data_dir = dir.path().to_str().unwrap();
        let mut argv = vec![
            "park", "--data-dir", data_dir, "--wall", "5", "-x", "64", "-y", "64", "--edge", "0",
        ];
        argv.extend_from_slice(extra);
        Harness::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn test_scenario_or_state_is_required() {
        let dir = data_dir();
        let data_dir = dir.path().to_str().unwrap();
        let result = Harness::try_parse_from([
            "park", "--data-dir", data_dir, "--wall", "5", "-x", "64", "-y", "64", "--edge", "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_map_onto_the_action() {
        let dir = data_dir();
        let args = parse(&dir, &["--scenario", "meadow", "--ghost", "--primary", "4"]);
        let action = args.action();
        assert_eq!(action.location, CoordsXYZ::new(64, 64, 0));
        assert!(action.flags.contains(ActionFlags::GHOST));
        assert_eq!(action.colours[0], Colour(4));
    }

    #[test]
    fn test_place_then_save_and_reload() {
        let dir = data_dir();
        let args = parse(&dir, &["--scenario", "meadow", "--sandbox"]);
        let mut session = args.open().unwrap();
        assert!(session.ctx.sandbox_mode);

        let action: Action = args.action().into();
        let mut engine = ActionEngine::with_context(&mut session.state, session.ctx);
        engine.execute(session.content.env(), &action).unwrap();

        let saved = dir.path().join("park.bin");
        save_state(&saved, &session.state).unwrap();
        let reloaded = load_state(&saved).unwrap();
        assert_eq!(reloaded.tiles(), session.state.tiles());

        let state_arg = saved.to_str().unwrap();
        let args = parse(&dir, &["--state", state_arg]);
        let mut session = args.open().unwrap();
        let engine = ActionEngine::with_context(&mut session.state, session.ctx);
        let error = engine.query(session.content.env(), &action).unwrap_err();
        assert_eq!(error.detail().as_deref(), Some("Wooden fence in the way"));
    }
}
