//! Beadloom - Terminal bead pattern designer
//!
//! Launches the interactive board editor by default. Subcommands provide
//! headless access to pattern tooling for scripts and CI.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beadloom::cli::{
    ConvertArgs, ExitCode, InfoArgs, NewArgs, PaletteArgs, PresetArgs, RenderArgs, TemplatesArgs,
    TransformArgs, ValidateArgs,
};
use beadloom::config::Config;
use beadloom::constants::APP_BINARY_NAME;
use beadloom::models::{BoardTemplate, Grid};
use beadloom::services::session::{Intent, Session};
use beadloom::services::PatternService;
use beadloom::store::FileStore;
use beadloom::tui;

/// Beadloom - Terminal bead pattern designer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pattern file to open in the editor
    #[arg(value_name = "PATTERN")]
    pattern: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a blank pattern file
    New(NewArgs),
    /// Generate a preset pattern
    Preset(PresetArgs),
    /// List the available board templates
    Templates(TemplatesArgs),
    /// Show pattern details
    Info(InfoArgs),
    /// Validate a pattern file
    Validate(ValidateArgs),
    /// Convert an image into a bead pattern
    Convert(ConvertArgs),
    /// Render a pattern to a PNG preview
    Render(RenderArgs),
    /// Transform the pattern grid
    Transform(TransformArgs),
    /// Manage palette colors and groups
    Palette(PaletteArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so the TUI screen stays clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(command) = cli.command {
        run_command(&command);
    }

    run_editor(cli.pattern)
}

/// Executes a CLI subcommand and exits with its status code.
fn run_command(command: &Commands) -> ! {
    let result = match command {
        Commands::New(args) => args.execute(),
        Commands::Preset(args) => args.execute(),
        Commands::Templates(args) => args.execute(),
        Commands::Info(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::Convert(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Transform(args) => args.execute(),
        Commands::Palette(args) => args.execute(),
    };

    match result {
        Ok(()) => process::exit(ExitCode::Success.code()),
        Err(error) => {
            eprintln!("Error: {error}");
            process::exit(error.exit_code().code());
        }
    }
}

/// Launches the interactive editor, optionally opening a pattern file.
fn run_editor(pattern: Option<PathBuf>) -> Result<()> {
    let config = Config::load().unwrap_or_else(|error| {
        warn!("Failed to load config, using defaults: {error}");
        Config::default()
    });

    let store = FileStore::open(Config::store_file_path()?)?;
    let mut template = config.default_template()?;

    // An existing pattern file decides the board template by its grid size
    let mut initial_grid = None;
    if let Some(path) = &pattern {
        if path.exists() {
            let (file_template, grid) = open_pattern(path).unwrap_or_else(|error| {
                eprintln!("Error: {error:#}");
                eprintln!();
                eprintln!("Check the file with:");
                eprintln!("  {} validate {}", APP_BINARY_NAME, path.display());
                process::exit(ExitCode::ValidationFailure.code());
            });
            template = file_template;
            initial_grid = Some(grid);
        }
    }

    let mut session = Session::new(template, Box::new(store))?;
    session.apply(Intent::ScaleChanged(config.ui.board_scale));
    if let Some(grid) = initial_grid {
        session.apply(Intent::GridReplaced(grid));
    }

    let mut state = tui::AppState::new(session, config, pattern);
    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    // remember the zoom level for the next run
    if (state.config.ui.board_scale - state.session.scale()).abs() > f32::EPSILON {
        state.config.ui.board_scale = state.session.scale();
        if let Err(error) = state.config.save() {
            warn!("Failed to persist UI preferences: {error}");
        }
    }

    result
}

/// Loads a pattern file and resolves the board template from its grid size.
fn open_pattern(path: &std::path::Path) -> Result<(BoardTemplate, Grid)> {
    let file = PatternService::load(path)?;
    let template = PatternService::resolve_template(&file, None)?;
    let grid = file.to_grid(template.size())?;
    Ok((template, grid))
}
