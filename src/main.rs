//! ColorSpeak - colour memory game and palette studio for the terminal
//!
//! Without a subcommand the game starts in the TUI.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use colorspeak::app::{self, PlayOptions};
use colorspeak::branding::{APP_BINARY_NAME, APP_DESCRIPTION};
use colorspeak::cli::{CatalogArgs, CliResult, ConfigArgs, PaletteArgs};
use colorspeak::config::Config;
use colorspeak::logging::{self, LogTarget};
use colorspeak::models::Difficulty;

/// ColorSpeak - colour memory game and palette studio
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Log debug output (to the log file while playing, stderr otherwise)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play the memory game (default)
    Play(PlayArgs),
    /// Generate a UI palette from a description
    Palette(PaletteArgs),
    /// List the colour catalog
    Catalog(CatalogArgs),
    /// Inspect configuration
    Config(ConfigArgs),
}

/// Play the memory game
#[derive(Args, Debug, Default)]
struct PlayArgs {
    /// Starting difficulty
    #[arg(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seed for a reproducible deck order
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => play(&PlayArgs::default(), cli.verbose),
        Some(Command::Play(args)) => play(&args, cli.verbose),
        Some(Command::Palette(args)) => headless(cli.verbose, || args.execute()),
        Some(Command::Catalog(args)) => headless(cli.verbose, || args.execute()),
        Some(Command::Config(args)) => headless(cli.verbose, || args.execute()),
    }
}

fn play(args: &PlayArgs, verbose: bool) -> Result<()> {
    logging::init(verbose, &LogTarget::default_file()?)?;

    let config = Config::load()?;
    app::launch_game(
        config,
        PlayOptions {
            difficulty: args.difficulty,
            seed: args.seed,
        },
    )
}

/// Runs a CLI command, printing failures to stderr with a non-zero exit.
fn headless(verbose: bool, command: impl FnOnce() -> CliResult<()>) -> Result<()> {
    // Logging is best effort for scripted use
    if let Err(e) = logging::init(verbose, &LogTarget::Stderr) {
        eprintln!("Warning: {e:#}");
    }

    if let Err(e) = command() {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
    Ok(())
}
