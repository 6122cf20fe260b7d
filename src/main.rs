//! tv-remote CLI
//!
//! Drive a television from an interactive terminal remote or from a
//! scripted list of button presses.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tv_remote::assets::{AssetLibrary, ScreenAsset};
use tv_remote::report::format_state;
use tv_remote::television::Television;
use tv_remote::tui;
use tv_remote::types::{Button, OutputFormat, RemoteConfig, TelevisionState};

#[derive(Parser)]
#[command(name = "tv-remote")]
#[command(about = "Television remote control")]
#[command(version)]
struct Cli {
    /// Write logs to this file (the interactive remote is otherwise silent)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive remote (default)
    Tui {
        /// Directory with channel_<n>.txt / black_screen.txt screen art
        #[arg(long)]
        assets: Option<PathBuf>,
    },

    /// Press buttons in order on a fresh television and print the result
    Press {
        /// Buttons: power, mute, ch+, ch-, vol+, vol-, or a channel number
        #[arg(required = true)]
        buttons: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Also print the art the screen would show
        #[arg(long)]
        show_screen: bool,

        /// Directory with screen art (used with --show-screen)
        #[arg(long)]
        assets: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let interactive = !matches!(cli.command, Some(Commands::Press { .. }));
    if let Err(e) = init_logging(cli.log_file.as_ref(), cli.verbose, interactive) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        None => cmd_tui(None),
        Some(Commands::Tui { assets }) => cmd_tui(assets),
        Some(Commands::Press {
            buttons,
            format,
            show_screen,
            assets,
        }) => cmd_press(&buttons, format.into(), show_screen, assets),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Install the tracing subscriber.
///
/// `RUST_LOG` overrides the level. The interactive remote owns the
/// terminal, so without `--log-file` it installs no subscriber at all.
fn init_logging(log_file: Option<&PathBuf>, verbose: bool, interactive: bool) -> Result<(), String> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("cannot open log file {}: {}", path.display(), e))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(assets: Option<PathBuf>) -> Result<(), String> {
    let config = RemoteConfig::resolve(assets);
    tui::run::run(config).map_err(|e| e.to_string())
}

fn cmd_press(
    tokens: &[String],
    format: OutputFormat,
    show_screen: bool,
    assets: Option<PathBuf>,
) -> Result<(), String> {
    let buttons = parse_buttons(tokens)?;
    let state = run_presses(&buttons);
    print!("{}", format_state(&state, format));

    if show_screen && format == OutputFormat::Human {
        let config = RemoteConfig::resolve(assets);
        let library = AssetLibrary::from_dir(config.asset_dir.as_deref());
        println!();
        println!("{}", library.art(ScreenAsset::for_state(&state)));
    }

    Ok(())
}

/// Press `buttons` in order on a fresh television.
fn run_presses(buttons: &[Button]) -> TelevisionState {
    let mut tv = Television::new();
    for button in buttons {
        tv.press(*button);
        debug!(%button, state = %tv, "pressed");
    }
    info!(presses = buttons.len(), state = %tv, "sequence applied");
    tv.snapshot()
}

/// Parse every token, failing on the first unknown one.
fn parse_buttons(tokens: &[String]) -> Result<Vec<Button>, String> {
    tokens
        .iter()
        .map(|t| t.parse::<Button>().map_err(|e| e.to_string()))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
