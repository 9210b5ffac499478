//! Command-line interface implementation
//!
//! With no subcommand the lab window opens. The other subcommands inspect the
//! catalog or preview an animal in the terminal without opening a window.

mod catalog;
mod preview;

use clap::{Parser, Subcommand};
use image::Rgba;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::color::parse_color;
use crate::config::{load_config, ConfigError, LabConfig};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Animal Gene Lab - build a cartoon animal from shape traits
#[derive(Parser)]
#[command(name = "genelab")]
#[command(about = "Animal Gene Lab - add, remove and recolor shape traits on a canvas")]
#[command(version)]
pub struct Cli {
    /// Config file (default: genelab.toml found by walking up from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the lab window (the default)
    Run,

    /// List the traits that can be added
    Catalog {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the composited animal to the terminal
    ///
    /// Actions apply in order: every --add, then every --recolor, then every --remove.
    Preview {
        /// Add a catalog trait (repeatable)
        #[arg(long = "add", value_name = "NAME")]
        add: Vec<String>,

        /// Recolor a trait, e.g. Wings=#ff0000 (repeatable)
        #[arg(long = "recolor", value_name = "NAME=COLOR", value_parser = parse_recolor)]
        recolor: Vec<Recolor>,

        /// Remove a trait by name (repeatable)
        #[arg(long = "remove", value_name = "NAME")]
        remove: Vec<String>,

        /// Sample every Nth pixel (1-64, default: 8)
        #[arg(long, default_value = "8", value_parser = clap::value_parser!(u32).range(1..=64))]
        step: u32,
    },
}

/// A `NAME=COLOR` argument
#[derive(Debug, Clone, PartialEq)]
pub struct Recolor {
    pub name: String,
    pub color: Rgba<u8>,
}

fn parse_recolor(s: &str) -> Result<Recolor, String> {
    let (name, color) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=COLOR, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("trait name must not be empty".to_string());
    }
    let color = parse_color(color).map_err(|e| format!("invalid color '{}': {}", color, e))?;
    Ok(Recolor {
        name: name.to_string(),
        color,
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // A logger may already be installed when running under a test harness
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e @ ConfigError::Io { .. }) if cli.config.is_some() => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_window(&config),
        Commands::Catalog { json } => catalog::run_catalog(&config, json),
        Commands::Preview {
            add,
            recolor,
            remove,
            step,
        } => preview::run_preview(&config, &add, &recolor, &remove, step),
    }
}

#[cfg(feature = "gui")]
fn run_window(config: &LabConfig) -> ExitCode {
    match crate::ui::run(config) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(not(feature = "gui"))]
fn run_window(_config: &LabConfig) -> ExitCode {
    eprintln!("Error: genelab was built without the 'gui' feature; try 'genelab preview'");
    ExitCode::from(EXIT_INVALID_ARGS)
}
