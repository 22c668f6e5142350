//! # Starlife CLI Module
//!
//! This module implements the CLI interface for Starlife.
//!
//! ## Available Commands
//!
//! - `simulate` - Compute and print a star's timeline
//! - `inspect` - Derived quantities, energy and elements for one stage
//! - `compare` - Reference stars resembling a star at one stage
//! - `catalog` - List the reference stars
//! - `play` - Step through a star's stages interactively
//! - `server` - Start the HTTP server

mod commands;

use clap::{Args, Parser, Subcommand};
use starlife_core::StarlifeError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Starlife - Stellar Evolution Simulator
///
/// Follows a star from the main sequence to its remnant using closed-form
/// scaling laws, and compares it with real stars.
#[derive(Parser, Debug)]
#[command(name = "starlife")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Reference catalog TOML file (overrides STARLIFE_CATALOG)
    #[arg(short = 'C', long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Mass and metallicity of the star to simulate.
#[derive(Args, Debug, Clone, Copy)]
pub struct StarArgs {
    /// Initial mass in solar masses
    #[arg(short, long, default_value = "1.0")]
    pub mass: f64,

    /// Metallicity Z (solar is 0.02)
    #[arg(short = 'z', long, default_value = "0.02")]
    pub metallicity: f64,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a star's evolutionary timeline
    Simulate {
        #[command(flatten)]
        star: StarArgs,
    },

    /// Show derived quantities for one stage
    Inspect {
        #[command(flatten)]
        star: StarArgs,

        /// Stage name, e.g. "Red Giant" (default: main sequence)
        #[arg(short, long)]
        stage: Option<String>,
    },

    /// Find reference stars resembling a star at one stage
    Compare {
        #[command(flatten)]
        star: StarArgs,

        /// Stage name, e.g. "Red Giant" (default: main sequence)
        #[arg(short, long)]
        stage: Option<String>,
    },

    /// List the reference stars
    Catalog,

    /// Step through a star's stages (Enter advances, q quits)
    Play {
        #[command(flatten)]
        star: StarArgs,
    },

    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), StarlifeError> {
    let json_mode = cli.json_mode;
    let verbose = cli.verbose;
    let catalog = cli.catalog.as_deref();

    match cli.command {
        Some(Commands::Simulate { star }) => cmd_simulate(star, json_mode, verbose),
        Some(Commands::Inspect { star, stage }) => {
            cmd_inspect(star, stage.as_deref(), json_mode)
        }
        Some(Commands::Compare { star, stage }) => {
            cmd_compare(catalog, star, stage.as_deref(), json_mode)
        }
        Some(Commands::Catalog) => cmd_catalog(catalog, json_mode, verbose),
        Some(Commands::Play { star }) => cmd_play(star),
        Some(Commands::Server { host, port }) => cmd_server(catalog, &host, port).await,
        None => {
            // No subcommand - simulate the Sun by default
            cmd_simulate(
                StarArgs {
                    mass: 1.0,
                    metallicity: 0.02,
                },
                json_mode,
                verbose,
            )
        }
    }
}
