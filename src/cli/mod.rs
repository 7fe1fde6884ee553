//! Command-line interface for movieshelf.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// movieshelf - movie and rating catalogue
#[derive(Parser)]
#[command(name = "movieshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config.toml (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    #[command(alias = "daemon", alias = "web")]
    Serve,

    /// Create default config file
    Init,

    /// List stored movies
    #[command(alias = "ls", alias = "l")]
    List,

    /// Show one movie with its ratings
    #[command(alias = "i")]
    Show {
        /// Movie ID
        id: i32,
    },

    /// Validate a movie JSON file without saving it
    Check {
        /// File containing a movie object
        file: PathBuf,
        /// Evaluate as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<chrono::NaiveDate>,
    },
}

pub use commands::*;
