//! nestkv CLI
//!
//! Command-line front end for the nestkv engine.
//!
//! # Commands
//!
//! - `shell` - Interactive command shell over an in-memory database
//! - `exec` - Run commands from a script file
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use nestkv_core::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// nestkv command-line tools.
#[derive(Parser)]
#[command(name = "nestkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum number of open transaction levels
    #[arg(global = true, long)]
    max_transactions: Option<usize>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive command shell
    Shell,

    /// Run commands from a script file
    Exec {
        /// Path to the script
        #[arg(short, long)]
        script: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = Config::default();
    if let Some(limit) = cli.max_transactions {
        config = config.with_max_open_transactions(limit);
    }

    match cli.command {
        Commands::Shell => commands::shell::run(config)?,
        Commands::Exec { script } => commands::exec::run(&script, config)?,
        Commands::Version => {
            println!("nestkv CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("nestkv Core v{}", nestkv_core::VERSION);
        }
    }

    Ok(())
}
