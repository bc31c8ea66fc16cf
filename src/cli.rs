use clap::{Parser, Subcommand};
use std::path::PathBuf;

use zipper_site::pricing::QualityTier;

#[derive(Parser, Debug)]
#[command(name = "zipper", version, about = "3D ZIPPER landing-site backend")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the site backend (default)
    Start,

    /// Test configuration file validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Fetch the material catalog and print it
    Materials {
        /// Skip the spreadsheet and print the built-in list
        #[arg(long)]
        fallback: bool,
    },

    /// Estimate a print price from the command line
    Estimate {
        /// Model volume in cm³
        #[arg(short, long)]
        volume: f64,

        /// Material name as shown in the catalog
        #[arg(short, long)]
        material: String,

        /// Quality tier: draft, std or hd
        #[arg(short, long, default_value = "std")]
        quality: QualityTier,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
