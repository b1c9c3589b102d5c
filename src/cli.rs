//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// Shortfront - front-end for a remote URL shortening service
#[derive(Parser, Debug)]
#[command(name = "shortfront")]
#[command(version)]
#[command(about = "Creation page, redirect handler and terminal UI for a URL shortening service", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the browser front server (default)
    Serve,

    /// Start the terminal creation page
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten one URL and print the short URL
    Shorten {
        /// Long URL (http or https)
        url: String,
    },

    /// Resolve a redirect code and print where it leads
    Resolve {
        /// Redirect code
        code: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
