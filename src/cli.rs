//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **browse**: interactive recipe browser (default)
//! - **search**: one-shot search, printed as text or JSON
//! - **facets**: list methods, categories and dishes with their ids
//! - **open**: open a video's player URL in the browser
//! - **config**: show or edit the configuration
//! - **completions**: print a shell completion script
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use khana::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["khana", "search", "--category", "dessert"]);
//! assert!(matches!(cli.get_command(), Commands::Search { .. }));
//!
//! let cli = Cli::parse_from(["khana"]);
//! assert!(matches!(cli.get_command(), Commands::Browse { .. }));
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for the search command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Numbered list for humans
    #[default]
    Text,
    /// JSON document with the query and items
    Json,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "khana")]
#[command(about = "Browse Indian recipe videos by cooking method, cuisine and dish", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug output (to the log file while browsing)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Cooking method to start with
        #[arg(short = 'm', long = "method", value_name = "ID")]
        method: Option<String>,

        /// Category to start with
        #[arg(short = 'c', long = "category", value_name = "ID")]
        category: Option<String>,
    },

    /// Search once and print the results
    #[command(visible_alias = "s")]
    Search {
        /// Cooking method id (see `khana facets`)
        #[arg(short = 'm', long = "method", value_name = "ID")]
        method: Option<String>,

        /// Category id (see `khana facets`)
        #[arg(short = 'c', long = "category", value_name = "ID")]
        category: Option<String>,

        /// Dish within the category, by name or search term
        #[arg(short = 's', long = "sub", value_name = "NAME")]
        sub: Option<String>,

        /// Free-text query; replaces the facet-derived query
        #[arg(value_name = "QUERY", num_args = 0..)]
        query: Vec<String>,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List cooking methods, categories and dishes
    #[command(visible_alias = "ls")]
    Facets,

    /// Open a video's player URL in the browser
    Open {
        /// Video id, as printed by `khana search`
        #[arg(value_name = "VIDEO_ID")]
        video_id: String,

        /// Do not start playback automatically
        #[arg(long = "no-autoplay")]
        no_autoplay: bool,

        /// Print the URL instead of opening it
        #[arg(short = 'p', long = "print")]
        print: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration (API key redacted)
    Show,

    /// Print the config file location
    Path,

    /// Run the interactive setup
    Init,

    /// Store an API key in the config file
    #[command(name = "set-key")]
    SetKey {
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Remove the API key from the config file
    #[command(name = "unset-key")]
    UnsetKey,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            method: None,
            category: None,
        })
    }
}
