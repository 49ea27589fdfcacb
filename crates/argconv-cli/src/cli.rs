//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// argconv - Convert command-line text into typed values
#[derive(Parser, Debug)]
#[command(name = "argconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Converter configuration file (TOML)
    #[arg(short, long, global = true, env = "ARGCONV_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Convert a value to a registered type
    ///
    /// Examples:
    ///   argconv convert int 42
    ///   argconv convert boolean TRUE
    ///   argconv convert IpAddr 10.0.0.1 --json
    ///   argconv convert Duration 250ms --name --timeout
    Convert {
        /// Target type name (use 'argconv types' to see options)
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Raw text to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Option name reported in error messages
        #[arg(short, long, default_value = "value", allow_hyphen_values = true)]
        name: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List registered type names
    Types,

    /// Show the strategy order used for conversion
    Strategies,
}
