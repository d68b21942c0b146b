use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shortn", bin_name = "shortn", version)]
#[command(about = "Shorten URLs and keep a history of them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.json and history.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten a URL with the configured service
    #[command(alias = "s")]
    Shorten {
        /// The URL to shorten (scheme optional)
        url: String,

        /// Copy the short URL to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// List previously shortened URLs, newest first
    #[command(alias = "ls")]
    History,

    /// Remove entries from history
    #[command(alias = "rm")]
    Remove {
        /// Positions (as shown by `history`) or ids
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Remove all entries from history
    Clear,

    /// Copy a history entry's short URL to the clipboard
    Copy {
        /// Position or id
        selector: String,
    },

    /// Open a history entry's short URL in the browser
    Open {
        /// Position or id
        selector: String,
    },

    /// List the available shortening services
    Services,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. main-service, bitly.api-key)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
