use clap::{Parser, Subcommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "marks")]
#[command(about = "Command-line bookmark manager", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on global bookmarks
    #[arg(short, long, global = true)]
    pub global: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a bookmark
    #[command(alias = "a")]
    Add {
        /// The URL to bookmark
        url: String,
    },

    /// List bookmarks, 20 per page
    #[command(alias = "ls")]
    List {
        /// Page to show (1-based; anything else means page 1)
        #[arg(short, long)]
        page: Option<String>,
    },

    /// Edit a bookmark in place
    #[command(alias = "e")]
    Edit {
        /// Index of the bookmark as shown by list
        index: usize,

        /// The replacement URL
        url: String,
    },

    /// Remove a bookmark
    #[command(alias = "rm")]
    Remove {
        /// Index of the bookmark as shown by list
        index: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Copy a bookmark's URL to the clipboard
    #[command(alias = "cp")]
    Copy {
        /// Index of the bookmark as shown by list
        index: usize,
    },

    /// Open a bookmark in the browser
    #[command(alias = "o")]
    Open {
        /// Index of the bookmark as shown by list
        index: usize,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., browser)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store (optional utility)
    Init,
}
