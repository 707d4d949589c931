//! CLI command definitions

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "encyclo")]
#[command(about = "Personal wiki engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to take a new entry body from; stdin or the editor when omitted
#[derive(Args, Debug)]
#[group(multiple = false)]
pub struct BodyArgs {
    /// Entry body as markdown text
    #[arg(short, long)]
    pub body: Option<String>,

    /// Read the entry body from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new wiki
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List all entry titles
    List,

    /// Show the entry with exactly this title
    Show {
        title: String,

        /// Render markdown to HTML
        #[arg(long)]
        html: bool,
    },

    /// Find an entry by exact title or titles containing the query
    Search {
        query: String,

        /// Render markdown to HTML
        #[arg(long)]
        html: bool,
    },

    /// Create a new entry (fails if the title exists)
    New {
        title: String,

        #[command(flatten)]
        source: BodyArgs,
    },

    /// Replace the body of an entry
    Edit {
        title: String,

        #[command(flatten)]
        source: BodyArgs,
    },

    /// Show a random entry
    Random {
        /// Render markdown to HTML
        #[arg(long)]
        html: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
