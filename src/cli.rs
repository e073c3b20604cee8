use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::scoring::MATCH_THRESHOLD;

/// Dietary index scorer: rate a food against AHEI-2010, aMED, MIND, DASH, PDI and DII.
#[derive(Parser, Debug)]
#[command(name = "diet_index_scorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "data.json")]
    pub file: PathBuf,

    /// Optional JSON file replacing the built-in dietary indices.
    #[arg(long)]
    pub indices: Option<PathBuf>,

    /// Minimum match confidence (0-100) for accepting a food name.
    #[arg(long, default_value_t = MATCH_THRESHOLD)]
    pub threshold: f64,

    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Interactively pick a food and its optional ingredients, then score it.
    #[default]
    Assess,

    /// Score a food non-interactively.
    Score {
        /// Food name to search for.
        query: String,

        /// Optional ingredient to include (repeatable).
        #[arg(short, long = "with")]
        with: Vec<String>,

        /// Print the detailed explanation for each index.
        #[arg(long)]
        explain: bool,

        /// Write the results table to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Report the closest catalog food for a name.
    Search {
        /// Food name to search for.
        query: String,
    },

    /// List the dietary indices in use.
    Indices,
}
