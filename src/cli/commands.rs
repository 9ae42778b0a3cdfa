use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tomo", about = concat!("[o] tomo v", env!("CARGO_PKG_VERSION"), " - pomodoro todos in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Load entities from a JSON dataset file instead of the sample data
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Read configuration from this file instead of ./tomo.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List todos due today or later, most urgent first
    Today,
    /// Search todos and reminders by regex
    Search(SearchArgs),
    /// Print the full dataset as JSON
    Dump,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Pattern to search for (case-insensitive; falls back to a literal
    /// match if it isn't a valid regex)
    pub pattern: String,
}
