use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jot",
    about = concat!("jot v", env!("CARGO_PKG_VERSION"), " - a to-do list for the terminal"),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Task file (JSON or one task per line) to load on startup
    pub file: Option<PathBuf>,

    /// Read config from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the tasks a file would load, without starting the TUI
    Load(LoadArgs),
}

#[derive(Args)]
pub struct LoadArgs {
    /// File to read
    pub file: PathBuf,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
