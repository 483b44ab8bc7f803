use clap::Parser;
use std::path::PathBuf;

/// A two-column project board in the terminal
#[derive(Debug, Parser)]
#[command(name = "slate", version, about)]
pub struct Cli {
    /// Path to the board config file (defaults to ./slate.toml when present)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Seed the board with a few sample projects
    #[arg(long)]
    pub demo: bool,
}
