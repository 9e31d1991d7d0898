use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "kod-gozcusu")]
#[clap(about = "LLM-backed code review service", long_about = None)]
pub struct Cli {
    /// Path to a config.toml; defaults to ~/kod-gozcusu/config.toml when present
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
