//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Storyboard - turn a film script into illustrated storyboard panels
#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(about = "Turn a film script into illustrated storyboard panels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a storyboard and print each frame as a JSON line
    Generate(GenerateArgs),

    /// List the art style presets
    Styles,
}

/// Arguments for `storyboard generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Read the script from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Script text given inline
    #[arg(long)]
    pub text: Option<String>,

    /// Free-text art style label
    #[arg(long, conflicts_with = "preset")]
    pub style: Option<String>,

    /// Art style preset number, as listed by `storyboard styles`
    #[arg(long)]
    pub preset: Option<usize>,

    /// Configuration file to use instead of the layered defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}
