//! Storyboard CLI binary.
//!
//! - `generate` turns a script into frames printed as JSON lines
//! - `styles` lists the art style presets

use clap::Parser;
use std::process::ExitCode;
use storyboard::observability::{ObservabilityConfig, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::{Cli, Commands, generate_storyboard, list_styles};

    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut observability = ObservabilityConfig::new("storyboard").with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    if let Err(e) = init_observability_with_config(observability) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Generate(args) => generate_storyboard(args).await,
        Commands::Styles => {
            list_styles();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Storyboard generation failed");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
