//! # BoostBlog
//!
//! Terminal front end: lists, shows, deletes and creates posts.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod prompt;
mod state;
mod telemetry;

use cli::Cli;
use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().with_overrides(cli.storage, cli.data_dir.clone());
    let state = AppState::new(&config);

    match commands::run(cli.cmd, &state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
