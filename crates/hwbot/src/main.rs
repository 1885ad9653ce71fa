//! Main entry point for the homework status bot.

use hwbot::{BotError, BotResult, HomeworkBot};
use hwbot_common::{init_logging, PollError};
use hwbot_config::{ConfigLoader, EnvLookup};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let loader = ConfigLoader::from_env();

    // Held until exit so buffered lines reach the log file
    let _guard = match init_logging(&loader.logging()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&loader).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(BotError::Config(PollError::ConfigMissing { names })) => {
            for name in &names {
                error!("Missing required environment variable: {name}");
            }
            error!("Startup aborted, poll loop not started");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Bot failed to start: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(loader: &ConfigLoader<EnvLookup>) -> BotResult<()> {
    let config = loader.load().map_err(BotError::Config)?;
    info!("Configuration loaded successfully");

    let bot = HomeworkBot::new(config)?;
    bot.start(shutdown_signal()).await;

    info!("Homework status bot has shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e:?}");
        std::future::pending::<()>().await;
    }
}
