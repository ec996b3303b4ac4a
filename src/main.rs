//! askllm HTTP server
//!
//! Starts an Axum web server exposing `POST /ask`.

use askllm::{
    cli::{Cli, Command, generate_config_template},
    config::Config,
    handlers::{self, AppState},
    telemetry,
};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::Config { output }) = cli.command {
        match output {
            Some(path) => {
                std::fs::write(&path, generate_config_template())?;
                println!("Wrote configuration template to {}", path);
            }
            None => print!("{}", generate_config_template()),
        }
        return Ok(());
    }

    let config = Config::from_file(&cli.config)?;

    telemetry::init(&config.observability.log_level);

    tracing::info!(
        config = %cli.config,
        model = config.llm.model(),
        base_url = config.llm.base_url(),
        "Starting askllm server on {}:{}",
        config.server.host,
        config.server.port
    );

    // The completion client is built once here and shared by every request
    let state = AppState::from_config(&config)?;
    let app = handlers::app(state);

    // Validated by Config::from_file, so this only fails on a hand-built config
    let addr = config.server.socket_addr()?;

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
