//! site-gate - Entry Point
//!
//! Password-gated redirect service: checks a per-site password against
//! secrets held in the environment and hands back the site's target URL.

use log::{error, info};
use std::process::ExitCode;
use std::sync::Arc;

use site_gate::Server;
use site_gate::auth::EnvSecrets;
use site_gate::config::ServerConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG overrides the default filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Launching site-gate...");

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let server = match Server::new(config, Arc::new(EnvSecrets)).await {
        Ok(server) => server,
        Err(e) => {
            error!("Server startup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server.start().await {
        error!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
