use axum::Router;
use axum::routing::post;
use log::{error, info};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::auth::{SecretSource, SiteTable, Verifier};
use crate::config::ServerConfig;
use crate::error::StartupError;
use crate::protocol::{AppState, handle_verify};

/// Build the router serving the verification endpoint at `route`.
pub fn router(state: AppState, route: &str) -> Router {
    Router::new()
        .route(route, post(handle_verify))
        .with_state(state)
}

/// Build the verifier and state a config describes.
pub fn build_state(
    config: &ServerConfig,
    secrets: Arc<dyn SecretSource>,
) -> Result<AppState, StartupError> {
    let sites = SiteTable::with_configured(&config.sites)?;
    let verifier = Verifier::new(sites, secrets, config.mode, config.max_input_length);
    Ok(AppState::new(verifier, config.status_policy))
}

pub struct Server {
    listener: TcpListener,
    router: Router,
    config: ServerConfig,
}

impl Server {
    pub async fn new(
        config: ServerConfig,
        secrets: Arc<dyn SecretSource>,
    ) -> Result<Self, StartupError> {
        let state = build_state(&config, secrets)?;
        info!(
            "Loaded {} sites (mode: {:?}, status policy: {:?})",
            state.verifier.sites().len(),
            config.mode,
            config.status_policy
        );

        let socket = config.listen_socket();
        let listener = match TcpListener::bind(&socket).await {
            Ok(listener) => {
                info!("Server bound to {}", socket);
                listener
            }
            Err(e) => {
                error!("Failed to bind to {}: {}", socket, e);
                return Err(StartupError::Bind(socket, e));
            }
        };

        let router = router(state, &config.route);

        Ok(Self {
            listener,
            router,
            config,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until Ctrl-C.
    pub async fn start(self) -> Result<(), StartupError> {
        self.start_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await
    }

    /// Serve until `signal` completes, then drain in-flight requests.
    pub async fn start_with_shutdown<F>(self, signal: F) -> Result<(), StartupError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Starting site-gate on {}{}", self.config.listen_socket(), self.config.route);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
            .map_err(StartupError::Serve)?;

        info!("Server stopped");
        Ok(())
    }
}
