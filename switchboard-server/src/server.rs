use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::signaling::{SignalingService, ws_handler};
use axum::Router;
use axum::routing::get;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// The HTTP surface: a single route accepting WebSocket upgrades.
pub fn router(path: &str, service: SignalingService) -> Router {
    Router::new()
        .route(path, get(ws_handler))
        .with_state(service)
}

/// A bound but not yet running relay server.
pub struct Server {
    listener: TcpListener,
    router: Router,
    service: SignalingService,
    path: String,
}

impl Server {
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        if !config.path.starts_with('/') || config.path.contains(['{', '}', ':', '*']) {
            return Err(ServerError::InvalidPath(config.path));
        }

        let listener = TcpListener::bind(config.bind)
            .await
            .map_err(|source| ServerError::Bind {
                addr: config.bind,
                source,
            })?;

        let service = SignalingService::new();
        let router = router(&config.path, service.clone());

        Ok(Self {
            listener,
            router,
            service,
            path: config.path,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn service(&self) -> &SignalingService {
        &self.service
    }

    pub async fn run(self) -> Result<(), ServerError> {
        self.run_until(std::future::pending()).await
    }

    /// Serves connections until `shutdown` resolves.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        info!("Signaling server listening on ws://{}{}", addr, self.path);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Signaling server stopped");
        Ok(())
    }
}
