//! Router assembly and server lifecycle.

use crate::config::RelayConfig;
use crate::handlers;
use crate::services::GeminiClient;
use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use relay_core::error::AppError;
use relay_core::middleware::{request_id_middleware, REQUEST_ID_HEADER};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: RelayConfig,
    pub gemini: Arc<GeminiClient>,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Result<Self, AppError> {
        let gemini = GeminiClient::new(config.gemini.clone())?;

        tracing::info!(
            model = %config.gemini.model,
            "Initialized Gemini client"
        );

        Ok(Self {
            config,
            gemini: Arc::new(gemini),
        })
    }
}

pub fn build_router(state: AppState) -> Result<Router, AppError> {
    let allowed_origin = state
        .config
        .cors
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Invalid CORS origin '{}': {}",
                state.config.cors.allowed_origin,
                e
            ))
        })?;

    let app = Router::new()
        .route("/", post(handlers::generate_blog))
        .route("/health", get(handlers::health_check))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                // Only a matching Origin is echoed back
                .allow_origin(AllowOrigin::list([allowed_origin]))
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(state);

    Ok(app)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let state = AppState::new(config)?;
        let router = build_router(state)?;

        // Port 0 binds a random port for testing
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
