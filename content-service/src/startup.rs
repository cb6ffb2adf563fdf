//! Application startup and lifecycle management.
//!
//! Wires the data store and provider into [`AppState`], builds the HTTP
//! router and runs it until a shutdown signal arrives.

use crate::config::ContentConfig;
use crate::handlers;
use crate::services::providers::openai::OpenAiTextProvider;
use crate::services::providers::TextProvider;
use crate::services::{ContentStore, MongoContentStore};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Build the HTTP router for the given state.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/onboard", post(handlers::onboard_organization))
        .route("/generate", post(handlers::generate_content))
        .route("/rate", post(handlers::rate_content))
        .route("/analytics/:org_name", get(handlers::get_analytics));

    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .nest("/api", api)
        .fallback(handlers::not_found)
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with MongoDB and OpenAI from configuration.
    ///
    /// Only an unparseable `MONGODB_URI` stops startup. An unreachable or
    /// unresolvable database is logged and requests fail at the store until it
    /// becomes available.
    pub async fn build(config: ContentConfig) -> Result<Self, AppError> {
        let db = MongoContentStore::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to configure MongoDB store: {}", e);
                e
            })?;

        match db.health_check().await {
            Ok(()) => {
                tracing::info!(database = %config.mongodb.database, "Connected to MongoDB");
                if let Err(e) = db.initialize_indexes().await {
                    tracing::warn!("Continuing without database indexes: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("MongoDB is unreachable at startup, continuing: {}", e);
            }
        }

        let text_provider = OpenAiTextProvider::new(config.openai.clone()).map_err(|e| {
            tracing::error!("Failed to initialize OpenAI provider: {}", e);
            AppError::ConfigError(anyhow::anyhow!(e))
        })?;

        tracing::info!(
            model = %config.openai.model,
            "Initialized OpenAI text provider"
        );

        let state = AppState {
            store: Arc::new(db),
            text_provider: Arc::new(text_provider),
        };

        Self::build_with_state(config.common.port, state).await
    }

    /// Bind the listener for an already assembled state (port 0 = random port).
    pub async fn build_with_state(port: u16, state: AppState) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM, then drain in-flight requests.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = router(self.state);

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
