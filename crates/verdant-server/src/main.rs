//! Verdant Server - Main entry point

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tracing::info;
use verdant_common::logging::{init_logging, LogConfig};

use verdant_server::{
    config::{Config, StoreBackend},
    features::{self, AppState},
    middleware,
    store::{memory::MemoryCatalog, postgres::PgCatalog, Catalog},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Binary defaults first, then environment variables overlay on top
    let log_config = LogConfig::builder()
        .log_file_prefix("verdant-server".to_string())
        .filter_directives("verdant_server=debug,tower_http=debug,axum=trace,sqlx=info".to_string())
        .build()
        .overlay_env()?;

    init_logging(&log_config)?;

    info!("Starting Verdant Server");

    // Load configuration
    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    // Connect the selected storage backend
    let catalog: Catalog = match config.store_backend {
        StoreBackend::Postgres => {
            let catalog = PgCatalog::connect(&config.database).await?;
            info!("Connected to PostgreSQL backend");
            Arc::new(catalog)
        }
        StoreBackend::Memory => {
            info!("Using in-memory backend (VERDANT_STORE=memory)");
            Arc::new(MemoryCatalog::new())
        }
    };

    let state = AppState::new(catalog);

    // Build the application router
    let app = create_router(state, &config);

    // Create socket address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    // Create TCP listener
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Start server with graceful shutdown. Drain begins the moment a signal
    // arrives; open connections get the full configured timeout to finish.
    let (drained_tx, drained_rx) = tokio::sync::oneshot::channel();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = drained_tx.send(());
    });

    let drain_deadline = async {
        drained_rx.await.ok();
        tokio::time::sleep(Duration::from_secs(config.server.shutdown_timeout_secs)).await;
    };

    tokio::select! {
        result = server => {
            result?;
            info!("Server shut down gracefully");
        }
        _ = drain_deadline => {
            tracing::warn!(
                "Connections still open after {} seconds, exiting",
                config.server.shutdown_timeout_secs
            );
        }
    }

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state.clone())
        .nest("/api", features::router(state))
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Health check handler
async fn health_check(State(state): State<AppState>) -> Result<Response, StatusCode> {
    match state.catalog.ping().await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "store": "connected"
            })),
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Store health check failed: {:?}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
