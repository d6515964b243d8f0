//! Builds Lucene and CloudSearch query strings from structured search
//! parameters, plus a small HTTP service that previews the built strings.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod search;

pub use crate::config::{AppConfig, SearchConfig};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use models::{
    DateInput, DateParams, DateValue, FieldValue, Filter, Options, PhraseOptions, QueryTerm,
    Scalar, SearchCommand,
};
pub use search::{
    fq, process_dates, process_filters, process_phrase, process_terms, query, Bond,
    LuceneBuilder, QueryParams,
};

use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub builder: LuceneBuilder,
    pub search: SearchConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            app_name: "Lucene Query Builder".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            builder: LuceneBuilder::new(config.search.options()),
            search: config.search.clone(),
        }
    }

    pub fn with_builder(mut self, builder: LuceneBuilder) -> Self {
        self.builder = builder;
        self
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        .merge(create_routes())
        .layer(middleware::cors::cors_layer_from_config(&config.cors));

    middleware::logging::with_request_tracing(router).with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
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
            Ok(mut stream) => {
                stream.recv().await;
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
