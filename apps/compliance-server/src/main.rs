//! SEC Marketing Rule compliance server
//!
//! Accepts marketing documents (PDF, Word, plain text), screens them with the
//! compliance engine and keeps the results in memory:
//!
//! - `POST /upload-document` upload and analyze
//! - `GET /documents`, `GET /documents/{id}` recorded analyses
//! - `GET /api/rules` the active rule catalog

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use compliance_engine::ComplianceEngine;
use document_text::DocumentTextExtractor;
use shared_types::TextExtractor;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod store;
#[cfg(test)]
mod tests;

use api::{
    handle_get_document, handle_health, handle_list_documents, handle_list_rules, handle_root,
    handle_upload_document,
};
use store::DocumentStore;

const MB: usize = 1024 * 1024;

/// Room for multipart boundaries and headers on top of the file itself
const MULTIPART_OVERHEAD: usize = MB;

/// Command-line arguments for the compliance server
#[derive(Parser, Debug)]
#[command(name = "compliance-server")]
#[command(about = "Screen marketing materials against the SEC marketing rule")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Extraction and analysis timeout in milliseconds
    #[arg(long, default_value = "120000")]
    analysis_timeout_ms: u64,

    /// Largest accepted upload in megabytes
    #[arg(long, default_value = "600")]
    max_upload_mb: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ComplianceEngine>,
    pub extractor: Arc<dyn TextExtractor>,
    pub store: Arc<DocumentStore>,
    pub analysis_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(engine: ComplianceEngine, analysis_timeout_ms: u64, max_upload_mb: usize) -> Self {
        Self {
            engine: Arc::new(engine),
            extractor: Arc::new(DocumentTextExtractor),
            store: Arc::new(DocumentStore::new()),
            analysis_timeout: Duration::from_millis(analysis_timeout_ms),
            max_upload_bytes: max_upload_mb.saturating_mul(MB),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/upload-document", post(handle_upload_document))
        .route("/documents", get(handle_list_documents))
        .route("/documents/:id", get(handle_get_document))
        .route("/api/rules", get(handle_list_rules))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting compliance server on {}:{}", args.host, args.port);

    let engine = ComplianceEngine::new()?;
    let state = AppState::new(engine, args.analysis_timeout_ms, args.max_upload_mb);
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Analysis timeout: {}ms", args.analysis_timeout_ms);
    info!("Upload limit: {}MB", args.max_upload_mb);

    axum::serve(listener, app).await?;

    Ok(())
}
