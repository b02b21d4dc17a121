//! fresco-web - Recipe browsing service
//!
//! Serves the Fresco recipe catalog and detail pages from a static JSON
//! data document. Read-only: the collection is loaded once and cached for
//! the process lifetime.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use fresco_common::config::resolve_data_file;
use fresco_web::repository::RecipeRepository;
use fresco_web::{build_router, AppState};

/// Command-line arguments for fresco-web
#[derive(Parser, Debug)]
#[command(name = "fresco-web")]
#[command(about = "Fresco recipe browsing service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5780", env = "FRESCO_PORT")]
    port: u16,

    /// Path to the recipe data document (falls back to FRESCO_DATA_FILE,
    /// then ./data.json)
    #[arg(short, long)]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Fresco web service (fresco-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let data_file = resolve_data_file(args.data_file.as_deref());
    info!("Data document: {}", data_file.display());

    // The document is read lazily on the first request; a missing file at
    // startup is not fatal (the catalog degrades to "no recipes found")
    let state = AppState::new(RecipeRepository::new(data_file));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("fresco-web listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
