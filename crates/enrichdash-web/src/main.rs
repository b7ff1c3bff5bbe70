//! Enrichdash Web Server
//!
//! Run with: cargo run -p enrichdash-web

use std::net::SocketAddr;
use std::path::Path;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use enrichdash_common::EvaluationMatrix;

const MATRIX_CONFIG_PATH: &str = "config/evaluation.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Enrichdash Web Server...");

    // Evaluation matrix: external config when present, builtin defaults otherwise
    let matrix = if Path::new(MATRIX_CONFIG_PATH).exists() {
        match EvaluationMatrix::from_yaml(MATRIX_CONFIG_PATH) {
            Ok(m) => {
                info!(path = MATRIX_CONFIG_PATH, "loaded evaluation matrix config");
                m
            }
            Err(e) => {
                warn!(error = %e, "failed to load matrix config, using builtin defaults");
                EvaluationMatrix::default()
            }
        }
    } else {
        EvaluationMatrix::default()
    };

    let state = enrichdash_web::state::AppState::new(matrix);
    let app = enrichdash_web::router::build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3080));
    info!("Server listening on http://{}", addr);
    info!("Open your browser and navigate to http://localhost:3080");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
