mod catalog;
mod config;
mod errors;
mod evaluation;
mod llm_client;
mod models;
mod portfolio;
mod roadmap;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::evaluation::heuristic::HeuristicEvaluator;
use crate::evaluation::narrative::NarrativeEvaluator;
use crate::evaluation::Evaluator;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    let evaluator = build_evaluator(&config);

    let state = AppState {
        config: config.clone(),
        evaluator,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Narrative evaluation with heuristic fallback, or heuristic only when disabled.
fn build_evaluator(config: &Config) -> Arc<dyn Evaluator> {
    if !config.narrative_enabled {
        info!("Narrative evaluation disabled; using heuristic evaluator");
        return Arc::new(HeuristicEvaluator);
    }

    let llm = config.openai_api_key.clone().and_then(|key| {
        match LlmClient::new(key) {
            Ok(client) => Some(match &config.openai_api_url {
                Some(url) => client.with_endpoint(url.clone()),
                None => client,
            }),
            Err(e) => {
                error!("Failed to build LLM client: {e}");
                None
            }
        }
    });

    match &llm {
        Some(client) => info!(
            "LLM client initialized (model: {}, endpoint: {})",
            llm_client::MODEL,
            client.endpoint()
        ),
        None => warn!("OPENAI_API_KEY not set; evaluations will use the heuristic fallback"),
    }

    Arc::new(NarrativeEvaluator::new(llm))
}
