//! NewWork API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dev_seed;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use newwork_application::FeedbackEnhancer;
use newwork_core::AppError;
use newwork_infrastructure::{GeminiFeedbackEnhancer, PassthroughFeedbackEnhancer};
use tracing::info;

use crate::api_config::{ApiConfig, EnhancerConfig};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    api_config::init_tracing();

    let config = ApiConfig::load()?;
    let seed = dev_seed::directory()?;
    info!(
        profiles = seed.profiles.len(),
        feedback = seed.feedback.len(),
        "demo directory loaded"
    );

    let app_state = AppState::in_memory(
        seed.profiles,
        seed.feedback,
        build_enhancer(&config.enhancer),
        config.app_env.clone(),
    );
    let app = api_router::build_router(app_state, &config.frontend_url)?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind {address}: {error}")))?;

    info!(%address, environment = %config.app_env, "api server listening");
    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("server error: {error}")))
}

fn build_enhancer(config: &EnhancerConfig) -> Arc<dyn FeedbackEnhancer> {
    match &config.api_key {
        Some(api_key) => {
            info!(timeout_secs = config.timeout.as_secs(), "gemini feedback enhancer enabled");
            Arc::new(GeminiFeedbackEnhancer::new(
                reqwest::Client::new(),
                api_key.clone(),
                config.api_url.clone(),
                config.timeout,
            ))
        }
        None => {
            info!("GEMINI_API_KEY not set, feedback enhancement disabled");
            Arc::new(PassthroughFeedbackEnhancer)
        }
    }
}
