use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ai_client::{Categorizer, ChatClient, Disambiguator};
use curricula_common::Config;
use curricula_core::CurriculumPipeline;
use search_client::{SearchClient, TopicFeed};

mod rest;

pub struct AppState {
    pub pipeline: CurriculumPipeline,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let chat = ChatClient::new(&config.openai_api_key, &config.openai_model);
    let mut search = SearchClient::new(&config.search_url, &config.search_index);
    if let Some(key) = &config.search_api_key {
        search = search.with_api_key(key);
    }

    let pipeline = CurriculumPipeline::new(
        Arc::new(TopicFeed::new(&config.topics_url)),
        Arc::new(Disambiguator::new(chat.clone())),
        Arc::new(search),
        Arc::new(Categorizer::new(chat)),
    );

    let state = Arc::new(AppState { pipeline });

    let app = Router::new()
        .route("/health", get(rest::health))
        .route("/curriculum", get(rest::curriculum))
        .route("/topics/refresh", post(rest::refresh_topics))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.api_host, config.api_port);
    info!(addr = %addr, "Curricula API listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
