//! API Server for Taskboard
//!
//! Serves the task REST API, the client entry page and its static assets.

mod config;
mod routes;
mod state;

use anyhow::Context;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(routes::home::router(&config.templates_dir))
        .merge(routes::health::router())
        .merge(routes::task::router())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Using database: {}", config.database_url);

    let state = AppState::new(&config.database_url)
        .await
        .context("Failed to initialize task store")?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("REST API listening on {}", addr);

    axum::serve(listener, app(state, &config)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    use taskboard_core::task::SqliteTaskStore;

    use super::*;

    #[tokio::test]
    async fn cors_preflight_is_allowed() {
        let store = Arc::new(SqliteTaskStore::in_memory().await.unwrap());
        let config = ServerConfig {
            database_url: "sqlite::memory:".to_string(),
            host: [127, 0, 0, 1].into(),
            port: 0,
            templates_dir: "templates".into(),
            debug: false,
        };

        let response = app(AppState::with_store(store), &config)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/tasks/all")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
