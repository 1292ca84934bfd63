//! Client entry page and its static assets

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

pub fn router(templates_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(templates_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(templates_dir.join("static")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    use taskboard_core::task::SqliteTaskStore;

    use crate::state::AppState;

    async fn build_app(templates: &TempDir) -> Router {
        let store = Arc::new(SqliteTaskStore::in_memory().await.unwrap());
        super::router(templates.path()).with_state(AppState::with_store(store))
    }

    #[tokio::test]
    async fn serves_index_page() {
        let templates = TempDir::new().unwrap();
        std::fs::write(templates.path().join("index.html"), "<h1>tasks</h1>").unwrap();

        let response = build_app(&templates)
            .await
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<h1>tasks</h1>");
    }

    #[tokio::test]
    async fn serves_static_assets() {
        let templates = TempDir::new().unwrap();
        std::fs::create_dir_all(templates.path().join("static/js")).unwrap();
        std::fs::write(templates.path().join("static/js/app.js"), "run()").unwrap();

        let response = build_app(&templates)
            .await
            .oneshot(
                Request::builder()
                    .uri("/static/js/app.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"run()");
    }

    #[tokio::test]
    async fn missing_index_is_not_found() {
        let templates = TempDir::new().unwrap();

        let response = build_app(&templates)
            .await
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
