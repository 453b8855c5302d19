use std::sync::Arc;
use std::time::Instant;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use dashmap::DashMap;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod ga4;
pub mod handlers {
    pub mod analytics;
    pub mod health;
}

use config::AppConfig;
use handlers::analytics::KeyedLimiter;

pub struct AppState {
    pub config: AppConfig,
    pub started_at: Instant,
    pub analytics_limiter: DashMap<String, KeyedLimiter>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            started_at: Instant::now(),
            analytics_limiter: DashMap::new(),
            http: reqwest::Client::new(),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = &state.config.static_dir;
    // Unknown paths get index.html so client-side routes resolve
    let static_files =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(handlers::health::health_check))
        .route("/api/analytics/event", post(handlers::analytics::record_event))
        .fallback_service(static_files)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_origin(AllowOrigin::exact(state.config.cors_origin.clone()))
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
                .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
                .allow_credentials(true),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn test_config(static_dir: PathBuf) -> AppConfig {
        let mut config = AppConfig::from_lookup(|_| None).unwrap();
        config.static_dir = static_dir;
        config
    }

    fn test_app() -> Router {
        build_router(Arc::new(AppState::new(test_config(PathBuf::from("does-not-exist")))))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn event_request(body: Value, forwarded_for: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analytics/event")
            .header("content-type", "application/json")
            .header("x-forwarded-for", forwarded_for)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_service_and_disables_caching() {
        let response = test_app()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "no-store, no-cache, must-revalidate"
        );
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "capture-client-website");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["uptime"].as_f64().unwrap() >= 0.0);
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn analytics_accepts_a_valid_event() {
        let response = test_app()
            .oneshot(event_request(
                json!({
                    "name": "menu_item_click",
                    "params": {
                        "item_label": "Pricing",
                        "menu_location": "desktop_megamenu",
                        "item_destination": "/pricing"
                    },
                    "page_path": "/"
                }),
                "203.0.113.7",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(body_json(response).await, json!({"accepted": true}));
    }

    #[tokio::test]
    async fn analytics_rejects_invalid_events() {
        let app = test_app();

        let too_many: serde_json::Map<String, Value> =
            (0..26).map(|i| (format!("p{}", i), json!("x"))).collect();
        for body in [
            json!({"name": ""}),
            json!({"name": "x".repeat(41)}),
            json!({"name": "cta_click", "params": too_many}),
            json!({"params": {}}),
        ] {
            let response = app
                .clone()
                .oneshot(event_request(body, "198.51.100.2"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert!(body_json(response).await["error"].is_string());
        }
    }

    #[tokio::test]
    async fn analytics_rate_limits_per_client() {
        let state = Arc::new(AppState::new(test_config(PathBuf::from("does-not-exist"))));
        let app = build_router(state);
        let event = json!({"name": "cta_click", "params": {"cta_name": "Sign In"}});

        for _ in 0..20 {
            let response = app
                .clone()
                .oneshot(event_request(event.clone(), "192.0.2.1"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::ACCEPTED);
        }

        let response = app
            .clone()
            .oneshot(event_request(event.clone(), "192.0.2.1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let response = app
            .oneshot(event_request(event, "192.0.2.2"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index_html() {
        let dir = std::env::temp_dir().join(format!("capture-backend-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>menu</html>").unwrap();

        let app = build_router(Arc::new(AppState::new(test_config(dir.clone()))));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/industries/dental")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"<html>menu</html>");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
