//! Farm Advisory Platform - Backend Server
//!
//! Advisory tools for smallholder farmers: a community forum with simulated
//! peer responses, AI pest identification, a soil test analyzer and a
//! vegetable price forecaster.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::{GeminiClient, PestIdentifier};
use services::ForumBoard;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub identifier: Arc<dyn PestIdentifier>,
    pub forum: ForumBoard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_advisory_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Farm Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    if !config.ai.has_api_key() {
        tracing::warn!("No AI API key configured; pest analysis requests will fail");
    }

    // Create application state
    let identifier: Arc<dyn PestIdentifier> = Arc::new(GeminiClient::new(&config.ai)?);
    let state = AppState {
        config: Arc::new(config.clone()),
        identifier,
        forum: ForumBoard::default(),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Farm Advisory Platform API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::error::AppResult;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use shared::{AnalysisStage, ImageUpload, PestReport};
    use tower::ServiceExt;

    struct FixedIdentifier;

    #[axum::async_trait]
    impl PestIdentifier for FixedIdentifier {
        async fn identify(
            &self,
            _image: &ImageUpload,
            on_progress: &(dyn Fn(AnalysisStage) + Send + Sync),
        ) -> AppResult<PestReport> {
            on_progress(AnalysisStage::Complete);
            Ok(shared::parse_pest_report(
                r#"{"pestName":"Aphid","threatLevel":"Low","characteristics":"c","behavior":"b",
                "lifeCycle":"l","symptoms":["s"],"affectedParts":"a","spreadPattern":"p",
                "treatments":[],"preventionMeasures":[]}"#,
            )?)
        }
    }

    fn app() -> Router {
        let config = Config {
            simulation: SimulationConfig { latency_ms: 0 },
            ..Config::default()
        };
        create_app(AppState {
            config: Arc::new(config),
            identifier: Arc::new(FixedIdentifier),
            forum: ForumBoard::default(),
        })
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn multipart_request(mime_type: &str, bytes: &[u8]) -> Request<Body> {
        let boundary = "farm-boundary";
        let mut body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"leaf.jpg\"\r\nContent-Type: {m}\r\n\r\n",
            b = boundary,
            m = mime_type
        )
        .into_bytes();
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/pests/analyze")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let response = app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app().oneshot(get_request("/api/v1/health")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["ai"], "unconfigured");
    }

    #[tokio::test]
    async fn test_forum_ask_and_list() {
        let app = app();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/forum/threads",
                json!({ "query": "  aphid trouble  " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let thread = body_json(response).await;
        assert_eq!(thread["topic"], "pests");
        assert_eq!(thread["question"]["content"], "  aphid trouble  ");
        assert_eq!(thread["responses"].as_array().unwrap().len(), 2);
        assert!(thread["responses"][0]["experienceYears"].is_u64());

        let response = app
            .oneshot(get_request("/api/v1/forum/threads"))
            .await
            .unwrap();
        let threads = body_json(response).await;
        assert_eq!(threads.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_forum_empty_question() {
        let app = app();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/forum/threads",
                json!({ "query": "  " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Please enter a question");

        let response = app
            .oneshot(get_request("/api/v1/forum/threads"))
            .await
            .unwrap();
        assert!(body_json(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_like_unknown_thread() {
        let uri = format!("/api/v1/forum/threads/{}/like", uuid::Uuid::new_v4());
        let response = app()
            .oneshot(json_request("POST", &uri, json!({ "liked": true })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_soil_options() {
        let response = app()
            .oneshot(get_request("/api/v1/soil/options"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let options = body_json(response).await;
        assert_eq!(options["textures"].as_array().unwrap().len(), 6);
        assert_eq!(options["textures"][1], "Loamy");
    }

    #[tokio::test]
    async fn test_soil_analyze() {
        let sample = json!({
            "pH": "5.5",
            "nitrogen": "99999",
            "phosphorus": "30",
            "potassium": "200",
            "organicMatter": "4",
            "texture": "Loamy",
            "moisture": "25",
            "conductivity": "1.2"
        });
        let response = app()
            .oneshot(json_request("POST", "/api/v1/soil/analyze", sample))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let report = body_json(response).await;
        assert!(report["summary"].as_str().unwrap().contains("acidic"));
        assert_eq!(report["nutrients"][0]["level"], 100.0);
        assert_eq!(report["nutrients"][0]["status"], "High");
    }

    #[tokio::test]
    async fn test_soil_missing_field() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/v1/soil/analyze",
                json!({
                    "pH": "6.5", "nitrogen": "", "phosphorus": "30", "potassium": "200",
                    "organicMatter": "4", "texture": "Loamy", "moisture": "25", "conductivity": "1"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Please fill all fields");
        assert_eq!(body["error"]["field"], "sample");
    }

    #[tokio::test]
    async fn test_price_options_and_forecast() {
        let app = app();
        let response = app
            .clone()
            .oneshot(get_request("/api/v1/prices/options"))
            .await
            .unwrap();
        let options = body_json(response).await;
        assert_eq!(options["states"].as_array().unwrap().len(), 13);

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/prices/forecast",
                json!({
                    "vegetable": "Tomato",
                    "state": "Maharashtra",
                    "season": "Summer",
                    "quality": "Grade A",
                    "marketType": "Retail",
                    "duration": 3
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let forecast = body_json(response).await;
        assert_eq!(forecast["currentPrice"], 70);
        assert_eq!(forecast["predictions"].as_array().unwrap().len(), 4);
        assert_eq!(forecast["recommendations"][0]["type"], "Storage");
    }

    #[tokio::test]
    async fn test_pest_upload() {
        let response = app()
            .oneshot(multipart_request("image/jpeg", &[0xff, 0xd8, 0xff]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let analysis = body_json(response).await;
        assert_eq!(analysis["progress"], 100);
        assert_eq!(analysis["report"]["pestName"], "Aphid");
    }

    #[tokio::test]
    async fn test_pest_upload_accepts_bare_image_type() {
        let response = app()
            .oneshot(multipart_request("image/", &[0x89, 0x50, 0x4e, 0x47]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_pest_upload_rejects_non_image() {
        let response = app()
            .oneshot(multipart_request("text/plain", b"hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"]["message"],
            "Please select a valid image file"
        );
    }
}
