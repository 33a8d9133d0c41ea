use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use delver_core::client::{ClientError, ResearchBackend, ResearchClient};

/// Serves a router on a loopback port and returns its base URL.
async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_run_parses_report() {
    let app = Router::new().route(
        "/run",
        post(|Json(req): Json<Value>| async move {
            Json(json!({
                "query": req["query"],
                "executive_summary": "All good.",
                "sections": [
                    {"title": "T", "content": "C", "source_count": 1, "high_confidence_count": 0, "key_points": []}
                ],
                "all_sources": [
                    {"title": "A", "url": "http://a", "confidence": 3}
                ]
            }))
        }),
    );
    let base = spawn_backend(app).await;

    let client = ResearchClient::new(&base);
    let report = client.run_research("rust async", 5).await.unwrap();

    assert_eq!(report.query, "rust async");
    assert_eq!(report.sections.len(), 1);
    assert_eq!(report.all_sources[0].confidence, 3);
    assert!(report.planning.is_none());
}

#[tokio::test]
async fn test_run_passes_depth_through_verbatim() {
    // Echo the request body back inside the report so the test can see
    // exactly what went over the wire.
    let app = Router::new().route(
        "/run",
        post(|Json(req): Json<Value>| async move {
            Json(json!({
                "query": req["query"],
                "executive_summary": req["max_tasks"].to_string(),
            }))
        }),
    );
    let base = spawn_backend(app).await;

    let client = ResearchClient::new(&base);
    let report = client.run_research("q", 10).await.unwrap();
    assert_eq!(report.executive_summary, "10");
}

#[tokio::test]
async fn test_backend_detail_message_surfaced_verbatim() {
    let app = Router::new().route(
        "/run",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "LLM timeout"})),
            )
        }),
    );
    let base = spawn_backend(app).await;

    let client = ResearchClient::new(&base);
    let err = client.run_research("q", 5).await.unwrap_err();

    assert!(matches!(err, ClientError::Backend { status: 500, .. }));
    assert_eq!(err.to_string(), "LLM timeout");
}

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_status() {
    let app = Router::new().route(
        "/run",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "upstream down") }),
    );
    let base = spawn_backend(app).await;

    let client = ResearchClient::new(&base);
    let err = client.run_research("q", 5).await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP 503");
}

#[tokio::test]
async fn test_malformed_success_body_is_an_error() {
    let app = Router::new().route("/run", post(|| async { "this is not json" }));
    let base = spawn_backend(app).await;

    let client = ResearchClient::new(&base);
    let err = client.run_research("q", 5).await.unwrap_err();

    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_empty_query_issues_no_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/run",
        post(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({"query": "q", "executive_summary": "s"}))
            }
        }),
    );
    let base = spawn_backend(app).await;

    let client = ResearchClient::new(&base);

    let err = client.run_research("", 5).await.unwrap_err();
    assert!(matches!(err, ClientError::EmptyQuery));

    let err = client.run_research("   \n\t", 5).await.unwrap_err();
    assert!(matches!(err, ClientError::EmptyQuery));

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Grab a port that nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ResearchClient::new(format!("http://{}", addr));
    let err = client.run_research("q", 5).await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn test_health_parses_backend_fields() {
    let app = Router::new().route(
        "/health",
        get(|| async {
            Json(json!({
                "status": "healthy",
                "model": "gpt-4o",
                "max_parallel_agents": 3
            }))
        }),
    );
    let base = spawn_backend(app).await;

    let client = ResearchClient::new(&base);
    let health = client.health().await.unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.model.as_deref(), Some("gpt-4o"));
    assert_eq!(health.max_parallel_agents, Some(3));
    assert!(health.openrouter_configured.is_none());
}
