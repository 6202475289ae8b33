use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use competitor_analyzer::core::{AnalysisClient, AnalysisService};
use competitor_analyzer::error::GENERIC_NOTICE;
use competitor_analyzer::{App, QueryForm, SearchRequest, SubmitError};

async fn spawn_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub service");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub service");
    });
    format!("http://{}", addr)
}

/// Echoes the request back inside a well-formed response
async fn echo_search(Json(request): Json<Value>) -> Json<Value> {
    Json(json!({
        "query": request["query"],
        "results": [{
            "title": format!("num_results={}", request["num_results"]),
            "url": "https://example.com",
            "snippet": "s",
            "analysis": "a",
            "data_source": "new",
            "last_updated": null
        }],
        "swot_analysis": {"strengths": [], "weaknesses": [], "opportunities": [], "threats": []},
        "comparison": null,
        "data_source_info": {
            "search_results_from_cache": false,
            "competitors_from_cache": [],
            "fresh_competitors": request["competitors"],
            "last_cache_update": null
        }
    }))
}

fn echo_router() -> Router {
    Router::new()
        .route("/search", post(echo_search))
        .route("/health", get(|| async { Json(json!({"status": "healthy"})) }))
}

#[tokio::test]
async fn search_posts_wire_request_and_parses_response() {
    let base = spawn_service(echo_router()).await;
    let client = AnalysisClient::new(&format!("{}/", base), None).unwrap();

    let request = SearchRequest::new("crm", vec!["hubspot.com".into(), "Pipedrive".into()]);
    let report = client.search(&request).await.unwrap();

    assert!(report.is_clean());
    assert_eq!(report.response.query, "crm");
    assert_eq!(report.response.results[0].title, "num_results=10");
    assert_eq!(
        report.response.data_source_info.fresh_competitors,
        ["hubspot.com", "Pipedrive"]
    );
}

#[tokio::test]
async fn health_reports_status() {
    let base = spawn_service(echo_router()).await;
    let client = AnalysisClient::new(&base, Some(Duration::from_secs(5))).unwrap();
    assert_eq!(client.health().await.unwrap().status, "healthy");
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let router = Router::new().route(
        "/search",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "search backend down") }),
    );
    let base = spawn_service(router).await;
    let client = AnalysisClient::new(&base, None).unwrap();

    let err = client
        .search(&SearchRequest::new("crm", vec![]))
        .await
        .unwrap_err();
    match &err {
        SubmitError::Status { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "search backend down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.notice(), GENERIC_NOTICE);
}

#[tokio::test]
async fn unexpected_body_is_malformed_not_a_crash() {
    let router = Router::new().route("/search", post(|| async { "<html>oops</html>" }));
    let base = spawn_service(router).await;
    let client = AnalysisClient::new(&base, None).unwrap();

    let err = client
        .search(&SearchRequest::new("crm", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AnalysisClient::new(&format!("http://{}", addr), None).unwrap();
    let err = client
        .search(&SearchRequest::new("crm", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
}

#[tokio::test]
async fn blank_query_never_leaves_the_client() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    // Nothing listens here; an EmptyQuery error proves no request was attempted
    let client = AnalysisClient::new(&format!("http://{}", addr), None).unwrap();
    let err = client
        .search(&SearchRequest::new("  ", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::EmptyQuery));
}

#[tokio::test]
async fn trigger_stays_disabled_while_request_is_in_flight() {
    let router = Router::new().route(
        "/search",
        post(|request: Json<Value>| async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            echo_search(request).await
        }),
    );
    let base = spawn_service(router).await;
    let client = AnalysisClient::new(&base, None).unwrap();
    let mut app = App::new(QueryForm::new().with_query("crm"));

    let pending = app.begin_submit().unwrap();
    let in_flight = client.search(pending.request());

    assert!(!app.trigger_enabled());
    assert_eq!(app.trigger_label(), "Analyzing...");
    assert!(matches!(app.begin_submit(), Err(SubmitError::Busy)));

    let outcome = in_flight.await;
    assert!(app.finish_submit(pending, outcome).unwrap());
    assert!(app.trigger_enabled());
    assert_eq!(app.results().unwrap().query, "crm");
}

#[tokio::test]
async fn failed_resubmission_keeps_displayed_results() {
    let good = spawn_service(echo_router()).await;
    let bad = spawn_service(Router::new().route(
        "/search",
        post(|| async { StatusCode::BAD_GATEWAY }),
    ))
    .await;

    let mut app = App::new(QueryForm::new().with_query("crm"));
    app.submit(&AnalysisClient::new(&good, None).unwrap())
        .await
        .unwrap();

    app.form_mut().query = "something else".into();
    let err = app
        .submit(&AnalysisClient::new(&bad, None).unwrap())
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(app.results().unwrap().query, "crm");
    assert_eq!(app.notice(), Some(GENERIC_NOTICE));
}
