use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use lucene_core::{create_app, AppState, LuceneBuilder, Options};
use serde_json::Value;
use tower::ServiceExt;

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let (status, body) = send(create_app(AppState::default()), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["usage"]["search"]["endpoint"], "/search");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(create_app(AppState::default()), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_search_without_phrase_returns_empty_list() {
    let (status, body) = send(create_app(AppState::default()), get("/search?type=fruit")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_search_builds_command() {
    let (status, body) = send(
        create_app(AppState::default()),
        get("/search?q=green%20apples&color=red"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let command = &body["data"];
    assert_eq!(command["query"], "\"green~1 apples~1\"");
    assert_eq!(command["queryParser"], "lucene");
    assert_eq!(command["return"], "_all_fields");
    assert_eq!(
        command["filterQuery"],
        "(and (or (term field=type 'rundate') (term field=type 'activity')) (term field=color 'red'))"
    );
}

#[tokio::test]
async fn test_search_uses_state_builder() {
    let state = AppState::default()
        .with_builder(LuceneBuilder::new(Options::new().with_url_encoded(true)));
    let (status, body) = send(create_app(state), get("/search?q=art")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["query"], "%22art%22");
}

#[tokio::test]
async fn test_query_endpoint() {
    let request = post_json(
        "/api/query",
        r#"{
            "phrase": "modern sculpture",
            "and": [{"type": ["artist", "rundate"]}],
            "not": [{"status": "draft"}],
            "dates": {"rundate": [null, "2024-01-01T00:00:00Z"]},
            "options": {"proximity": 2}
        }"#,
    );
    let (status, body) = send(create_app(AppState::default()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["query"],
        "\"modern~1 sculpture~1\"~2 AND (type:artist OR type:rundate) NOT status:draft AND (rundate:[* TO 2024-01-01T00:00:00Z]) "
    );
}

#[tokio::test]
async fn test_query_endpoint_rejects_non_zulu_dates() {
    let request = post_json(
        "/api/query",
        r#"{"dates": {"rundate": "2024-01-01T00:00:00+02:00"}}"#,
    );
    let (status, body) = send(create_app(AppState::default()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("Zulu"));
}

#[tokio::test]
async fn test_query_endpoint_skips_null_date_fields() {
    let request = post_json(
        "/api/query",
        r#"{"dates": {"rundate": null, "end": "2024-01-01 00:00:00z"}}"#,
    );
    let (status, body) = send(create_app(AppState::default()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["query"],
        "*:* AND (end:[2024-01-01T00:00:00Z TO *]) "
    );
}

#[tokio::test]
async fn test_fq_endpoint() {
    let request = post_json("/api/fq", r#"[{"type": ["rundate", "activity"], "status": null}]"#);
    let (status, body) = send(create_app(AppState::default()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["fq"],
        "(and (or (term field=type 'rundate') (term field=type 'activity')))"
    );

    let (status, body) = send(create_app(AppState::default()), post_json("/api/fq", "null")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["fq"], "");
}
