#![cfg(feature = "server")]

mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use common::StubProvider;
use stock_dashboard::{dashboard::Dashboard, server::router};
use tower::ServiceExt;

async fn get(uri: &str, stub: StubProvider) -> (StatusCode, axum::http::HeaderMap, String) {
    let app = router(Dashboard::new(stub)).unwrap();
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn index_renders_the_page() {
    let (status, headers, body) = get(
        "/?ticker=AMZN&start=2023-01-01&end=2023-01-10",
        StubProvider::default(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    assert!(body.contains("Raw Data - AMZN"));
    assert!(body.contains("AMZN Closing Price Over Time"));
    assert!(body.contains("Statistics for AMZN"));
    assert!(!body.contains("class=\"warning\""));
}

#[tokio::test]
async fn index_with_inverted_range_shows_warning() {
    let stub = StubProvider::default();
    let (status, _, body) = get("/?ticker=MSFT&start=2023-02-01&end=2023-01-01", stub.clone()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error: End date must fall after start date."));
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn download_serves_csv_attachment() {
    let (status, headers, body) = get(
        "/download?ticker=AAPL&start=2023-01-01&end=2023-01-10",
        StubProvider::default(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"stock_data.csv\""
    );
    assert!(body.starts_with(",Date,Open,High,Low,Close,Volume\n0,2023-01-02,"));
    assert_eq!(body.lines().count(), 8);
}

#[tokio::test]
async fn unknown_ticker_is_rejected() {
    let stub = StubProvider::default();
    let (status, _, body) = get("/?ticker=NVDA", stub.clone()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Unknown ticker 'NVDA'"));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, _, body) = get("/api/health", StubProvider::default()).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}
