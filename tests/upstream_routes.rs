//! Integration tests for routes backed by upstream APIs
//!
//! A small axum app on a loopback port stands in for the central bank and the
//! government region service, counting how often each is hit.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

use dataciudadana::api::{router, AppState};
use dataciudadana::data::{BancoCentralClient, GovRegionsClient};
use dataciudadana::upstream::UpstreamClient;

#[derive(Default)]
struct Hits {
    indicators: AtomicUsize,
    regions: AtomicUsize,
}

async fn indicators(State(hits): State<Arc<Hits>>) -> Json<Value> {
    hits.indicators.fetch_add(1, Ordering::SeqCst);
    Json(json!({ "dolar": { "valor": 950.12 }, "uf": { "valor": 38_000.5 } }))
}

async fn regions(State(hits): State<Arc<Hits>>) -> Json<Value> {
    hits.regions.fetch_add(1, Ordering::SeqCst);
    Json(json!([{ "nombre": "Región de Prueba", "codigo": 99 }]))
}

async fn down(State(hits): State<Arc<Hits>>) -> StatusCode {
    hits.indicators.fetch_add(1, Ordering::SeqCst);
    hits.regions.fetch_add(1, Ordering::SeqCst);
    StatusCode::SERVICE_UNAVAILABLE
}

/// Starts the fake upstream and returns its base URL
async fn spawn_upstream(hits: Arc<Hits>) -> String {
    let app = Router::new()
        .route("/indicadores", get(indicators))
        .route("/regiones", get(regions))
        .route("/down", get(down))
        .with_state(hits);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A URL nothing is listening on
fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

fn app_with(indicators_url: String, regions_url: String) -> Router {
    let upstream = UpstreamClient::new();
    let state = AppState::with_clients(
        BancoCentralClient::new(upstream.clone()).with_url(indicators_url),
        GovRegionsClient::new(upstream).with_url(regions_url),
    );
    router(Arc::new(state))
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_indicators_are_fetched_once_then_cached() {
    let hits = Arc::new(Hits::default());
    let base = spawn_upstream(hits.clone()).await;
    let app = app_with(format!("{}/indicadores", base), format!("{}/regiones", base));

    let (status, first) = get_json(&app, "/api/economic/economic-indicators").await;
    let (_, second) = get_json(&app, "/api/economic/economic-indicators").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["dolar"]["valor"], 950.12);
    assert_eq!(first, second);
    assert_eq!(hits.indicators.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_indicators_unreachable_is_503() {
    let app = app_with(unreachable_url(), unreachable_url());

    let (status, body) = get_json(&app, "/api/economic/economic-indicators").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_indicators_failure_is_retried_on_next_request() {
    let hits = Arc::new(Hits::default());
    let base = spawn_upstream(hits.clone()).await;
    let app = app_with(format!("{}/down", base), format!("{}/down", base));

    let (first, _) = get_json(&app, "/api/economic/economic-indicators").await;
    let (second, _) = get_json(&app, "/api/economic/economic-indicators").await;

    assert_eq!(first, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(second, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(hits.indicators.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_regions_live_payload_is_cached_forever() {
    let hits = Arc::new(Hits::default());
    let base = spawn_upstream(hits.clone()).await;
    let app = app_with(format!("{}/indicadores", base), format!("{}/regiones", base));

    let (status, body) = get_json(&app, "/api/employment/regions-gob").await;
    get_json(&app, "/api/employment/regions-gob").await;
    get_json(&app, "/api/employment/regions-gob").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["nombre"], "Región de Prueba");
    assert_eq!(hits.regions.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_regions_fallback_when_upstream_down() {
    let hits = Arc::new(Hits::default());
    let base = spawn_upstream(hits.clone()).await;
    let app = app_with(format!("{}/down", base), format!("{}/down", base));

    let (status, body) = get_json(&app, "/api/employment/regions-gob").await;
    let regions = body.as_array().unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(regions.len(), 16);
    assert_eq!(regions[0]["nombre"], "Arica y Parinacota");
    assert_eq!(regions[0]["codigo"], 15);

    // Fallback is not cached, so the upstream is asked again
    get_json(&app, "/api/employment/regions-gob").await;
    assert_eq!(hits.regions.load(Ordering::SeqCst), 2);
}
