//! HTTP Route Tests
//!
//! Drives the axum router in-process with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use matchup::catalog::StaticCatalog;
use matchup::history::MemoryHistoryLog;
use matchup::http_server::{build_router, AppState, HttpServerConfig};

// =============================================================================
// Helper Functions
// =============================================================================

fn router() -> Router {
    build_router(&HttpServerConfig::default(), Arc::new(AppState::in_memory("/m")))
}

fn router_with_catalog(json: &str) -> Router {
    let state = AppState::new(
        "/m",
        Arc::new(StaticCatalog::from_json(json).unwrap()),
        Arc::new(MemoryHistoryLog::default()),
    );
    build_router(&HttpServerConfig::default(), Arc::new(state))
}

struct Reply {
    status: StatusCode,
    location: Option<String>,
    body: Value,
}

async fn send(app: &Router, method: Method, uri: &str) -> Reply {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    Reply {
        status,
        location,
        body,
    }
}

async fn get(app: &Router, uri: &str) -> Reply {
    send(app, Method::GET, uri).await
}

const LOTION_COMPLETE: &str = "group=stable-maintain&issue=none&scene=ac-room&avoid=none";

// =============================================================================
// Service routes
// =============================================================================

#[tokio::test]
async fn test_health() {
    let reply = get(&router(), "/health").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["status"], "ok");
}

#[tokio::test]
async fn test_categories() {
    let reply = get(&router(), "/categories").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["total"], 5);
    assert_eq!(reply.body["categories"][1]["key"], "bodywash");
    assert_eq!(reply.body["categories"][1]["steps"], 5);
    assert_eq!(
        reply.body["categories"][1]["start_href"],
        "/m/bodywash/profile?step=1"
    );
}

#[tokio::test]
async fn test_unknown_category_is_404() {
    let app = router();
    for uri in ["/m/soap/start", "/m/soap/profile", "/m/soap/resolve", "/m/wiki/soap"] {
        let reply = get(&app, uri).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(reply.body["code"], "MATCHUP_UNKNOWN_CATEGORY");
    }

    let metrics = get(&app, "/metrics").await;
    assert_eq!(metrics.body["unknown_categories"], 4);
}

// =============================================================================
// Questionnaire
// =============================================================================

#[tokio::test]
async fn test_start_redirects_to_step_one() {
    let reply = get(&router(), "/m/hairwash/start").await;
    assert_eq!(reply.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(reply.location.as_deref(), Some("/m/hairwash/profile?step=1"));
}

#[tokio::test]
async fn test_legacy_alias_resolves() {
    let reply = get(&router(), "/m/shampoo/start").await;
    assert_eq!(reply.location.as_deref(), Some("/m/hairwash/profile?step=1"));
}

#[tokio::test]
async fn test_profile_renders_question() {
    let reply = get(&router(), "/m/hairwash/profile?scalp=oily&step=2").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["step"], 2);
    assert_eq!(reply.body["total"], 4);
    assert_eq!(reply.body["slot"], "issue");
    assert_eq!(reply.body["collected"][0]["slot"], "scalp");
}

#[tokio::test]
async fn test_profile_too_far_ahead_redirects() {
    let app = router();
    let reply = get(&app, "/m/hairwash/profile?step=3").await;
    assert_eq!(reply.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(reply.location.as_deref(), Some("/m/hairwash/profile?step=1"));

    let metrics = get(&app, "/metrics").await;
    assert_eq!(metrics.body["step_redirects"], 1);
}

#[tokio::test]
async fn test_profile_complete_redirects_to_resolve() {
    let uri = format!("/m/lotion/profile?{}&step=2", LOTION_COMPLETE);
    let reply = get(&router(), &uri).await;
    assert_eq!(reply.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        reply.location,
        Some(format!("/m/lotion/resolve?{}", LOTION_COMPLETE))
    );
}

#[tokio::test]
async fn test_resolve_incomplete_redirects_to_gap() {
    let reply = get(&router(), "/m/cleanser/resolve?skin=combo&scene=night-clean").await;
    assert_eq!(reply.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        reply.location.as_deref(),
        Some("/m/cleanser/profile?skin=combo&scene=night-clean&step=2")
    );
}

#[tokio::test]
async fn test_resolve_fast_path() {
    let app = router();
    let reply = get(&app, "/m/bodywash/resolve?q1=C&q2=A").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["outcome"], "rescue-soothing");
    assert_eq!(reply.body["fast_path"], "extreme-sensitivity");
    assert_eq!(reply.body["result_href"], "/m/bodywash/result?q1=C&q2=A");

    let metrics = get(&app, "/metrics").await;
    assert_eq!(metrics.body["resolutions"], 1);
    assert_eq!(metrics.body["fast_paths"], 1);
}

// =============================================================================
// Result page, history and wiki
// =============================================================================

#[tokio::test]
async fn test_result_records_history_once() {
    let app = router();
    let uri = format!("/m/lotion/result?{}", LOTION_COMPLETE);

    let first = get(&app, &uri).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["outcome"], "light-daily");
    assert_eq!(first.body["recorded"], true);
    assert_eq!(first.body["product"]["source"], "fallback");
    assert!(first.body["product"]["product"].is_null());

    let second = get(&app, &uri).await;
    assert_eq!(second.body["recorded"], false);

    let history = get(&app, "/m/history").await;
    assert_eq!(history.body["total"], 1);
    let entry = &history.body["entries"][0];
    assert_eq!(entry["category"], "lotion");
    assert_eq!(entry["result_href"], uri);
    assert!(entry["id"].is_string());

    let metrics = get(&app, "/metrics").await;
    assert_eq!(metrics.body["history_appends"], 1);
    assert_eq!(metrics.body["history_duplicates"], 1);
    assert_eq!(metrics.body["catalog_fallbacks"], 2);
}

#[tokio::test]
async fn test_result_uses_catalog() {
    let app = router_with_catalog(
        r#"[{"id": "x1", "category": "lotion", "brand": "Listed", "name": "Body Milk"}]"#,
    );
    let reply = get(&app, &format!("/m/lotion/result?{}", LOTION_COMPLETE)).await;
    assert_eq!(reply.body["product"]["source"], "catalog");
    assert_eq!(reply.body["product"]["product"]["brand"], "Listed");
}

#[tokio::test]
async fn test_result_rollback_product() {
    let app = router();
    let reply = get(
        &app,
        "/m/cleanser/result?skin=dry-sensitive&issue=sting-red&scene=night-clean&avoid=low-foam",
    )
    .await;
    assert_eq!(reply.body["outcome"], "barrier-minimal");
    assert_eq!(reply.body["rollback"]["rule"], "tolerance-first");
    assert_eq!(reply.body["product"]["source"], "rollback");
    assert_eq!(reply.body["product"]["product"]["brand"], "Avène");
}

#[tokio::test]
async fn test_result_incomplete_redirects() {
    let reply = get(&router(), "/m/conditioner/result?target=frizz").await;
    assert_eq!(reply.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        reply.location.as_deref(),
        Some("/m/conditioner/profile?target=frizz&step=2")
    );
}

#[tokio::test]
async fn test_clear_history() {
    let app = router();
    get(&app, "/m/bodywash/result?q1=A&q2=A").await;
    assert_eq!(get(&app, "/m/history").await.body["total"], 1);

    let reply = send(&app, Method::DELETE, "/m/history").await;
    assert_eq!(reply.status, StatusCode::NO_CONTENT);
    assert_eq!(get(&app, "/m/history").await.body["total"], 0);
}

#[tokio::test]
async fn test_wiki_focus() {
    let app = router();
    let reply = get(&app, "/m/wiki/cleanser?focus=barrier-minimal").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["focus"], "barrier-minimal");
    let focused: Vec<_> = reply.body["outcomes"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|o| o["focused"] == true)
        .collect();
    assert_eq!(focused.len(), 1);

    let unfocused = get(&app, "/m/wiki/cleanser?focus=nope").await;
    assert!(unfocused.body["focus"].is_null());
}
