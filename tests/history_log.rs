//! History Log Tests
//!
//! File-backed pick history behind the HTTP layer:
//! - A rendered result is recorded once and survives a restart
//! - Entries come back newest first; the oldest are dropped past capacity

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tempfile::tempdir;
use tower::ServiceExt;

use matchup::catalog::StaticCatalog;
use matchup::category::{self, CategoryKey};
use matchup::flow;
use matchup::history::{FileHistoryLog, HistoryLog, NewPickEntry};
use matchup::http_server::{build_router, AppState, HttpServerConfig};
use matchup::signals::RawSignals;

fn entry_for(key: CategoryKey, query: &str) -> NewPickEntry {
    let cfg = category::config(key);
    let explanation = flow::explain(cfg, &RawSignals::from_query(query)).unwrap();
    NewPickEntry::from_explanation(&explanation, "/m")
}

#[test]
fn test_entry_from_explanation() {
    let entry = entry_for(CategoryKey::BodyWash, "q1=A&q2=A");
    assert_eq!(entry.category, CategoryKey::BodyWash);
    assert_eq!(entry.result_href, "/m/bodywash/result?q1=A&q2=A");
    assert_eq!(entry.signals.len(), 4);
    assert!(entry.result_title.contains(" · "));
}

#[test]
fn test_capacity_drops_oldest_on_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.jsonl");

    let log = FileHistoryLog::open(&path, 2).unwrap();
    for q1 in ["A", "B", "C"] {
        assert!(log
            .append(entry_for(CategoryKey::BodyWash, &format!("q1={}&q2=A", q1)))
            .unwrap());
    }

    let entries = log.entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].entry.result_href, "/m/bodywash/result?q1=C&q2=A");
    assert_eq!(entries[1].entry.result_href, "/m/bodywash/result?q1=B&q2=A");

    // the dropped pick is recorded again
    assert!(log
        .append(entry_for(CategoryKey::BodyWash, "q1=A&q2=A"))
        .unwrap());
    assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 2);
}

#[tokio::test]
async fn test_result_page_persists_across_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("picks").join("history.jsonl");
    let uri = "/m/hairwash/result?scalp=normal&issue=itch-dandruff";

    {
        let history = Arc::new(FileHistoryLog::open(&path, 40).unwrap());
        let state = AppState::new("/m", Arc::new(StaticCatalog::default()), history);
        let app = build_router(&HttpServerConfig::default(), Arc::new(state));

        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let reopened = FileHistoryLog::open(&path, 40).unwrap();
    let entries = reopened.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].entry.result_href, uri);
    assert!(!reopened
        .append(entry_for(CategoryKey::HairWash, "scalp=normal&issue=itch-dandruff"))
        .unwrap());
}
