use super::*;
use crate::config::SessionLimits;
use crate::state::test_helpers;

// =============================================================================
// lifecycle
// =============================================================================

#[tokio::test]
async fn create_session_starts_empty() {
    let state = test_helpers::test_app_state();
    let snap = create_session(&state).await.unwrap();
    assert!(snap.selected_operators.is_empty());
    assert_eq!(snap.query, "");
    assert!(snap.search_url.is_none());
    assert!(state.sessions.read().await.contains_key(&snap.id));
}

#[tokio::test]
async fn create_session_respects_capacity() {
    let state = test_helpers::test_app_state_with_limits(SessionLimits { max_sessions: 2, ..SessionLimits::default() });
    create_session(&state).await.unwrap();
    create_session(&state).await.unwrap();
    let err = create_session(&state).await.unwrap_err();
    assert!(matches!(err, SessionError::AtCapacity { limit: 2 }));
    assert_eq!(state.sessions.read().await.len(), 2);
}

#[tokio::test]
async fn end_session_removes_it() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;
    end_session(&state, id).await.unwrap();
    assert!(matches!(get_session(&state, id).await, Err(SessionError::NotFound(missing)) if missing == id));
}

#[tokio::test]
async fn end_session_unknown_is_not_found() {
    let state = test_helpers::test_app_state();
    let err = end_session(&state, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, SessionError::NotFound(_)));
}

#[tokio::test]
async fn get_session_touches_last_seen() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;
    let before = state.sessions.read().await[&id].last_seen;
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    get_session(&state, id).await.unwrap();
    assert!(state.sessions.read().await[&id].last_seen > before);
}

// =============================================================================
// operations
// =============================================================================

#[tokio::test]
async fn operations_build_expected_query() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;

    add_operator(&state, id, "site:".into()).await.unwrap();
    set_shared_value(&state, id, "github.com".into()).await.unwrap();
    let snap = set_free_text(&state, id, "hacking".into()).await.unwrap();

    assert_eq!(snap.selected_operators, ["site:"]);
    assert_eq!(snap.shared_value, "github.com");
    assert_eq!(snap.free_text, "hacking");
    assert_eq!(snap.query, "site:github.com hacking");
    assert_eq!(
        snap.search_url.as_deref(),
        Some("https://www.google.com/search?q=site%3Agithub.com+hacking")
    );
}

#[tokio::test]
async fn add_operator_is_idempotent() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;
    add_operator(&state, id, "site:".into()).await.unwrap();
    let snap = add_operator(&state, id, "site:".into()).await.unwrap();
    assert_eq!(snap.selected_operators.len(), 1);
}

#[tokio::test]
async fn remove_operator_absent_is_noop() {
    let state = test_helpers::test_app_state_with_limits(SessionLimits::default());
    let id = test_helpers::seed_session_with(&state, &["inurl:", "ext:"], "admin", "").await;
    let snap = remove_operator(&state, id, "site:").await.unwrap();
    assert_eq!(snap.selected_operators, ["inurl:", "ext:"]);
    let snap = remove_operator(&state, id, "inurl:").await.unwrap();
    assert_eq!(snap.query, "ext:admin");
}

#[tokio::test]
async fn reset_clears_query_and_url() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session_with(&state, &["site:"], "example.com", "login").await;
    let snap = reset(&state, id).await.unwrap();
    assert_eq!(snap.query, "");
    assert_eq!(snap.shared_value, "");
    assert!(snap.search_url.is_none());
}

#[tokio::test]
async fn operations_on_unknown_session_fail() {
    let state = test_helpers::test_app_state();
    let id = Uuid::new_v4();
    assert!(matches!(add_operator(&state, id, "site:".into()).await, Err(SessionError::NotFound(_))));
    assert!(matches!(built_query(&state, id).await, Err(SessionError::NotFound(_))));
}

#[tokio::test]
async fn sessions_are_isolated() {
    let state = test_helpers::test_app_state();
    let a = test_helpers::seed_session(&state).await;
    let b = test_helpers::seed_session(&state).await;
    add_operator(&state, a, "site:".into()).await.unwrap();
    assert!(get_session(&state, b).await.unwrap().selected_operators.is_empty());
}

// =============================================================================
// clipboard + search
// =============================================================================

#[tokio::test]
async fn built_query_matches_snapshot() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session_with(&state, &["inurl:admin", "filetype:"], "", "backup").await;
    assert_eq!(built_query(&state, id).await.unwrap(), "inurl:admin filetype: backup");
}

#[tokio::test]
async fn search_url_none_for_empty_query() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session_with(&state, &[], "x", "").await;
    assert!(search_url(&state, id).await.unwrap().is_none());
}

#[tokio::test]
async fn search_url_for_non_empty_query() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session_with(&state, &["ext:"], "sql", "").await;
    let url = search_url(&state, id).await.unwrap().unwrap();
    assert_eq!(url.as_str(), "https://www.google.com/search?q=ext%3Asql");
}

#[test]
fn snapshot_serializes_null_search_url() {
    let snap = SessionSnapshot::new(Uuid::nil(), &QueryAssembler::new(), &SearchEngine::default());
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["search_url"], serde_json::Value::Null);
    assert_eq!(json["query"], "");
    assert_eq!(json["selected_operators"], serde_json::json!([]));
}
