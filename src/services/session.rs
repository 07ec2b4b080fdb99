//! Session service — create, mutate, snapshot, and end builder sessions.
//!
//! DESIGN
//! ======
//! Every mutation takes the session map write lock, applies one assembler
//! operation, touches the session, and re-derives the query before the lock
//! is released. Callers always get back a snapshot that reflects exactly the
//! state their mutation produced.
//!
//! The assembler accepts any token. Nothing here checks tokens against the
//! catalog.

use reqwest::Url;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::assembler::QueryAssembler;
use crate::search::SearchEngine;
use crate::state::{AppState, Session};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(Uuid),
    #[error("session limit reached (max {limit})")]
    AtCapacity { limit: usize },
}

/// Point-in-time view of a session, returned by every session route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub selected_operators: Vec<String>,
    pub shared_value: String,
    pub free_text: String,
    pub query: String,
    /// `None` while the query is empty.
    pub search_url: Option<String>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn new(id: Uuid, assembler: &QueryAssembler, engine: &SearchEngine) -> Self {
        let query = assembler.build_query();
        let search_url = engine.url_for(&query).map(String::from);
        Self {
            id,
            selected_operators: assembler.selected_operators().to_vec(),
            shared_value: assembler.shared_value().to_owned(),
            free_text: assembler.free_text().to_owned(),
            query,
            search_url,
        }
    }
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Start a new, empty session.
pub async fn create_session(state: &AppState) -> Result<SessionSnapshot, SessionError> {
    let limit = state.config.sessions.max_sessions;
    let id = Uuid::new_v4();
    let session = Session::new();
    let snapshot = SessionSnapshot::new(id, &session.assembler, &state.config.search);

    let mut sessions = state.sessions.write().await;
    if sessions.len() >= limit {
        return Err(SessionError::AtCapacity { limit });
    }
    sessions.insert(id, session);
    let live = sessions.len();
    drop(sessions);

    info!(%id, live, "session created");
    Ok(snapshot)
}

/// Current snapshot of a session. Reading counts as activity.
pub async fn get_session(state: &AppState, id: Uuid) -> Result<SessionSnapshot, SessionError> {
    update_session(state, id, |_| {}).await
}

/// Discard a session and its selection state.
pub async fn end_session(state: &AppState, id: Uuid) -> Result<(), SessionError> {
    let removed = state.sessions.write().await.remove(&id);
    if removed.is_none() {
        return Err(SessionError::NotFound(id));
    }
    info!(%id, "session ended");
    Ok(())
}

/// Apply `f` to a session's assembler and return the resulting snapshot.
pub async fn update_session<F>(state: &AppState, id: Uuid, f: F) -> Result<SessionSnapshot, SessionError>
where
    F: FnOnce(&mut QueryAssembler),
{
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
    f(&mut session.assembler);
    session.touch();
    Ok(SessionSnapshot::new(id, &session.assembler, &state.config.search))
}

// =============================================================================
// OPERATIONS
// =============================================================================

pub async fn add_operator(state: &AppState, id: Uuid, operator: String) -> Result<SessionSnapshot, SessionError> {
    update_session(state, id, |asm| {
        let added = asm.add_operator(operator.as_str());
        debug!(%id, operator = %operator, added, "add operator");
    })
    .await
}

pub async fn remove_operator(state: &AppState, id: Uuid, operator: &str) -> Result<SessionSnapshot, SessionError> {
    update_session(state, id, |asm| {
        let removed = asm.remove_operator(operator);
        debug!(%id, operator = %operator, removed, "remove operator");
    })
    .await
}

pub async fn set_shared_value(state: &AppState, id: Uuid, value: String) -> Result<SessionSnapshot, SessionError> {
    update_session(state, id, |asm| asm.set_shared_value(value)).await
}

pub async fn set_free_text(state: &AppState, id: Uuid, text: String) -> Result<SessionSnapshot, SessionError> {
    update_session(state, id, |asm| asm.set_free_text(text)).await
}

pub async fn reset(state: &AppState, id: Uuid) -> Result<SessionSnapshot, SessionError> {
    update_session(state, id, |asm| {
        asm.reset();
        debug!(%id, "session reset");
    })
    .await
}

/// Built query text for the clipboard.
pub async fn built_query(state: &AppState, id: Uuid) -> Result<String, SessionError> {
    Ok(get_session(state, id).await?.query)
}

/// Search URL for the session's current query, `None` while it is empty.
pub async fn search_url(state: &AppState, id: Uuid) -> Result<Option<Url>, SessionError> {
    let query = built_query(state, id).await?;
    Ok(state.config.search.url_for(&query))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
