//! Builder session routes.
//!
//! Operator tokens travel in JSON bodies rather than path segments because
//! catalog tokens such as `intitle:"Index of /"` contain `/`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Json, Redirect};
use serde::Deserialize;
use uuid::Uuid;

use crate::services::session::{self, SessionError, SessionSnapshot};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OperatorBody {
    pub operator: String,
}

#[derive(Debug, Deserialize)]
pub struct ValueBody {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct TextBody {
    pub text: String,
}

pub(crate) fn session_error_to_status(err: SessionError) -> StatusCode {
    match err {
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
        SessionError::AtCapacity { .. } => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// `POST /api/sessions` — start a new builder session.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), StatusCode> {
    let snapshot = session::create_session(&state).await.map_err(|e| {
        tracing::warn!(error = %e, "session create rejected");
        session_error_to_status(e)
    })?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// `GET /api/sessions/:id` — current snapshot.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    let snapshot = session::get_session(&state, id)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(snapshot))
}

/// `DELETE /api/sessions/:id` — end the session.
pub async fn end_session(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, StatusCode> {
    session::end_session(&state, id)
        .await
        .map_err(session_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/sessions/:id/operators` — select an operator.
pub async fn add_operator(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<OperatorBody>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    let snapshot = session::add_operator(&state, id, body.operator)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(snapshot))
}

/// `DELETE /api/sessions/:id/operators` — deselect an operator.
pub async fn remove_operator(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<OperatorBody>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    let snapshot = session::remove_operator(&state, id, &body.operator)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(snapshot))
}

/// `PUT /api/sessions/:id/value` — set the shared operator value.
pub async fn set_value(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ValueBody>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    let snapshot = session::set_shared_value(&state, id, body.value)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(snapshot))
}

/// `PUT /api/sessions/:id/text` — set the free-text search terms.
pub async fn set_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<TextBody>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    let snapshot = session::set_free_text(&state, id, body.text)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(snapshot))
}

/// `POST /api/sessions/:id/reset` — clear selection, value, and text.
pub async fn reset(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<SessionSnapshot>, StatusCode> {
    let snapshot = session::reset(&state, id)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(snapshot))
}

/// `GET /api/sessions/:id/query` — built query as plain text, for the clipboard.
pub async fn query_text(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<String, StatusCode> {
    session::built_query(&state, id)
        .await
        .map_err(session_error_to_status)
}

/// `GET /api/sessions/:id/search` — redirect to the search engine.
///
/// Only a non-empty query is ever sent out; an empty one is `400`.
pub async fn search_redirect(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Redirect, StatusCode> {
    let url = session::search_url(&state, id)
        .await
        .map_err(session_error_to_status)?
        .ok_or(StatusCode::BAD_REQUEST)?;
    tracing::info!(%id, "search opened");
    Ok(Redirect::to(url.as_str()))
}

#[cfg(test)]
#[path = "sessions_test.rs"]
mod tests;
