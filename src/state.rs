//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the parsed configuration and a map of live builder sessions.
//! Each session owns one `QueryAssembler` and the instant it was last
//! touched, which drives idle expiry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::assembler::QueryAssembler;
use crate::config::AppConfig;

// =============================================================================
// SESSION
// =============================================================================

/// Per-session builder state. Never persisted.
#[derive(Debug, Clone)]
pub struct Session {
    pub assembler: QueryAssembler,
    /// Last time a request read or mutated this session.
    pub last_seen: Instant,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self { assembler: QueryAssembler::new(), last_seen: Instant::now() }
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config: Arc::new(config), sessions: Arc::new(RwLock::new(HashMap::new())) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_new_is_empty() {
        let session = Session::new();
        assert!(session.assembler.selected_operators().is_empty());
        assert_eq!(session.assembler.build_query(), "");
    }

    #[test]
    fn session_touch_advances_last_seen() {
        let mut session = Session::new();
        let before = session.last_seen;
        std::thread::sleep(std::time::Duration::from_millis(2));
        session.touch();
        assert!(session.last_seen > before);
    }

    #[tokio::test]
    async fn app_state_clones_share_sessions() {
        let state = test_helpers::test_app_state();
        let clone = state.clone();
        let id = test_helpers::seed_session(&state).await;
        assert!(clone.sessions.read().await.contains_key(&id));
    }
}
