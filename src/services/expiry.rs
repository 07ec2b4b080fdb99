//! Expiry service — background sweep of idle sessions.
//!
//! DESIGN
//! ======
//! A background task wakes on a fixed interval and drops every session
//! that has not been read or mutated within the idle timeout. Session state
//! is never persisted, so an expired session is simply gone; clients that
//! hit it afterwards get `404` and start a new one.

use std::time::Instant;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::state::AppState;

/// Spawn the background expiry task. Returns a handle for shutdown.
pub fn spawn_expiry_task(state: AppState) -> JoinHandle<()> {
    let limits = state.config.sessions;
    info!(
        idle_secs = limits.idle_timeout.as_secs(),
        sweep_secs = limits.sweep_interval.as_secs(),
        "session expiry configured"
    );
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(limits.sweep_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            sweep_idle_sessions(&state, Instant::now()).await;
        }
    })
}

/// Drop sessions idle for at least the configured timeout as of `now`.
/// Returns the number of sessions removed.
pub async fn sweep_idle_sessions(state: &AppState, now: Instant) -> usize {
    let idle_timeout = state.config.sessions.idle_timeout;
    let mut sessions = state.sessions.write().await;
    let before = sessions.len();
    sessions.retain(|_, session| now.saturating_duration_since(session.last_seen) < idle_timeout);
    let removed = before - sessions.len();
    let live = sessions.len();
    drop(sessions);

    if removed > 0 {
        info!(removed, live, "expired idle sessions");
    } else {
        debug!(live, "no idle sessions");
    }
    removed
}

#[cfg(test)]
#[path = "expiry_test.rs"]
mod tests;
