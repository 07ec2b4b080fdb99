//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own session lifecycle and query assembly so route
//! handlers can stay focused on protocol translation.

pub mod expiry;
pub mod session;
