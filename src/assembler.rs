//! Query assembly.
//!
//! DESIGN
//! ======
//! A `QueryAssembler` is the whole selection state of one builder session:
//! an insertion-ordered set of operator tokens, one shared value applied to
//! every token, and free-text search terms. `build_query` is a pure
//! derivation over that state and is re-run after every mutation.
//!
//! Operators are designed to directly prefix their value (`site:` +
//! `example.com`), so a token and the shared value are concatenated with no
//! separator. Fragments are then joined with single spaces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAssembler {
    /// Selected operator tokens, unique, in first-insertion order.
    selected_operators: Vec<String>,
    /// Value appended to every selected operator.
    shared_value: String,
    /// Search terms appended after the operator fragments.
    free_text: String,
}

impl QueryAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `token`. Returns `false` when it was already selected.
    ///
    /// Any string is accepted; tokens are not checked against the catalog.
    pub fn add_operator(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if self.selected_operators.contains(&token) {
            return false;
        }
        self.selected_operators.push(token);
        true
    }

    /// Deselect `token`. Returns `false` when it was not selected.
    pub fn remove_operator(&mut self, token: &str) -> bool {
        let before = self.selected_operators.len();
        self.selected_operators.retain(|op| op != token);
        self.selected_operators.len() != before
    }

    pub fn set_shared_value(&mut self, value: impl Into<String>) {
        self.shared_value = value.into();
    }

    pub fn set_free_text(&mut self, text: impl Into<String>) {
        self.free_text = text.into();
    }

    #[must_use]
    pub fn selected_operators(&self) -> &[String] {
        &self.selected_operators
    }

    #[must_use]
    pub fn shared_value(&self) -> &str {
        &self.shared_value
    }

    #[must_use]
    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    /// Render the current selection as one query string.
    #[must_use]
    pub fn build_query(&self) -> String {
        let mut query = self
            .selected_operators
            .iter()
            .map(|op| format!("{op}{}", self.shared_value))
            .collect::<Vec<_>>()
            .join(" ");
        if !self.free_text.is_empty() {
            query.push(' ');
            query.push_str(&self.free_text);
        }
        query.trim_matches(is_trimmable).to_owned()
    }

    /// Clear the selection, the shared value, and the free text.
    pub fn reset(&mut self) {
        self.selected_operators.clear();
        self.shared_value.clear();
        self.free_text.clear();
    }
}

/// Whitespace plus the byte-order mark, which browsers also strip.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[cfg(test)]
#[path = "assembler_test.rs"]
mod tests;
