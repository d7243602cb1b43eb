//! # Application State
//!
//! Core session state. This module contains domain data only -
//! no TUI-specific types. Selection and scroll position live in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn RuleBackend>   // external ipfw boundary
//! ├── rules: Vec<Rule>                // latest snapshot from `ipfw list`
//! ├── status_message: String          // transient status line text
//! └── command_history: Vec<String>    // successfully executed commands
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::firewall::{Rule, RuleBackend};

pub struct App {
    pub backend: Arc<dyn RuleBackend>,
    /// Snapshot of the current ruleset, refreshed every loop iteration.
    pub rules: Vec<Rule>,
    pub status_message: String,
    pub command_history: Vec<String>,
}

impl App {
    pub fn new(backend: Arc<dyn RuleBackend>) -> Self {
        Self {
            backend,
            rules: Vec::new(),
            status_message: String::new(),
            command_history: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.rules.is_empty());
        assert!(app.status_message.is_empty());
        assert!(app.command_history.is_empty());
    }
}
