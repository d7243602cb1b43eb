//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use crate::core::state::App;
use crate::firewall::{Rule, RuleBackend};

/// A scripted backend that records every command it is asked to run.
#[derive(Default)]
pub struct FakeBackend {
    pub rules: Mutex<Vec<Rule>>,
    pub commands: Mutex<Vec<String>>,
    /// When true, every `run()` reports failure.
    pub fail_commands: bool,
}

impl FakeBackend {
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self {
            rules: Mutex::new(rules),
            ..Default::default()
        }
    }

    pub fn issued_commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl RuleBackend for FakeBackend {
    fn list(&self) -> Vec<Rule> {
        self.rules.lock().unwrap().clone()
    }

    fn run(&self, command: &str) -> bool {
        self.commands.lock().unwrap().push(command.to_string());
        !self.fail_commands
    }
}

/// Shorthand for building rules in tests.
pub fn rule(number: &str, body: &str) -> Rule {
    Rule {
        number: number.to_string(),
        body: body.to_string(),
    }
}

/// Creates a test App backed by an empty FakeBackend.
pub fn test_app() -> App {
    App::new(Arc::new(FakeBackend::default()))
}
