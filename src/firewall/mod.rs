//! # Firewall Boundary
//!
//! The external-process seam. Everything the rest of the crate knows about
//! `ipfw` goes through the [`RuleBackend`] trait, so the core and TUI can
//! be exercised in tests with a fake backend.
//!
//! ## Modules
//!
//! - [`ipfw`]: The real backend that shells out to the ipfw binary

mod ipfw;

pub use ipfw::IpfwBackend;

/// One firewall rule as reported by `ipfw list`, identified by a number
/// and free-form body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub number: String,
    pub body: String,
}

/// Source of truth for the ruleset and the sink for mutations.
pub trait RuleBackend: Send + Sync {
    /// Fetch the current ruleset. Any failure degrades to an empty list;
    /// the operator only ever sees an empty screen, never an error.
    fn list(&self) -> Vec<Rule>;

    /// Run one command against the firewall. The text is split on
    /// whitespace into an argument vector. Returns whether the command
    /// exited successfully.
    fn run(&self, command: &str) -> bool;
}

/// Parse `ipfw list` output: one rule per line, rule number first,
/// separated from the body by the first whitespace run. Blank lines and
/// lines without a body are dropped.
pub fn parse_list_output(output: &str) -> Vec<Rule> {
    output
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let (number, rest) = line.split_once(char::is_whitespace)?;
            let body = rest.trim_start();
            if body.is_empty() {
                return None;
            }
            Some(Rule {
                number: number.to_string(),
                body: body.to_string(),
            })
        })
        .collect()
}
