//! # Actions
//!
//! Everything that can happen in a session becomes an `Action`.
//! Operator presses `d`? That's `Action::DeleteSelected`. A command
//! finished running? That's `Action::CommandFinished(outcome)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must
//! perform. No side effects happen here — `ipfw` is invoked by the event
//! loop, which then feeds the outcome back in as another action.

use crate::core::state::App;
use crate::firewall::Rule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fresh snapshot arrived from the rule backend.
    RulesLoaded(Vec<Rule>),
    /// Operator asked to delete the rule at the given list index.
    DeleteSelected { index: usize },
    /// Operator submitted a raw command from the command line.
    SubmitCommand(String),
    /// The backend finished running a command.
    CommandFinished(CommandOutcome),
    /// Clear the transient status line.
    ClearStatus,
    Quit,
}

/// Result of one backend invocation, fed back into the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// The raw command text that was passed to the backend.
    pub command: String,
    pub kind: CommandKind,
    pub ok: bool,
}

/// Distinguishes keybinding-generated commands from typed ones, so the
/// status line can name the rule that was deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// `delete <number>` issued by the `d` keybinding.
    Delete(String),
    /// Anything typed into the command line.
    Manual,
}

/// I/O the event loop must perform after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run `ipfw <command>` and report back with `Action::CommandFinished`.
    RunCommand { command: String, kind: CommandKind },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::RulesLoaded(rules) => {
            app.rules = rules;
            Effect::None
        }
        Action::DeleteSelected { index } => match app.rules.get(index) {
            Some(rule) => Effect::RunCommand {
                command: format!("delete {}", rule.number),
                kind: CommandKind::Delete(rule.number.clone()),
            },
            // The list was empty or shrank under us; nothing to delete.
            None => Effect::None,
        },
        Action::SubmitCommand(text) => Effect::RunCommand {
            command: text,
            kind: CommandKind::Manual,
        },
        Action::CommandFinished(outcome) => {
            app.status_message = match (&outcome.kind, outcome.ok) {
                (CommandKind::Delete(number), true) => format!("Deleted rule {number}"),
                (CommandKind::Delete(_), false) => "Error deleting rule".to_string(),
                (CommandKind::Manual, true) => "Command executed successfully".to_string(),
                (CommandKind::Manual, false) => "Error executing command".to_string(),
            };
            if outcome.ok && !outcome.command.trim().is_empty() {
                app.command_history.push(outcome.command);
            }
            Effect::None
        }
        Action::ClearStatus => {
            app.status_message.clear();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{rule, test_app};

    #[test]
    fn test_rules_loaded_replaces_snapshot() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::RulesLoaded(vec![rule("100", "allow tcp from any to any 22")]),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.rules.len(), 1);
        assert_eq!(app.rules[0].number, "100");
    }

    #[test]
    fn test_delete_selected_issues_exact_command() {
        let mut app = test_app();
        app.rules = vec![
            rule("100", "allow tcp from any to any 22"),
            rule("65000", "allow ip from any to any"),
        ];
        let effect = update(&mut app, Action::DeleteSelected { index: 1 });
        assert_eq!(
            effect,
            Effect::RunCommand {
                command: "delete 65000".to_string(),
                kind: CommandKind::Delete("65000".to_string()),
            }
        );
    }

    #[test]
    fn test_delete_out_of_bounds_is_noop() {
        let mut app = test_app();
        let effect = update(&mut app, Action::DeleteSelected { index: 0 });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_successful_command_records_history_and_status() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::CommandFinished(CommandOutcome {
                command: "add 200 deny tcp from any to any 23".to_string(),
                kind: CommandKind::Manual,
                ok: true,
            }),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.status_message, "Command executed successfully");
        assert_eq!(
            app.command_history,
            vec!["add 200 deny tcp from any to any 23".to_string()]
        );
    }

    #[test]
    fn test_failed_command_sets_error_and_skips_history() {
        let mut app = test_app();
        update(
            &mut app,
            Action::CommandFinished(CommandOutcome {
                command: "add nonsense".to_string(),
                kind: CommandKind::Manual,
                ok: false,
            }),
        );
        assert_eq!(app.status_message, "Error executing command");
        assert!(app.command_history.is_empty());
    }

    #[test]
    fn test_delete_outcome_names_the_rule() {
        let mut app = test_app();
        update(
            &mut app,
            Action::CommandFinished(CommandOutcome {
                command: "delete 65000".to_string(),
                kind: CommandKind::Delete("65000".to_string()),
                ok: true,
            }),
        );
        assert_eq!(app.status_message, "Deleted rule 65000");
        assert_eq!(app.command_history, vec!["delete 65000".to_string()]);
    }

    #[test]
    fn test_blank_command_never_enters_history() {
        let mut app = test_app();
        update(
            &mut app,
            Action::CommandFinished(CommandOutcome {
                command: "   ".to_string(),
                kind: CommandKind::Manual,
                ok: true,
            }),
        );
        assert!(app.command_history.is_empty());
    }

    #[test]
    fn test_clear_status() {
        let mut app = test_app();
        app.status_message = "Deleted rule 100".to_string();
        update(&mut app, Action::ClearStatus);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
