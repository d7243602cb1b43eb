//! Reusable TUI components.

pub mod command_line;
pub mod rule_list;

pub use command_line::{CommandEvent, CommandLine};
pub use rule_list::{RuleList, RuleListState};
