//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop Shape
//!
//! Strictly synchronous: every iteration re-fetches the ruleset, redraws,
//! then blocks on the next key event. The only other blocking point is the
//! external ipfw process during a fetch or command execution. Ctrl+C
//! arrives as a key event under raw mode, so shutdown always goes through
//! the normal exit path and the terminal is restored.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use std::sync::Arc;

use log::info;

use crate::core::action::{update, Action, CommandOutcome, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::firewall::{IpfwBackend, RuleBackend};
use crate::tui::component::EventHandler;
use crate::tui::components::{CommandEvent, CommandLine, RuleListState};
use crate::tui::event::{read_event, TuiEvent};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigate rules with arrow keys; `a`/`d`/`e`/`q` are commands.
    Browsing,
    /// Text editing in the command line. Esc returns to Browsing.
    Command,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub rule_list: RuleListState,
    pub command_line: CommandLine,
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            rule_list: RuleListState::new(),
            command_line: CommandLine::new(),
            input_mode: InputMode::Browsing,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores the terminal on every exit path, including `?` returns.
/// `ratatui::init()` also installs a panic hook for the panic path.
struct RestoreGuard;

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn RuleBackend> = Arc::new(IpfwBackend::new(config.ipfw_path));
    run_loop(backend)
}

fn run_loop(backend: Arc<dyn RuleBackend>) -> std::io::Result<()> {
    let mut app = App::new(backend);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _restore = RestoreGuard;

    loop {
        // Re-fetch the ruleset every iteration; ipfw is the only source of
        // truth and rules may have changed under us.
        let rules = app.backend.list();
        update(&mut app, Action::RulesLoaded(rules));
        tui.rule_list.clamp(app.rules.len());

        // Sync CommandLine props with App state
        if tui.command_line.history != app.command_history {
            tui.command_line.history = app.command_history.clone();
        }

        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;

        let Some(event) = read_event()? else {
            continue;
        };

        if matches!(event, TuiEvent::ForceQuit) {
            info!("Ctrl+C, shutting down");
            break;
        }
        if matches!(event, TuiEvent::Resize) {
            continue;
        }

        // Modal event dispatch
        let effect = match tui.input_mode {
            InputMode::Browsing => match event {
                TuiEvent::InputChar('q' | 'Q') => update(&mut app, Action::Quit),
                TuiEvent::CursorUp => {
                    tui.rule_list.select_prev();
                    Effect::None
                }
                TuiEvent::CursorDown => {
                    tui.rule_list.select_next(app.rules.len());
                    Effect::None
                }
                TuiEvent::InputChar('a' | 'A') => {
                    tui.command_line.open(String::new());
                    tui.input_mode = InputMode::Command;
                    Effect::None
                }
                TuiEvent::InputChar('d' | 'D') => update(
                    &mut app,
                    Action::DeleteSelected {
                        index: tui.rule_list.selected,
                    },
                ),
                TuiEvent::InputChar('e' | 'E') => {
                    if let Some(rule) = app.rules.get(tui.rule_list.selected) {
                        tui.command_line
                            .open(format!("delete {} && add {}", rule.number, rule.body));
                        tui.input_mode = InputMode::Command;
                    }
                    Effect::None
                }
                _ => Effect::None,
            },
            InputMode::Command => match tui.command_line.handle_event(&event) {
                Some(CommandEvent::Execute(text)) => {
                    tui.input_mode = InputMode::Browsing;
                    update(&mut app, Action::SubmitCommand(text))
                }
                Some(CommandEvent::Cancel) => {
                    tui.input_mode = InputMode::Browsing;
                    Effect::None
                }
                _ => Effect::None,
            },
        };

        let mut ran_command = false;
        match effect {
            Effect::Quit => break,
            Effect::RunCommand { command, kind } => {
                let ok = app.backend.run(&command);
                update(
                    &mut app,
                    Action::CommandFinished(CommandOutcome { command, kind, ok }),
                );
                ran_command = true;
            }
            Effect::None => {}
        }

        // The status line survives exactly one round trip: set by a command
        // outcome, cleared on the next Browsing-mode key.
        if !ran_command && tui.input_mode == InputMode::Browsing {
            update(&mut app, Action::ClearStatus);
        }
    }

    Ok(())
}
