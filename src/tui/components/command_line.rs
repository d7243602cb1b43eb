//! # Command Line Component
//!
//! Single-line entry for raw ipfw commands, shown only in Command mode.
//!
//! ## Responsibilities
//!
//! - Capture text input (printable characters, Backspace)
//! - Recall previous commands with Up/Down (clamped, no wraparound)
//! - Emit `Execute` on Enter and `Cancel` on Esc
//!
//! ## State Management
//!
//! The buffer and history cursor are internal state. The history itself is
//! a prop, synced from `App` by the event loop each iteration so the
//! component never owns business data.

use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PROMPT: &str = "Command: ";

/// High-level events emitted by the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// User pressed Enter; run the buffer as an ipfw command.
    Execute(String),
    /// User pressed Esc; discard the buffer without executing.
    Cancel,
    /// Buffer content changed.
    Changed,
}

pub struct CommandLine {
    /// Text being typed (Internal State)
    pub buffer: String,
    /// Previously executed commands (Prop, synced from App)
    pub history: Vec<String>,
    /// Position in `history`; `history.len()` means "past the end",
    /// i.e. not recalling anything yet.
    history_cursor: usize,
}

impl CommandLine {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            history: Vec::new(),
            history_cursor: 0,
        }
    }

    /// Enter Command mode with the given prefill (empty for `a`, a
    /// delete-then-add template for `e`). Resets history recall.
    pub fn open(&mut self, prefill: String) {
        self.buffer = prefill;
        self.history_cursor = self.history.len();
    }

    #[cfg(test)]
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }
}

impl Default for CommandLine {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for CommandLine {
    type Event = CommandEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(CommandEvent::Changed)
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                Some(CommandEvent::Changed)
            }
            TuiEvent::Submit => {
                let text = std::mem::take(&mut self.buffer);
                Some(CommandEvent::Execute(text))
            }
            TuiEvent::Escape => {
                self.buffer.clear();
                Some(CommandEvent::Cancel)
            }
            TuiEvent::CursorUp => {
                if !self.history.is_empty() && self.history_cursor > 0 {
                    self.history_cursor -= 1;
                    self.buffer = self.history[self.history_cursor].clone();
                    Some(CommandEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorDown => {
                if !self.history.is_empty() && self.history_cursor + 1 < self.history.len() {
                    self.history_cursor += 1;
                    self.buffer = self.history[self.history_cursor].clone();
                    Some(CommandEvent::Changed)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl Component for CommandLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = format!("{PROMPT}{}", self.buffer);
        frame.render_widget(Paragraph::new(text), area);

        let cursor_x = area.x
            + (UnicodeWidthStr::width(PROMPT) + UnicodeWidthStr::width(self.buffer.as_str()))
                .min(area.width.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position((cursor_x, area.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn open_with_history(history: &[&str]) -> CommandLine {
        let mut line = CommandLine::new();
        line.history = history.iter().map(|s| s.to_string()).collect();
        line.open(String::new());
        line
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut line = CommandLine::new();
        line.open(String::new());

        line.handle_event(&TuiEvent::InputChar('a'));
        line.handle_event(&TuiEvent::InputChar('d'));
        line.handle_event(&TuiEvent::InputChar('d'));
        assert_eq!(line.buffer, "add");

        line.handle_event(&TuiEvent::Backspace);
        assert_eq!(line.buffer, "ad");
    }

    #[test]
    fn test_backspace_on_empty_buffer() {
        let mut line = CommandLine::new();
        line.open(String::new());
        line.handle_event(&TuiEvent::Backspace);
        assert_eq!(line.buffer, "");
    }

    #[test]
    fn test_submit_takes_buffer() {
        let mut line = CommandLine::new();
        line.open("delete 100".to_string());

        let event = line.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(CommandEvent::Execute("delete 100".to_string())));
        assert!(line.buffer.is_empty(), "buffer should be cleared after submit");
    }

    #[test]
    fn test_escape_discards_buffer() {
        let mut line = CommandLine::new();
        line.open("half typed".to_string());

        let event = line.handle_event(&TuiEvent::Escape);
        assert_eq!(event, Some(CommandEvent::Cancel));
        assert!(line.buffer.is_empty());
    }

    #[test]
    fn test_history_recall_walks_backwards() {
        let mut line = open_with_history(&["first", "second", "third"]);
        assert_eq!(line.history_cursor(), 3);

        line.handle_event(&TuiEvent::CursorUp);
        assert_eq!(line.buffer, "third");
        line.handle_event(&TuiEvent::CursorUp);
        assert_eq!(line.buffer, "second");
        line.handle_event(&TuiEvent::CursorDown);
        assert_eq!(line.buffer, "third");
    }

    #[test]
    fn test_history_cursor_stays_in_bounds() {
        let mut line = open_with_history(&["one", "two"]);

        for _ in 0..10 {
            line.handle_event(&TuiEvent::CursorUp);
            assert!(line.history_cursor() <= line.history.len());
        }
        assert_eq!(line.history_cursor(), 0);
        assert_eq!(line.buffer, "one");

        for _ in 0..10 {
            line.handle_event(&TuiEvent::CursorDown);
            assert!(line.history_cursor() <= line.history.len());
        }
        assert_eq!(line.history_cursor(), 1);
        assert_eq!(line.buffer, "two");
    }

    #[test]
    fn test_history_recall_with_empty_history() {
        let mut line = CommandLine::new();
        line.open(String::new());
        assert_eq!(line.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(line.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(line.history_cursor(), 0);
    }

    #[test]
    fn test_render_shows_prompt_and_buffer() {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut line = CommandLine::new();
        line.open("add 100 allow".to_string());

        terminal
            .draw(|f| {
                line.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Command: add 100 allow"));
    }
}
