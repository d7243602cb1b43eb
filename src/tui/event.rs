use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events. Mode-dependent keys (`a`, `d`, `e`, `q`)
/// arrive as `InputChar` and are interpreted by the event loop, since the
/// same character is a command in Browsing mode and text in Command mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    InputChar(char),
    Backspace,
    Submit,
    Escape,
    CursorUp,
    CursorDown,
    /// Ctrl+C — under raw mode this arrives as a key event, not a signal.
    ForceQuit,
    Resize,
}

/// Block until the next terminal event and translate it. Returns `None`
/// for events the UI doesn't react to (mouse, focus, key release).
pub fn read_event() -> std::io::Result<Option<TuiEvent>> {
    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            Ok(match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
                    Some(TuiEvent::InputChar(c))
                }
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                _ => None,
            })
        }
        Event::Resize(_, _) => Ok(Some(TuiEvent::Resize)),
        _ => Ok(None),
    }
}
