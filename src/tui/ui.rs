use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::Frame;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::RuleList;
use crate::tui::{InputMode, TuiState};

const HELP_TEXT: &str = "↑/↓ Navigate | a Add | d Delete | e Edit | q Quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1), Length(1)]);
    let [title_area, help_area, list_area, status_area, command_area] =
        layout.areas(frame.area());

    let title = Line::styled(
        format!("IPFW Configuration ({} rules)", app.rules.len()),
        Style::default().add_modifier(Modifier::BOLD),
    )
    .centered();
    frame.render_widget(title, title_area);

    let help = Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)).centered();
    frame.render_widget(help, help_area);

    RuleList::new(&app.rules, &mut tui.rule_list).render(frame, list_area);

    if !app.status_message.is_empty() {
        let status = Line::styled(
            app.status_message.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        );
        frame.render_widget(status, status_area);
    }

    // The command line (and the terminal cursor) only exist in Command mode.
    if tui.input_mode == InputMode::Command {
        tui.command_line.render(frame, command_area);
    }
}
