//! # Rule List Component
//!
//! Scrollable, selectable view of the current ruleset.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RuleListState` lives in `TuiState` across loop iterations
//! - `RuleList` is created each frame with borrowed rules and state
//!
//! Invariant: with a non-empty list, `offset <= selected < rules.len()`.
//! Navigation moves `selected`; the render pass pulls `offset` along so
//! the selection stays inside the viewport.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::firewall::Rule;

/// Persistent selection and scroll state for the rule list.
pub struct RuleListState {
    pub selected: usize,
    pub offset: usize,
    pub list_state: ListState,
}

impl RuleListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            offset: 0,
            list_state: ListState::default(),
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    pub fn select_next(&mut self, rule_count: usize) {
        if self.selected + 1 < rule_count {
            self.selected += 1;
        }
    }

    /// Pull the scroll offset along so the selection is inside a viewport
    /// of the given height.
    pub fn scroll_to_selected(&mut self, viewport: usize) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if viewport > 0 && self.selected >= self.offset + viewport {
            self.offset = self.selected + 1 - viewport;
        }
    }

    /// Re-establish the invariants after a refresh. Rules can disappear
    /// between iterations when a delete succeeds.
    pub fn clamp(&mut self, rule_count: usize) {
        if rule_count == 0 {
            self.selected = 0;
            self.offset = 0;
            self.list_state.select(None);
            return;
        }
        self.selected = self.selected.min(rule_count - 1);
        self.offset = self.offset.min(self.selected);
    }
}

impl Default for RuleListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the rule list.
pub struct RuleList<'a> {
    rules: &'a [Rule],
    state: &'a mut RuleListState,
}

impl<'a> RuleList<'a> {
    pub fn new(rules: &'a [Rule], state: &'a mut RuleListState) -> Self {
        Self { rules, state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp(self.rules.len());
        self.state.scroll_to_selected(area.height as usize);

        if self.rules.is_empty() {
            let empty = Paragraph::new("No rules reported by ipfw.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        // Last column is reserved for the scrollbar.
        let content_width = area.width.saturating_sub(1) as usize;

        let items: Vec<ListItem> = self
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                let text = truncate_display(&format!("{}: {}", rule.number, rule.body), content_width);
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(Span::styled(text, style)))
            })
            .collect();

        self.state.list_state.select(Some(self.state.selected));
        *self.state.list_state.offset_mut() = self.state.offset;

        frame.render_stateful_widget(List::new(items), area, &mut self.state.list_state);
        self.render_scrollbar(frame, area);
    }

    fn render_scrollbar(&mut self, frame: &mut Frame, area: Rect) {
        let viewport = area.height as usize;
        if self.rules.len() <= viewport {
            return;
        }

        // ScrollbarState content_length is max scrollable position, not total items
        let max_scroll = self.rules.len() - viewport;
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll)
            .position(self.state.offset.min(max_scroll));

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y,
            width: 1,
            height: area.height,
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

/// Truncate a string to fit within `max_width` display columns, adding
/// "..." if needed.
fn truncate_display(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
