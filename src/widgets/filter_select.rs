//! The column filter select control: a one-line summary plus a dropdown
//! listing the three filter options.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Widget},
};

use crate::report::{ColumnFilter, FILTER_OPTIONS};

/// Presentation state for the select control: whether the dropdown is
/// open and which option is highlighted. The applied filter itself lives
/// in the report state.
pub struct FilterSelect {
    pub open: bool,
    pub list_state: ListState,
}

impl Default for FilterSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSelect {
    pub fn new() -> Self {
        Self {
            open: false,
            list_state: ListState::default(),
        }
    }

    /// Open the dropdown with the currently applied filter highlighted.
    pub fn open(&mut self, current: ColumnFilter) {
        self.open = true;
        let index = FILTER_OPTIONS
            .iter()
            .position(|option| *option == current.label())
            .unwrap_or(0);
        self.list_state.select(Some(index));
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % FILTER_OPTIONS.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + FILTER_OPTIONS.len() - 1) % FILTER_OPTIONS.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn highlighted(&self) -> Option<&'static str> {
        self.list_state.selected().map(|i| FILTER_OPTIONS[i])
    }
}

/// The closed one-line rendering: `Filter: <label>`.
pub struct SelectLine {
    pub filter: ColumnFilter,
    pub open: bool,
}

impl SelectLine {
    pub fn new(filter: ColumnFilter, open: bool) -> Self {
        Self { filter, open }
    }
}

impl Widget for &SelectLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let marker = if self.open { "▴" } else { "▾" };
        let label_style = if self.open {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let spans = vec![
            Span::styled(" Filter ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.filter.label(), label_style),
            Span::raw(" "),
            Span::styled(marker, Style::default().fg(Color::DarkGray)),
        ];
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// The dropdown body, rendered as an overlay with [`FilterSelect::list_state`].
pub fn dropdown_list() -> List<'static> {
    let items: Vec<ListItem> = FILTER_OPTIONS.iter().map(|o| ListItem::new(*o)).collect();
    List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Filter columns"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ")
}
