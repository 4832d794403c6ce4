use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
};

/// Bottom key-hint bar.
#[derive(Default)]
pub struct Controls {
    pub row_count: Option<usize>,
    pub filter_enabled: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row_count(mut self, row_count: Option<usize>) -> Self {
        self.row_count = row_count;
        self
    }

    pub fn with_filter_enabled(mut self, filter_enabled: bool) -> Self {
        self.filter_enabled = filter_enabled;
        self
    }
}

impl Widget for &Controls {
    fn render(self, area: Rect, buf: &mut Buffer) {
        const CONTROLS: [(&str, &str); 5] = [
            ("Tab", "Next"),
            ("1-3", "Tabs"),
            ("f", "Filter"),
            ("↑↓", "Scroll"),
            ("q", "Quit"),
        ];

        let mut constraints = CONTROLS.iter().fold(vec![], |mut acc, (key, action)| {
            acc.push(Constraint::Length(key.chars().count() as u16 + 2));
            acc.push(Constraint::Length(action.chars().count() as u16 + 1));
            acc
        });

        // Add space for row count if available
        if self.row_count.is_some() {
            constraints.push(Constraint::Length(15));
        }
        constraints.push(Constraint::Fill(1)); // Fill the remaining space

        let layout = Layout::new(Direction::Horizontal, constraints).split(area);
        let color = Color::DarkGray;

        for (i, (key, action)) in CONTROLS.iter().enumerate() {
            let j = i * 2;
            // The filter hint is dimmed on tabs where the select is hidden
            let key_style = if *action == "Filter" && !self.filter_enabled {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Paragraph::new(*key)
                .style(key_style)
                .centered()
                .render(layout[j], buf);
            let action_style = if *action == "Filter" && !self.filter_enabled {
                Style::default().bg(color).fg(Color::DarkGray)
            } else {
                Style::default().bg(color)
            };
            Paragraph::new(*action)
                .style(action_style)
                .render(layout[j + 1], buf);
        }

        let mut fill_start_idx = CONTROLS.len() * 2;
        if let Some(count) = self.row_count {
            let row_count_text = format!("Rows: {}", count);
            Paragraph::new(row_count_text)
                .style(Style::default().bg(color).fg(Color::White))
                .right_aligned()
                .render(layout[fill_start_idx], buf);
            fill_start_idx += 1;
        }

        Paragraph::new("")
            .style(Style::default().bg(color))
            .render(layout[fill_start_idx], buf);
    }
}
