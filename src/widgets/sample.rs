use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, Widget},
};

use crate::report::ReportState;

/// Sample tab body: the first rows of the dataset, restricted to the
/// columns the current filter selection shows.
pub struct SampleTable<'a> {
    state: &'a ReportState,
    offset: usize,
}

impl<'a> SampleTable<'a> {
    pub fn new(state: &'a ReportState, offset: usize) -> Self {
        Self { state, offset }
    }
}

impl Widget for SampleTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Sample");
        let visible: Vec<usize> = self.state.visible_columns().map(|(i, _)| i).collect();

        if visible.is_empty() {
            Paragraph::new("No columns match the current filter")
                .block(block)
                .render(area, buf);
            return;
        }

        let report = self.state.report();
        let header = Row::new(
            visible
                .iter()
                .map(|&i| report.columns[i].name.clone())
                .collect::<Vec<_>>(),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = report
            .sample
            .iter()
            .skip(self.offset)
            .map(|cells| Row::new(visible.iter().map(|&i| cells[i].clone()).collect::<Vec<_>>()))
            .collect();

        let widths = vec![Constraint::Fill(1); visible.len()];
        let table = Table::new(rows, widths).header(header).block(block);
        Widget::render(table, area, buf);
    }
}
