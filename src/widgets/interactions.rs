use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, Widget},
};

use crate::report::Report;

/// Interactions tab body: pairwise Pearson associations between numeric
/// columns, strongest first.
pub struct AssociationsTable<'a> {
    report: &'a Report,
    offset: usize,
}

impl<'a> AssociationsTable<'a> {
    pub fn new(report: &'a Report, offset: usize) -> Self {
        Self { report, offset }
    }
}

impl Widget for AssociationsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Interactions");

        if self.report.associations.is_empty() {
            Paragraph::new("No numeric column pairs to compare")
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(["left", "right", "pearson"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .report
            .associations
            .iter()
            .skip(self.offset)
            .map(|assoc| {
                Row::new(vec![
                    self.report.columns[assoc.left].name.clone(),
                    self.report.columns[assoc.right].name.clone(),
                    format!("{:+.3}", assoc.pearson),
                ])
            })
            .collect();

        let widths = [
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths).header(header).block(block);
        Widget::render(table, area, buf);
    }
}
