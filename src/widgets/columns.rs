use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table, Widget},
};

use crate::report::{Report, ReportState};

/// Columns tab body: one row per visible column with its summary.
pub struct ColumnsTable<'a> {
    state: &'a ReportState,
    offset: usize,
}

impl<'a> ColumnsTable<'a> {
    pub fn new(state: &'a ReportState, offset: usize) -> Self {
        Self { state, offset }
    }
}

impl Widget for ColumnsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new([
            "id", "column", "dtype", "nulls", "distinct", "mean", "std", "min", "max",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .state
            .visible_columns()
            .skip(self.offset)
            .map(|(index, column)| {
                let summary = &column.summary;
                let (mean, std, min, max) = match &summary.numeric {
                    Some(n) => (fmt_num(n.mean), fmt_num(n.std), fmt_num(n.min), fmt_num(n.max)),
                    None => ("-".into(), "-".into(), "-".into(), "-".into()),
                };
                Row::new(vec![
                    Report::column_id(index),
                    column.name.clone(),
                    column.dtype.to_string(),
                    summary.null_count.to_string(),
                    summary.distinct.to_string(),
                    mean,
                    std,
                    min,
                    max,
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(7),
            Constraint::Fill(2),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Columns"));
        Widget::render(table, area, buf);
    }
}

fn fmt_num(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{value:.2}")
    }
}
