//! Report model: columns, filter selection, tabs, and the state struct
//! that keeps column visibility consistent with the current selection.

use std::fmt;

use color_eyre::Result;
use polars::prelude::*;
use tracing::debug;

use crate::statistics::{compute_associations, is_numeric_dtype, summarize_column, Association, ColumnSummary};

/// Placeholder shown for null cells in the Sample tab.
pub const NULL_DISPLAY: &str = "∅";

/// The three filter options, in the order they appear in the select control.
/// The labels are a compatibility surface; do not reword them.
pub const FILTER_OPTIONS: [&str; 3] = ["All columns", "Numeric columns", "Non-numeric columns"];

/// Current choice governing which columns are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnFilter {
    #[default]
    All,
    Numeric,
    NonNumeric,
}

impl ColumnFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All columns",
            Self::Numeric => "Numeric columns",
            Self::NonNumeric => "Non-numeric columns",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "All columns" => Some(Self::All),
            "Numeric columns" => Some(Self::Numeric),
            "Non-numeric columns" => Some(Self::NonNumeric),
            _ => None,
        }
    }

    /// Whether a column with the given numeric classification is shown
    /// under this filter.
    pub fn matches(&self, numeric: bool) -> bool {
        match self {
            Self::All => true,
            Self::Numeric => numeric,
            Self::NonNumeric => !numeric,
        }
    }
}

/// A named view within the report. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Columns,
    Sample,
    Interactions,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Columns, Tab::Sample, Tab::Interactions];

    /// Stable identifier used for tab activation.
    pub fn target_id(&self) -> &'static str {
        match self {
            Self::Columns => "columns-tab",
            Self::Sample => "sample-tab",
            Self::Interactions => "interactions-tab",
        }
    }

    pub fn from_target_id(id: &str) -> Option<Self> {
        match id {
            "columns-tab" => Some(Self::Columns),
            "sample-tab" => Some(Self::Sample),
            "interactions-tab" => Some(Self::Interactions),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Columns => "Columns",
            Self::Sample => "Sample",
            Self::Interactions => "Interactions",
        }
    }

    /// The filter select control is shown on the Columns and Sample tabs only.
    pub fn shows_filter_select(&self) -> bool {
        matches!(self, Self::Columns | Self::Sample)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Columns => 0,
            Self::Sample => 1,
            Self::Interactions => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Rejection of an operation with unrecognized input. Prior state is
/// left intact in both cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    InvalidOption(String),
    UnknownTab(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOption(option) => write!(f, "unrecognized filter option: {option:?}"),
            Self::UnknownTab(id) => write!(f, "unknown tab: {id:?}"),
        }
    }
}

impl std::error::Error for ReportError {}

/// One column of the report. Count and classification are fixed when the
/// report is built; only visibility (held in [`ReportState`]) changes.
pub struct ReportColumn {
    pub name: String,
    pub dtype: DataType,
    pub numeric: bool,
    pub summary: ColumnSummary,
}

/// The immutable data behind the three tabs.
pub struct Report {
    pub columns: Vec<ReportColumn>,
    pub sample: Vec<Vec<String>>,
    pub associations: Vec<Association>,
    pub num_rows: usize,
}

impl Report {
    /// Stable element id for a column, by ordinal position in the frame.
    pub fn column_id(index: usize) -> String {
        format!("col_{index}")
    }

    /// Build the report from a collected frame: per-column classification
    /// and summary, the first `sample_rows` rows rendered to display
    /// strings, and pairwise associations across numeric columns.
    pub fn from_dataframe(df: &DataFrame, sample_rows: usize) -> Result<Self> {
        let mut columns = Vec::with_capacity(df.width());
        for col in df.get_columns() {
            let series = col.as_materialized_series();
            let summary = summarize_column(series)?;
            columns.push(ReportColumn {
                name: col.name().to_string(),
                dtype: col.dtype().clone(),
                numeric: is_numeric_dtype(col.dtype()),
                summary,
            });
        }

        let take = df.height().min(sample_rows);
        let mut sample = Vec::with_capacity(take);
        for row in 0..take {
            let mut cells = Vec::with_capacity(columns.len());
            for col in df.get_columns() {
                cells.push(display_value(&col.get(row)?));
            }
            sample.push(cells);
        }

        let associations = compute_associations(df)?;

        debug!(
            columns = columns.len(),
            rows = df.height(),
            associations = associations.len(),
            "report built"
        );

        Ok(Report {
            columns,
            sample,
            associations,
            num_rows: df.height(),
        })
    }
}

// Nulls render as a placeholder; embedded newlines are flattened so a
// cell never spans terminal rows.
fn display_value(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => NULL_DISPLAY.to_string(),
        _ => value.str_value().replace(['\n', '\r'], " "),
    }
}

/// Owned widget state: the current filter selection, the active tab, and
/// the derived per-column visibility. All mutation goes through
/// [`select_filter`](Self::select_filter) / [`activate_tab`](Self::activate_tab)
/// or their typed equivalents.
pub struct ReportState {
    report: Report,
    filter: ColumnFilter,
    active_tab: Tab,
    visible: Vec<bool>,
}

impl ReportState {
    pub fn new(report: Report) -> Self {
        let visible = vec![true; report.columns.len()];
        Self {
            report,
            filter: ColumnFilter::All,
            active_tab: Tab::Columns,
            visible,
        }
    }

    /// Apply a filter option by its user-facing label. Unrecognized labels
    /// are rejected with [`ReportError::InvalidOption`] and state is
    /// unchanged. On success every column's visibility is recomputed
    /// before returning.
    pub fn select_filter(&mut self, option: &str) -> Result<(), ReportError> {
        let filter = ColumnFilter::from_label(option)
            .ok_or_else(|| ReportError::InvalidOption(option.to_string()))?;
        self.set_filter(filter);
        Ok(())
    }

    /// Typed equivalent of [`select_filter`](Self::select_filter); infallible.
    pub fn set_filter(&mut self, filter: ColumnFilter) {
        self.filter = filter;
        for (slot, column) in self.visible.iter_mut().zip(&self.report.columns) {
            *slot = filter.matches(column.numeric);
        }
        debug!(filter = filter.label(), "filter applied");
    }

    /// Activate a tab by its target identifier. Unknown ids are rejected
    /// with [`ReportError::UnknownTab`] and state is unchanged. The filter
    /// selection and column visibilities persist across tab switches.
    pub fn activate_tab(&mut self, id: &str) -> Result<(), ReportError> {
        let tab = Tab::from_target_id(id).ok_or_else(|| ReportError::UnknownTab(id.to_string()))?;
        self.set_tab(tab);
        Ok(())
    }

    /// Typed equivalent of [`activate_tab`](Self::activate_tab); infallible.
    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        debug!(tab = tab.target_id(), "tab activated");
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn filter(&self) -> ColumnFilter {
        self.filter
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Whether the filter select control is shown. A function of the
    /// active tab alone.
    pub fn filter_select_visible(&self) -> bool {
        self.active_tab.shows_filter_select()
    }

    /// Visibility of the column at `index`, or None when out of range.
    pub fn column_visible(&self, index: usize) -> Option<bool> {
        self.visible.get(index).copied()
    }

    /// Visibility of a column by its stable element id (e.g. `col_7`).
    pub fn column_visible_by_id(&self, id: &str) -> Option<bool> {
        let index: usize = id.strip_prefix("col_")?.parse().ok()?;
        self.column_visible(index)
    }

    /// Columns currently shown, with their ordinal positions.
    pub fn visible_columns(&self) -> impl Iterator<Item = (usize, &ReportColumn)> {
        self.report
            .columns
            .iter()
            .enumerate()
            .filter(|(i, _)| self.visible[*i])
    }
}
