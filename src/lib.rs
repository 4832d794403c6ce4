use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use tracing::info;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::{buffer::Buffer, widgets::Widget};

use ratatui::widgets::{Clear, Paragraph, StatefulWidget};

pub mod config;
pub mod logging;
pub mod report;
pub mod source;
pub mod statistics;
pub mod widgets;

pub use config::{AppConfig, ConfigManager};
pub use datrep_cli::{Args, FileFormat};
pub use report::{ColumnFilter, Report, ReportError, ReportState, Tab, FILTER_OPTIONS};

use widgets::columns::ColumnsTable;
use widgets::controls::Controls;
use widgets::filter_select::{dropdown_list, FilterSelect, SelectLine};
use widgets::interactions::AssociationsTable;
use widgets::sample::SampleTable;
use widgets::tabs::TabBar;

/// Application name used for the config directory and other app-specific paths
pub const APP_NAME: &str = "datrep";

#[derive(Default, Clone)]
pub struct OpenOptions {
    pub delimiter: Option<u8>,
    pub has_header: Option<bool>,
    pub skip_rows: Option<usize>,
    pub format: Option<FileFormat>,
    pub sample_rows: Option<usize>,
    pub start_tab: Option<Tab>,
}

impl OpenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = Some(has_header);
        self
    }

    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = Some(skip_rows);
        self
    }

    pub fn with_sample_rows(mut self, sample_rows: usize) -> Self {
        self.sample_rows = Some(sample_rows);
        self
    }

    pub fn with_start_tab(mut self, tab: Tab) -> Self {
        self.start_tab = Some(tab);
        self
    }

    /// Create OpenOptions from CLI args and config, with CLI args taking precedence
    pub fn from_args_and_config(args: &Args, config: &AppConfig) -> Result<Self> {
        let mut opts = OpenOptions::new();

        opts.delimiter = args.delimiter.or(config.file_loading.delimiter);
        opts.skip_rows = args.skip_rows.or(config.file_loading.skip_rows);

        // Handle has_header: CLI no_header flag overrides config
        opts.has_header = if let Some(no_header) = args.no_header {
            Some(!no_header)
        } else {
            config.file_loading.has_header
        };

        opts.format = args.format;
        opts.sample_rows = args.sample_rows.or(Some(config.display.sample_rows));

        // Start tab: CLI arg overrides config; both must name an existing tab
        let start_tab = args.tab.as_deref().or(config.display.start_tab.as_deref());
        opts.start_tab = match start_tab {
            Some(id) => Some(
                Tab::from_target_id(id)
                    .ok_or_else(|| color_eyre::eyre::eyre!("unknown tab: {:?}", id))?,
            ),
            None => None,
        };

        Ok(opts)
    }
}

pub enum AppEvent {
    Key(KeyEvent),
    Open(PathBuf, OpenOptions),
    DoLoad(PathBuf, OpenOptions), // Internal event to actually perform loading after UI update
    Resize(u16, u16),
    Exit,
    Crash(String),
}

#[derive(Clone, Debug, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading {
        file_path: PathBuf,
    },
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading { .. })
    }
}

pub struct App {
    pub report_state: Option<ReportState>,
    pub filter_select: FilterSelect,
    path: Option<PathBuf>,
    events: Sender<AppEvent>,
    scroll: [usize; 3],
    status: Option<String>,
    loading_state: LoadingState,
    sample_rows: usize,
}

impl App {
    pub fn new(events: Sender<AppEvent>) -> App {
        Self::new_with_config(events, AppConfig::default())
    }

    pub fn new_with_config(events: Sender<AppEvent>, config: AppConfig) -> App {
        App {
            report_state: None,
            filter_select: FilterSelect::new(),
            path: None,
            events,
            scroll: [0; 3],
            status: None,
            loading_state: LoadingState::Idle,
            sample_rows: config.display.sample_rows,
        }
    }

    pub fn send_event(&mut self, event: AppEvent) -> Result<()> {
        self.events.send(event)?;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn event(&mut self, event: &AppEvent) -> Option<AppEvent> {
        match event {
            AppEvent::Key(key) => self.key(key),
            AppEvent::Open(path, options) => {
                // Set loading state first, then trigger a render before actually loading
                self.loading_state = LoadingState::Loading {
                    file_path: path.clone(),
                };
                Some(AppEvent::DoLoad(path.clone(), options.clone()))
            }
            AppEvent::DoLoad(path, options) => match self.load(path, options) {
                Ok(()) => None,
                Err(e) => {
                    self.loading_state = LoadingState::Idle;
                    Some(AppEvent::Crash(e.to_string()))
                }
            },
            AppEvent::Resize(_cols, _rows) => None,
            // Exit and Crash unwind in the event loop
            AppEvent::Exit | AppEvent::Crash(_) => None,
        }
    }

    fn load(&mut self, path: &Path, options: &OpenOptions) -> Result<()> {
        let df = source::load_dataframe(path, options)?;
        let sample_rows = options.sample_rows.unwrap_or(self.sample_rows);
        let report = Report::from_dataframe(&df, sample_rows)?;
        let mut state = ReportState::new(report);
        if let Some(tab) = options.start_tab {
            state.set_tab(tab);
        }

        info!(path = %path.display(), "report ready");
        self.status = Some(format!(
            "{}: {} rows, {} columns",
            path.display(),
            state.report().num_rows,
            state.report().columns.len()
        ));
        self.loading_state = LoadingState::Idle;
        self.report_state = Some(state);
        self.path = Some(path.to_path_buf());
        self.filter_select = FilterSelect::new();
        self.scroll = [0; 3];
        Ok(())
    }

    fn key(&mut self, event: &KeyEvent) -> Option<AppEvent> {
        let Some(state) = &mut self.report_state else {
            if event.code == KeyCode::Char('q') {
                return Some(AppEvent::Exit);
            }
            return None;
        };

        // The dropdown captures input while open
        if self.filter_select.open {
            match event.code {
                KeyCode::Esc => self.filter_select.close(),
                KeyCode::Down => self.filter_select.select_next(),
                KeyCode::Up => self.filter_select.select_prev(),
                KeyCode::Enter => {
                    if let Some(option) = self.filter_select.highlighted() {
                        match state.select_filter(option) {
                            Ok(()) => {
                                self.status = Some(format!("Filter: {}", state.filter().label()));
                            }
                            Err(e) => self.status = Some(e.to_string()),
                        }
                    }
                    self.filter_select.close();
                }
                _ => {}
            }
            return None;
        }

        match event.code {
            KeyCode::Char('q') => return Some(AppEvent::Exit),
            KeyCode::Tab => state.set_tab(state.active_tab().next()),
            KeyCode::BackTab => state.set_tab(state.active_tab().prev()),
            KeyCode::Char('1') => {
                if let Err(e) = state.activate_tab(Tab::Columns.target_id()) {
                    self.status = Some(e.to_string());
                }
            }
            KeyCode::Char('2') => {
                if let Err(e) = state.activate_tab(Tab::Sample.target_id()) {
                    self.status = Some(e.to_string());
                }
            }
            KeyCode::Char('3') => {
                if let Err(e) = state.activate_tab(Tab::Interactions.target_id()) {
                    self.status = Some(e.to_string());
                }
            }
            KeyCode::Char('f') => {
                if state.filter_select_visible() {
                    self.filter_select.open(state.filter());
                }
            }
            KeyCode::Down => {
                let tab = state.active_tab().index();
                self.scroll[tab] = self.scroll[tab].saturating_add(1);
            }
            KeyCode::Up => {
                let tab = state.active_tab().index();
                self.scroll[tab] = self.scroll[tab].saturating_sub(1);
            }
            _ => {}
        }
        None
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let select_visible = self
            .report_state
            .as_ref()
            .is_some_and(|s| s.filter_select_visible());

        let mut constraints = vec![Constraint::Length(1)]; // Tab bar
        if select_visible {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Fill(1)); // Body
        if self.status.is_some() {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1)); // Controls
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut idx = 0;
        let active_tab = self
            .report_state
            .as_ref()
            .map(|s| s.active_tab())
            .unwrap_or_default();
        TabBar::new(active_tab).render(layout[idx], buf);
        idx += 1;

        let mut select_area = Rect::default();
        if select_visible {
            select_area = layout[idx];
            idx += 1;
        }
        let body_area = layout[idx];
        idx += 1;
        let status_area = if self.status.is_some() {
            let a = layout[idx];
            idx += 1;
            Some(a)
        } else {
            None
        };
        let controls_area = layout[idx];

        if let LoadingState::Loading { file_path } = &self.loading_state {
            Paragraph::new(format!("Loading {} ...", file_path.display()))
                .centered()
                .render(body_area, buf);
        } else if let Some(state) = &self.report_state {
            if select_visible {
                SelectLine::new(state.filter(), self.filter_select.open).render(select_area, buf);
            }
            let offset = self.scroll[state.active_tab().index()];
            match state.active_tab() {
                Tab::Columns => ColumnsTable::new(state, offset).render(body_area, buf),
                Tab::Sample => SampleTable::new(state, offset).render(body_area, buf),
                Tab::Interactions => {
                    AssociationsTable::new(state.report(), offset).render(body_area, buf)
                }
            }
        } else {
            Paragraph::new("No report loaded")
                .centered()
                .render(body_area, buf);
        }

        if let (Some(status_area), Some(status)) = (status_area, &self.status) {
            Paragraph::new(status.as_str())
                .style(Style::default().fg(Color::DarkGray))
                .render(status_area, buf);
        }

        let row_count = self.report_state.as_ref().map(|s| s.report().num_rows);
        let controls = Controls::new()
            .with_row_count(row_count)
            .with_filter_enabled(select_visible);
        (&controls).render(controls_area, buf);

        // Dropdown overlay goes last so it paints over the body
        if self.filter_select.open {
            let popup = Rect::new(
                select_area.x,
                select_area.y.saturating_add(1),
                24,
                FILTER_OPTIONS.len() as u16 + 2,
            )
            .intersection(area);
            Clear.render(popup, buf);
            StatefulWidget::render(dropdown_list(), popup, buf, &mut self.filter_select.list_state);
        }
    }
}
