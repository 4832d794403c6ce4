use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use datrep::{App, AppEvent, ColumnFilter, OpenOptions, Tab};
use std::path::PathBuf;
use std::sync::mpsc;

mod common;

fn open_app(path: PathBuf, options: OpenOptions) -> App {
    let (tx, _rx) = mpsc::channel();
    let mut app = App::new(tx);
    let mut next = app.event(&AppEvent::Open(path, options));
    while let Some(event) = next {
        next = app.event(&event);
    }
    app
}

fn press(app: &mut App, code: KeyCode) -> Option<AppEvent> {
    app.event(&AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

#[test]
fn test_app_creation() {
    let (tx, _) = mpsc::channel();
    let app = App::new(tx);
    assert!(app.report_state.is_none());
    assert!(app.path().is_none());
}

#[test]
fn test_open_builds_report() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = common::write_employee_csv(dir.path());
    let app = open_app(csv_path.clone(), OpenOptions::default());

    let state = app.report_state.as_ref().unwrap();
    assert_eq!(state.report().columns.len(), 8);
    assert_eq!(state.report().num_rows, 10);
    assert_eq!(state.active_tab(), Tab::Columns);
    assert_eq!(app.path(), Some(csv_path.as_path()));
    assert!(app.status().is_some());
}

#[test]
fn test_quit_key_exits() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = common::write_employee_csv(dir.path());
    let mut app = open_app(csv_path, OpenOptions::default());
    assert!(matches!(press(&mut app, KeyCode::Char('q')), Some(AppEvent::Exit)));
}

#[test]
fn test_filter_selection_through_dropdown() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = common::write_employee_csv(dir.path());
    let mut app = open_app(csv_path, OpenOptions::default());

    press(&mut app, KeyCode::Char('f'));
    assert!(app.filter_select.open);

    // Highlight starts on the applied option (All); one step down is Numeric
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(!app.filter_select.open);

    let state = app.report_state.as_ref().unwrap();
    assert_eq!(state.filter(), ColumnFilter::Numeric);
    assert_eq!(state.column_visible_by_id("col_7"), Some(true));
    assert_eq!(state.column_visible_by_id("col_0"), Some(false));
}

#[test]
fn test_escape_closes_dropdown_without_applying() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = common::write_employee_csv(dir.path());
    let mut app = open_app(csv_path, OpenOptions::default());

    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Esc);

    assert!(!app.filter_select.open);
    let state = app.report_state.as_ref().unwrap();
    assert_eq!(state.filter(), ColumnFilter::All);
}

#[test]
fn test_tab_keys_and_select_visibility() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = common::write_employee_csv(dir.path());
    let mut app = open_app(csv_path, OpenOptions::default());

    press(&mut app, KeyCode::Char('3'));
    {
        let state = app.report_state.as_ref().unwrap();
        assert_eq!(state.active_tab(), Tab::Interactions);
        assert!(!state.filter_select_visible());
    }

    // The select is hidden here, so 'f' must not open the dropdown
    press(&mut app, KeyCode::Char('f'));
    assert!(!app.filter_select.open);

    press(&mut app, KeyCode::Char('2'));
    {
        let state = app.report_state.as_ref().unwrap();
        assert_eq!(state.active_tab(), Tab::Sample);
        assert!(state.filter_select_visible());
    }
}

#[test]
fn test_filter_persists_across_tab_switches() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = common::write_employee_csv(dir.path());
    let mut app = open_app(csv_path, OpenOptions::default());

    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('1'));

    let state = app.report_state.as_ref().unwrap();
    assert_eq!(state.filter(), ColumnFilter::Numeric);
    assert_eq!(state.column_visible_by_id("col_7"), Some(true));
    assert_eq!(state.column_visible_by_id("col_0"), Some(false));
}

#[test]
fn test_tab_key_cycles_views() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = common::write_employee_csv(dir.path());
    let mut app = open_app(csv_path, OpenOptions::default());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.report_state.as_ref().unwrap().active_tab(), Tab::Sample);
    press(&mut app, KeyCode::Tab);
    assert_eq!(
        app.report_state.as_ref().unwrap().active_tab(),
        Tab::Interactions
    );
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.report_state.as_ref().unwrap().active_tab(), Tab::Columns);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(
        app.report_state.as_ref().unwrap().active_tab(),
        Tab::Interactions
    );
}

#[test]
fn test_start_tab_option() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = common::write_employee_csv(dir.path());
    let options = OpenOptions::new().with_start_tab(Tab::Sample);
    let app = open_app(csv_path, options);
    assert_eq!(app.report_state.as_ref().unwrap().active_tab(), Tab::Sample);
}

#[test]
fn test_sample_rows_option() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = common::write_employee_csv(dir.path());
    let options = OpenOptions::new().with_sample_rows(4);
    let app = open_app(csv_path, options);
    assert_eq!(app.report_state.as_ref().unwrap().report().sample.len(), 4);
}

#[test]
fn test_open_missing_file_crashes_cleanly() {
    let (tx, _rx) = mpsc::channel();
    let mut app = App::new(tx);

    let missing = PathBuf::from("no/such/file.csv");
    let next = app
        .event(&AppEvent::Open(missing, OpenOptions::default()))
        .unwrap();
    let crash = app.event(&next);
    assert!(matches!(crash, Some(AppEvent::Crash(_))));
    assert!(app.report_state.is_none());
}

#[test]
fn test_open_unknown_extension_crashes_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xyz");
    std::fs::write(&path, "not a table").unwrap();

    let (tx, _rx) = mpsc::channel();
    let mut app = App::new(tx);
    let next = app
        .event(&AppEvent::Open(path, OpenOptions::default()))
        .unwrap();
    let crash = app.event(&next);
    assert!(matches!(crash, Some(AppEvent::Crash(_))));
}
