//! Integration tests for TUI rendering
//!
//! Uses ratatui's `TestBackend` to verify rendering without a real terminal.

use branchpick::app::{App, Mode};
use branchpick::config::Config;
use branchpick::store::{BranchUpdate, BranchWriter, branch_store};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

fn create_test_app(branches: &[&str], current: Option<&str>, mode: Mode) -> (BranchWriter, App) {
    let (mut writer, store) = branch_store();
    writer.update(BranchUpdate::new(branches.iter().copied(), current));
    (writer, App::new(Config::default(), store, None, mode))
}

fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

fn draw(app: &App) -> Result<String, Box<dyn std::error::Error>> {
    let mut terminal = Terminal::new(TestBackend::new(100, 40))?;
    terminal.draw(|frame| branchpick::tui::render(frame, app))?;
    Ok(buffer_text(terminal.backend().buffer()))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        branchpick::tui::handle_key_event(app, KeyCode::Char(c), KeyModifiers::NONE);
    }
}

#[test]
fn test_render_session_screen() -> Result<(), Box<dyn std::error::Error>> {
    let (_writer, app) = create_test_app(&["main", "dev"], Some("main"), Mode::Session);
    let text = draw(&app)?;

    assert!(text.contains("New Session"));
    assert!(text.contains("Base branch:"));
    assert!(text.contains("(none)"));
    assert!(!text.contains("Select Branch"));
    Ok(())
}

#[test]
fn test_render_picker_with_both_groups() -> Result<(), Box<dyn std::error::Error>> {
    let (_writer, app) = create_test_app(&["main", "dev"], Some("main"), Mode::PickerOnly);
    let text = draw(&app)?;

    assert!(text.contains("Select Branch"));
    assert!(text.contains("YOUR BRANCHES"));
    assert!(text.contains("OTHER BRANCHES"));
    assert!(text.contains("Search branches..."));
    Ok(())
}

#[test]
fn test_render_feature_search_hides_your_branches() -> Result<(), Box<dyn std::error::Error>> {
    let (_writer, mut app) = create_test_app(
        &["main", "feature/x", "feature/y"],
        Some("main"),
        Mode::PickerOnly,
    );
    type_text(&mut app, "feature");
    let text = draw(&app)?;

    assert!(!text.contains("YOUR BRANCHES"));
    assert!(text.contains("OTHER BRANCHES"));
    assert!(text.contains("feature/x"));
    assert!(text.contains("feature/y"));
    assert!(!text.contains("No branches found"));
    assert!(!text.contains("No matching branches"));
    Ok(())
}

#[test]
fn test_render_no_branches() -> Result<(), Box<dyn std::error::Error>> {
    let (_writer, app) = create_test_app(&[], None, Mode::PickerOnly);
    let text = draw(&app)?;

    assert!(text.contains("No branches found"));
    assert!(!text.contains("YOUR BRANCHES"));
    assert!(!text.contains("OTHER BRANCHES"));
    Ok(())
}

#[test]
fn test_render_no_matching_branches() -> Result<(), Box<dyn std::error::Error>> {
    let (_writer, mut app) = create_test_app(&["main"], Some("main"), Mode::PickerOnly);
    type_text(&mut app, "zzz");
    let text = draw(&app)?;

    assert!(text.contains("No matching branches"));
    assert!(!text.contains("No branches found"));
    Ok(())
}

#[test]
fn test_render_only_current_branch_omits_other_section() -> Result<(), Box<dyn std::error::Error>>
{
    let (_writer, app) = create_test_app(&["main"], Some("main"), Mode::PickerOnly);
    let text = draw(&app)?;

    assert!(text.contains("YOUR BRANCHES"));
    assert!(!text.contains("OTHER BRANCHES"));
    Ok(())
}

#[test]
fn test_render_marks_selected_branch() -> Result<(), Box<dyn std::error::Error>> {
    let (mut writer, store) = branch_store();
    writer.update(BranchUpdate::new(["main", "dev"], Some("main")));
    let app = App::new(
        Config::default(),
        store,
        Some("dev".to_string()),
        Mode::PickerOnly,
    );
    let text = draw(&app)?;

    assert!(text.contains("dev ✓"));
    assert!(!text.contains("main ✓"));
    Ok(())
}

#[test]
fn test_render_uses_configured_labels() -> Result<(), Box<dyn std::error::Error>> {
    let (_writer, store) = branch_store();
    let mut config = Config::default();
    config.labels.no_branches = "Nothing to pick".to_string();
    let app = App::new(config, store, None, Mode::PickerOnly);
    let text = draw(&app)?;

    assert!(text.contains("Nothing to pick"));
    Ok(())
}

#[test]
fn test_render_reflects_store_update_on_next_frame() -> Result<(), Box<dyn std::error::Error>> {
    let (mut writer, app) = create_test_app(&[], None, Mode::PickerOnly);
    assert!(draw(&app)?.contains("No branches found"));

    writer.update(BranchUpdate::new(["main"], Some("main")));
    let text = draw(&app)?;
    assert!(text.contains("YOUR BRANCHES"));
    assert!(!text.contains("No branches found"));
    Ok(())
}

#[test]
fn test_render_small_terminal_does_not_panic() -> Result<(), Box<dyn std::error::Error>> {
    let (_writer, app) = create_test_app(&["main", "dev"], Some("main"), Mode::PickerOnly);
    let mut terminal = Terminal::new(TestBackend::new(20, 6))?;
    terminal.draw(|frame| branchpick::tui::render(frame, &app))?;
    Ok(())
}
