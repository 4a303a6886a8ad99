//! TUI rendering
//!
//! - `colors`: Color palette definitions
//! - `picker`: Branch picker overlay and its layout

pub mod colors;
pub mod picker;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    render_session(frame, app);

    if let Some(picker) = &app.picker {
        picker::render_branch_picker_overlay(frame, &app.config, picker);
    }
}

/// Create a centered rect with percentage width and absolute height
#[must_use]
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_session(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let snapshot = app.branches.read();
    let label = Style::default().fg(colors::TEXT_DIM);
    let value = Style::default()
        .fg(colors::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD);
    let none = Style::default().fg(colors::TEXT_MUTED);

    let base = app.session.base_branch.as_deref().map_or_else(
        || Span::styled("(none)", none),
        |branch| Span::styled(branch.to_string(), value.fg(colors::ACCENT_POSITIVE)),
    );
    let current = snapshot.current_branch.as_deref().map_or_else(
        || Span::styled("(detached)", none),
        |branch| Span::styled(branch.to_string(), value),
    );

    let lines = vec![
        Line::from(""),
        Line::from(vec![Span::styled("  Base branch:    ", label), base]),
        Line::from(vec![Span::styled("  Checked out:    ", label), current]),
        Line::from(vec![
            Span::styled("  Local branches: ", label),
            Span::styled(snapshot.branches.len().to_string(), value),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" New Session ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::SURFACE));
    frame.render_widget(paragraph, chunks[0]);

    let status = Paragraph::new(Line::from(Span::styled(
        " b pick branch • Enter accept • q quit",
        Style::default().fg(colors::TEXT_MUTED),
    )));
    frame.render_widget(status, chunks[1]);
}
