//! Branch picker overlay rendering
//!
//! Layout is computed by [`picker_layout`], which the mouse handler also uses
//! for hit-testing, so clicks always land on what was drawn.

use crate::config::{Config, Labels};
use crate::picker::{BranchPicker, Focus, PickerView};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect_absolute;
use super::colors;

/// Lines above the list: search field and a rule.
const HEADER_LINES: u16 = 2;
/// Lines below the list: key hints.
const FOOTER_LINES: u16 = 1;
/// Top and bottom border.
const BORDER_LINES: u16 = 2;

/// One line of the picker body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine<'a> {
    /// Group header
    Header(&'a str),
    /// Divider between the two groups
    Separator,
    /// A selectable branch; `index` is its position in the flattened groups
    Branch {
        /// Flattened row index
        index: usize,
        /// Branch name
        name: String,
    },
    /// Empty-state message
    Message(&'a str),
}

/// Body lines for `view`, in display order.
///
/// Empty groups are omitted with their header; the divider appears only
/// when both groups are present.
#[must_use]
pub fn body_lines<'a>(view: &PickerView, labels: &'a Labels) -> Vec<BodyLine<'a>> {
    let groups = match view {
        PickerView::NoBranches => return vec![BodyLine::Message(&labels.no_branches)],
        PickerView::NoMatches => return vec![BodyLine::Message(&labels.no_matching_branches)],
        PickerView::Groups(groups) => groups,
    };

    let mut lines = Vec::new();
    let mut index = 0;
    if !groups.yours.is_empty() {
        lines.push(BodyLine::Header(&labels.your_branches));
        for name in &groups.yours {
            lines.push(BodyLine::Branch {
                index,
                name: name.clone(),
            });
            index += 1;
        }
    }
    if !groups.others.is_empty() {
        if !groups.yours.is_empty() {
            lines.push(BodyLine::Separator);
        }
        lines.push(BodyLine::Header(&labels.other_branches));
        for name in &groups.others {
            lines.push(BodyLine::Branch {
                index,
                name: name.clone(),
            });
            index += 1;
        }
    }
    lines
}

/// Screen geometry of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerLayout {
    /// Whole panel, borders included
    pub area: Rect,
    /// Rows holding body lines
    pub body: Rect,
    /// Index of the first body line shown
    pub scroll: usize,
}

impl PickerLayout {
    /// Body line index under screen row `y`, if any.
    #[must_use]
    pub fn body_line_at(&self, x: u16, y: u16) -> Option<usize> {
        if !rect_contains(self.body, x, y) {
            return None;
        }
        Some(self.scroll + usize::from(y - self.body.y))
    }
}

/// Compute the picker geometry for the current frame.
#[must_use]
pub fn picker_layout(
    config: &Config,
    picker: &BranchPicker,
    lines: &[BodyLine<'_>],
    frame_area: Rect,
) -> PickerLayout {
    let max_rows = u16::try_from(config.max_visible_rows).unwrap_or(u16::MAX);
    let chrome = HEADER_LINES + FOOTER_LINES + BORDER_LINES;
    let height = chrome.saturating_add(max_rows).min(frame_area.height);
    let area = centered_rect_absolute(config.picker_width_percent, height, frame_area);

    let body = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1 + HEADER_LINES),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(chrome),
    };

    let visible = usize::from(body.height).max(1);
    let cursor_line = picker
        .cursor_in(&picker.view())
        .and_then(|cursor| {
            lines
                .iter()
                .position(|line| matches!(line, BodyLine::Branch { index, .. } if *index == cursor))
        })
        .unwrap_or(0);
    let max_scroll = lines.len().saturating_sub(visible);
    let scroll = cursor_line
        .saturating_sub(visible - 1)
        .min(max_scroll);

    PickerLayout { area, body, scroll }
}

/// Whether `(x, y)` lies inside `area`.
#[must_use]
pub const fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

/// Render the branch picker overlay
pub fn render_branch_picker_overlay(frame: &mut Frame<'_>, config: &Config, picker: &BranchPicker) {
    let labels = &config.labels;
    let view = picker.view();
    let lines = body_lines(&view, labels);
    let layout = picker_layout(config, picker, &lines, frame.area());
    let cursor = picker.cursor_in(&view);

    let mut text: Vec<Line<'_>> = Vec::new();
    text.push(search_line(picker, labels));
    text.push(Line::from(Span::styled(
        "─".repeat(usize::from(layout.body.width)),
        Style::default().fg(colors::BORDER),
    )));

    let visible = usize::from(layout.body.height);
    for line in lines.iter().skip(layout.scroll).take(visible) {
        text.push(render_body_line(line, picker, cursor));
    }
    for _ in lines.len().saturating_sub(layout.scroll)..visible {
        text.push(Line::from(""));
    }

    let hidden_below = lines.len().saturating_sub(layout.scroll + visible);
    let hint = if hidden_below > 0 {
        format!("↓{hidden_below} more • ↑/↓ select • Enter confirm • Esc cancel")
    } else {
        "↑/↓ select • Enter confirm • Esc cancel".to_string()
    };
    text.push(Line::from(Span::styled(
        hint,
        Style::default().fg(colors::TEXT_MUTED),
    )));

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Select Branch ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, layout.area);
    frame.render_widget(paragraph, layout.area);
}

fn search_line<'a>(picker: &'a BranchPicker, labels: &'a Labels) -> Line<'a> {
    let focused = picker.focus() == Focus::Search;
    let prompt_style = if focused {
        Style::default().fg(colors::SELECTED)
    } else {
        Style::default().fg(colors::TEXT_DIM)
    };

    let mut spans = vec![Span::styled("> ", prompt_style)];
    if picker.search().is_empty() {
        if focused {
            spans.push(Span::styled("_", Style::default().fg(colors::TEXT_PRIMARY)));
        }
        spans.push(Span::styled(
            labels.search_placeholder.as_str(),
            Style::default().fg(colors::TEXT_MUTED),
        ));
    } else {
        let cursor = if focused { "_" } else { "" };
        spans.push(Span::styled(
            format!("{}{cursor}", picker.search()),
            Style::default().fg(colors::TEXT_PRIMARY),
        ));
    }
    Line::from(spans).style(Style::default().bg(colors::INPUT_BG))
}

fn render_body_line<'a>(
    line: &BodyLine<'a>,
    picker: &BranchPicker,
    cursor: Option<usize>,
) -> Line<'a> {
    match line {
        BodyLine::Header(title) => Line::from(Span::styled(
            title.to_uppercase(),
            Style::default()
                .fg(colors::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        )),
        BodyLine::Separator => Line::from(Span::styled(
            "──────",
            Style::default().fg(colors::TEXT_MUTED),
        )),
        BodyLine::Message(message) => Line::from(Span::styled(
            *message,
            Style::default().fg(colors::TEXT_MUTED),
        )),
        BodyLine::Branch { index, name } => {
            let under_cursor = cursor == Some(*index) && picker.focus() == Focus::List;
            let is_selected = picker.selected_branch() == Some(name.as_str());

            let mut style = Style::default().fg(if is_selected {
                colors::SELECTED
            } else {
                colors::TEXT_PRIMARY
            });
            if under_cursor {
                style = style
                    .bg(colors::SURFACE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD);
            }

            let prefix = if under_cursor { "▶ " } else { "  " };
            let mut spans = vec![Span::styled(format!("{prefix}{name}"), style)];
            if is_selected {
                spans.push(Span::styled(
                    " ✓",
                    Style::default().fg(colors::ACCENT_POSITIVE),
                ));
            }
            Line::from(spans)
        }
    }
}
