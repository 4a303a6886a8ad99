//! Mouse input handling: click a branch to select it, click outside to dismiss.

use crate::app::App;
use crate::tui::render::picker::{BodyLine, body_lines, picker_layout, rect_contains};
use ratatui::{
    crossterm::event::{MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
};

/// Handle a mouse event against the frame that was last drawn.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, frame_area: Rect) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        handle_left_click(app, mouse.column, mouse.row, frame_area);
    }
}

enum Target {
    Backdrop,
    Row(usize),
    Panel,
}

fn handle_left_click(app: &mut App, x: u16, y: u16, frame_area: Rect) {
    let Some(picker) = &app.picker else {
        return;
    };

    let target = {
        let view = picker.view();
        let lines = body_lines(&view, &app.config.labels);
        let layout = picker_layout(&app.config, picker, &lines, frame_area);

        if rect_contains(layout.area, x, y) {
            match layout.body_line_at(x, y).and_then(|line| lines.get(line)) {
                Some(BodyLine::Branch { index, .. }) => Target::Row(*index),
                _ => Target::Panel,
            }
        } else {
            Target::Backdrop
        }
    };

    match target {
        Target::Backdrop => {
            app.with_picker(|picker, host| picker.dismiss(host));
        }
        Target::Row(index) => {
            app.with_picker(|picker, host| picker.click_row(index, host));
        }
        Target::Panel => {}
    }
}
