//! Terminal user interface: session screen and branch picker overlay

mod input;
mod render;

pub use input::{handle_key_event, handle_mouse_event};
pub use render::render;

use crate::app::{App, Event, Handler};
use crate::git::{self, BranchSource};
use crate::store::BranchWriter;
use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use tracing::debug;

/// Repository feeding the branch store while the UI runs.
pub type Feed<'a> = (&'a BranchSource, &'a mut BranchWriter);

/// Run the TUI until the application quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored
pub fn run(app: &mut App, feed: Option<Feed<'_>>) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.tick_rate_ms);
    let result = run_loop(&mut terminal, app, &event_handler, feed);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
    mut feed: Option<Feed<'_>>,
) -> Result<()> {
    let refresh_every = app.config.refresh_every_ticks();
    let mut tick_count: u64 = 0;

    loop {
        let frame_area = terminal.draw(|frame| render(frame, app))?.area;

        match event_handler.next()? {
            Event::Tick => {
                tick_count += 1;
                if tick_count % refresh_every == 0
                    && let Some((source, writer)) = feed.as_mut()
                    && git::refresh_or_warn(source, writer)
                {
                    debug!(revision = app.branches.revision(), "Branches refreshed");
                }
            }
            Event::Key(key) => handle_key_event(app, key.code, key.modifiers),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse, frame_area),
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
