//! Application state and logic

mod event;
mod session;

pub use event::{Event, Handler};
pub use session::{Outcome, Session};

use crate::config::Config;
use crate::picker::BranchPicker;
use crate::store::BranchStore;
use tracing::info;

/// Which surface the application starts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Session setup screen; the picker opens on demand
    #[default]
    Session,
    /// Picker only; the application ends when it closes
    PickerOnly,
}

/// Top-level application state
#[derive(Debug)]
pub struct App {
    /// Loaded configuration
    pub config: Config,
    /// Read handle to the branch store
    pub branches: BranchStore,
    /// Host of the picker
    pub session: Session,
    /// Open picker, if shown
    pub picker: Option<BranchPicker>,
    /// Starting surface
    pub mode: Mode,
    /// Set once the application is done
    pub outcome: Option<Outcome>,
    /// Whether the main loop should exit
    pub should_quit: bool,
}

impl App {
    /// Create the application. In [`Mode::PickerOnly`] the picker opens immediately.
    #[must_use]
    pub fn new(
        config: Config,
        branches: BranchStore,
        selected_branch: Option<String>,
        mode: Mode,
    ) -> Self {
        let mut app = Self {
            config,
            branches,
            session: Session::new(selected_branch),
            picker: None,
            mode,
            outcome: None,
            should_quit: false,
        };
        if mode == Mode::PickerOnly {
            app.open_picker();
        }
        app
    }

    /// Show the branch picker, highlighting the current base branch.
    pub fn open_picker(&mut self) {
        if self.picker.is_none() {
            self.picker = Some(BranchPicker::open(
                self.branches.clone(),
                self.session.base_branch.clone(),
            ));
        }
    }

    /// Whether the picker is shown.
    #[must_use]
    pub const fn is_picker_open(&self) -> bool {
        self.picker.is_some()
    }

    /// Run `f` against the open picker with the session as its host.
    ///
    /// A picker that closed during `f` is dropped afterwards.
    pub fn with_picker<R>(
        &mut self,
        f: impl FnOnce(&mut BranchPicker, &mut Session) -> R,
    ) -> Option<R> {
        let picker = self.picker.as_mut()?;
        let result = f(picker, &mut self.session);
        self.drop_hidden_picker();
        Some(result)
    }

    /// Accept the base branch, or open the picker if none is chosen yet.
    pub fn accept(&mut self) {
        if self.session.base_branch.is_some() {
            self.finish(Outcome::Accepted);
        } else {
            self.open_picker();
        }
    }

    /// Quit without a choice.
    pub fn cancel(&mut self) {
        self.finish(Outcome::Cancelled);
    }

    /// The branch to report on exit, if the user accepted one.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        match self.outcome {
            Some(Outcome::Accepted) => self.session.base_branch.as_deref(),
            Some(Outcome::Cancelled) | None => None,
        }
    }

    fn drop_hidden_picker(&mut self) {
        if self.picker.as_ref().is_some_and(|p| !p.is_shown()) {
            self.picker = None;
            if self.mode == Mode::PickerOnly {
                let outcome = if self.session.selections.is_empty() {
                    Outcome::Cancelled
                } else {
                    Outcome::Accepted
                };
                self.finish(outcome);
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(?outcome, base = ?self.session.base_branch, "Session finished");
        self.outcome = Some(outcome);
        self.should_quit = true;
    }
}
