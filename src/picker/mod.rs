//! Branch picker: a searchable, grouped view over the branch store
//!
//! The picker owns only transient state (search term, focus, cursor). The
//! branch list is read from the [`BranchStore`] every time a view is built,
//! so an update is reflected by the very next render. Results are reported
//! to the hosting surface through [`PickerHost`].

mod filter;

pub use filter::{BranchGroups, PickerView, filter_branches, partition};

use crate::store::BranchStore;
use tracing::{debug, info};

/// Surface hosting a picker. Receives the user's choice and the dismissal.
pub trait PickerHost {
    /// A branch row was activated.
    fn on_select(&mut self, branch: &str);

    /// The picker was dismissed, after a selection or on its own.
    fn on_close(&mut self);
}

/// Which part of the picker receives typed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The search field
    #[default]
    Search,
    /// The branch list
    List,
}

/// Visibility of a picker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Accepting input
    Shown,
    /// Closed; ignores all input
    Hidden,
}

/// A branch picker instance.
#[derive(Debug)]
pub struct BranchPicker {
    store: BranchStore,
    search: String,
    selected_branch: Option<String>,
    focus: Focus,
    cursor: usize,
    visibility: Visibility,
}

impl BranchPicker {
    /// Show a picker over `store`.
    ///
    /// `selected_branch` comes from the host and only drives highlighting.
    /// Focus starts on the search field.
    #[must_use]
    pub fn open(store: BranchStore, selected_branch: Option<String>) -> Self {
        debug!(selected = ?selected_branch, "Opening branch picker");
        Self {
            store,
            search: String::new(),
            selected_branch,
            focus: Focus::Search,
            cursor: 0,
            visibility: Visibility::Shown,
        }
    }

    /// The current view of the store, filtered by the search term.
    #[must_use]
    pub fn view(&self) -> PickerView {
        PickerView::build(&self.store.read(), &self.search)
    }

    /// Search term typed so far.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Branch the host marked as selected.
    #[must_use]
    pub fn selected_branch(&self) -> Option<&str> {
        self.selected_branch.as_deref()
    }

    /// Part of the picker holding focus.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether the picker still accepts input.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    /// Current visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Cursor position, clamped to the rows of `view`.
    #[must_use]
    pub fn cursor_in(&self, view: &PickerView) -> Option<usize> {
        let count = view.row_count();
        (count > 0).then(|| self.cursor.min(count - 1))
    }

    /// Cursor position against a freshly built view.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor_in(&self.view())
    }

    /// Append a character to the search term.
    pub fn push_char(&mut self, c: char) {
        if !self.is_shown() {
            return;
        }
        self.search.push(c);
        self.cursor = 0;
        self.focus = Focus::Search;
    }

    /// Remove the last character of the search term.
    pub fn backspace(&mut self) {
        if !self.is_shown() {
            return;
        }
        self.search.pop();
        self.cursor = 0;
        self.focus = Focus::Search;
    }

    /// Toggle focus between the search field and the list.
    pub fn toggle_focus(&mut self) {
        if !self.is_shown() {
            return;
        }
        self.focus = match self.focus {
            Focus::Search => Focus::List,
            Focus::List => Focus::Search,
        };
    }

    /// Move the cursor down, wrapping around.
    pub fn select_next(&mut self) {
        if !self.is_shown() {
            return;
        }
        let view = self.view();
        if let Some(cursor) = self.cursor_in(&view) {
            self.cursor = (cursor + 1) % view.row_count();
            self.focus = Focus::List;
        }
    }

    /// Move the cursor up, wrapping around.
    pub fn select_prev(&mut self) {
        if !self.is_shown() {
            return;
        }
        let view = self.view();
        if let Some(cursor) = self.cursor_in(&view) {
            self.cursor = cursor.checked_sub(1).unwrap_or(view.row_count() - 1);
            self.focus = Focus::List;
        }
    }

    /// Activate the row under the cursor. Returns whether a row was activated.
    pub fn confirm(&mut self, host: &mut dyn PickerHost) -> bool {
        let view = self.view();
        let Some(index) = self.cursor_in(&view) else {
            return false;
        };
        self.activate_row(&view, index, host)
    }

    /// Activate the row at `index` of the flattened groups, as a click does.
    /// Returns whether a row was activated.
    pub fn click_row(&mut self, index: usize, host: &mut dyn PickerHost) -> bool {
        let view = self.view();
        self.activate_row(&view, index, host)
    }

    /// Close without selecting (backdrop click, Esc).
    pub fn dismiss(&mut self, host: &mut dyn PickerHost) {
        if !self.is_shown() {
            return;
        }
        debug!("Branch picker dismissed");
        self.close(host);
    }

    fn activate_row(&mut self, view: &PickerView, index: usize, host: &mut dyn PickerHost) -> bool {
        if !self.is_shown() {
            return false;
        }
        let Some(branch) = view.groups().and_then(|groups| groups.row(index)) else {
            return false;
        };

        info!(branch, "Branch selected");
        self.cursor = index;
        host.on_select(branch);
        self.close(host);
        true
    }

    fn close(&mut self, host: &mut dyn PickerHost) {
        self.visibility = Visibility::Hidden;
        host.on_close();
    }
}
