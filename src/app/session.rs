//! Session setup: the surface that hosts the branch picker

use crate::picker::PickerHost;
use tracing::debug;

/// How the session screen ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user accepted the base branch
    Accepted,
    /// The user quit without choosing
    Cancelled,
}

/// Settings being configured for a new session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Base branch chosen so far
    pub base_branch: Option<String>,
    /// Branch names reported through `on_select`, oldest first
    pub selections: Vec<String>,
    /// Number of `on_close` calls received
    pub closes: usize,
}

impl Session {
    /// A session starting from an optional preselected base branch.
    #[must_use]
    pub const fn new(base_branch: Option<String>) -> Self {
        Self {
            base_branch,
            selections: Vec::new(),
            closes: 0,
        }
    }
}

impl PickerHost for Session {
    fn on_select(&mut self, branch: &str) {
        debug!(branch, "Base branch chosen");
        self.base_branch = Some(branch.to_string());
        self.selections.push(branch.to_string());
    }

    fn on_close(&mut self) {
        self.closes += 1;
    }
}
