//! User-visible strings of the branch picker

use serde::{Deserialize, Serialize};

/// Text shown by the picker. Every field can be overridden from the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    /// Placeholder in the empty search field
    pub search_placeholder: String,
    /// Header of the current-branch group
    pub your_branches: String,
    /// Header of the remaining branches
    pub other_branches: String,
    /// Shown when the store holds no branches
    pub no_branches: String,
    /// Shown when the search matched nothing
    pub no_matching_branches: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            search_placeholder: "Search branches...".to_string(),
            your_branches: "Your branches".to_string(),
            other_branches: "Other branches".to_string(),
            no_branches: "No branches found".to_string(),
            no_matching_branches: "No matching branches".to_string(),
        }
    }
}
