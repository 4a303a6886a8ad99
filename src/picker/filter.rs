//! Search filtering and "your / other" partitioning of branch names

use crate::store::BranchSnapshot;

/// Branches matching the search, split for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchGroups {
    /// The current branch, when it survives the filter (never more than one)
    pub yours: Vec<String>,
    /// Every other matching branch, in original order
    pub others: Vec<String>,
}

impl BranchGroups {
    /// Total number of selectable rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.yours.len() + self.others.len()
    }

    /// Whether neither group has rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.yours.is_empty() && self.others.is_empty()
    }

    /// Rows in display order: `yours` first, then `others`.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.yours
            .iter()
            .chain(self.others.iter())
            .map(String::as_str)
    }

    /// Row at a flattened index.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows().nth(index)
    }
}

/// What the picker body shows for a given store snapshot and search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerView {
    /// The store has no branches at all
    NoBranches,
    /// A non-empty search matched nothing
    NoMatches,
    /// At least one branch matched
    Groups(BranchGroups),
}

impl PickerView {
    /// Compute the view for `snapshot` filtered by `search`.
    #[must_use]
    pub fn build(snapshot: &BranchSnapshot, search: &str) -> Self {
        if snapshot.branches.is_empty() {
            return Self::NoBranches;
        }

        let filtered = filter_branches(&snapshot.branches, search);
        let groups = partition(&filtered, snapshot.current_branch.as_deref());
        if groups.is_empty() && !search.is_empty() {
            Self::NoMatches
        } else {
            Self::Groups(groups)
        }
    }

    /// The groups, if any are shown.
    #[must_use]
    pub const fn groups(&self) -> Option<&BranchGroups> {
        match self {
            Self::Groups(groups) => Some(groups),
            Self::NoBranches | Self::NoMatches => None,
        }
    }

    /// Number of selectable rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.groups().map_or(0, BranchGroups::len)
    }
}

/// Keep branches whose name contains `search`, ignoring case.
///
/// An empty search keeps everything. Order is preserved.
#[must_use]
pub fn filter_branches<'a>(branches: &'a [String], search: &str) -> Vec<&'a str> {
    let search_lower = search.to_lowercase();
    branches
        .iter()
        .filter(|b| search_lower.is_empty() || b.to_lowercase().contains(&search_lower))
        .map(String::as_str)
        .collect()
}

/// Split filtered branches around `current`.
///
/// Equality is by value: every entry equal to `current` is kept out of
/// `others`, and `yours` holds `current` once if it appears at all.
#[must_use]
pub fn partition(filtered: &[&str], current: Option<&str>) -> BranchGroups {
    let yours = match current {
        Some(current) if filtered.contains(&current) => vec![current.to_string()],
        _ => Vec::new(),
    };
    let others = filtered
        .iter()
        .filter(|b| Some(**b) != current)
        .map(|b| (*b).to_string())
        .collect();

    BranchGroups { yours, others }
}
