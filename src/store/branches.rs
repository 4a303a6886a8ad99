//! Branch store: the known local branches and the checked-out branch

use super::{Store, Subscription, Writer, channel};
use std::sync::Arc;
use tracing::debug;

/// Snapshot of the workspace's branches.
///
/// `current_branch` is informational: it is not required to appear in
/// `branches`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchSnapshot {
    /// Branch names in display order, as supplied by the writer
    pub branches: Vec<String>,
    /// The checked-out branch, if any
    pub current_branch: Option<String>,
}

/// Payload for [`BranchWriter::update`]. Both fields are always replaced together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchUpdate {
    /// New branch list
    pub branches: Vec<String>,
    /// New current branch
    pub current_branch: Option<String>,
}

impl BranchUpdate {
    /// Build an update from anything yielding branch names.
    #[must_use]
    pub fn new<I, S>(branches: I, current_branch: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            branches: branches.into_iter().map(Into::into).collect(),
            current_branch: current_branch.map(str::to_string),
        }
    }
}

/// Read handle to the branch store. Cheap to clone.
#[derive(Debug, Clone)]
pub struct BranchStore {
    store: Store<BranchSnapshot>,
}

/// Sole writer of the branch store.
#[derive(Debug)]
pub struct BranchWriter {
    writer: Writer<BranchSnapshot>,
}

/// Create an empty branch store: no branches, no current branch.
#[must_use]
pub fn branch_store() -> (BranchWriter, BranchStore) {
    let (writer, store) = channel(BranchSnapshot::default());
    (BranchWriter { writer }, BranchStore { store })
}

impl BranchStore {
    /// Current snapshot.
    #[must_use]
    pub fn read(&self) -> Arc<BranchSnapshot> {
        self.store.read()
    }

    /// Number of updates applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// Receive every future snapshot, synchronously with each update.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<BranchSnapshot>
    where
        F: Fn(&Arc<BranchSnapshot>) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }
}

impl BranchWriter {
    /// Replace the branch list and the current branch in one step.
    ///
    /// Requires exclusive access, so a writer shared by reference cannot
    /// publish:
    ///
    /// ```compile_fail
    /// let (writer, _store) = branchpick::branch_store();
    /// let shared = &writer;
    /// std::thread::scope(|s| {
    ///     s.spawn(|| shared.update(branchpick::BranchUpdate::default()));
    ///     s.spawn(|| shared.update(branchpick::BranchUpdate::default()));
    /// });
    /// ```
    pub fn update(&mut self, payload: BranchUpdate) {
        let BranchUpdate {
            branches,
            current_branch,
        } = payload;
        debug!(
            count = branches.len(),
            current = current_branch.as_deref().unwrap_or("<none>"),
            "Updating branch store"
        );
        self.writer.set(BranchSnapshot {
            branches,
            current_branch,
        });
    }

    /// A new read handle onto this store.
    #[must_use]
    pub fn reader(&self) -> BranchStore {
        BranchStore {
            store: self.writer.reader(),
        }
    }
}
