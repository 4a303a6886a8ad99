//! Reactive single-writer state cells
//!
//! A [`Store`] holds an immutable snapshot behind an `Arc` and pushes every
//! new snapshot to its subscribers. Mutation goes through the one [`Writer`]
//! handed out by [`channel`], so readers can never race each other for writes.

mod branches;

pub use branches::{BranchSnapshot, BranchStore, BranchUpdate, BranchWriter, branch_store};

use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};

type Callback<T> = Arc<dyn Fn(&Arc<T>) + Send + Sync>;

struct Inner<T> {
    value: Arc<T>,
    revision: u64,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

/// Read handle to a reactive cell.
///
/// Clones share the same cell.
pub struct Store<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

/// The only handle able to replace a [`Store`]'s value.
pub struct Writer<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

/// Keeps a subscription alive; dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription<T> {
    id: u64,
    inner: Weak<Mutex<Inner<T>>>,
}

/// Create a cell holding `initial`, returning its writer and a reader.
pub fn channel<T>(initial: T) -> (Writer<T>, Store<T>) {
    let inner = Arc::new(Mutex::new(Inner {
        value: Arc::new(initial),
        revision: 0,
        next_id: 0,
        subscribers: Vec::new(),
    }));
    (
        Writer {
            inner: Arc::clone(&inner),
        },
        Store { inner },
    )
}

impl<T> Store<T> {
    /// Current snapshot.
    #[must_use]
    pub fn read(&self) -> Arc<T> {
        Arc::clone(&self.inner.lock().value)
    }

    /// Number of updates applied since the cell was created.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner.lock().revision
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }

    /// Register `callback` to receive every future snapshot.
    ///
    /// Callbacks run on the writer's thread, after the new value is visible
    /// to [`Store::read`] and before [`Writer::set`] returns.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&Arc<T>) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(callback)));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl<T> Writer<T> {
    /// Replace the value and notify every subscriber synchronously.
    ///
    /// Takes `&mut self` so only one update can be in flight: subscribers
    /// always finish with the snapshot the store holds.
    pub fn set(&mut self, value: T) {
        let (snapshot, callbacks) = {
            let mut inner = self.inner.lock();
            inner.value = Arc::new(value);
            inner.revision += 1;
            let callbacks: Vec<Callback<T>> = inner
                .subscribers
                .iter()
                .map(|(_, callback)| Arc::clone(callback))
                .collect();
            (Arc::clone(&inner.value), callbacks)
        };

        // Lock released: callbacks may read the store.
        for callback in callbacks {
            callback(&snapshot);
        }
    }

    /// A new read handle onto the same cell.
    #[must_use]
    pub fn reader(&self) -> Store<T> {
        Store {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Store")
            .field("value", &inner.value)
            .field("revision", &inner.revision)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T> fmt::Debug for Writer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer").finish_non_exhaustive()
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
