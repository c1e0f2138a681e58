use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, Weak};

type Entries<T> = RwLock<Vec<Arc<T>>>;

/// Shared append-only sequence.
///
/// Entries are never reordered or removed, so a prefix observed once stays valid for the
/// lifetime of the log. Appends go through `&self` and take a brief write lock; readers
/// only hold the read lock for the duration of a single lookup.
///
/// Observers that must not keep the log alive obtain a [`LogRef`] through
/// [`AppendLog::downgrade`].
pub(crate) struct AppendLog<T> {
    entries: Arc<Entries<T>>,
}

impl<T> AppendLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append a value to the end of the log, returning the new length.
    pub fn push(&self, value: T) -> usize {
        // A panicking writer can't leave a half-pushed `Vec` behind, so poisoning is ignored.
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        entries.push(Arc::new(value));
        entries.len()
    }

    pub fn len(&self) -> usize {
        read(&self.entries).len()
    }

    /// Create a non-owning reference to the log entries.
    pub fn downgrade(&self) -> LogRef<T> {
        LogRef {
            entries: Arc::downgrade(&self.entries),
        }
    }
}

impl<T> Default for AppendLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-owning reference to the entries of an [`AppendLog`].
///
/// Once the log is dropped the reference observes an empty sequence.
pub(crate) struct LogRef<T> {
    entries: Weak<Entries<T>>,
}

impl<T> LogRef<T> {
    /// Current length of the referenced log, zero if it no longer exists.
    pub fn len(&self) -> usize {
        self.entries
            .upgrade()
            .map_or(0, |entries| read(&entries).len())
    }

    /// Get the entry at `index`, if both the log and the entry still exist.
    pub fn get(&self, index: usize) -> Option<Arc<T>> {
        let entries = self.entries.upgrade()?;
        let entry = read(&entries).get(index).cloned();

        entry
    }
}

fn read<T>(entries: &Entries<T>) -> RwLockReadGuard<'_, Vec<Arc<T>>> {
    entries.read().unwrap_or_else(PoisonError::into_inner)
}
