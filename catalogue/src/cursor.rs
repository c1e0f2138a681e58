use std::{fmt, iter::FusedIterator, sync::Arc};

use tracing::warn;

use crate::{policy::IterationPolicy, storage::LogRef, Error, Result};

/// Cursor over an append-only sequence.
///
/// A cursor keeps its own position and a non-owning reference to the sequence it was created
/// from, so any number of cursors can traverse the same sequence independently. It never
/// modifies the sequence and never keeps it alive: once the owner is dropped the cursor has
/// nothing left to produce.
///
/// The cursor is either *remaining* (at least one more element can be taken with
/// [`Cursor::try_next`]) or *exhausted*. It becomes exhausted when it is created over an empty
/// sequence or when advancing moves it to the end, and it stays exhausted from then on, even if
/// more elements are appended. The end itself depends on [`IterationPolicy`].
///
/// `Cursor` also implements [`Iterator`], so the usual adapters can be used on it.
pub struct Cursor<T> {
    source: LogRef<T>,
    position: usize,
    bound: Bound,
    exhausted: bool,
}

#[derive(Clone, Copy, Debug)]
enum Bound {
    Live,
    Fixed(usize),
}

impl<T> Cursor<T> {
    pub(crate) fn new(source: LogRef<T>, policy: IterationPolicy) -> Self {
        let bound = match policy {
            IterationPolicy::Live => Bound::Live,
            IterationPolicy::Snapshot => Bound::Fixed(source.len()),
        };
        let mut cursor = Self {
            source,
            position: 0,
            bound,
            exhausted: false,
        };
        cursor.exhausted = cursor.end() == 0;

        cursor
    }

    /// Returns `true` if at least one more element can be taken from this cursor.
    pub fn has_next(&self) -> bool {
        !self.exhausted && self.position < self.end()
    }

    /// Take the element under the cursor and advance by one.
    ///
    /// Returns [`Error::OutOfRange`] if [`Cursor::has_next`] is `false`, the position is left
    /// unchanged in that case.
    pub fn try_next(&mut self) -> Result<Arc<T>> {
        let end = self.end();
        let item = if self.exhausted || self.position >= end {
            None
        } else {
            self.source.get(self.position)
        };

        match item {
            Some(item) => {
                self.position += 1;
                self.exhausted = self.position >= end;
                Ok(item)
            }
            None => {
                warn!(position = self.position, len = end, "cursor advanced past the end");
                Err(Error::OutOfRange {
                    position: self.position,
                    len: end,
                })
            }
        }
    }

    /// Number of elements produced so far.
    pub fn position(&self) -> usize {
        self.position
    }

    fn end(&self) -> usize {
        let len = self.source.len();

        match self.bound {
            Bound::Live => len,
            Bound::Fixed(end) => end.min(len),
        }
    }
}

impl<T> Iterator for Cursor<T> {
    type Item = Arc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            self.try_next().ok()
        } else {
            None
        }
    }
}

impl<T> FusedIterator for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("bound", &self.bound)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}
