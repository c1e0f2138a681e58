//! This library provides an ordered, append-only collection of books and cursors to traverse it.
//!
//! Books are added to a [`BookCollection`] and read back through a [`BookIterator`] obtained from
//! [`BookCollection::create_iterator`]. Every iterator keeps its own position and only observes the
//! collection, so several of them can traverse it at the same time without interfering.
//!
//! Iterators created before a book is added may or may not see it, depending on the collection's
//! [`IterationPolicy`] (see [`policy`] module documentation).

pub mod policy;

mod book;
mod collection;
mod cursor;
mod error;
mod storage;

pub use book::Book;
pub use collection::{BookCollection, BookIterator};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use policy::{IterationPolicy, ParsePolicyError};
