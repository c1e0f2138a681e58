use std::{iter::FromIterator, sync::Arc};

use tracing::{instrument, trace};

use crate::{policy::IterationPolicy, storage::AppendLog, Book, Cursor, Result};

/// Cursor produced by [`BookCollection::create_iterator`].
pub type BookIterator = Cursor<Book>;

impl BookIterator {
    /// Take the next book and advance the iterator.
    ///
    /// See [`Cursor::try_next`].
    pub fn next_book(&mut self) -> Result<Arc<Book>> {
        self.try_next()
    }
}

/// BookCollection keeps books in the order they were added.
///
/// Books are only ever appended: the collection is never reordered or deduplicated. Traversal is
/// performed with a [`BookIterator`] obtained through [`BookCollection::create_iterator`]; every
/// iterator keeps its own position, so several of them can walk the same collection side by side.
/// To start over, create a new iterator.
///
/// Whether an existing iterator sees books added after its creation is controlled by the
/// collection's [`IterationPolicy`], see [`BookCollection::with_policy`].
///
/// BookCollection is thread-safe and books can be added through a shared reference.
#[derive(Default)]
pub struct BookCollection {
    books: AppendLog<Book>,
    policy: IterationPolicy,
}

impl BookCollection {
    /// Create an empty [`BookCollection`] with the default [`IterationPolicy::Live`] policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [`IterationPolicy`] for iterators created from now on.
    pub fn with_policy(mut self, policy: IterationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// [`IterationPolicy`] applied to newly created iterators.
    pub fn policy(&self) -> IterationPolicy {
        self.policy
    }

    /// Append a book to the end of the collection.
    pub fn add_book(&self, book: Book) {
        trace!(title = %book.title(), author = %book.author(), "adding a book");

        let len = self.books.push(book);

        trace!(%len, "added a book");
    }

    /// Create an iterator positioned before the first book.
    #[instrument(skip(self), fields(policy = %self.policy))]
    pub fn create_iterator(&self) -> BookIterator {
        trace!(len = self.books.len(), "created an iterator");
        Cursor::new(self.books.downgrade(), self.policy)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Titles of all the books, in collection order.
    pub fn titles(&self) -> Vec<String> {
        self.create_iterator()
            .map(|book| book.title().to_owned())
            .collect()
    }
}

impl FromIterator<Book> for BookCollection {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Book>,
    {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl Extend<Book> for BookCollection {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Book>,
    {
        iter.into_iter().for_each(|book| self.add_book(book));
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::BookCollection;
    use crate::{Book, BookIterator, Error, IterationPolicy};

    fn numbered(count: usize) -> BookCollection {
        (1..=count)
            .map(|i| Book::new(format!("Book {}", i), format!("Author {}", i)))
            .collect()
    }

    fn drain_titles(iterator: &mut BookIterator) -> Vec<String> {
        let mut titles = Vec::new();

        while iterator.has_next() {
            titles.push(iterator.next_book().unwrap().title().to_owned());
        }

        titles
    }

    #[test]
    fn iterates_books_in_insertion_order() {
        let books = BookCollection::new();
        books.add_book(Book::new("Book 1", "Author 1"));
        books.add_book(Book::new("Book 2", "Author 2"));
        books.add_book(Book::new("Book 3", "Author 3"));

        let titles = drain_titles(&mut books.create_iterator());

        assert_eq!(titles.len(), 3);
        assert_eq!(titles, vec!["Book 1", "Book 2", "Book 3"]);
    }

    #[test]
    fn empty_collection_yields_nothing() {
        let books = BookCollection::new();

        let mut iterator = books.create_iterator();

        assert!(!iterator.has_next());
        assert!(drain_titles(&mut iterator).is_empty());
    }

    #[test]
    fn single_book_is_yielded_once() {
        let books = BookCollection::new();
        books.add_book(Book::new("Book 1", "Author 1"));

        let titles = drain_titles(&mut books.create_iterator());

        assert_eq!(titles, vec!["Book 1"]);
    }

    #[test]
    fn has_next_stays_false_after_full_iteration() {
        let books = numbered(2);
        let mut iterator = books.create_iterator();

        drain_titles(&mut iterator);

        assert!(!iterator.has_next());
        assert!(!iterator.has_next());
    }

    #[test]
    fn new_iterator_restarts_from_the_beginning() {
        let books = numbered(2);

        let first = drain_titles(&mut books.create_iterator());
        let second = drain_titles(&mut books.create_iterator());

        assert_eq!(first, second);
        assert_eq!(second, vec!["Book 1", "Book 2"]);
    }

    #[test]
    fn iterators_keep_independent_positions() {
        let books = numbered(3);
        let mut ahead = books.create_iterator();
        let mut behind = books.create_iterator();

        ahead.next_book().unwrap();
        ahead.next_book().unwrap();

        assert_eq!(behind.next_book().unwrap().title(), "Book 1");
        assert_eq!(ahead.next_book().unwrap().title(), "Book 3");
        assert_eq!(behind.position(), 1);
    }

    #[test]
    fn next_book_on_exhausted_iterator_is_out_of_range() {
        let books = numbered(1);
        let mut iterator = books.create_iterator();

        iterator.next_book().unwrap();

        assert_eq!(
            iterator.next_book().unwrap_err(),
            Error::OutOfRange {
                position: 1,
                len: 1
            }
        );
    }

    #[test]
    fn live_iterator_sees_books_added_while_remaining() {
        let books = numbered(1);
        let iterator = books.create_iterator();

        books.add_book(Book::new("Book 2", "Author 2"));

        let titles = iterator
            .map(|book| book.title().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Book 1", "Book 2"]);
    }

    #[test]
    fn default_policy_is_live() {
        assert_eq!(BookCollection::new().policy(), IterationPolicy::Live);
    }

    #[test]
    fn snapshot_iterator_ignores_books_added_later() {
        let books = numbered(1).with_policy(IterationPolicy::Snapshot);
        assert_eq!(books.policy(), IterationPolicy::Snapshot);

        let mut iterator = books.create_iterator();

        books.add_book(Book::new("Book 2", "Author 2"));

        assert_eq!(drain_titles(&mut iterator), vec!["Book 1"]);
        assert_eq!(books.titles(), vec!["Book 1", "Book 2"]);
    }

    #[test]
    fn iterator_does_not_outlive_collection_storage() {
        let books = numbered(2);
        let mut iterator = books.create_iterator();

        drop(books);

        assert!(!iterator.has_next());
        assert_eq!(iterator.next(), None);
    }

    #[test]
    fn books_are_yielded_unchanged() {
        let books = numbered(1);

        let book = books.create_iterator().next().unwrap();

        assert_eq!(*book, Book::new("Book 1", "Author 1"));
        assert_eq!(books.len(), 1);
        assert!(!books.is_empty());
    }

    #[test]
    fn collection_and_iterator_can_be_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<BookCollection>();
        assert_send_sync::<BookIterator>();
    }

    #[test]
    fn appends_from_another_thread_keep_insertion_order() {
        let books = Arc::new(BookCollection::new());
        let writer = {
            let books = Arc::clone(&books);
            thread::spawn(move || {
                for i in 1..=100 {
                    books.add_book(Book::new(format!("Book {}", i), format!("Author {}", i)));
                }
            })
        };

        let seen = drain_titles(&mut books.create_iterator());
        writer.join().unwrap();

        assert_eq!(books.len(), 100);

        let expected = (1..=100).map(|i| format!("Book {}", i)).collect::<Vec<_>>();
        assert_eq!(seen, expected[..seen.len()].to_vec());
        assert_eq!(books.titles(), expected);
    }
}
