use std::{env, time::Instant};

use color_eyre::eyre;
use dialoguer::Input;
use tracing::{info, trace};

use catalogue::{Book, BookCollection, IterationPolicy};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::try_init().map_err(|e| eyre::eyre!(e))?;

    let policy = env::args()
        .nth(1)
        .map(|arg| arg.parse::<IterationPolicy>())
        .transpose()?
        .unwrap_or_default();

    let books = (1..=3)
        .map(|i| Book::new(format!("Book {}", i), format!("Author {}", i)))
        .collect::<BookCollection>()
        .with_policy(policy);
    info!(policy = %books.policy(), "starting the catalogue");

    loop {
        let input: String = Input::new().interact()?;

        if let Some(command) = input.strip_prefix("/") {
            let items = command.split_whitespace().collect::<Vec<_>>();

            match items.as_slice() {
                [] => (),
                ["quit", ..] => return Ok(()),
                ["list", ..] => list(&books)?,
                ["count", ..] => println!(" :: {} books", books.len()),
                ["add", ..] => match parse_book(command.trim_start().trim_start_matches("add")) {
                    Some(book) => books.add_book(book),
                    None => println!("usage: /add <title> by <author>"),
                },
                _ => println!("unrecognised command: {}", items.join(" ")),
            }

            continue;
        }

        let term = input.trim();
        let items = books
            .create_iterator()
            .filter(|book| book.title().contains(term))
            .map(|book| format!(" - {}", book))
            .collect::<Vec<_>>();
        println!(" :: {} matches:\n{}", items.len(), items.join("\n"));
    }
}

/// Print every book, driving the iterator by hand.
fn list(books: &BookCollection) -> catalogue::Result<()> {
    let start = Instant::now();
    let mut iterator = books.create_iterator();

    while iterator.has_next() {
        println!(" - {}", iterator.next_book()?);
    }

    trace!(count = iterator.position(), duration = ?start.elapsed(), "listed books");

    Ok(())
}

/// Parse `<title> by <author>` into a [`Book`].
fn parse_book(input: &str) -> Option<Book> {
    let (title, author) = input.rsplit_once(" by ")?;
    let (title, author) = (title.trim(), author.trim());

    if title.is_empty() || author.is_empty() {
        return None;
    }

    Some(Book::new(title, author))
}
