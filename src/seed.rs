//! Reading and applying the one-time seed file.
//!
//! Each line holds one book as `id__title__author__quantity`. The whole file is
//! parsed before anything touches the database, so a malformed file never
//! half-imports. The interactive decision around it lives in the session.

use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};
use rusqlite::Connection;
use thiserror::Error;

use crate::db::{self, StoreError};
use crate::models::Book;

/// Separator between the fields of a seed line.
pub const SEED_DELIMITER: &str = "__";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not read seed file: {0}")]
    Io(#[from] io::Error),
    #[error("seed line {line} is malformed: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Parse seed file contents. Blank lines are skipped; line numbers in errors
/// are 1-based.
pub fn parse_seed(contents: &str) -> Result<Vec<Book>, SeedError> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

fn parse_line(line_number: usize, line: &str) -> Result<Book, SeedError> {
    let malformed = |reason: String| SeedError::Malformed {
        line: line_number,
        reason,
    };

    let parts: Vec<&str> = line.trim_end_matches('\r').split(SEED_DELIMITER).collect();
    let [id, title, author, quantity] = parts.as_slice() else {
        return Err(malformed(format!(
            "expected 4 fields separated by `{SEED_DELIMITER}`, found {}",
            parts.len()
        )));
    };

    let id = id
        .trim()
        .parse::<i64>()
        .map_err(|_| malformed(format!("ID `{id}` is not a whole number")))?;
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|_| malformed(format!("quantity `{quantity}` is not a whole number")))?;

    Ok(Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        quantity,
    })
}

/// Read and parse the seed file at `path`.
pub fn read_seed_file(path: &Path) -> Result<Vec<Book>, SeedError> {
    let contents = fs::read_to_string(path)?;
    parse_seed(&contents)
}

/// Insert every seeded book with its own id. Rows whose id already exists are
/// skipped, so running the same import twice is harmless. Returns the number
/// of rows written.
pub fn import_books(conn: &Connection, books: &[Book]) -> Result<usize, StoreError> {
    let mut written = 0;
    for book in books {
        if db::insert_seeded(conn, book)? {
            written += 1;
        }
    }
    info!(
        "event=seed_import module=seed status=ok parsed={} written={written}",
        books.len()
    );
    Ok(written)
}

/// Delete the seed file. A file that is already gone counts as consumed.
pub fn consume_seed_file(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("event=seed_consume module=seed status=ok path={}", path.display());
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("event=seed_consume module=seed status=missing path={}", path.display());
            Ok(())
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{count_books, lookup, open_in_memory};
    use crate::models::{Field, FieldValue, Lookup};

    const SAMPLE: &str = "1__Dune__Frank Herbert__4\n2__1984__George Orwell__7";

    #[test]
    fn parses_sample_records() {
        let books = parse_seed(SAMPLE).unwrap();
        assert_eq!(
            books,
            vec![
                Book {
                    id: 1,
                    title: "Dune".into(),
                    author: "Frank Herbert".into(),
                    quantity: 4,
                },
                Book {
                    id: 2,
                    title: "1984".into(),
                    author: "George Orwell".into(),
                    quantity: 7,
                },
            ]
        );
    }

    #[test]
    fn tolerates_blank_lines_and_crlf() {
        let books = parse_seed("\r\n3__Emma__Jane Austen__2\r\n\n").unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].quantity, 2);
        assert_eq!(books[0].author, "Jane Austen");
    }

    #[test]
    fn reports_the_offending_line() {
        let err = parse_seed("1__Dune__Frank Herbert__4\n2__1984__George Orwell").unwrap_err();
        assert!(matches!(err, SeedError::Malformed { line: 2, .. }));

        let err = parse_seed("x__Dune__Frank Herbert__4").unwrap_err();
        assert!(matches!(err, SeedError::Malformed { line: 1, .. }));

        let err = parse_seed("1__Dune__Frank Herbert__four").unwrap_err();
        assert!(err.to_string().contains("quantity"));
    }

    #[test]
    fn import_keeps_ids_and_is_repeatable() {
        let conn = open_in_memory().unwrap();
        let books = parse_seed(SAMPLE).unwrap();

        assert_eq!(import_books(&conn, &books).unwrap(), 2);
        assert_eq!(import_books(&conn, &books).unwrap(), 0);
        assert_eq!(count_books(&conn).unwrap(), 2);

        let orwell = lookup(&conn, &Lookup::ByField(Field::Id, FieldValue::Int(2))).unwrap();
        assert_eq!(orwell[0].title, "1984");
        assert_eq!(orwell[0].quantity, 7);
    }

    #[test]
    fn consuming_a_missing_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("onset_book_log.txt");
        fs::write(&path, SAMPLE).unwrap();

        consume_seed_file(&path).unwrap();
        assert!(!path.exists());
        consume_seed_file(&path).unwrap();
    }
}
