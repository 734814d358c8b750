//! Persistence layer over the embedded SQLite file. Every function takes the
//! connection explicitly and runs in autocommit mode, so each mutation is on
//! disk before it returns.

mod books;
mod connection;
mod state;

use thiserror::Error;

use crate::models::Field;

pub use books::{count_books, delete_book, insert_book, insert_seeded, lookup, update_field};
pub use connection::{initialize_schema, open_in_memory, open_inventory};
pub use state::{record_seed_outcome, seed_outcome, SeedOutcome};

/// Failures surfaced by the persistence layer. None of them are fatal to an
/// interactive session; the record operations report them and carry on.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("could not prepare the data directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("no book with ID {0}")]
    NotFound(i64),
    #[error("a book with ID {0} already exists")]
    DuplicateId(i64),
    #[error("{field} only accepts {expected} values")]
    TypeMismatch { field: Field, expected: &'static str },
}
