use log::{info, warn};
use rusqlite::{params, Connection, Error as SqlError, ErrorCode, Row};

use super::StoreError;
use crate::models::{Book, Field, FieldValue, Lookup};

const SELECT_BOOKS: &str = "SELECT ID, Title, Author, QTY FROM Books";

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        quantity: row.get(3)?,
    })
}

/// Every row matching `lookup`, in id order. An empty result is not an error.
pub fn lookup(conn: &Connection, lookup: &Lookup) -> Result<Vec<Book>, StoreError> {
    let books = match lookup {
        Lookup::ByField(field, value) => {
            let sql = format!("{SELECT_BOOKS} WHERE {} = ?1 ORDER BY ID", field.column());
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![value], book_from_row)?;
            let books = rows.collect::<Result<Vec<_>, _>>()?;
            books
        }
        Lookup::ByTitleAuthor { title, author } => {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_BOOKS} WHERE Title = ?1 AND Author = ?2 ORDER BY ID"
            ))?;
            let rows = stmt.query_map(params![title, author], book_from_row)?;
            let books = rows.collect::<Result<Vec<_>, _>>()?;
            books
        }
    };

    Ok(books)
}

/// Insert a new book. Without an explicit `id` SQLite assigns the next one.
/// Returns the hydrated row so callers never have to re-query.
pub fn insert_book(
    conn: &Connection,
    title: &str,
    author: &str,
    quantity: i64,
    id: Option<i64>,
) -> Result<Book, StoreError> {
    match id {
        Some(id) => {
            conn.execute(
                "INSERT INTO Books (ID, Title, Author, QTY) VALUES (?1, ?2, ?3, ?4)",
                params![id, title, author, quantity],
            )
            .map_err(|err| map_unique_constraint(err, id))?;
        }
        None => {
            conn.execute(
                "INSERT INTO Books (Title, Author, QTY) VALUES (?1, ?2, ?3)",
                params![title, author, quantity],
            )?;
        }
    }

    let id = conn.last_insert_rowid();
    info!("event=book_insert module=db status=ok id={id}");
    Ok(Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        quantity,
    })
}

/// Insert a seeded book keeping its id. A row that already holds the id is
/// left alone, which lets an interrupted import run again. Returns whether a
/// row was written.
pub fn insert_seeded(conn: &Connection, book: &Book) -> Result<bool, StoreError> {
    let written = conn.execute(
        "INSERT INTO Books (ID, Title, Author, QTY) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(ID) DO NOTHING",
        params![book.id, book.title, book.author, book.quantity],
    )?;

    if written == 0 {
        warn!("event=seed_insert module=db status=skipped id={}", book.id);
    }
    Ok(written == 1)
}

/// Set one field of the book identified by `id`.
pub fn update_field(
    conn: &Connection,
    field: Field,
    value: &FieldValue,
    id: i64,
) -> Result<(), StoreError> {
    match (field.is_numeric(), value) {
        (true, FieldValue::Text(_)) => {
            return Err(StoreError::TypeMismatch {
                field,
                expected: "integer",
            })
        }
        (false, FieldValue::Int(_)) => {
            return Err(StoreError::TypeMismatch {
                field,
                expected: "text",
            })
        }
        _ => {}
    }

    let sql = format!("UPDATE Books SET {} = ?1 WHERE ID = ?2", field.column());
    let updated = conn.execute(&sql, params![value, id]).map_err(|err| match value {
        FieldValue::Int(new_id) if field == Field::Id => map_unique_constraint(err, *new_id),
        _ => err.into(),
    })?;

    if updated == 0 {
        Err(StoreError::NotFound(id))
    } else {
        info!("event=book_update module=db status=ok id={id} field={field}");
        Ok(())
    }
}

/// Remove the book identified by `id`.
pub fn delete_book(conn: &Connection, id: i64) -> Result<(), StoreError> {
    let deleted = conn.execute("DELETE FROM Books WHERE ID = ?1", params![id])?;

    if deleted == 0 {
        Err(StoreError::NotFound(id))
    } else {
        info!("event=book_delete module=db status=ok id={id}");
        Ok(())
    }
}

/// Number of rows in `Books`.
pub fn count_books(conn: &Connection) -> Result<usize, StoreError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM Books", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// The only constraint an id can trip is the primary key.
fn map_unique_constraint(err: SqlError, id: i64) -> StoreError {
    if matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::ConstraintViolation)
    ) {
        StoreError::DuplicateId(id)
    } else {
        err.into()
    }
}
