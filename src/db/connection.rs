use std::fs;
use std::path::Path;

use log::{error, info};
use rusqlite::Connection;

use super::StoreError;

/// Open (creating if needed) the inventory database at `path` and make sure the
/// schema exists. The parent directory is created first so a fresh install does
/// not need any manual setup.
pub fn open_inventory(path: &Path) -> Result<Connection, StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error path={} error={}",
                path.display(),
                err
            );
            return Err(err.into());
        }
    };
    bootstrap(&conn)?;
    info!("event=db_open module=db status=ok path={}", path.display());
    Ok(conn)
}

/// In-memory database with the full schema. Used by tests.
pub fn open_in_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    bootstrap(&conn)?;
    Ok(conn)
}

fn bootstrap(conn: &Connection) -> Result<(), StoreError> {
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    initialize_schema(conn)
}

/// Create the `Books` and `app_state` tables when they are missing.
///
/// Safe to call against a database that already has them. `AUTOINCREMENT`
/// keeps SQLite from handing out the id of a deleted row again.
pub fn initialize_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS Books (
            ID INTEGER PRIMARY KEY AUTOINCREMENT,
            Title TEXT NOT NULL,
            Author TEXT NOT NULL,
            QTY INTEGER NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS app_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
