//! Core library surface for the e-Bookstore inventory manager.
//!
//! The binary only wires these pieces together: resolve [`Paths`], start
//! logging, open the SQLite inventory, and hand it to a [`Session`] driving
//! the terminal.
pub mod db;
pub mod logging;
pub mod models;
pub mod paths;
pub mod seed;
pub mod ui;

/// Persistence entry points used by `main.rs` and the tests.
pub use db::{initialize_schema, open_in_memory, open_inventory, StoreError};

/// Domain types shared by every layer.
pub use models::{Book, Field, FieldValue, Lookup};

pub use paths::Paths;

/// The interactive session and its terminal seam.
pub use ui::{Console, ScriptedConsole, Session, SessionError, StdConsole};
