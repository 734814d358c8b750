use std::io;
use std::path::Path;

use log::{error, info};
use rusqlite::Connection;
use thiserror::Error;

use super::console::Console;
use crate::db::StoreError;

const WELCOME: &str = "Hello, and welcome to e-Bookstore HQ!

    This menu down here is the brain of the operation. Through a series of
    menus, your terminal will guide you through various functions by prompting
    you to type a key - and only ever a single key - to get to where you need
    to go.

    Being a rather simplistic system, this manager is not nearly as smart as
    you are, so please make sure that you know exactly what it is you'd like
    to do before you go through with it, and make sure that your instructions
    are within bounds!

    Without further ado:
";

/// Why a session stopped early. Closed input is not a failure; [`Session::run`]
/// turns it into a normal exit.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("input closed")]
    InputClosed,
}

/// One interactive run against an open inventory. The connection is borrowed
/// so the caller decides when it gets closed.
pub struct Session<'c, C: Console> {
    pub(super) conn: &'c Connection,
    pub(super) console: C,
}

impl<'c, C: Console> Session<'c, C> {
    pub fn new(conn: &'c Connection, console: C) -> Self {
        Self { conn, console }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Offer the seed file if one is waiting, greet the user, then loop over
    /// the main menu until they leave or input runs out.
    pub fn run(&mut self, seed_file: &Path) -> Result<(), SessionError> {
        match self.start(seed_file) {
            Ok(()) => {
                info!("event=session_end module=ui status=exit");
                Ok(())
            }
            Err(SessionError::InputClosed) => {
                info!("event=session_end module=ui status=input_closed");
                Ok(())
            }
            Err(err) => {
                error!("event=session_end module=ui status=error error={err}");
                Err(err)
            }
        }
    }

    fn start(&mut self, seed_file: &Path) -> Result<(), SessionError> {
        self.offer_seed(seed_file)?;
        self.console.say(WELCOME)?;
        self.navigate()
    }

    /// Prompt for one line, treating closed input as the end of the session.
    pub(super) fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.console
            .prompt(prompt)?
            .ok_or(SessionError::InputClosed)
    }

    pub(super) fn report_store_error(&mut self, err: &StoreError) -> Result<(), SessionError> {
        error!("event=store_error module=ui status=error error={err}");
        self.console
            .error(&format!("\nSomething went wrong with the database: {err}"))?;
        Ok(())
    }
}
