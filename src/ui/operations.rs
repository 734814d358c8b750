use log::info;

use super::console::Console;
use super::prompts::VALUE_PROMPT;
use super::session::{Session, SessionError};
use super::table::render_books;
use crate::db::{self, StoreError};
use crate::models::{Book, Lookup};

impl<C: Console> Session<'_, C> {
    /// Ask for a new book and insert it unless the same title and author are
    /// already on record.
    pub(super) fn add_record(&mut self) -> Result<(), SessionError> {
        let title = self.ask("\nEnter the title of the book.\n\t: ")?;
        let author = self.ask("\nEnter the author of the book.\n\t: ")?;
        self.console.say("\nEnter the amount of the book in stock.")?;
        let quantity = self.read_quantity()?;

        let existing = db::lookup(self.conn, &Lookup::ByTitleAuthor {
            title: title.clone(),
            author: author.clone(),
        })?;
        if !existing.is_empty() {
            info!("event=book_add module=ui status=duplicate");
            self.console
                .error("\nBook has already been recorded onto database.")?;
            return Ok(());
        }

        db::insert_book(self.conn, &title, &author, quantity, None)?;
        self.console
            .success("\nBook successfully added to database and assigned a unique ID!")?;
        Ok(())
    }

    pub(super) fn search_records(&mut self) -> Result<(), SessionError> {
        self.console
            .say("\nEnter the letter that corresponds to the field you want to search.")?;
        let field = self.select_field()?;
        self.console.say("\nEnter the value you would like to search.")?;
        let value = self.read_value(field)?;

        let books = db::lookup(self.conn, &Lookup::ByField(field, value.clone()))?;
        if books.is_empty() {
            self.console.say("\nNo matching results found.")?;
        } else {
            self.console
                .say(&format!("\nAll results found for search '{value}'"))?;
            self.show_books(&books)?;
        }
        Ok(())
    }

    /// Find books by one field, then after confirmation set that same field to
    /// a new value on every match. Each row is its own commit, so a failure
    /// part way leaves the earlier rows changed.
    pub(super) fn update_record(&mut self) -> Result<(), SessionError> {
        self.console.say(
            "\nEnter the letter that corresponds to the field you would like to change.",
        )?;
        let field = self.select_field()?;
        self.console
            .say("\nEnter the value that you would like to change.")?;
        let outdated = self.read_value(field)?;

        let books = db::lookup(self.conn, &Lookup::ByField(field, outdated))?;
        if books.is_empty() {
            self.console
                .say("\nCould not locate record with that value.")?;
            return Ok(());
        }

        self.show_books(&books)?;
        let confirmed = self.confirm(&format!(
            "\nYou will be updating the {field} for all of the above records. \
             Are you sure you want to proceed - (y/N)?\n{VALUE_PROMPT}"
        ))?;
        if !confirmed {
            return Ok(());
        }

        self.console.say("\nEnter the new value.")?;
        let replacement = self.read_value(field)?;
        let applied = self.apply_each(&books, |conn, book| {
            db::update_field(conn, field, &replacement, book.id)
        })?;
        if applied == books.len() {
            self.console.success("\nRecord(s) successfully updated!")?;
        } else {
            self.console.error(&format!(
                "{applied} of {} record(s) were updated before the failure.",
                books.len()
            ))?;
        }
        Ok(())
    }

    /// Find books by one field and, after confirmation, delete every match.
    pub(super) fn remove_record(&mut self) -> Result<(), SessionError> {
        self.console.say(
            "\nEnter the letter that corresponds with the field you'll be using to identify the defunct record(s).",
        )?;
        let field = self.select_field()?;
        self.console
            .say("\nEnter the value you will be searching with.")?;
        let defunct = self.read_value(field)?;

        let books = db::lookup(self.conn, &Lookup::ByField(field, defunct))?;
        if books.is_empty() {
            self.console.say("\nCould not locate record.")?;
            return Ok(());
        }

        self.show_books(&books)?;
        let confirmed = self.confirm(&format!(
            "\nYou will be removing all of the above records.\n\
             Are you sure you want to proceed - (y/N)?\n{VALUE_PROMPT}"
        ))?;
        if !confirmed {
            return Ok(());
        }

        let applied = self.apply_each(&books, |conn, book| db::delete_book(conn, book.id))?;
        if applied == books.len() {
            self.console.success("\nRecord(s) successfully removed!")?;
        } else {
            self.console.error(&format!(
                "{applied} of {} record(s) were removed before the failure.",
                books.len()
            ))?;
        }
        Ok(())
    }

    fn show_books(&mut self, books: &[Book]) -> Result<(), SessionError> {
        self.console.say(&format!("\n{}", render_books(books).trim_end()))?;
        Ok(())
    }

    /// Run `step` for each book in order, stopping at the first storage error.
    /// The error is reported here; the return value is how many books were
    /// handled before it.
    fn apply_each(
        &mut self,
        books: &[Book],
        step: impl Fn(&rusqlite::Connection, &Book) -> Result<(), StoreError>,
    ) -> Result<usize, SessionError> {
        for (done, book) in books.iter().enumerate() {
            if let Err(err) = step(self.conn, book) {
                self.report_store_error(&err)?;
                return Ok(done);
            }
        }
        Ok(books.len())
    }
}

