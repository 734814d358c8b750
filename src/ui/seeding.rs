use std::path::Path;

use log::{error, info, warn};

use super::console::Console;
use super::session::{Session, SessionError};
use crate::db::{self, SeedOutcome};
use crate::seed;

impl<C: Console> Session<'_, C> {
    /// Offer to import the seed file when one is present.
    ///
    /// The decision is recorded in the database before the file is deleted.
    /// A seed file that shows up after a recorded decision is removed without
    /// being replayed. A file that cannot be read or parsed, or an import that
    /// fails part way, leaves the file in place so the next run can retry.
    pub(super) fn offer_seed(&mut self, seed_file: &Path) -> Result<(), SessionError> {
        if !seed_file.exists() {
            return Ok(());
        }

        if let Some(previous) = db::seed_outcome(self.conn)? {
            warn!(
                "event=seed_offer module=ui status=already_decided previous={previous:?} path={}",
                seed_file.display()
            );
            self.consume(seed_file)?;
            return Ok(());
        }

        let books = match seed::read_seed_file(seed_file) {
            Ok(books) => books,
            Err(err) => {
                error!("event=seed_offer module=ui status=error error={err}");
                self.console.error(&format!(
                    "\nThe book data file {} could not be used: {err}",
                    seed_file.display()
                ))?;
                return Ok(());
            }
        };

        let question = format!(
            "\nFile with book data located ({} record(s)). Would you like to make use of this file (y/N?)\n\t: ",
            books.len()
        );
        let outcome = loop {
            let answer = self.ask(&question)?;
            match answer.trim() {
                "y" | "Y" => {
                    let rows = match seed::import_books(self.conn, &books) {
                        Ok(rows) => rows,
                        Err(err) => {
                            self.report_store_error(&err)?;
                            return Ok(());
                        }
                    };
                    self.console.success("\nPresets added successfully!")?;
                    break SeedOutcome::Imported { rows };
                }
                "n" | "N" => {
                    let discard = self.confirm(
                        "\nPresets will be deleted. This is an irreversible action. Are you sure (y/N)? ",
                    )?;
                    if discard {
                        self.console.say("\nStarting fresh!")?;
                        break SeedOutcome::Discarded;
                    }
                }
                _ => {}
            }
        };

        if let Err(err) = db::record_seed_outcome(self.conn, outcome) {
            self.report_store_error(&err)?;
            return Ok(());
        }
        info!("event=seed_offer module=ui status=ok outcome={outcome:?}");
        self.consume(seed_file)
    }

    fn consume(&mut self, seed_file: &Path) -> Result<(), SessionError> {
        if let Err(err) = seed::consume_seed_file(seed_file) {
            error!("event=seed_consume module=ui status=error error={err}");
            self.console.error(&format!(
                "\nCould not delete {}: {err}. It will not be imported again.",
                seed_file.display()
            ))?;
        }
        Ok(())
    }
}
