//! Binary entry point: resolve file locations, start the file logger, open
//! the inventory, and run the menu session until the user leaves.
use anyhow::Context;
use log::info;

use e_bookstore::logging::init_logging;
use e_bookstore::{open_inventory, Paths, Session, StdConsole};

/// Returning a `Result` reports fatal startup problems (for example an
/// unwritable home directory) on the terminal with a non-zero exit code.
fn main() -> anyhow::Result<()> {
    let paths = Paths::resolve()?;

    let _logger = match init_logging(&paths.log_dir) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            None
        }
    };

    let conn = open_inventory(&paths.database).context("failed to open inventory database")?;

    {
        let mut session = Session::new(&conn, StdConsole::new());
        session.run(&paths.seed_file)?;
    }

    conn.close()
        .map_err(|(_, err)| err)
        .context("failed to close inventory database")?;
    info!("event=app_exit module=core status=ok");
    Ok(())
}
