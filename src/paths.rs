//! Where the inventory keeps its files. There is no configuration file or
//! command-line flag; locations are fixed relative to the user's home and the
//! working directory, and tests build a [`Paths`] rooted in a temp directory.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".e-bookstore";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "inventory.sqlite";
/// Log directory inside the application data directory.
const LOG_DIR_NAME: &str = "logs";
/// Seed file looked up in the working directory on startup.
pub const SEED_FILE_NAME: &str = "onset_book_log.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub database: PathBuf,
    pub log_dir: PathBuf,
    pub seed_file: PathBuf,
}

impl Paths {
    /// Default locations: data under `~/.e-bookstore`, seed file in the
    /// current directory.
    pub fn resolve() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        let data_dir = base_dirs.home_dir().join(DATA_DIR_NAME);
        Ok(Self {
            database: data_dir.join(DB_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            seed_file: PathBuf::from(SEED_FILE_NAME),
        })
    }

    /// Every location inside `root`.
    pub fn in_dir(root: &Path) -> Self {
        Self {
            database: root.join(DB_FILE_NAME),
            log_dir: root.join(LOG_DIR_NAME),
            seed_file: root.join(SEED_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_keeps_everything_under_root() {
        let root = Path::new("/tmp/shop");
        let paths = Paths::in_dir(root);
        assert_eq!(paths.database, root.join("inventory.sqlite"));
        assert_eq!(paths.seed_file, root.join("onset_book_log.txt"));
        assert!(paths.log_dir.starts_with(root));
    }
}
