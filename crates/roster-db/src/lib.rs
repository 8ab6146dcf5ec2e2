pub mod migrations;
pub mod models;
pub mod queries;

use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::info;

pub use queries::CreateOutcome;

/// Handle to the user store.
///
/// Holds only the file location. Every call opens its own connection and
/// drops it before returning, so no SQLite handle outlives a request.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Opens (or creates) the store, ensures the schema and seeds an empty table.
    pub fn open(path: &Path) -> Result<Self> {
        let db = Self {
            path: path.to_path_buf(),
        };

        db.with_conn(|conn| {
            conn.pragma_update(None, "journal_mode", "WAL")?;
            migrations::run(conn)
        })?;

        info!("Database opened at {}", path.display());
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = Connection::open(&self.path)?;
        f(&conn)
    }

    pub fn with_conn_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut conn = Connection::open(&self.path)?;
        f(&mut conn)
    }
}
