use std::path::{Path, PathBuf};

use rusqlite::Connection;

use super::error::StoreError;

/// Location of the on-disk SQLite database relative to the working directory.
/// The path is fixed at startup; several code paths (schema creation, the
/// store constructor) rely on the exact same string.
pub(crate) const DB_PATH: &str = "data/books.sqlite";

/// Resolve the default database location.
pub(crate) fn default_db_path() -> PathBuf {
    PathBuf::from(DB_PATH)
}

/// Open a connection to the database file. Connections are short-lived by
/// design: every store operation opens one, runs its single statement, and
/// drops it before returning, so a failure can never leave a half-finished
/// unit of work behind.
pub(crate) fn open_connection(path: &Path) -> Result<Connection, StoreError> {
    Ok(Connection::open(path)?)
}
