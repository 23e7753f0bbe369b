use std::fs;
use std::path::PathBuf;

use rusqlite::params;

use super::connection::{default_db_path, open_connection};
use super::error::StoreError;
use crate::models::{Book, BookField};

/// Handle to the on-disk catalog. The store owns only the database path; each
/// operation opens its own connection, executes exactly one statement, and
/// releases the connection before returning. All access is serialized by the
/// single-threaded event loop, so no in-process locking is needed.
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Store backed by the fixed application data path (`data/books.sqlite`).
    pub fn open_default() -> Self {
        Self::at_path(default_db_path())
    }

    /// Store backed by an explicit file path. Tests point this at scratch
    /// directories.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the `books` table if it does not exist yet, along with the data
    /// directory that holds the database file. Safe to call on every startup.
    ///
    /// `AUTOINCREMENT` matters here: it keeps SQLite from ever handing out a
    /// deleted record's id again.
    pub fn initialize(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = open_connection(&self.path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                year TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Insert a new book and return its assigned id.
    ///
    /// All three fields must be non-empty after trimming; the trimmed values
    /// are what gets stored. The UI checks this before calling, but the store
    /// enforces the contract itself so it holds without any UI present.
    pub fn create(&self, title: &str, author: &str, year: &str) -> Result<i64, StoreError> {
        let title = required(BookField::Title, title)?;
        let author = required(BookField::Author, author)?;
        let year = required(BookField::Year, year)?;

        let conn = open_connection(&self.path)?;
        conn.execute(
            "INSERT INTO books (title, author, year) VALUES (?1, ?2, ?3)",
            params![title, author, year],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetch every book in insertion order. This is the only read the store
    /// offers; search and filtering happen over the returned snapshot.
    pub fn list_all(&self) -> Result<Vec<Book>, StoreError> {
        let conn = open_connection(&self.path)?;
        let mut stmt = conn.prepare("SELECT id, title, author, year FROM books ORDER BY id")?;

        let books = stmt
            .query_map([], |row| {
                Ok(Book {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    author: row.get(2)?,
                    year: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(books)
    }

    /// Overwrite a single field of the book with the given id.
    ///
    /// Targeting an id that no longer exists is a no-op, not an error: the
    /// caller replaces its whole snapshot right after every mutation, so a
    /// vanished id corrects itself on the next render.
    pub fn update_field(&self, id: i64, field: BookField, value: &str) -> Result<(), StoreError> {
        let sql = match field {
            BookField::Title => "UPDATE books SET title = ?1 WHERE id = ?2",
            BookField::Author => "UPDATE books SET author = ?1 WHERE id = ?2",
            BookField::Year => "UPDATE books SET year = ?1 WHERE id = ?2",
        };

        let conn = open_connection(&self.path)?;
        conn.execute(sql, params![value, id])?;
        Ok(())
    }

    /// Remove the book with the given id. Absent ids are a no-op, same as
    /// [`update_field`](Self::update_field).
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let conn = open_connection(&self.path)?;
        conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
        Ok(())
    }
}

/// Trim a required input, rejecting it when nothing is left.
fn required(field: BookField, value: &str) -> Result<&str, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(StoreError::Validation(field))
    } else {
        Ok(trimmed)
    }
}
