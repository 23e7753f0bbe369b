use std::io;

use thiserror::Error;

use crate::models::BookField;

/// Failures a catalog operation can surface to its caller.
///
/// The taxonomy is deliberately small: either the caller handed us a blank
/// required field, or the durable store could not be reached. A missing id on
/// update/delete is neither; see [`CatalogStore::update_field`] for the no-op
/// policy.
///
/// [`CatalogStore::update_field`]: crate::db::CatalogStore::update_field
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was empty after trimming whitespace. Carries which
    /// field so the UI can point at it.
    #[error("{} is required", .0.label())]
    Validation(BookField),

    /// The database file could not be opened or the statement could not be
    /// executed (locked file, missing permissions, corruption).
    #[error("catalog storage unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),

    /// The directory holding the database file could not be created.
    #[error("catalog data directory unavailable: {0}")]
    DataDir(#[from] io::Error),
}
