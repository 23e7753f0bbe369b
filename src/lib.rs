//! Core library surface for the Book Catalog Manager TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the integration tests can reuse the same pieces.

pub mod db;
pub mod export;
pub mod models;
pub mod ui;

/// Convenience re-exports for the persistence layer, typically used by
/// `main.rs` and the tests to bring up the embedded SQLite store.
pub use db::{CatalogStore, StoreError};

/// The domain types the other layers manipulate.
pub use models::{Book, BookField};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
