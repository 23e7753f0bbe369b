//! Persistence module split across logical submodules.

mod books;
mod connection;
mod error;

pub use books::CatalogStore;
pub use error::StoreError;
