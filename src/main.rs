//! Binary entry point that glues the SQLite-backed catalog to the TUI: bring
//! up the database, take the first snapshot, and drive the Ratatui event loop
//! until the user exits.
use anyhow::Context;

use book_catalog_manager::{run_app, App, CatalogStore};

/// Initialize persistence, load the catalog, and launch the Ratatui event
/// loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for example
/// the `data/` directory not being writable) to the terminal instead of
/// crashing silently.
fn main() -> anyhow::Result<()> {
    let store = CatalogStore::open_default();
    store
        .initialize()
        .context("failed to initialize the catalog database")?;
    let books = store.list_all().context("failed to load the catalog")?;

    let mut app = App::new(store, books);
    run_app(&mut app)
}
