use book_catalog_manager::{BookField, CatalogStore, StoreError};
use tempfile::TempDir;

/// A store backed by a scratch directory. On-disk rather than in-memory
/// because every operation opens its own connection, so state has to survive
/// connection turnover. The `TempDir` is returned so it outlives the store.
fn scratch_store() -> (TempDir, CatalogStore) {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::at_path(dir.path().join("books.sqlite"));
    store.initialize().unwrap();
    (dir, store)
}

#[test]
fn create_then_list_roundtrip() {
    let (_dir, store) = scratch_store();

    let id = store.create("Dune", "Frank Herbert", "1965").unwrap();

    let books = store.list_all().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, id);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].author, "Frank Herbert");
    assert_eq!(books[0].year, "1965");
}

#[test]
fn create_trims_surrounding_whitespace() {
    let (_dir, store) = scratch_store();

    store.create("  Dune  ", "\tFrank Herbert", "1965 ").unwrap();

    let books = store.list_all().unwrap();
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].author, "Frank Herbert");
    assert_eq!(books[0].year, "1965");
}

#[test]
fn initialize_is_idempotent() {
    let (_dir, store) = scratch_store();

    store.create("Dune", "Frank Herbert", "1965").unwrap();
    store.initialize().unwrap();
    store.initialize().unwrap();

    let books = store.list_all().unwrap();
    assert_eq!(books.len(), 1);
}

#[test]
fn blank_fields_are_rejected() {
    let (_dir, store) = scratch_store();

    let cases = [
        ("", "Frank Herbert", "1965"),
        ("Dune", "", "1965"),
        ("Dune", "Frank Herbert", ""),
        ("   ", "Frank Herbert", "1965"),
        ("Dune", "\t\n", "1965"),
        ("Dune", "Frank Herbert", "  "),
    ];

    for (title, author, year) in cases {
        let err = store.create(title, author, year).unwrap_err();
        assert!(
            matches!(err, StoreError::Validation(_)),
            "expected validation failure for ({title:?}, {author:?}, {year:?}), got {err:?}"
        );
    }

    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn update_changes_only_the_targeted_field() {
    let (_dir, store) = scratch_store();

    let first = store.create("Dune", "Frank Herbert", "1965").unwrap();
    let second = store.create("Foundation", "Isaac Asimov", "1951").unwrap();

    store
        .update_field(first, BookField::Author, "F. Herbert")
        .unwrap();

    let books = store.list_all().unwrap();
    let updated = books.iter().find(|b| b.id == first).unwrap();
    assert_eq!(updated.title, "Dune");
    assert_eq!(updated.author, "F. Herbert");
    assert_eq!(updated.year, "1965");

    let untouched = books.iter().find(|b| b.id == second).unwrap();
    assert_eq!(untouched.title, "Foundation");
    assert_eq!(untouched.author, "Isaac Asimov");
    assert_eq!(untouched.year, "1951");
}

#[test]
fn update_missing_id_is_a_no_op() {
    let (_dir, store) = scratch_store();

    store.create("Dune", "Frank Herbert", "1965").unwrap();
    store.update_field(999, BookField::Title, "Ghost").unwrap();

    let books = store.list_all().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
}

#[test]
fn delete_is_final_and_repeatable() {
    let (_dir, store) = scratch_store();

    let id = store.create("Dune", "Frank Herbert", "1965").unwrap();

    store.delete(id).unwrap();
    assert!(store.list_all().unwrap().is_empty());

    // Both a second delete and an update of the vanished id are no-ops.
    store.delete(id).unwrap();
    store.update_field(id, BookField::Year, "1966").unwrap();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn ids_are_never_reused_after_delete() {
    let (_dir, store) = scratch_store();

    let first = store.create("Dune", "Frank Herbert", "1965").unwrap();
    let second = store.create("Foundation", "Isaac Asimov", "1951").unwrap();
    assert!(second > first);

    store.delete(second).unwrap();
    let third = store.create("Hyperion", "Dan Simmons", "1989").unwrap();
    assert!(
        third > second,
        "expected a fresh id after deletion, got {third} (deleted {second})"
    );
}

#[test]
fn catalog_scenario() {
    let (_dir, store) = scratch_store();

    let dune = store.create("Dune", "Frank Herbert", "1965").unwrap();
    assert_eq!(dune, 1);
    let foundation = store.create("Foundation", "Isaac Asimov", "1951").unwrap();
    assert_eq!(foundation, 2);

    store.update_field(dune, BookField::Year, "1966").unwrap();

    let books = store.list_all().unwrap();
    let tuples: Vec<(i64, &str, &str, &str)> = books
        .iter()
        .map(|b| (b.id, b.title.as_str(), b.author.as_str(), b.year.as_str()))
        .collect();
    assert_eq!(
        tuples,
        vec![
            (1, "Dune", "Frank Herbert", "1966"),
            (2, "Foundation", "Isaac Asimov", "1951"),
        ]
    );

    store.delete(foundation).unwrap();
    let books = store.list_all().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, 1);
    assert_eq!(books[0].year, "1966");
}

#[test]
fn unreachable_storage_reports_unavailable() {
    let dir = TempDir::new().unwrap();

    // A plain file where the store expects a directory makes the open fail.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let store = CatalogStore::at_path(blocker.join("books.sqlite"));
    let err = store.create("Dune", "Frank Herbert", "1965").unwrap_err();
    assert!(
        matches!(err, StoreError::Unavailable(_)),
        "expected storage failure, got {err:?}"
    );
}
