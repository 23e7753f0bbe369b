use std::fs;
use std::path::Path;

use book_catalog_manager::export::{ensure_csv_extension, export_csv, CSV_HEADERS};
use book_catalog_manager::Book;
use tempfile::TempDir;

fn book(id: i64, title: &str, author: &str, year: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        year: year.to_string(),
    }
}

/// Minimal CSV reader used to check round-trip fidelity: splits on commas,
/// honors quoted fields with doubled quotes, and treats line breaks inside
/// quotes as data.
fn parse_csv(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(ch),
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => record.push(std::mem::take(&mut field)),
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                '\r' => {}
                _ => field.push(ch),
            }
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}

#[test]
fn export_writes_header_plus_one_line_per_book() {
    let dir = TempDir::new().unwrap();
    let books = vec![
        book(1, "Dune", "Frank Herbert", "1965"),
        book(2, "Foundation", "Isaac Asimov", "1951"),
        book(3, "Hyperion", "Dan Simmons", "1989"),
    ];

    let written = export_csv(&dir.path().join("catalog.csv"), &books).unwrap();
    let content = fs::read_to_string(&written).unwrap();

    assert!(content.ends_with('\n'));
    assert_eq!(content.lines().count(), books.len() + 1);
    assert_eq!(
        content.lines().next().unwrap(),
        "ID,Judul/Title,Pengarang/Author,Tahun/Year"
    );
}

#[test]
fn export_reparses_to_the_same_tuples_in_order() {
    let dir = TempDir::new().unwrap();
    let books = vec![
        book(1, "Herbert, Frank: A Study", "Anon", "1990"),
        book(2, "The \"Golden\" Path", "Leto II", "10191"),
        book(3, "Line\nBreak", "Nobody", "2020"),
        book(4, "Plain", "Simple", "2000"),
    ];

    let written = export_csv(&dir.path().join("catalog.csv"), &books).unwrap();
    let content = fs::read_to_string(&written).unwrap();
    let records = parse_csv(&content);

    assert_eq!(records.len(), books.len() + 1);
    assert_eq!(records[0], CSV_HEADERS);

    for (record, expected) in records[1..].iter().zip(&books) {
        assert_eq!(record[0], expected.id.to_string());
        assert_eq!(record[1], expected.title);
        assert_eq!(record[2], expected.author);
        assert_eq!(record[3], expected.year);
    }
}

#[test]
fn empty_catalog_exports_header_only() {
    let dir = TempDir::new().unwrap();

    let written = export_csv(&dir.path().join("empty.csv"), &[]).unwrap();
    let content = fs::read_to_string(&written).unwrap();

    assert_eq!(content, "ID,Judul/Title,Pengarang/Author,Tahun/Year\n");
}

#[test]
fn missing_extension_is_appended_on_write() {
    let dir = TempDir::new().unwrap();
    let books = vec![book(1, "Dune", "Frank Herbert", "1965")];

    let written = export_csv(&dir.path().join("catalog"), &books).unwrap();
    assert_eq!(written, dir.path().join("catalog.csv"));
    assert!(written.exists());

    // An existing extension is kept, whatever its case.
    let upper = export_csv(&dir.path().join("catalog.CSV"), &books).unwrap();
    assert_eq!(upper, dir.path().join("catalog.CSV"));

    // A non-csv extension gets the suffix appended rather than replaced.
    assert_eq!(
        ensure_csv_extension(Path::new("notes.txt")),
        Path::new("notes.txt.csv")
    );
}

#[test]
fn export_failure_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no-such-dir").join("catalog.csv");

    let err = export_csv(&missing, &[]).unwrap_err();
    assert!(err.to_string().contains("no-such-dir"));
}
