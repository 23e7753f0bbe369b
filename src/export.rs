//! CSV serialization of catalog snapshots.
//!
//! Export always works from the full snapshot handed in by the caller, never
//! from a filtered view. The quoting rules are the standard ones: a field
//! containing a delimiter, a double quote, or a line break gets wrapped in
//! double quotes with embedded quotes doubled; everything else is written
//! verbatim.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::Book;

/// Column labels written as the first line of every export. The bilingual
/// forms are the established header contract of this catalog's CSV files and
/// must not change.
pub const CSV_HEADERS: [&str; 4] = ["ID", "Judul/Title", "Pengarang/Author", "Tahun/Year"];

/// Serialize the snapshot to `path`, appending a `.csv` extension when the
/// caller left it off. Returns the path actually written so the UI can echo
/// it back to the user.
pub fn export_csv(path: &Path, books: &[Book]) -> Result<PathBuf> {
    let path = ensure_csv_extension(path);

    let file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_record(&mut writer, &CSV_HEADERS)
        .with_context(|| format!("failed to write to {}", path.display()))?;
    for book in books {
        let id = book.id.to_string();
        let record = [
            id.as_str(),
            book.title.as_str(),
            book.author.as_str(),
            book.year.as_str(),
        ];
        write_record(&mut writer, &record)
            .with_context(|| format!("failed to write to {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(path)
}

/// Append `.csv` unless the path already carries that extension in any case.
pub fn ensure_csv_extension(path: &Path) -> PathBuf {
    let has_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if has_csv {
        path.to_path_buf()
    } else {
        let mut raw = path.to_path_buf().into_os_string();
        raw.push(".csv");
        PathBuf::from(raw)
    }
}

/// Write one comma-separated line, quoting fields as needed.
fn write_record(writer: &mut impl Write, fields: &[&str]) -> std::io::Result<()> {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            writer.write_all(b",")?;
        }
        writer.write_all(quote_field(field).as_bytes())?;
    }
    writer.write_all(b"\n")
}

/// Quote a single field when it contains a delimiter, a quote, or a line
/// break; otherwise pass it through untouched.
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_pass_through() {
        assert_eq!(quote_field("Dune"), "Dune");
        assert_eq!(quote_field("Frank Herbert"), "Frank Herbert");
    }

    #[test]
    fn delimiters_and_quotes_force_quoting() {
        assert_eq!(quote_field("Herbert, Frank"), "\"Herbert, Frank\"");
        assert_eq!(
            quote_field("The \"Golden\" Path"),
            "\"The \"\"Golden\"\" Path\""
        );
        assert_eq!(quote_field("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn extension_is_appended_only_when_missing() {
        assert_eq!(
            ensure_csv_extension(Path::new("books")),
            PathBuf::from("books.csv")
        );
        assert_eq!(
            ensure_csv_extension(Path::new("books.csv")),
            PathBuf::from("books.csv")
        );
        assert_eq!(
            ensure_csv_extension(Path::new("books.CSV")),
            PathBuf::from("books.CSV")
        );
        assert_eq!(
            ensure_csv_extension(Path::new("notes.txt")),
            PathBuf::from("notes.txt.csv")
        );
    }
}
