//! Domain models that mirror the SQLite schema and get passed throughout the
//! TUI. These types stay light-weight data holders so the other layers can
//! focus on presentation and persistence logic.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One catalog entry. The struct mirrors a row in the `books` table.
pub struct Book {
    /// Primary key from the database. We keep this around even when the UI
    /// only needs display information because edit/delete flows bubble the id
    /// back to the persistence layer.
    pub id: i64,
    /// Title displayed in the table and matched by the search filter.
    pub title: String,
    /// Author shown next to the title.
    pub author: String,
    /// Publication year, kept as raw text. Users enter things like "c. 1965"
    /// or "1951-1953" and we store them verbatim.
    pub year: String,
}

impl Book {
    /// Case-insensitive substring match against the title. The search feature
    /// filters the in-memory snapshot with this; the database is never asked
    /// to filter.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// The three editable columns of a book row. Field-level updates are
/// addressed with this enum so an invalid column name cannot be expressed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BookField {
    Title,
    Author,
    Year,
}

impl BookField {
    /// Every field, in table-column order. Drives form focus cycling and the
    /// field picker for inline edits.
    pub const ALL: [BookField; 3] = [BookField::Title, BookField::Author, BookField::Year];

    /// Column name in the `books` table.
    pub fn column(self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Year => "year",
        }
    }

    /// Capitalized label shown in forms and table headers.
    pub fn label(self) -> &'static str {
        match self {
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Year => "Year",
        }
    }
}

impl Default for BookField {
    /// Title is the first field in every form and picker.
    fn default() -> Self {
        BookField::Title
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_match_ignores_case() {
        let book = Book {
            id: 1,
            title: "The Left Hand of Darkness".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            year: "1969".to_string(),
        };

        assert!(book.title_contains("left hand"));
        assert!(book.title_contains("DARK"));
        assert!(!book.title_contains("dispossessed"));
    }

    #[test]
    fn field_columns_match_schema() {
        assert_eq!(BookField::Title.column(), "title");
        assert_eq!(BookField::Author.column(), "author");
        assert_eq!(BookField::Year.column(), "year");
    }
}
