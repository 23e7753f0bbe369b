use std::path::PathBuf;

use anyhow::{anyhow, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Book, BookField};

/// Input state for the "Add Book" form.
#[derive(Default, Clone)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) active: BookField,
    pub(crate) error: Option<String>,
}

impl BookForm {
    /// Move focus to the next field, wrapping around after the last one.
    pub(crate) fn next_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Author,
            BookField::Author => BookField::Year,
            BookField::Year => BookField::Title,
        };
    }

    /// Move focus to the previous field.
    pub(crate) fn prev_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Year,
            BookField::Author => BookField::Title,
            BookField::Year => BookField::Author,
        };
    }

    /// Append a printable character to the focused field.
    pub(crate) fn push_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.value_mut(self.active).push(ch);
        }
    }

    /// Remove the last character from the focused field.
    pub(crate) fn backspace(&mut self) {
        self.value_mut(self.active).pop();
    }

    /// Validate the inputs and return trimmed values ready for persistence.
    /// The first blank field wins so the message can name it.
    pub(crate) fn parse_inputs(&self) -> Result<(String, String, String)> {
        for field in BookField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(anyhow!("{} is required.", field.label()));
            }
        }
        Ok((
            self.title.trim().to_string(),
            self.author.trim().to_string(),
            self.year.trim().to_string(),
        ))
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: BookField) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Character count for the requested field, used for cursor placement.
    pub(crate) fn value_len(&self, field: BookField) -> usize {
        self.value(field).chars().count()
    }

    fn value(&self, field: BookField) -> &String {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Year => &self.year,
        }
    }

    fn value_mut(&mut self, field: BookField) -> &mut String {
        match field {
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Year => &mut self.year,
        }
    }
}

/// Picker state for choosing which field of the selected book to edit.
#[derive(Clone)]
pub(crate) struct FieldPicker {
    pub(crate) book_id: i64,
    pub(crate) book_title: String,
    pub(crate) selected: usize,
}

impl FieldPicker {
    pub(crate) fn new(book: &Book) -> Self {
        Self {
            book_id: book.id,
            book_title: book.title.clone(),
            selected: 0,
        }
    }

    pub(crate) fn move_selection(&mut self, delta: isize) {
        let len = BookField::ALL.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }

    pub(crate) fn current(&self) -> BookField {
        BookField::ALL[self.selected]
    }
}

/// Single-field edit form, seeded with the field's current value.
#[derive(Clone)]
pub(crate) struct FieldForm {
    pub(crate) field: BookField,
    pub(crate) value: String,
    pub(crate) error: Option<String>,
}

impl FieldForm {
    pub(crate) fn new(field: BookField, current: &str) -> Self {
        Self {
            field,
            value: current.to_string(),
            error: None,
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.value.push(ch);
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.value.pop();
    }

    /// Trim the input and reject blank values. Creation validates non-empty
    /// fields at the store boundary; edits keep the same rule at the form so
    /// a record can never lose a required field through the edit flow.
    pub(crate) fn parse_input(&self) -> Result<String> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("{} is required.", self.field.label()));
        }
        Ok(trimmed.to_string())
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        let display = if self.value.is_empty() {
            "<required>".to_string()
        } else {
            self.value.clone()
        };

        let style = if self.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };

        Line::from(vec![
            Span::raw(format!("{}: ", self.field.label())),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn value_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Path input for the CSV export dialog.
#[derive(Default, Clone)]
pub(crate) struct ExportForm {
    pub(crate) path: String,
    pub(crate) error: Option<String>,
}

impl ExportForm {
    pub(crate) fn push_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.path.push(ch);
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.path.pop();
    }

    /// Require a non-empty path; extension handling happens in the export
    /// module.
    pub(crate) fn parse_input(&self) -> Result<PathBuf> {
        let trimmed = self.path.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("A file path is required."));
        }
        Ok(PathBuf::from(trimmed))
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        let display = if self.path.is_empty() {
            "<path>".to_string()
        } else {
            self.path.clone()
        };

        let style = if self.path.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };

        Line::from(vec![Span::raw("File: "), Span::styled(display, style)])
    }

    pub(crate) fn value_len(&self) -> usize {
        self.path.chars().count()
    }
}

/// Confirmation state for deleting the selected book.
#[derive(Clone)]
pub(crate) struct ConfirmDelete {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: String,
}

impl ConfirmDelete {
    /// Build the confirmation state from the book being considered.
    pub(crate) fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
        }
    }
}
