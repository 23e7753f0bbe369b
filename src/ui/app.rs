use std::mem;

use anyhow::{Error, Result};
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap,
};
use ratatui::Frame;

use crate::db::CatalogStore;
use crate::export::export_csv;
use crate::models::{Book, BookField};

use super::forms::{BookForm, ConfirmDelete, ExportForm, FieldForm, FieldPicker};
use super::helpers::{centered_rect, surface_error};

/// Header space for the catalog title, record count, and filter indicator.
const HEADER_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;

/// Fine-grained modes layered over the single catalog screen. Keeping them
/// explicit makes it easy to reason about which modal renders and where every
/// keystroke goes.
enum Mode {
    Normal,
    AddingBook(BookForm),
    PickingField(FieldPicker),
    EditingField { book_id: i64, form: FieldForm },
    ConfirmDelete(ConfirmDelete),
    Searching(SearchState),
    Exporting(ExportForm),
    Help,
}

/// State for an active incremental title search.
struct SearchState {
    query: String,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
///
/// `books` is the last snapshot fetched from the store and gets wholesale
/// replaced after every mutation; nothing in here is authoritative. The
/// filter and selection only describe how that snapshot is currently shown.
pub struct App {
    store: CatalogStore,
    books: Vec<Book>,
    filter: Option<String>,
    selected: usize,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: CatalogStore, books: Vec<Book>) -> Self {
        Self {
            store,
            books,
            filter: None,
            selected: 0,
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingBook(form) => self.handle_add_book(code, form)?,
            Mode::PickingField(picker) => self.handle_pick_field(code, picker)?,
            Mode::EditingField { book_id, form } => self.handle_edit_field(code, book_id, form)?,
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm)?,
            Mode::Searching(state) => self.handle_search(code, state)?,
            Mode::Exporting(form) => self.handle_export(code, form)?,
            Mode::Help => match code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Mode::Normal,
                _ => Mode::Help,
            },
        };

        self.mode = mode;
        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') => {
                *exit = true;
            }
            KeyCode::Esc => {
                if self.filter.is_some() {
                    self.filter = None;
                    self.clamp_selection();
                    self.set_status("Search cleared.", StatusKind::Info);
                } else {
                    *exit = true;
                }
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-5),
            KeyCode::PageDown => self.move_selection(5),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Char('+') => {
                self.clear_status();
                return Ok(Mode::AddingBook(BookForm::default()));
            }
            KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
                if let Some(book) = self.current_book() {
                    self.clear_status();
                    return Ok(Mode::PickingField(FieldPicker::new(&book)));
                } else {
                    self.set_status("No book selected to edit.", StatusKind::Error);
                }
            }
            KeyCode::Char('-') => {
                if let Some(book) = self.current_book() {
                    self.clear_status();
                    return Ok(Mode::ConfirmDelete(ConfirmDelete::from(book)));
                } else {
                    self.set_status("No book selected to remove.", StatusKind::Error);
                }
            }
            KeyCode::Char('/') => {
                self.clear_status();
                let query = self.filter.clone().unwrap_or_default();
                return Ok(Mode::Searching(SearchState { query }));
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                self.clear_status();
                return Ok(Mode::Exporting(ExportForm::default()));
            }
            KeyCode::Char('?') => {
                self.clear_status();
                return Ok(Mode::Help);
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_add_book(&mut self, code: KeyCode, mut form: BookForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => Ok(Mode::Normal),
            KeyCode::Tab | KeyCode::Down => {
                form.next_field();
                Ok(Mode::AddingBook(form))
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.prev_field();
                Ok(Mode::AddingBook(form))
            }
            KeyCode::Backspace => {
                form.backspace();
                form.error = None;
                Ok(Mode::AddingBook(form))
            }
            KeyCode::Char(ch) => {
                form.push_char(ch);
                form.error = None;
                Ok(Mode::AddingBook(form))
            }
            KeyCode::Enter => match form.parse_inputs() {
                Ok((title, author, year)) => {
                    match self.store.create(&title, &author, &year) {
                        Ok(_) => {
                            self.set_status(format!("Added \"{title}\"."), StatusKind::Info);
                            self.refresh_books();
                            Ok(Mode::Normal)
                        }
                        Err(err) => {
                            form.error = Some(surface_error(&Error::new(err)));
                            Ok(Mode::AddingBook(form))
                        }
                    }
                }
                Err(err) => {
                    form.error = Some(surface_error(&err));
                    Ok(Mode::AddingBook(form))
                }
            },
            _ => Ok(Mode::AddingBook(form)),
        }
    }

    fn handle_pick_field(&mut self, code: KeyCode, mut picker: FieldPicker) -> Result<Mode> {
        match code {
            KeyCode::Esc => Ok(Mode::Normal),
            KeyCode::Up => {
                picker.move_selection(-1);
                Ok(Mode::PickingField(picker))
            }
            KeyCode::Down | KeyCode::Tab => {
                picker.move_selection(1);
                Ok(Mode::PickingField(picker))
            }
            KeyCode::Enter => {
                let field = picker.current();
                match self.books.iter().find(|book| book.id == picker.book_id) {
                    Some(book) => {
                        let current = match field {
                            BookField::Title => book.title.as_str(),
                            BookField::Author => book.author.as_str(),
                            BookField::Year => book.year.as_str(),
                        };
                        Ok(Mode::EditingField {
                            book_id: picker.book_id,
                            form: FieldForm::new(field, current),
                        })
                    }
                    None => {
                        self.set_status("That book is no longer in the catalog.", StatusKind::Error);
                        Ok(Mode::Normal)
                    }
                }
            }
            _ => Ok(Mode::PickingField(picker)),
        }
    }

    fn handle_edit_field(&mut self, code: KeyCode, book_id: i64, mut form: FieldForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => Ok(Mode::Normal),
            KeyCode::Backspace => {
                form.backspace();
                form.error = None;
                Ok(Mode::EditingField { book_id, form })
            }
            KeyCode::Char(ch) => {
                form.push_char(ch);
                form.error = None;
                Ok(Mode::EditingField { book_id, form })
            }
            KeyCode::Enter => match form.parse_input() {
                Ok(value) => match self.store.update_field(book_id, form.field, &value) {
                    Ok(()) => {
                        self.set_status(
                            format!("{} updated.", form.field.label()),
                            StatusKind::Info,
                        );
                        self.refresh_books();
                        Ok(Mode::Normal)
                    }
                    Err(err) => {
                        form.error = Some(surface_error(&Error::new(err)));
                        Ok(Mode::EditingField { book_id, form })
                    }
                },
                Err(err) => {
                    form.error = Some(surface_error(&err));
                    Ok(Mode::EditingField { book_id, form })
                }
            },
            _ => Ok(Mode::EditingField { book_id, form }),
        }
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmDelete) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.store.delete(confirm.id) {
                    Ok(()) => {
                        self.set_status(
                            format!("Deleted \"{}\".", confirm.title),
                            StatusKind::Info,
                        );
                        self.refresh_books();
                        Ok(Mode::Normal)
                    }
                    Err(err) => {
                        let message = surface_error(&Error::new(err));
                        self.set_status(message, StatusKind::Error);
                        Ok(Mode::ConfirmDelete(confirm))
                    }
                }
            }
            _ => Ok(Mode::ConfirmDelete(confirm)),
        }
    }

    fn handle_search(&mut self, code: KeyCode, mut state: SearchState) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.filter = None;
                self.clamp_selection();
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => {
                let shown = self.visible_books().len();
                if self.filter.is_some() {
                    self.set_status(
                        format!("{shown} of {} titles match.", self.books.len()),
                        StatusKind::Info,
                    );
                }
                return Ok(Mode::Normal);
            }
            KeyCode::Up => {
                self.move_selection(-1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Down => {
                self.move_selection(1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Char(ch) => {
                if !ch.is_control() {
                    state.query.push(ch);
                }
            }
            _ => return Ok(Mode::Searching(state)),
        }

        self.filter = if state.query.trim().is_empty() {
            None
        } else {
            Some(state.query.clone())
        };
        self.clamp_selection();

        Ok(Mode::Searching(state))
    }

    fn handle_export(&mut self, code: KeyCode, mut form: ExportForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => Ok(Mode::Normal),
            KeyCode::Backspace => {
                form.backspace();
                form.error = None;
                Ok(Mode::Exporting(form))
            }
            KeyCode::Char(ch) => {
                form.push_char(ch);
                form.error = None;
                Ok(Mode::Exporting(form))
            }
            KeyCode::Enter => match form.parse_input() {
                // The export always covers the full snapshot, not the
                // filtered view.
                Ok(path) => match export_csv(&path, &self.books) {
                    Ok(written) => {
                        self.set_status(
                            format!(
                                "Exported {} books to {}.",
                                self.books.len(),
                                written.display()
                            ),
                            StatusKind::Info,
                        );
                        Ok(Mode::Normal)
                    }
                    Err(err) => {
                        form.error = Some(surface_error(&err));
                        Ok(Mode::Exporting(form))
                    }
                },
                Err(err) => {
                    form.error = Some(surface_error(&err));
                    Ok(Mode::Exporting(form))
                }
            },
            _ => Ok(Mode::Exporting(form)),
        }
    }

    /// Replace the snapshot after a mutation. A failed re-read keeps the
    /// stale snapshot and reports through the footer; the next successful
    /// operation replaces it wholesale anyway, so the event loop stays up.
    fn refresh_books(&mut self) {
        match self.store.list_all() {
            Ok(books) => {
                self.books = books;
                self.clamp_selection();
            }
            Err(err) => {
                let message = surface_error(&Error::new(err));
                self.set_status(message, StatusKind::Error);
            }
        }
    }

    /// The snapshot as currently shown: filtered by title when a search is
    /// active, untouched otherwise.
    fn visible_books(&self) -> Vec<&Book> {
        match &self.filter {
            Some(query) => self
                .books
                .iter()
                .filter(|book| book.title_contains(query))
                .collect(),
            None => self.books.iter().collect(),
        }
    }

    /// The book under the cursor, if any row is visible.
    fn current_book(&self) -> Option<Book> {
        self.visible_books().get(self.selected).map(|book| (*book).clone())
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.visible_books().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }

    fn select_first(&mut self) {
        self.selected = 0;
    }

    fn select_last(&mut self) {
        self.selected = self.visible_books().len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_books().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        self.draw_table(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::AddingBook(form) => self.draw_book_form(frame, area, form),
            Mode::PickingField(picker) => self.draw_field_picker(frame, area, picker),
            Mode::EditingField { form, .. } => self.draw_field_form(frame, area, form),
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Searching(state) => self.draw_search_bar(frame, area, state),
            Mode::Exporting(form) => self.draw_export_form(frame, area, form),
            Mode::Help => self.draw_help(frame, area),
            Mode::Normal => {}
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let shown = self.visible_books().len();
        let summary = match &self.filter {
            Some(query) => format!(
                "{} of {} books shown • filter \"{}\"",
                shown,
                self.books.len(),
                query
            ),
            None => format!("{} books", self.books.len()),
        };

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Book Catalog",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw(summary)),
        ])
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, area);
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        if self.books.is_empty() {
            let message = Paragraph::new("No books yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(message, area);
            return;
        }

        let visible = self.visible_books();
        if visible.is_empty() {
            let message = Paragraph::new("No titles match the current search.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(message, area);
            return;
        }

        let header = Row::new(
            ["ID", "Title", "Author", "Year"]
                .into_iter()
                .map(Cell::from),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = visible.iter().map(|book| {
            Row::new([
                Cell::from(book.id.to_string()),
                Cell::from(book.title.clone()),
                Cell::from(book.author.clone()),
                Cell::from(book.year.clone()),
            ])
        });

        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(45),
            Constraint::Percentage(35),
            Constraint::Length(10),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::NONE))
            .row_highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = TableState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match &self.mode {
            Mode::Normal => Line::from(vec![
                Span::styled("[+]", key_style),
                Span::raw(" Add   "),
                Span::styled("[e]", key_style),
                Span::raw(" Edit   "),
                Span::styled("[-]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[/]", key_style),
                Span::raw(" Search   "),
                Span::styled("[x]", key_style),
                Span::raw(" Export   "),
                Span::styled("[?]", key_style),
                Span::raw(" Help   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            Mode::Searching(_) => Line::from(vec![
                Span::raw("Type to filter titles   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Keep filter   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Clear"),
            ]),
            Mode::PickingField(_) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Choose field   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Edit   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            Mode::ConfirmDelete(_) => Line::from(vec![
                Span::styled("[y]", key_style),
                Span::raw(" Confirm   "),
                Span::styled("[n]", key_style),
                Span::raw(" Cancel"),
            ]),
            Mode::Help => Line::from(vec![
                Span::styled("[Esc]", key_style),
                Span::raw(" Close help"),
            ]),
            _ => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
        }
    }

    fn draw_book_form(&self, frame: &mut Frame, area: Rect, form: &BookForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Add Book").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines: Vec<Line> = BookField::ALL
            .into_iter()
            .map(|field| form.build_line(field))
            .collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let row = BookField::ALL
            .iter()
            .position(|field| *field == form.active)
            .unwrap_or(0) as u16;
        let prefix = format!("{}: ", form.active.label()).len() as u16;
        let cursor_x = inner.x + prefix + form.value_len(form.active) as u16;
        let cursor_y = inner.y + row;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_field_picker(&self, frame: &mut Frame, area: Rect, picker: &FieldPicker) {
        let popup_area = centered_rect(50, 35, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Edit Which Field?").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![Line::from(format!("\"{}\"", picker.book_title)), Line::from("")];
        for (idx, field) in BookField::ALL.into_iter().enumerate() {
            let style = if idx == picker.selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if idx == picker.selected { "> " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("{marker}{}", field.label()),
                style,
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_field_form(&self, frame: &mut Frame, area: Rect, form: &FieldForm) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!("Edit {}", form.field.label()))
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![form.build_line(), Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let prefix = format!("{}: ", form.field.label()).len() as u16;
        let cursor_x = inner.x + prefix + form.value_len() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Deletion")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!(
                "Delete \"{}\" by {}?",
                confirm.title, confirm.author
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, state: &SearchState) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title("Search Titles");
        let paragraph = Paragraph::new(Span::raw(format!("Search: {}", state.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + "Search: ".len() as u16 + state.query.chars().count() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_export_form(&self, frame: &mut Frame, area: Rect, form: &ExportForm) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Export to CSV")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![form.build_line(), Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Exports the whole catalog • .csv is appended if missing",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor_x = inner.x + "File: ".len() as u16 + form.value_len() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 70, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Help").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from("Maintain the catalog with the keys below."),
            Line::from(""),
            Line::from(vec![
                Span::styled("  +      ", key_style),
                Span::raw("Add a book (title, author, and year are all required)"),
            ]),
            Line::from(vec![
                Span::styled("  e/Enter", key_style),
                Span::raw(" Edit one field of the selected book"),
            ]),
            Line::from(vec![
                Span::styled("  -      ", key_style),
                Span::raw("Delete the selected book"),
            ]),
            Line::from(vec![
                Span::styled("  /      ", key_style),
                Span::raw("Filter the table by title as you type"),
            ]),
            Line::from(vec![
                Span::styled("  x      ", key_style),
                Span::raw("Export the catalog to a CSV file"),
            ]),
            Line::from(vec![
                Span::styled("  ↑↓     ", key_style),
                Span::raw("Move between rows"),
            ]),
            Line::from(vec![
                Span::styled("  q      ", key_style),
                Span::raw("Quit"),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Search only hides rows; exports always contain every book.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}
