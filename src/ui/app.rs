use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::Catalog;
use crate::store::save_catalog;

use super::forms::{BookField, BookForm};
use super::helpers::surface_error;

/// Rows reserved for the entry form: four fields, one message line, and the
/// surrounding border.
const FORM_HEIGHT: u16 = 7;
/// Footer space reserved for status messages and key instructions.
const FOOTER_HEIGHT: u16 = 3;

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

/// Central application state for the form surface: the catalog itself, the
/// data file it persists to, the entry form, and the output pane contents.
pub struct App {
    catalog: Catalog,
    data_path: PathBuf,
    form: BookForm,
    output: Vec<String>,
    status: Option<StatusMessage>,
}

impl App {
    /// Wrap a loaded catalog for the form surface. The app owns the catalog
    /// for its whole run; every mutation is followed by a full save to
    /// `data_path`.
    pub fn new(catalog: Catalog, data_path: PathBuf) -> Self {
        Self {
            catalog,
            data_path,
            form: BookForm::default(),
            output: Vec::new(),
            status: None,
        }
    }

    /// Process one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Esc => return Ok(true),
            KeyCode::Tab | KeyCode::BackTab => self.form.toggle_field(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => self.submit_add(),
            KeyCode::Char(ch) => {
                if self.form.push_char(ch) {
                    self.form.error = None;
                }
            }
            _ => {}
        }
        Ok(false)
    }

    /// Ctrl-V fills the output pane with every book in title order.
    pub(crate) fn handle_ctrl_v(&mut self) -> Result<()> {
        self.clear_status();
        if self.catalog.is_empty() {
            self.output = vec!["No books available!".to_string()];
        } else {
            self.output = self
                .catalog
                .books()
                .iter()
                .map(|book| book.to_string())
                .collect();
        }
        Ok(())
    }

    /// Validate the form, insert the book, and rewrite the data file. The
    /// fields are cleared only when both the validation and the save
    /// succeed, so the user can correct or retry without retyping.
    fn submit_add(&mut self) {
        let book = match self.form.parse_inputs() {
            Ok(book) => book,
            Err(err) => {
                let message = surface_error(&err);
                self.form.error = Some(message.clone());
                self.set_status(message, StatusKind::Error);
                return;
            }
        };

        let title = book.title.clone();
        self.catalog.insert(book);
        match save_catalog(&self.data_path, &self.catalog) {
            Ok(()) => {
                self.form = BookForm::default();
                self.output = vec![format!("Book added: {title}")];
                self.set_status("Book added successfully.", StatusKind::Info);
            }
            Err(err) => {
                let message = surface_error(&err);
                self.set_status(message, StatusKind::Error);
            }
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(frame.area());

        self.draw_form(frame, chunks[0]);
        self.draw_output(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Add Book").borders(Borders::ALL);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let mut lines = vec![
            self.form.build_line(BookField::Isbn),
            self.form.build_line(BookField::Title),
            self.form.build_line(BookField::Author),
            self.form.build_line(BookField::Year),
        ];

        if let Some(error) = &self.form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to add the book",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let active = self.form.active;
        let prefix = active.label().len() as u16 + 2;
        let cursor_x = inner.x + prefix + self.form.value_len(active) as u16;
        let cursor_y = inner.y + active.row();
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_output(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Books").borders(Borders::ALL);

        let lines: Vec<Line<'_>> = if self.output.is_empty() {
            vec![Line::from(Span::styled(
                "Press Ctrl-V to view all books.",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.output
                .iter()
                .map(|entry| Line::from(entry.as_str()))
                .collect()
        };

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
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

        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let instructions = Line::from(vec![
            Span::styled("[Enter]", key_style),
            Span::raw(" Add Book   "),
            Span::styled("[Ctrl-V]", key_style),
            Span::raw(" View Books   "),
            Span::styled("[Tab]", key_style),
            Span::raw(" Next Field   "),
            Span::styled("[Esc]", key_style),
            Span::raw(" Quit"),
        ]);

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
