use anyhow::{anyhow, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::Book;

/// Internal representation of the book entry form.
#[derive(Default, Clone)]
pub(crate) struct BookForm {
    pub(crate) isbn: String,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) active: BookField,
    pub(crate) error: Option<String>,
}

/// Fields available within the book form, in focus order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum BookField {
    Isbn,
    Title,
    Author,
    Year,
}

impl Default for BookField {
    fn default() -> Self {
        BookField::Isbn
    }
}

impl BookField {
    /// Row index of the field inside the form widget, used for cursor
    /// placement.
    pub(crate) fn row(self) -> u16 {
        match self {
            BookField::Isbn => 0,
            BookField::Title => 1,
            BookField::Author => 2,
            BookField::Year => 3,
        }
    }

    /// Label rendered in front of the field value.
    pub(crate) fn label(self) -> &'static str {
        match self {
            BookField::Isbn => "ISBN",
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Year => "Year",
        }
    }
}

impl BookForm {
    /// Cycle focus across the four fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            BookField::Isbn => BookField::Title,
            BookField::Title => BookField::Author,
            BookField::Author => BookField::Year,
            BookField::Year => BookField::Isbn,
        };
    }

    /// Append a character to the active field. Control characters are
    /// ignored; the year stays free text because the catalog never treats it
    /// numerically.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.active_value_mut().push(ch);
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    /// Validate the inputs and return a book ready for the catalog. Every
    /// field must be non-empty after trimming.
    pub(crate) fn parse_inputs(&self) -> Result<Book> {
        let isbn = self.isbn.trim();
        let title = self.title.trim();
        let author = self.author.trim();
        let year = self.year.trim();

        if isbn.is_empty() || title.is_empty() || author.is_empty() || year.is_empty() {
            return Err(anyhow!("All fields are required!"));
        }
        Ok(Book::new(isbn, title, author, year))
    }

    /// Render a styled line for one field of the form widget.
    pub(crate) fn build_line(&self, field: BookField) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.to_string()
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

    /// Return the character count for the requested field.
    pub(crate) fn value_len(&self, field: BookField) -> usize {
        self.value(field).chars().count()
    }

    fn value(&self, field: BookField) -> &str {
        match field {
            BookField::Isbn => &self.isbn,
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Year => &self.year,
        }
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.active {
            BookField::Isbn => &mut self.isbn,
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Year => &mut self.year,
        }
    }
}
