//! Line-oriented menu surface. A numbered prompt loop on stdin/stdout that
//! translates each selection into a catalog operation and rewrites the data
//! file after every mutation. One operation runs to completion before the
//! next prompt appears.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::catalog::Catalog;
use crate::models::Book;
use crate::store::save_catalog;

/// Options offered by the numbered menu, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum MenuChoice {
    Add,
    SearchIsbn,
    SearchTitle,
    ViewAll,
    Modify,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parse the user's selection. Anything other than the digits 1-7
    /// (surrounding whitespace ignored) is rejected.
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::SearchIsbn),
            "3" => Some(Self::SearchTitle),
            "4" => Some(Self::ViewAll),
            "5" => Some(Self::Modify),
            "6" => Some(Self::Delete),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu loop until the user picks Exit or stdin closes.
pub fn run_menu(catalog: &mut Catalog, data_path: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu()?;
        let Some(line) = read_choice(&mut input)? else {
            // stdin closed; leave the loop as if Exit had been chosen.
            return Ok(());
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Add) => add_book(catalog, &mut input, data_path)?,
            Some(MenuChoice::SearchIsbn) => search_by_isbn(catalog, &mut input)?,
            Some(MenuChoice::SearchTitle) => search_by_title(catalog, &mut input)?,
            Some(MenuChoice::ViewAll) => view_books(catalog),
            Some(MenuChoice::Modify) => modify_book(catalog, &mut input, data_path)?,
            Some(MenuChoice::Delete) => delete_book(catalog, &mut input, data_path)?,
            Some(MenuChoice::Exit) => return Ok(()),
            None => println!("Invalid option. Try again!"),
        }
    }
}

/// Print the numbered menu and the selection prompt.
fn print_menu() -> Result<()> {
    println!();
    println!("Library Catalog");
    println!("1. Add Book");
    println!("2. Search Book by ISBN");
    println!("3. Search Book by Title");
    println!("4. View All Books");
    println!("5. Modify Book");
    println!("6. Delete Book");
    println!("7. Exit");
    print!("Choose an option: ");
    io::stdout().flush().context("failed to flush stdout")
}

/// Read the menu selection line. `None` signals end of input.
fn read_choice(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = reader
        .read_line(&mut line)
        .context("failed to read menu choice")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Show a labeled prompt and read one trimmed line of input.
fn prompt(reader: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let bytes = reader
        .read_line(&mut line)
        .context("failed to read input")?;
    if bytes == 0 {
        bail!("input closed mid-prompt");
    }
    Ok(line.trim().to_string())
}

/// Rewrite the data file and confirm, mirroring the full-save-per-mutation
/// contract of the store.
fn persist(catalog: &Catalog, data_path: &Path) -> Result<()> {
    save_catalog(data_path, catalog)?;
    println!("Data saved successfully!");
    Ok(())
}

/// Prompt for all four fields, insert the book, and save.
fn add_book(catalog: &mut Catalog, input: &mut impl BufRead, data_path: &Path) -> Result<()> {
    let isbn = prompt(input, "Enter ISBN: ")?;
    let title = prompt(input, "Enter Book Title: ")?;
    let author = prompt(input, "Enter Author: ")?;
    let year = prompt(input, "Enter Publication Year: ")?;

    catalog.insert(Book::new(isbn, title, author, year));
    persist(catalog, data_path)?;
    println!("Book added successfully!");
    Ok(())
}

/// Direct lookup by ISBN.
fn search_by_isbn(catalog: &Catalog, input: &mut impl BufRead) -> Result<()> {
    let isbn = prompt(input, "Enter ISBN to search: ")?;
    match catalog.find_by_isbn(&isbn) {
        Some(book) => println!("{book}"),
        None => println!("Book not found!"),
    }
    Ok(())
}

/// Binary search over the title-ordered sequence.
fn search_by_title(catalog: &Catalog, input: &mut impl BufRead) -> Result<()> {
    let title = prompt(input, "Enter Title to search: ")?;
    match catalog.find_by_title(&title) {
        Some(book) => println!("{book}"),
        None => println!("Book not found!"),
    }
    Ok(())
}

/// List every record in title order.
fn view_books(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("No books available!");
        return;
    }
    for book in catalog.books() {
        println!("{book}");
    }
}

/// Replace all editable fields of an existing book, showing the current
/// value in each prompt, then save.
fn modify_book(catalog: &mut Catalog, input: &mut impl BufRead, data_path: &Path) -> Result<()> {
    let isbn = prompt(input, "Enter ISBN of the book to modify: ")?;
    let Some(current) = catalog.find_by_isbn(&isbn).cloned() else {
        println!("Book not found!");
        return Ok(());
    };

    let title = prompt(input, &format!("Enter new Title (current: {}): ", current.title))?;
    let author = prompt(
        input,
        &format!("Enter new Author (current: {}): ", current.author),
    )?;
    let year = prompt(
        input,
        &format!("Enter new Publication Year (current: {}): ", current.year),
    )?;

    if catalog.update(&isbn, &title, &author, &year) {
        persist(catalog, data_path)?;
        println!("Book modified successfully!");
    } else {
        println!("Book not found!");
    }
    Ok(())
}

/// Delete a book by ISBN and save.
fn delete_book(catalog: &mut Catalog, input: &mut impl BufRead, data_path: &Path) -> Result<()> {
    let isbn = prompt(input, "Enter ISBN of the book to delete: ")?;
    if catalog.remove(&isbn) {
        persist(catalog, data_path)?;
        println!("Book deleted successfully!");
    } else {
        println!("Book not found!");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_valid_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::SearchIsbn));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::SearchTitle));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::ViewAll));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Modify));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Delete));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(MenuChoice::parse(" 4 \n"), Some(MenuChoice::ViewAll));
    }

    #[test]
    fn rejects_out_of_range_and_non_numeric_input() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("add"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
