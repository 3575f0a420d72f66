use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::models::Book;

/// Errors raised while decoding the persisted catalog file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A persisted line held fewer than the four comma-separated fields of a
    /// record. The line number is 1-based.
    #[error("line {line}: expected 4 comma-separated fields")]
    MalformedLine { line: usize },
}

/// Load the catalog from the flat file at `path`. A missing file is not an
/// error: the catalog simply starts empty. Records pass through
/// [`Catalog::from_books`], so the sort invariant holds even when the file
/// was edited by hand.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Ok(Catalog::new());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut books = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let book = parse_book(line, index + 1)
            .with_context(|| format!("malformed record in {}", path.display()))?;
        books.push(book);
    }

    Ok(Catalog::from_books(books))
}

/// Rewrite the whole data file from the catalog's title-ordered sequence.
/// Runs after every mutating operation; there is no append path.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create data directory")?;
        }
    }

    let mut contents = String::new();
    for book in catalog.books() {
        contents.push_str(&book_line(book));
        contents.push('\n');
    }

    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// Decode one persisted line. The format carries no escaping, so only the
/// first three commas act as separators; any further commas stay part of the
/// year field.
fn parse_book(line: &str, line_no: usize) -> Result<Book, StoreError> {
    let mut fields = line.splitn(4, ',');
    match (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) {
        (Some(isbn), Some(title), Some(author), Some(year)) => {
            Ok(Book::new(isbn, title, author, year))
        }
        _ => Err(StoreError::MalformedLine { line: line_no }),
    }
}

/// Encode one record as a persisted line. Commas inside fields are written
/// through unescaped; a comma in a title or author corrupts the file on
/// reload, an accepted limitation of the format.
fn book_line(book: &Book) -> String {
    format!("{},{},{},{}", book.isbn, book.title, book.author, book.year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(Book::new("001", "Dune", "Herbert", "1965"));
        catalog.insert(Book::new("002", "Atlas", "Rand", "1957"));
        catalog
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let catalog = load_catalog(&dir.path().join("absent.txt")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn save_writes_title_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library_data.txt");
        save_catalog(&path, &sample()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "002,Atlas,Rand,1957\n001,Dune,Herbert,1965\n");
    }

    #[test]
    fn round_trip_preserves_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library_data.txt");
        let original = sample();
        save_catalog(&path, &original).unwrap();

        let reloaded = load_catalog(&path).unwrap();
        assert_eq!(reloaded.books(), original.books());
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("library_data.txt");
        save_catalog(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn load_sorts_unordered_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library_data.txt");
        fs::write(&path, "001,Dune,Herbert,1965\n002,Atlas,Rand,1957\n").unwrap();

        let catalog = load_catalog(&path).unwrap();
        let titles: Vec<_> = catalog
            .books()
            .iter()
            .map(|book| book.title.as_str())
            .collect();
        assert_eq!(titles, ["Atlas", "Dune"]);
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library_data.txt");
        fs::write(&path, "001,Dune,Herbert,1965\nnot-a-record\n").unwrap();

        let err = load_catalog(&path).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("line 2"), "unexpected error: {chain}");
    }

    #[test]
    fn extra_commas_stay_in_the_year_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library_data.txt");
        fs::write(&path, "001,Dune,Herbert,1965,extra\n").unwrap();

        let catalog = load_catalog(&path).unwrap();
        let book = catalog.find_by_isbn("001").unwrap();
        assert_eq!(book.year, "1965,extra");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library_data.txt");
        fs::write(&path, "001,Dune,Herbert,1965\n\n").unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
