//! End-to-end exercise of the public API: build a catalog, persist it, load
//! it back, and check that both access paths answer from the reloaded state.

use library_catalog::{load_catalog, save_catalog, Book, Catalog};
use tempfile::tempdir;

fn sample() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(Book::new("001", "Dune", "Herbert", "1965"));
    catalog.insert(Book::new("002", "Atlas", "Rand", "1957"));
    catalog.insert(Book::new("003", "Contact", "Sagan", "1985"));
    catalog
}

#[test]
fn save_then_load_reproduces_the_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library_data.txt");

    let original = sample();
    save_catalog(&path, &original).unwrap();
    let reloaded = load_catalog(&path).unwrap();

    assert_eq!(reloaded.len(), original.len());
    assert_eq!(reloaded.books(), original.books());
}

#[test]
fn reloaded_catalog_answers_both_lookups() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library_data.txt");
    save_catalog(&path, &sample()).unwrap();

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(
        catalog.find_by_isbn("002").map(|book| book.title.as_str()),
        Some("Atlas")
    );
    assert_eq!(
        catalog.find_by_title("Contact").map(|book| book.isbn.as_str()),
        Some("003")
    );
}

#[test]
fn mutations_after_reload_persist_across_another_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library_data.txt");
    save_catalog(&path, &sample()).unwrap();

    let mut catalog = load_catalog(&path).unwrap();
    assert!(catalog.remove("001"));
    assert!(catalog.update("002", "Atlas Shrugged", "Rand", "1957"));
    save_catalog(&path, &catalog).unwrap();

    let reloaded = load_catalog(&path).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.find_by_isbn("001").is_none());
    assert!(!reloaded.books().iter().any(|book| book.isbn == "001"));
    assert_eq!(
        reloaded
            .find_by_title("Atlas Shrugged")
            .map(|book| book.isbn.as_str()),
        Some("002")
    );

    let titles: Vec<_> = reloaded
        .books()
        .iter()
        .map(|book| book.title.as_str())
        .collect();
    assert_eq!(titles, ["Atlas Shrugged", "Contact"]);
}
