//! Core library surface for the personal library catalog.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the integration tests can reuse the same pieces:
//! the domain model, the sorted catalog core, the flat-file store, and the
//! two presentation surfaces.

pub mod catalog;
pub mod menu;
pub mod models;
pub mod store;
pub mod ui;

/// The in-memory owner of all records, exposing ISBN- and title-based
/// access.
pub use catalog::Catalog;

/// The domain type every layer manipulates.
pub use models::Book;

/// Convenience re-exports for the persistence layer, typically used by
/// `main.rs` and the integration tests.
pub use store::{default_data_path, load_catalog, save_catalog};

/// The two presentation entry points.
pub use menu::run_menu;
pub use ui::{run_app, App};
