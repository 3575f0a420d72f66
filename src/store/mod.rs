//! Persistence module split across logical submodules.

mod file;
mod location;

pub use file::{load_catalog, save_catalog, StoreError};
pub use location::default_data_path;
