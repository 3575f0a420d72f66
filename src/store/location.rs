use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".library-catalog";
/// Flat data file name stored inside the application data directory.
const DATA_FILE_NAME: &str = "library_data.txt";

/// Resolve the absolute path to the catalog data file inside the user's
/// home. Callers may bypass this with an explicit `--file` path.
pub fn default_data_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs
        .home_dir()
        .join(DATA_DIR_NAME)
        .join(DATA_FILE_NAME))
}
