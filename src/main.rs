//! Binary entry point that glues the flat-file store to the presentation
//! surfaces: resolve the data file, hydrate the catalog, and hand it to
//! either the numbered menu loop or the Ratatui form until the user exits.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use library_catalog::{default_data_path, load_catalog, run_app, run_menu, App};

/// Personal library catalog over a comma-delimited data file.
#[derive(Parser)]
#[command(name = "library-catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the catalog data file (defaults to
    /// ~/.library-catalog/library_data.txt)
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Numbered menu on stdin/stdout (the default)
    Menu,
    /// Full-screen entry form
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_path = match cli.file {
        Some(path) => path,
        None => default_data_path()?,
    };

    let had_data = data_path.exists();
    let mut catalog = load_catalog(&data_path)?;

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            if had_data {
                println!("Data loaded successfully!");
            } else {
                println!("No existing data found. Starting fresh!");
            }
            run_menu(&mut catalog, &data_path)
        }
        Command::Tui => {
            let mut app = App::new(catalog, data_path);
            run_app(&mut app)
        }
    }
}
