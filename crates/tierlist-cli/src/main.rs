//! Tierlist CLI - Command-line interface for the tier ranking engine.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tierlist_cli::commands;
use tierlist_cli::{logging, Cli, Command, Config, Engine, Formatter};
use tierlist_store::SqliteStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> tierlist_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Load or create config
    let config = match &cli.config {
        Some(path) => Config::load_from(&PathBuf::from(path))?,
        None => Config::load()?,
    };

    // Open the database
    let db_path = match &cli.db {
        Some(path) => PathBuf::from(path),
        None => config.database_path()?,
    };
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }
    tracing::debug!("Opening database at {}", db_path.display());
    let store = SqliteStore::new(&db_path)?;
    let mut engine = Engine::with_config(store, config.engine.clone())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        None | Some(Command::Show) => commands::execute_show(&engine, &formatter)?,
        Some(Command::Templates(args)) => {
            commands::execute_templates(args, &mut engine, &formatter)?
        }
        Some(Command::Tier(args)) => commands::execute_tier(args, &mut engine, &formatter)?,
        Some(Command::Item(args)) => commands::execute_item(args, &mut engine, &formatter)?,
        Some(Command::Library) => commands::execute_library(&engine, &formatter)?,
        Some(Command::Reset { yes }) => commands::execute_reset(yes, &mut engine, &formatter)?,
        Some(Command::Export { output }) => {
            commands::execute_export(output, &engine, &formatter)?
        }
        Some(Command::Import { file }) => commands::execute_import(file, &mut engine, &formatter)?,
        Some(Command::Settings(args)) => {
            commands::execute_settings(args, &mut engine, &formatter, format)?
        }
    }

    Ok(())
}
