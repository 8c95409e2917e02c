//! Export and import command implementations.

use crate::error::Result;
use crate::output::Formatter;
use crate::Engine;
use std::fs;

/// Execute the export command.
pub fn execute_export(output: Option<String>, engine: &Engine, formatter: &Formatter) -> Result<()> {
    let json = engine.export_json()?;

    match output {
        Some(path) => {
            fs::write(&path, json)?;
            println!("{}", formatter.success(&format!("Exported to {}", path)));
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Execute the import command.
pub fn execute_import(file: String, engine: &mut Engine, formatter: &Formatter) -> Result<()> {
    let contents = fs::read_to_string(&file)?;
    let imported = engine.import_json(&contents)?;

    println!(
        "{}",
        formatter.outcome(
            imported,
            &format!("Imported {}", file),
            &format!("{} is not a ranking export", file),
        )
    );
    Ok(())
}
