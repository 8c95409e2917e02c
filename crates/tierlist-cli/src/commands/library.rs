//! Library command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::Engine;

/// Execute the library command.
pub fn execute_library(engine: &Engine, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_items(engine.library().items())?);
    Ok(())
}
