//! Reset command implementation.

use super::confirm;
use crate::error::Result;
use crate::output::Formatter;
use crate::Engine;

/// Execute the reset command.
pub fn execute_reset(yes: bool, engine: &mut Engine, formatter: &Formatter) -> Result<()> {
    let selection = engine.active_selection().to_string();

    if !yes && !confirm(&format!("Clear the ranking of '{}'?", selection), formatter)? {
        return Ok(());
    }

    engine.reset_current_ranking()?;
    println!("{}", formatter.success(&format!("Reset '{}'", selection)));
    Ok(())
}
