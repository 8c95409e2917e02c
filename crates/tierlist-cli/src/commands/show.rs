//! Show command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::Engine;

/// Execute the show command.
pub fn execute_show(engine: &Engine, formatter: &Formatter) -> Result<()> {
    let tiers = engine.current_tiers()?;
    let settings = engine.settings();
    let title = format!("{} [{}]", settings.page_title, engine.active_selection());

    println!(
        "{}",
        formatter.format_tiers(&title, &tiers, settings.show_item_names)?
    );
    Ok(())
}
