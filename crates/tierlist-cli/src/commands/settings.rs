//! Settings command implementation.

use crate::cli::SettingsArgs;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use crate::Engine;

/// Execute the settings command.
///
/// With no flags the current settings are printed.
pub fn execute_settings(
    args: SettingsArgs,
    engine: &mut Engine,
    formatter: &Formatter,
    format: OutputFormat,
) -> Result<()> {
    let changed = args.show_names.is_some() || args.title.is_some();

    if let Some(show) = args.show_names {
        engine.set_show_item_names(show)?;
    }
    if let Some(title) = &args.title {
        engine.set_page_title(title)?;
    }

    if changed {
        println!("{}", formatter.success("Settings saved"));
        return Ok(());
    }

    let settings = engine.settings();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(settings)?),
        _ => {
            println!("Page title:      {}", settings.page_title);
            println!("Show item names: {}", settings.show_item_names);
            println!("Template:        {}", settings.current_template);
        }
    }
    Ok(())
}
