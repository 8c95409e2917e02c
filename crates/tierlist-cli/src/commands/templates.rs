//! Templates command implementation.

use super::confirm;
use crate::cli::{TemplateAction, TemplateArgs};
use crate::error::Result;
use crate::output::Formatter;
use crate::Engine;

/// Execute the templates command.
pub fn execute_templates(args: TemplateArgs, engine: &mut Engine, formatter: &Formatter) -> Result<()> {
    match args.action {
        TemplateAction::List => {
            let active = engine.active_selection().as_str().to_string();
            println!("{}", formatter.format_templates(&engine.templates(), &active)?);
        }
        TemplateAction::Use { id } => {
            let switched = engine.set_active_template(&id);
            if switched {
                engine.save_settings()?;
            }
            println!(
                "{}",
                formatter.outcome(
                    switched,
                    &format!("Now ranking '{}'", id),
                    &format!("Unknown template '{}'", id),
                )
            );
        }
        TemplateAction::Save { name } => match engine.save_as_template(&name)? {
            Some(template) => println!(
                "{}",
                formatter.success(&format!("Saved template '{}' as {}", template.name, template.id))
            ),
            None => println!(
                "{}",
                formatter.warning("Nothing to save: switch to 'custom' and add tiers first")
            ),
        },
        TemplateAction::Delete { id, yes } => {
            if !engine.registry().user_templates().iter().any(|t| t.id == id) {
                println!("{}", formatter.warning(&format!("No user template '{}'", id)));
                return Ok(());
            }
            if !yes && !confirm(&format!("Delete template '{}' and its ranking?", id), formatter)? {
                return Ok(());
            }

            let deleted = engine.delete_custom_template(&id)?;
            println!(
                "{}",
                formatter.outcome(
                    deleted,
                    &format!("Deleted template '{}'", id),
                    &format!("Template '{}' was not deleted", id),
                )
            );
        }
    }

    Ok(())
}
