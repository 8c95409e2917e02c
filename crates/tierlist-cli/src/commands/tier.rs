//! Tier command implementation.

use crate::cli::{TierAction, TierArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::Engine;
use tierlist_domain::{TierDefinition, TierUpdate};

/// Execute the tier command.
pub fn execute_tier(args: TierArgs, engine: &mut Engine, formatter: &Formatter) -> Result<()> {
    let message = match args.action {
        TierAction::Add { id, name, color } => {
            let added = engine.add_custom_tier(TierDefinition::new(&id, name, color))?;
            formatter.outcome(
                added,
                &format!("Added tier '{}'", id),
                &format!("Tier '{}' not added: custom set must be active and the id unused", id),
            )
        }
        TierAction::Remove { id } => {
            let removed = engine.remove_custom_tier(&id)?;
            formatter.outcome(
                removed,
                &format!("Removed tier '{}'", id),
                &format!("No custom tier '{}'", id),
            )
        }
        TierAction::Edit { id, name, color } => {
            let update = TierUpdate { name, color };
            if update.is_empty() {
                return Err(CliError::InvalidInput(
                    "Provide --name and/or --color".to_string(),
                ));
            }
            let edited = engine.update_tier(&id, &update)?;
            formatter.outcome(
                edited,
                &format!("Updated tier '{}'", id),
                &format!("No tier '{}'", id),
            )
        }
    };

    println!("{}", message);
    Ok(())
}
