//! Item command implementation.

use super::confirm;
use crate::cli::{ItemAction, ItemArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::Engine;
use tierlist_domain::{Item, Tier};

/// Execute the item command.
pub fn execute_item(args: ItemArgs, engine: &mut Engine, formatter: &Formatter) -> Result<()> {
    let message = match args.action {
        ItemAction::Add { id, name, image, tier } => {
            let mut item = Item::new(&id, name);
            if let Some(image) = image {
                item = item.with_image(image);
            }

            match tier {
                Some(tier) => {
                    let added = engine.add_item_to_tier(&tier, item)?;
                    formatter.outcome(
                        added,
                        &format!("Placed '{}' in '{}'", id, tier),
                        &format!("'{}' not placed: unknown tier or already ranked", id),
                    )
                }
                None => {
                    let added = engine.add_to_library(item)?;
                    formatter.outcome(
                        added,
                        &format!("Added '{}' to the library", id),
                        &format!("'{}' is already in the library", id),
                    )
                }
            }
        }
        ItemAction::Place { tier, id } => {
            let placed = engine.place_from_library(&tier, &id)?;
            formatter.outcome(
                placed,
                &format!("Placed '{}' in '{}'", id, tier),
                &format!("'{}' not placed: check the library and tier id", id),
            )
        }
        ItemAction::Move { from, to, id } => {
            let moved = engine.move_item(&from, &to, &id)?;
            formatter.outcome(
                moved,
                &format!("Moved '{}' from '{}' to '{}'", id, from, to),
                &format!("'{}' is not in '{}' or '{}' does not exist", id, from, to),
            )
        }
        ItemAction::Unplace { tier, id } => {
            let unplaced = engine.unplace_item(&tier, &id)?;
            formatter.outcome(
                unplaced,
                &format!("Returned '{}' to the library", id),
                &format!("'{}' is not in '{}'", id, tier),
            )
        }
        ItemAction::Order { tier, ids } => {
            let tiers = engine.current_tiers()?;
            let items = reorder(&tiers, &tier, &ids)?;
            let updated = engine.update_tier_items(&tier, items)?;
            formatter.outcome(
                updated,
                &format!("Reordered '{}'", tier),
                &format!("Tier '{}' unchanged", tier),
            )
        }
        ItemAction::Delete { id, yes } => {
            if !yes
                && !confirm(
                    &format!("Delete '{}' from the library and every ranking?", id),
                    formatter,
                )?
            {
                return Ok(());
            }

            let removed = engine.delete_item_completely(&id)?;
            formatter.success(&format!("Deleted '{}' ({} tier entries removed)", id, removed))
        }
    };

    println!("{}", message);
    Ok(())
}

/// Look up `ids` among the items of `tier_id`, in the given order.
fn reorder(tiers: &[Tier], tier_id: &str, ids: &[String]) -> Result<Vec<Item>> {
    let tier = tiers
        .iter()
        .find(|t| t.id == tier_id)
        .ok_or_else(|| CliError::InvalidInput(format!("No tier '{}'", tier_id)))?;

    ids.iter()
        .map(|id| {
            tier.items
                .iter()
                .find(|item| &item.id == id)
                .cloned()
                .ok_or_else(|| CliError::InvalidInput(format!("'{}' is not in '{}'", id, tier_id)))
        })
        .collect()
}
