//! Property tests for the ranking engine
//!
//! Random operation sequences must never place an item in two tiers, and a
//! move must behave exactly like a remove followed by an add.

use proptest::prelude::*;
use std::collections::HashSet;
use tierlist_domain::{Item, Tier};
use tierlist_engine::RankingEngine;
use tierlist_store::MemoryStore;

const TIERS: [&str; 5] = ["super-large", "large", "medium", "small", "missing"];
const ITEMS: [&str; 4] = ["a", "b", "c", "d"];

#[derive(Debug, Clone)]
enum Op {
    Add(usize, usize),
    Remove(usize, usize),
    Move(usize, usize, usize),
    RemoveAll(usize),
    Reorder(usize, Vec<usize>),
}

fn op() -> impl Strategy<Value = Op> {
    let tier = 0..TIERS.len();
    let item = 0..ITEMS.len();
    prop_oneof![
        (tier.clone(), item.clone()).prop_map(|(t, i)| Op::Add(t, i)),
        (tier.clone(), item.clone()).prop_map(|(t, i)| Op::Remove(t, i)),
        (tier.clone(), tier.clone(), item.clone()).prop_map(|(f, t, i)| Op::Move(f, t, i)),
        item.clone().prop_map(Op::RemoveAll),
        (tier, prop::collection::vec(item, 0..6)).prop_map(|(t, items)| Op::Reorder(t, items)),
    ]
}

fn item(index: usize) -> Item {
    Item::new(ITEMS[index], ITEMS[index].to_uppercase())
}

fn apply(engine: &mut RankingEngine<MemoryStore>, op: &Op) {
    match op {
        Op::Add(t, i) => {
            engine.add_item_to_tier(TIERS[*t], item(*i)).unwrap();
        }
        Op::Remove(t, i) => {
            engine.remove_item_from_tier(TIERS[*t], ITEMS[*i]).unwrap();
        }
        Op::Move(f, t, i) => {
            engine.move_item(TIERS[*f], TIERS[*t], ITEMS[*i]).unwrap();
        }
        Op::RemoveAll(i) => {
            engine.remove_item_from_all_tiers(ITEMS[*i]).unwrap();
        }
        Op::Reorder(t, items) => {
            let items = items.iter().map(|i| item(*i)).collect();
            engine.update_tier_items(TIERS[*t], items).unwrap();
        }
    }
}

fn placed_once(tiers: &[Tier]) -> bool {
    let mut seen = HashSet::new();
    tiers
        .iter()
        .flat_map(|tier| tier.items.iter())
        .all(|item| seen.insert(item.id.clone()))
}

proptest! {
    /// Property: no item id is ever held by two tiers (or twice by one)
    #[test]
    fn test_item_in_at_most_one_tier(ops in prop::collection::vec(op(), 0..40)) {
        let mut engine = RankingEngine::load(MemoryStore::new()).unwrap();
        for op in &ops {
            apply(&mut engine, op);
            let tiers = engine.current_tiers().unwrap();
            prop_assert!(placed_once(&tiers), "duplicate after {:?}: {:?}", op, tiers);
        }
    }

    /// Property: move == remove from source, then append to target
    #[test]
    fn test_move_equals_remove_then_add(
        setup in prop::collection::vec(op(), 0..20),
        from in 0..TIERS.len(),
        to in 0..TIERS.len(),
        target in 0..ITEMS.len(),
    ) {
        let mut moved = RankingEngine::load(MemoryStore::new()).unwrap();
        for op in &setup {
            apply(&mut moved, op);
        }
        let mut manual = RankingEngine::load(MemoryStore::new()).unwrap();
        for op in &setup {
            apply(&mut manual, op);
        }

        let before = moved.current_tiers().unwrap();
        let present = before
            .iter()
            .find(|tier| tier.id == TIERS[from])
            .and_then(|tier| tier.items.iter().find(|i| i.id == ITEMS[target]).cloned());
        let target_exists = before.iter().any(|tier| tier.id == TIERS[to]);

        let changed = moved.move_item(TIERS[from], TIERS[to], ITEMS[target]).unwrap();

        match (present, target_exists) {
            (Some(original), true) => {
                prop_assert!(changed);
                manual.remove_item_from_tier(TIERS[from], ITEMS[target]).unwrap();
                manual.add_item_to_tier(TIERS[to], original).unwrap();
                prop_assert_eq!(moved.current_tiers().unwrap(), manual.current_tiers().unwrap());
            }
            _ => {
                prop_assert!(!changed);
                prop_assert_eq!(moved.current_tiers().unwrap(), before);
            }
        }
    }

    /// Property: the cached view always matches a fresh read of storage
    #[test]
    fn test_view_matches_reload(ops in prop::collection::vec(op(), 0..30)) {
        let mut engine = RankingEngine::load(MemoryStore::new()).unwrap();
        for op in &ops {
            apply(&mut engine, op);
        }
        let cached = engine.current_tiers().unwrap();
        let reloaded = RankingEngine::load(engine.into_store()).unwrap();
        prop_assert_eq!(cached, reloaded.current_tiers().unwrap());
    }
}
