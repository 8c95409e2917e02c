//! Integration tests for tierlist-engine
//!
//! These tests drive the engine through its public API over both store
//! backends, covering the documented scenarios and no-op contracts.

use tempfile::TempDir;
use tierlist_domain::{Item, Tier, TierDefinition};
use tierlist_engine::{EngineConfig, RankingEngine};
use tierlist_store::{MemoryStore, SqliteStore};

fn find<'a>(tiers: &'a [Tier], id: &str) -> &'a Tier {
    tiers.iter().find(|t| t.id == id).expect("tier exists")
}

fn custom_engine() -> RankingEngine<MemoryStore> {
    let mut engine = RankingEngine::load(MemoryStore::new()).unwrap();
    engine.set_active_template("custom");
    engine.add_custom_tier(TierDefinition::new("s", "S", "#ff4d4d")).unwrap();
    engine.add_custom_tier(TierDefinition::new("a", "A", "#ff9933")).unwrap();
    engine
}

#[test]
fn test_entertainment_large_scenario() {
    let mut engine = RankingEngine::load(MemoryStore::new()).unwrap();
    let before = engine.current_tiers().unwrap();

    engine.add_item_to_tier("large", Item::new("a1", "Apple")).unwrap();

    let after = engine.current_tiers().unwrap();
    assert_eq!(find(&after, "large").items, vec![Item::new("a1", "Apple")]);
    for tier in after.iter().filter(|t| t.id != "large") {
        assert_eq!(tier, find(&before, &tier.id));
    }
}

#[test]
fn test_add_custom_tier_on_builtin_is_noop() {
    let mut engine = RankingEngine::load(MemoryStore::new()).unwrap();
    assert_eq!(engine.active_selection().as_str(), "entertainment");
    let count = engine.current_tiers().unwrap().len();

    let added = engine.add_custom_tier(TierDefinition::new("t1", "X", "#fff")).unwrap();

    assert!(!added);
    assert_eq!(engine.current_tiers().unwrap().len(), count);
}

#[test]
fn test_save_as_template_with_empty_custom_fails() {
    let mut engine = RankingEngine::load(MemoryStore::new()).unwrap();
    engine.set_active_template("custom");
    let before = engine.registry().user_templates().to_vec();

    assert!(engine.save_as_template("Mine").unwrap().is_none());
    assert_eq!(engine.registry().user_templates(), before.as_slice());
}

#[test]
fn test_reset_builtin_yields_default_shapes() {
    let mut engine = RankingEngine::load(MemoryStore::new()).unwrap();
    engine.set_active_template("serious");
    engine.add_item_to_tier("large-mid", Item::new("a1", "Apple")).unwrap();
    engine.move_item("large-mid", "medium-top", "a1").unwrap();

    engine.reset_current_ranking().unwrap();

    let tiers = engine.current_tiers().unwrap();
    let template = engine.registry().get("serious").unwrap();
    assert_eq!(tiers.len(), template.tier_definitions.len());
    for (tier, definition) in tiers.iter().zip(&template.tier_definitions) {
        assert_eq!(&tier.definition(), definition);
        assert!(tier.items.is_empty());
    }
}

#[test]
fn test_delete_item_completely_clears_everything() {
    let mut engine = custom_engine();
    engine.add_to_library(Item::new("a1", "Apple")).unwrap();
    engine.add_item_to_tier("s", Item::new("a1", "Apple")).unwrap();

    engine.delete_item_completely("a1").unwrap();

    assert!(!engine.library().contains("a1"));
    assert!(engine
        .current_tiers()
        .unwrap()
        .iter()
        .all(|tier| !tier.contains("a1")));
}

#[test]
fn test_delete_unknown_item_is_harmless() {
    let mut engine = custom_engine();
    assert_eq!(engine.delete_item_completely("ghost").unwrap(), 0);
    assert_eq!(engine.current_tiers().unwrap().len(), 2);
}

#[test]
fn test_export_import_roundtrip_custom() {
    let mut source = custom_engine();
    source.add_to_library(Item::new("l1", "Lime").with_image("lime.png")).unwrap();
    source.add_item_to_tier("s", Item::new("a1", "Apple")).unwrap();
    source.add_item_to_tier("a", Item::new("b2", "Banana")).unwrap();
    source.set_show_item_names(false).unwrap();
    source.set_page_title("Fruit").unwrap();
    let exported = source.export_json().unwrap();

    let mut target = RankingEngine::load(MemoryStore::new()).unwrap();
    assert!(target.import_json(&exported).unwrap());

    assert!(target.active_selection().is_custom());
    assert_eq!(target.current_tiers().unwrap(), source.current_tiers().unwrap());
    assert_eq!(target.library(), source.library());
    assert!(!target.settings().show_item_names);
    assert_eq!(target.settings().page_title, "Fruit");

    // Imported state is persisted, not only held in memory
    let reloaded = RankingEngine::load(target.into_store()).unwrap();
    assert_eq!(reloaded.current_tiers().unwrap(), source.current_tiers().unwrap());
    assert_eq!(reloaded.library(), source.library());
    assert_eq!(reloaded.settings().page_title, "Fruit");
}

#[test]
fn test_import_tiers_ignored_for_builtin() {
    let mut source = RankingEngine::load(MemoryStore::new()).unwrap();
    source.add_item_to_tier("large", Item::new("a1", "Apple")).unwrap();
    source.add_to_library(Item::new("l1", "Lime")).unwrap();
    let exported = source.export_json().unwrap();

    let mut target = RankingEngine::load(MemoryStore::new()).unwrap();
    target.add_item_to_tier("small", Item::new("z9", "Zucchini")).unwrap();
    assert!(target.import_json(&exported).unwrap());

    // Library and settings round-trip; the target keeps its own ranking
    assert_eq!(target.library(), source.library());
    let tiers = target.current_tiers().unwrap();
    assert!(find(&tiers, "large").items.is_empty());
    assert_eq!(find(&tiers, "small").items[0].id, "z9");
}

#[test]
fn test_sqlite_backed_engine_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tierlist.db");

    {
        let mut engine = RankingEngine::load(SqliteStore::new(&path).unwrap()).unwrap();
        engine.set_active_template("meme");
        engine.add_item_to_tier("npc", Item::new("a1", "Apple")).unwrap();
        engine.save_settings().unwrap();
    }

    let engine = RankingEngine::load(SqliteStore::new(&path).unwrap()).unwrap();
    assert_eq!(engine.active_selection().as_str(), "meme");
    let tiers = engine.current_tiers().unwrap();
    assert_eq!(find(&tiers, "npc").items, vec![Item::new("a1", "Apple")]);
}

#[test]
fn test_key_prefix_isolates_boards() {
    let config = EngineConfig {
        key_prefix: "board2-".to_string(),
        ..EngineConfig::default()
    };
    let mut engine = RankingEngine::with_config(MemoryStore::new(), config).unwrap();
    engine.add_to_library(Item::new("a1", "Apple")).unwrap();
    engine.add_item_to_tier("large", Item::new("b2", "Banana")).unwrap();

    let store = engine.into_store();
    assert_eq!(
        store.keys(),
        vec!["board2-entertainment".to_string(), "board2-library".to_string()]
    );

    let default_board = RankingEngine::load(store).unwrap();
    assert!(default_board.library().is_empty());
}

#[test]
fn test_user_template_survives_reload() {
    let mut engine = custom_engine();
    let template = engine.save_as_template("Letters").unwrap().unwrap();
    engine.set_active_template(&template.id);
    engine.add_item_to_tier("a", Item::new("a1", "Apple")).unwrap();
    engine.save_settings().unwrap();

    let engine = RankingEngine::load(engine.into_store()).unwrap();
    assert_eq!(engine.active_selection().as_str(), template.id);
    assert_eq!(engine.registry().get(&template.id).unwrap().name, "Letters");
    let tiers = engine.current_tiers().unwrap();
    assert_eq!(find(&tiers, "a").items[0].id, "a1");
}

#[test]
fn test_deleting_active_template_persists_custom_selection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tierlist.db");

    {
        let mut engine = RankingEngine::load(SqliteStore::new(&path).unwrap()).unwrap();
        engine.set_active_template("custom");
        engine.add_custom_tier(TierDefinition::new("s", "S", "#ff4d4d")).unwrap();
        let template = engine.save_as_template("Letters").unwrap().unwrap();
        engine.set_active_template(&template.id);
        engine.save_settings().unwrap();

        assert!(engine.delete_custom_template(&template.id).unwrap());
    }

    let engine = RankingEngine::load(SqliteStore::new(&path).unwrap()).unwrap();
    assert!(engine.active_selection().is_custom());
    assert!(engine.current_tiers().unwrap().is_empty());
    assert!(engine.registry().user_templates().is_empty());
}
