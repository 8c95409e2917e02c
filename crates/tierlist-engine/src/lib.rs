//! Tierlist Ranking Engine
//!
//! Orchestrates templates, tiers, the item library and settings on top of a
//! [`tierlist_domain::KeyValueStore`].
//!
//! # Overview
//!
//! - **Template registry**: built-in templates plus user templates saved from
//!   the custom tier set
//! - **Working set**: the tiers being edited. For the `custom` selection
//!   they live in memory; for a template they are derived from its stored
//!   ranking, or its empty tiers when nothing is stored
//! - **Library**: items not yet placed in a tier
//! - **Settings**: display flags, page title and the last active selection
//! - **Import/export**: the working state as one JSON document
//!
//! # Storage layout
//!
//! | key | content |
//! |-----|---------|
//! | `tier-rank-<template>` | `{"tiers": [...], "timestamp": ms}` |
//! | `tier-rank-library` | `[Item]` |
//! | `tier-rank-settings` | `{"showItemNames", "pageTitle", "currentTemplate"}` |
//! | `tier-rank-custom-templates` | `[Template]` |
//!
//! The `tier-rank-` prefix is configurable through [`EngineConfig`].
//!
//! # Usage
//!
//! ```
//! use tierlist_domain::{Item, TierDefinition};
//! use tierlist_engine::RankingEngine;
//! use tierlist_store::MemoryStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = RankingEngine::load(MemoryStore::new())?;
//!
//! engine.set_active_template("custom");
//! engine.add_custom_tier(TierDefinition::new("s", "S", "#ff4d4d"))?;
//! engine.add_to_library(Item::new("a1", "Apple"))?;
//! engine.place_from_library("s", "a1")?;
//!
//! let template = engine.save_as_template("Fruit")?.expect("custom set is not empty");
//! println!("Saved {}", template.id);
//! println!("{}", engine.export_json()?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod library;
mod persist;
mod registry;
mod settings;
mod transfer;

pub use config::EngineConfig;
pub use engine::RankingEngine;
pub use error::{EngineError, Result};
pub use library::Library;
pub use registry::{builtin_templates, TemplateRegistry};
pub use settings::Settings;
pub use transfer::{ExportDocument, ExportedSettings};
