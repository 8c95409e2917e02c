//! Tierlist Domain Layer
//!
//! This crate contains the entity model for Tierlist and the trait that
//! separates it from storage. It has no infrastructure dependencies; every
//! persisted shape is expressed as a `serde` derive and nothing more.
//!
//! ## Key Concepts
//!
//! - **Item**: a named thing being ranked, optionally with an image reference
//! - **Tier**: a labeled, colored bucket holding an ordered list of items
//! - **Template**: a named, ordered set of tier shapes (no items)
//! - **Active selection**: either a template id or the in-memory custom set
//!
//! ## Architecture
//!
//! - Pure data and invariant-preserving helpers only
//! - Storage lives behind [`traits::KeyValueStore`]
//! - Orchestration lives in `tierlist-engine`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod item;
pub mod selection;
pub mod template;
pub mod tier;
pub mod traits;

// Re-exports for convenience
pub use item::Item;
pub use selection::{ActiveSelection, CUSTOM_SELECTION};
pub use template::Template;
pub use tier::{Tier, TierDefinition, TierUpdate};
pub use traits::KeyValueStore;
