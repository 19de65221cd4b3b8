//! Action HUD - token action tree builder for Pathfinder 1e characters
//!
//! A host hands over a snapshot of the selected characters and gets back a
//! tree of subcategories and clickable actions, each carrying an encoded
//! payload the host's dispatcher decodes to perform the roll.

pub mod actions;
pub mod core;
pub mod hud;
pub mod registry;
pub mod rules;
pub mod snapshot;
pub mod ui;

pub use crate::actions::{ActionDescriptor, DerivedKey, EncodedPayload, RollType, SubcategoryData, SubcategoryId};
pub use crate::core::{HudContext, HudError, HudSettings, Result};
pub use crate::hud::ActionTreeBuilder;
pub use crate::registry::{CategoryRegistry, Domain};
pub use crate::snapshot::{ActorSnapshot, SnapshotAdapter};
pub use crate::ui::{ActionListSink, ActionTree};
