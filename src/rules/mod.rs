//! Rules-system tables and encounter state consumed by the HUD

pub mod encounter;
pub mod tables;

pub use encounter::{Combatant, Encounter};
pub use tables::{ConditionDef, Labeled, RulesTables, KNOWLEDGE_SKILL_IDS, SUB_SKILL_IDS};
