//! Action tree construction
//!
//! [`ActionTreeBuilder`] walks the domain builders in display order and
//! feeds an [`ActionListSink`](crate::ui::ActionListSink). Item-backed
//! domains share the expander, which applies the configured layout.

pub mod builder;
pub(crate) mod buffs;
pub(crate) mod checks;
pub(crate) mod combat;
pub(crate) mod conditions;
pub(crate) mod expander;
pub(crate) mod items;
pub mod skills;
pub mod spells;
pub(crate) mod utility;

pub use builder::ActionTreeBuilder;
pub use skills::knowledge_name;
pub use spells::preparation_filter;
