//! UI boundary - the sink the display layer implements and an in-memory tree

pub mod sink;
pub mod tree;

pub use sink::ActionListSink;
pub use tree::{ActionEntry, ActionTree, SubcategoryNode};
