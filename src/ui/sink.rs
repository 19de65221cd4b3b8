use crate::actions::catalog::{ActionDescriptor, SubcategoryData, SubcategoryId};

/// Receiver of the emitted action tree, owned by the display layer
///
/// Both operations are fire-and-forget: builders never read anything
/// back from the sink.
pub trait ActionListSink {
    /// Append leaves to a subcategory
    fn add_actions_to_action_list(&mut self, actions: Vec<ActionDescriptor>, subcategory: &SubcategoryId);

    /// Attach a derived subcategory under `parent`
    fn add_subcategory_to_action_list(&mut self, parent: &SubcategoryId, subcategory: SubcategoryData);
}
