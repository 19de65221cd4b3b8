//! In-memory action tree recorded from a build

use serde::Serialize;

use crate::actions::catalog::{ActionDescriptor, SubcategoryData, SubcategoryId};
use crate::core::error::Result;
use crate::ui::sink::ActionListSink;

/// A derived subcategory and where it hangs
#[derive(Debug, Clone, Serialize)]
pub struct SubcategoryNode {
    pub parent: SubcategoryId,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(flatten)]
    pub data: SubcategoryData,
}

/// A leaf and the subcategory it was added to
#[derive(Debug, Clone, Serialize)]
pub struct ActionEntry {
    pub subcategory: SubcategoryId,
    #[serde(flatten)]
    pub action: ActionDescriptor,
}

/// Sink that keeps everything in emission order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActionTree {
    subcategories: Vec<SubcategoryNode>,
    actions: Vec<ActionEntry>,
}

impl ActionTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.subcategories.is_empty() && self.actions.is_empty()
    }

    /// Drop the previous build's output before the next pass
    pub fn clear(&mut self) {
        self.subcategories.clear();
        self.actions.clear();
    }

    pub fn subcategories(&self) -> &[SubcategoryNode] {
        &self.subcategories
    }

    pub fn entries(&self) -> &[ActionEntry] {
        &self.actions
    }

    pub fn all_actions(&self) -> impl Iterator<Item = &ActionDescriptor> {
        self.actions.iter().map(|entry| &entry.action)
    }

    /// Leaves added directly to `subcategory`, in order
    pub fn actions_in(&self, subcategory: &SubcategoryId) -> Vec<&ActionDescriptor> {
        self.actions
            .iter()
            .filter(|entry| &entry.subcategory == subcategory)
            .map(|entry| &entry.action)
            .collect()
    }

    pub fn action_ids_in(&self, subcategory: &SubcategoryId) -> Vec<&str> {
        self.actions_in(subcategory)
            .into_iter()
            .map(|action| action.id.as_str())
            .collect()
    }

    /// Derived subcategories attached directly under `parent`
    pub fn children_of(&self, parent: &SubcategoryId) -> Vec<&SubcategoryData> {
        self.subcategories
            .iter()
            .filter(|node| &node.parent == parent)
            .map(|node| &node.data)
            .collect()
    }

    pub fn subcategory(&self, id: &SubcategoryId) -> Option<&SubcategoryData> {
        self.subcategories
            .iter()
            .find(|node| &node.data.id == id)
            .map(|node| &node.data)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ActionListSink for ActionTree {
    fn add_actions_to_action_list(&mut self, actions: Vec<ActionDescriptor>, subcategory: &SubcategoryId) {
        self.actions.extend(actions.into_iter().map(|action| ActionEntry {
            subcategory: subcategory.clone(),
            action,
        }));
    }

    fn add_subcategory_to_action_list(&mut self, parent: &SubcategoryId, subcategory: SubcategoryData) {
        self.subcategories.push(SubcategoryNode {
            parent: parent.clone(),
            kind: subcategory.id.kind(),
            data: subcategory,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::catalog::DerivedKey;

    #[test]
    fn test_records_in_order() {
        let root = SubcategoryId::registered("skills_skills");
        let group = root.derive(DerivedKey::skill_group("crf"));
        let mut tree = ActionTree::new();
        tree.add_subcategory_to_action_list(&root, SubcategoryData::derived(group.clone(), "Craft"));
        tree.add_actions_to_action_list(
            vec![
                ActionDescriptor::new("crf", "Craft", String::new()),
                ActionDescriptor::new("crf.subSkills.1", "Bows", String::new()),
            ],
            &group,
        );

        assert_eq!(tree.children_of(&root).len(), 1);
        assert_eq!(tree.action_ids_in(&group), vec!["crf", "crf.subSkills.1"]);
        assert!(tree.actions_in(&root).is_empty());
        assert_eq!(tree.subcategory(&group).map(|s| s.name.as_str()), Some("Craft"));

        let json = tree.to_json_pretty().unwrap();
        assert!(json.contains("\"system-derived\""));
        assert!(json.contains("skills_skills_crf"));

        tree.clear();
        assert!(tree.is_empty());
    }
}
