//! Flat and categorized skill layouts

mod common;

use std::collections::BTreeSet;

use action_hud::core::context::HudContext;
use action_hud::hud::knowledge_name;
use action_hud::registry::{CategoryRegistry, Domain};
use action_hud::ActionTree;
use action_hud::{DerivedKey, SubcategoryId};
use common::*;

fn skills_root() -> SubcategoryId {
    CategoryRegistry::standard().subcategory(Domain::Skills, "skills").unwrap()
}

/// Every skill leaf anywhere under the skills subcategory
fn skill_leaf_ids(tree: &ActionTree) -> BTreeSet<String> {
    let root = skills_root();
    tree.entries()
        .iter()
        .filter(|entry| entry.subcategory == root || entry.subcategory.parent() == Some(&root))
        .map(|entry| entry.action.id.clone())
        .collect()
}

#[test]
fn test_flat_and_categorized_cover_the_same_skills() {
    let flat = build(&allow_background_skills(settings(|s| s.categorize_skills = false)), &adventurer());
    let categorized = build(&allow_background_skills(HudContext::default()), &adventurer());
    assert_eq!(skill_leaf_ids(&flat), skill_leaf_ids(&categorized));
}

#[test]
fn test_flat_layout_sorts_by_name() {
    let ctx = allow_background_skills(settings(|s| s.categorize_skills = false));
    let tree = build(&ctx, &adventurer());
    let names: Vec<_> = tree
        .actions_in(&skills_root())
        .iter()
        .map(|a| a.name.clone())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert!(names.contains(&"Craft (Bows)".to_string()));
    assert!(names.contains(&"Homebrew Lore".to_string()));
}

#[test]
fn test_categorized_groups() {
    let tree = build(&allow_background_skills(HudContext::default()), &adventurer());
    let root = skills_root();

    // Craft has a declared sub-skill and gets its own group
    let craft = root.derive(DerivedKey::skill_group("crf"));
    assert_eq!(tree.action_ids_in(&craft), vec!["crf", "crf.subSkills.bows"]);
    assert_eq!(tree.subcategory(&craft).map(|s| s.name.as_str()), Some("Craft"));

    // Perform has none and joins the general list
    assert!(tree.subcategory(&root.derive(DerivedKey::skill_group("prf"))).is_none());
    let general = tree.action_ids_in(&root);
    assert!(general.contains(&"prf"));

    let knowledge = root.derive(DerivedKey::Knowledge);
    let names: Vec<_> = tree.actions_in(&knowledge).iter().map(|a| a.name.clone()).collect();
    assert_eq!(names, vec!["Arcana", "Planes"]);
    assert_eq!(
        tree.subcategory(&knowledge).map(|s| s.name.as_str()),
        Some("PF1.KnowledgeSkills")
    );

    let general_names: Vec<_> = tree.actions_in(&root).iter().map(|a| a.name.clone()).collect();
    assert_eq!(general_names, vec!["Acrobatics", "Climb", "Homebrew Lore", "Perform"]);
}

#[test]
fn test_background_skills_are_excluded_by_default() {
    let tree = build(&HudContext::default(), &adventurer());
    let ids = skill_leaf_ids(&tree);
    assert!(!ids.contains("crf"));
    assert!(!ids.contains("crf.subSkills.bows"));
    assert!(!ids.contains("prf"));
    assert!(ids.contains("kar"));
    assert!(tree.subcategory(&skills_root().derive(DerivedKey::skill_group("crf"))).is_none());
}

#[test]
fn test_no_knowledge_group_without_knowledge_skills() {
    let snapshot = action_hud::snapshot::ActorSnapshot::single(
        action_hud::snapshot::ActorRef::new("a1"),
        action_hud::snapshot::TokenRef::new("t1"),
    )
    .with_skills(vec![action_hud::snapshot::SkillEntry::new("acr")]);
    let tree = build(&HudContext::default(), &snapshot);
    assert!(tree.children_of(&skills_root()).is_empty());
    assert_eq!(tree.action_ids_in(&skills_root()), vec!["acr"]);
}

#[test]
fn test_knowledge_name_edge_cases() {
    assert_eq!(knowledge_name("Knowledge (Arcana)"), "Arcana");
    assert_eq!(knowledge_name("Lore"), "Lore");
    assert_eq!(knowledge_name("Knowledge (Local) (Urban)"), "Local");
    assert_eq!(knowledge_name("Knowledge (Planes (Outer))"), "Planes (Outer");
    assert_eq!(knowledge_name("Knowledge ("), "Knowledge (");
}
