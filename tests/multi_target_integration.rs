//! Builds for a selection of several characters

mod common;

use action_hud::core::context::HudContext;
use action_hud::registry::{CategoryRegistry, Domain};
use action_hud::{EncodedPayload, SubcategoryId};
use common::*;

fn sub(domain: Domain, name: &str) -> SubcategoryId {
    CategoryRegistry::standard().subcategory(domain, name).unwrap()
}

#[test]
fn test_multi_payloads_have_blank_identity() {
    let tree = build(&HudContext::default(), &party());
    assert!(!tree.is_empty());
    for action in tree.all_actions() {
        let payload = EncodedPayload::decode(&action.encoded_value).unwrap();
        assert!(payload.is_multi, "{} is not marked multi", action.id);
        assert_eq!(payload.actor_id, "");
        assert_eq!(payload.token_id, "");
    }
}

#[test]
fn test_multi_suppresses_item_domains() {
    let tree = build(&HudContext::default(), &party());

    for (domain, name) in [
        (Domain::Buffs, "temporary"),
        (Domain::Inventory, "weapons"),
        (Domain::Features, "feat"),
        (Domain::Other, "other"),
        (Domain::Combat, "weaponAttack"),
    ] {
        assert!(tree.actions_in(&sub(domain, name)).is_empty(), "{:?}/{} not empty", domain, name);
    }
    assert!(tree.children_of(&sub(Domain::Spells, "spells")).is_empty());
    assert!(tree.entries().iter().all(|entry| !entry.subcategory.to_string().starts_with("inventory")));
}

#[test]
fn test_multi_keeps_shared_domains() {
    let ctx = HudContext::default().with_user(gm());
    let tree = build(&ctx, &party());

    assert_eq!(tree.actions_in(&sub(Domain::Checks, "checks")).len(), 6);
    assert_eq!(tree.actions_in(&sub(Domain::Saves, "saves")).len(), 3);
    assert_eq!(
        tree.action_ids_in(&sub(Domain::Combat, "base")),
        vec!["showDefenses", "bab", "cmb", "melee", "ranged", "initiative", "addToCombat"]
    );
    assert_eq!(tree.action_ids_in(&sub(Domain::Utility, "rest")), vec!["rest"]);
}

#[test]
fn test_multi_conditions_need_every_actor() {
    let tree = build(&HudContext::default(), &party());
    let conditions = tree.actions_in(&sub(Domain::Conditions, "conditions"));

    let prone = conditions.iter().find(|a| a.id == "prone").unwrap();
    assert_eq!(prone.css_class.as_deref(), Some("toggle active"));
    let shaken = conditions.iter().find(|a| a.id == "shaken").unwrap();
    assert_eq!(shaken.css_class.as_deref(), Some("toggle"));
    let payload = EncodedPayload::decode(&shaken.encoded_value).unwrap();
    assert_eq!(payload.extra_bool("enable"), Some(true));
}

#[test]
fn test_multi_skills_come_from_the_rules_list() {
    let ctx = settings(|s| s.categorize_skills = false);
    let tree = build(&ctx, &party());
    let skills = tree.actions_in(&sub(Domain::Skills, "skills"));

    let rules = action_hud::rules::RulesTables::pathfinder();
    let excluded = rules.excluded_skills();
    let expected = rules.skills.iter().filter(|s| !excluded.contains(&s.key)).count();
    assert_eq!(skills.len(), expected);
    assert!(skills.windows(2).all(|w| w[0].name <= w[1].name));
    assert!(skills.iter().all(|a| !a.id.contains(".subSkills.")));
}
