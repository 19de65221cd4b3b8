//! Skills domain
//!
//! Flat mode lists every skill and sub-skill sorted by name. Categorized
//! mode splits skills into three groups:
//!
//! - sub-skill skills (Craft, Perform, ...) get their own subcategory when
//!   the character declared at least one sub-skill
//! - the Knowledge family goes into one "Knowledge" subcategory, each
//!   entry renamed to its parenthetical ("Knowledge (Arcana)" -> "Arcana")
//! - everything else is one flat list, sorted by name

use std::borrow::Cow;

use crate::actions::catalog::{ActionDescriptor, DerivedKey, RollType, SubcategoryData, SubcategoryId};
use crate::core::error::Result;
use crate::hud::builder::{emit, BuildPass};
use crate::registry::Domain;
use crate::rules::{KNOWLEDGE_SKILL_IDS, SUB_SKILL_IDS};
use crate::snapshot::SkillEntry;
use crate::ui::sink::ActionListSink;

/// Short display name of a Knowledge skill
///
/// Returns the text of the first non-empty parenthetical group, up to the
/// first closing parenthesis after it. Names without such a group are
/// returned unchanged.
pub fn knowledge_name(full: &str) -> &str {
    let mut from = 0;
    while let Some(open) = full[from..].find('(') {
        let start = from + open + 1;
        match full[start..].find(')') {
            Some(0) => from = start,
            Some(len) => return &full[start..start + len],
            None => break,
        }
    }
    full
}

/// Skill source: the character's skills, or the rules list when several
/// actors are selected
fn skill_source<'a>(pass: &BuildPass<'a>) -> Cow<'a, [SkillEntry]> {
    if pass.snapshot.is_multi() {
        Cow::Owned(
            pass.ctx
                .rules
                .skills
                .iter()
                .map(|skill| SkillEntry::new(skill.key.as_str()).named(skill.label.as_str()))
                .collect(),
        )
    } else {
        Cow::Borrowed(pass.snapshot.skills())
    }
}

fn display_name<'s>(pass: &'s BuildPass<'_>, skill: &'s SkillEntry) -> &'s str {
    pass.ctx
        .rules
        .skill_label(&skill.id)
        .or(skill.name.as_deref())
        .unwrap_or(&skill.id)
}

fn skill_action(pass: &BuildPass<'_>, id: &str, name: &str) -> Result<ActionDescriptor> {
    let encoded = pass.encoder.encode(RollType::Skill, id)?;
    Ok(ActionDescriptor::new(id, name, encoded))
}

fn sub_skill_actions(pass: &BuildPass<'_>, skill: &SkillEntry) -> Result<Vec<ActionDescriptor>> {
    skill
        .sub_skills
        .iter()
        .map(|sub| skill_action(pass, &skill.sub_skill_key(sub), &sub.name))
        .collect()
}

fn sort_by_name(actions: &mut [ActionDescriptor]) {
    actions.sort_by(|a, b| a.name.cmp(&b.name));
}

pub(crate) fn build_skills(pass: &BuildPass<'_>, sink: &mut dyn ActionListSink) -> Result<()> {
    let parent = pass.subcategory(Domain::Skills, "skills")?;

    let source = skill_source(pass);
    let excluded = pass.ctx.rules.excluded_skills();
    let skills: Vec<&SkillEntry> = source.iter().filter(|skill| !excluded.contains(&skill.id)).collect();

    if pass.settings().categorize_skills {
        build_categorized(pass, sink, &parent, &skills)
    } else {
        build_flat(pass, sink, &parent, &skills)
    }
}

fn build_flat(
    pass: &BuildPass<'_>,
    sink: &mut dyn ActionListSink,
    parent: &SubcategoryId,
    skills: &[&SkillEntry],
) -> Result<()> {
    let mut actions = skills
        .iter()
        .map(|skill| skill_action(pass, &skill.id, display_name(pass, skill)))
        .collect::<Result<Vec<_>>>()?;
    for skill in skills {
        actions.extend(sub_skill_actions(pass, skill)?);
    }

    sort_by_name(&mut actions);
    emit(sink, actions, parent);
    Ok(())
}

fn build_categorized(
    pass: &BuildPass<'_>,
    sink: &mut dyn ActionListSink,
    parent: &SubcategoryId,
    skills: &[&SkillEntry],
) -> Result<()> {
    let find = |id: &str| skills.iter().copied().find(|skill| skill.id == id);

    let mut general = skills
        .iter()
        .filter(|skill| !SUB_SKILL_IDS.contains(&skill.id.as_str()))
        .filter(|skill| !KNOWLEDGE_SKILL_IDS.contains(&skill.id.as_str()))
        .map(|skill| skill_action(pass, &skill.id, display_name(pass, skill)))
        .collect::<Result<Vec<_>>>()?;

    for skill in SUB_SKILL_IDS.iter().filter_map(|&id| find(id)) {
        let head = skill_action(pass, &skill.id, display_name(pass, skill))?;
        if skill.sub_skills.is_empty() {
            general.push(head);
            continue;
        }

        let group = SubcategoryData::derived(parent.derive(DerivedKey::skill_group(skill.id.as_str())), head.name.clone());
        let group_id = group.id.clone();
        sink.add_subcategory_to_action_list(parent, group);

        let mut actions = vec![head];
        actions.extend(sub_skill_actions(pass, skill)?);
        emit(sink, actions, &group_id);
    }

    let knowledge = KNOWLEDGE_SKILL_IDS
        .iter()
        .filter_map(|&id| find(id))
        .map(|skill| skill_action(pass, &skill.id, knowledge_name(display_name(pass, skill))))
        .collect::<Result<Vec<_>>>()?;
    if !knowledge.is_empty() {
        let group = SubcategoryData::derived(parent.derive(DerivedKey::Knowledge), pass.localize("PF1.KnowledgeSkills"));
        let group_id = group.id.clone();
        sink.add_subcategory_to_action_list(parent, group);
        emit(sink, knowledge, &group_id);
    }

    sort_by_name(&mut general);
    emit(sink, general, parent);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knowledge_name_extracts_parenthetical() {
        assert_eq!(knowledge_name("Knowledge (Arcana)"), "Arcana");
        assert_eq!(knowledge_name("Knowledge (Dungeoneering)"), "Dungeoneering");
    }

    #[test]
    fn test_knowledge_name_without_parentheses_is_unchanged() {
        assert_eq!(knowledge_name("Lore"), "Lore");
        assert_eq!(knowledge_name(""), "");
    }

    #[test]
    fn test_knowledge_name_malformed() {
        // unclosed group
        assert_eq!(knowledge_name("Knowledge (Arcana"), "Knowledge (Arcana");
        // empty group is skipped, a later one is used
        assert_eq!(knowledge_name("Knowledge () (Local)"), "Local");
        assert_eq!(knowledge_name("Knowledge ()"), "Knowledge ()");
        // stray closing parenthesis before the group
        assert_eq!(knowledge_name("Knowledge) (Planes)"), "Planes");
    }

    #[test]
    fn test_knowledge_name_multiple_and_nested() {
        assert_eq!(knowledge_name("Knowledge (Arcana) (Ancient)"), "Arcana");
        // nested groups stop at the first closing parenthesis
        assert_eq!(knowledge_name("Knowledge (Arcana (Old))"), "Arcana (Old");
    }
}
