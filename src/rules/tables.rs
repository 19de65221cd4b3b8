//! Static rules-system tables the HUD enumerates
//!
//! Ability scores, saving throws, the canonical skill list and the
//! condition table. Defaults are the Pathfinder 1e tables; a host can
//! replace any of them from TOML or JSON.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::Result;

/// Skills that carry user-declared sub-skills (Artistry, Craft, Lore,
/// Perform, Profession)
pub const SUB_SKILL_IDS: [&str; 5] = ["art", "crf", "lor", "prf", "pro"];

/// The Knowledge skill family
pub const KNOWLEDGE_SKILL_IDS: [&str; 10] = [
    "kar", "kdu", "ken", "kge", "khi", "klo", "kna", "kno", "kpl", "kre",
];

/// A rules key with its display label
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Labeled {
    pub key: String,
    pub label: String,
}

impl Labeled {
    fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// A condition that can be toggled on characters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConditionDef {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub texture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesTables {
    pub abilities: Vec<Labeled>,
    pub saving_throws: Vec<Labeled>,
    /// Canonical skill list, also the skill source in multi mode
    pub skills: Vec<Labeled>,
    pub conditions: Vec<ConditionDef>,
    /// Skills only shown when background skills are allowed
    pub background_only_skills: Vec<String>,
    pub allow_background_skills: bool,
}

impl Default for RulesTables {
    fn default() -> Self {
        Self::pathfinder()
    }
}

impl RulesTables {
    pub fn pathfinder() -> Self {
        let abilities = [
            ("str", "Strength"),
            ("dex", "Dexterity"),
            ("con", "Constitution"),
            ("int", "Intelligence"),
            ("wis", "Wisdom"),
            ("cha", "Charisma"),
        ];
        let saving_throws = [("fort", "Fortitude"), ("ref", "Reflex"), ("will", "Will")];
        let skills = [
            ("acr", "Acrobatics"),
            ("apr", "Appraise"),
            ("art", "Artistry"),
            ("blf", "Bluff"),
            ("clm", "Climb"),
            ("crf", "Craft"),
            ("dip", "Diplomacy"),
            ("dev", "Disable Device"),
            ("dis", "Disguise"),
            ("esc", "Escape Artist"),
            ("fly", "Fly"),
            ("han", "Handle Animal"),
            ("hea", "Heal"),
            ("int", "Intimidate"),
            ("kar", "Knowledge (Arcana)"),
            ("kdu", "Knowledge (Dungeoneering)"),
            ("ken", "Knowledge (Engineering)"),
            ("kge", "Knowledge (Geography)"),
            ("khi", "Knowledge (History)"),
            ("klo", "Knowledge (Local)"),
            ("kna", "Knowledge (Nature)"),
            ("kno", "Knowledge (Nobility)"),
            ("kpl", "Knowledge (Planes)"),
            ("kre", "Knowledge (Religion)"),
            ("lin", "Linguistics"),
            ("lor", "Lore"),
            ("per", "Perception"),
            ("prf", "Perform"),
            ("pro", "Profession"),
            ("rid", "Ride"),
            ("sen", "Sense Motive"),
            ("slt", "Sleight of Hand"),
            ("spl", "Spellcraft"),
            ("ste", "Stealth"),
            ("sur", "Survival"),
            ("swm", "Swim"),
            ("umd", "Use Magic Device"),
        ];
        let conditions = [
            ("bleed", "Bleed"),
            ("blind", "Blind"),
            ("confused", "Confused"),
            ("cowering", "Cowering"),
            ("dazed", "Dazed"),
            ("dazzled", "Dazzled"),
            ("deaf", "Deaf"),
            ("entangled", "Entangled"),
            ("exhausted", "Exhausted"),
            ("fatigued", "Fatigued"),
            ("frightened", "Frightened"),
            ("grappled", "Grappled"),
            ("helpless", "Helpless"),
            ("incorporeal", "Incorporeal"),
            ("invisible", "Invisible"),
            ("nauseated", "Nauseated"),
            ("panicked", "Panicked"),
            ("paralyzed", "Paralyzed"),
            ("pinned", "Pinned"),
            ("prone", "Prone"),
            ("shaken", "Shaken"),
            ("sickened", "Sickened"),
            ("stable", "Stable"),
            ("staggered", "Staggered"),
            ("stunned", "Stunned"),
        ];
        let background_only = [
            "apr", "art", "crf", "han", "ken", "kge", "khi", "kno", "lin", "lor", "prf", "pro", "slt",
        ];

        Self {
            abilities: abilities.iter().map(|(k, l)| Labeled::new(k, l)).collect(),
            saving_throws: saving_throws.iter().map(|(k, l)| Labeled::new(k, l)).collect(),
            skills: skills.iter().map(|(k, l)| Labeled::new(k, l)).collect(),
            conditions: conditions
                .iter()
                .map(|(key, label)| ConditionDef {
                    key: key.to_string(),
                    label: label.to_string(),
                    texture: Some(format!("systems/pf1/icons/conditions/{}.png", key)),
                })
                .collect(),
            background_only_skills: background_only.iter().map(|s| s.to_string()).collect(),
            allow_background_skills: false,
        }
    }

    /// Parse tables from TOML; omitted tables keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn skill_label(&self, id: &str) -> Option<&str> {
        self.skills.iter().find(|s| s.key == id).map(|s| s.label.as_str())
    }

    /// Skill ids removed from the HUD
    pub fn excluded_skills(&self) -> &[String] {
        if self.allow_background_skills {
            &[]
        } else {
            &self.background_only_skills
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pathfinder_tables() {
        let tables = RulesTables::pathfinder();
        assert_eq!(tables.abilities.len(), 6);
        assert_eq!(tables.saving_throws.len(), 3);
        assert_eq!(tables.skill_label("kar"), Some("Knowledge (Arcana)"));
        for id in SUB_SKILL_IDS.iter().chain(KNOWLEDGE_SKILL_IDS.iter()) {
            assert!(tables.skill_label(id).is_some(), "{} has no label", id);
        }
    }

    #[test]
    fn test_background_skills_toggle() {
        let mut tables = RulesTables::pathfinder();
        assert!(tables.excluded_skills().iter().any(|s| s == "crf"));
        tables.allow_background_skills = true;
        assert!(tables.excluded_skills().is_empty());
    }

    #[test]
    fn test_toml_override_keeps_other_tables() {
        let tables = RulesTables::from_toml_str(
            r#"
allowBackgroundSkills = true

[[savingThrows]]
key = "fort"
label = "Fort"
"#,
        )
        .unwrap();
        assert_eq!(tables.saving_throws.len(), 1);
        assert_eq!(tables.abilities.len(), 6);
        assert!(tables.allow_background_skills);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("action-hud-rules-{}.toml", std::process::id()));
        std::fs::write(&path, "allowBackgroundSkills = true\n").unwrap();
        let tables = RulesTables::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(tables.allow_background_skills);
        assert_eq!(tables.saving_throws.len(), 3);

        assert!(RulesTables::load(&path).is_err());
    }
}
