use serde::Deserialize;

/// A skill as stored on a character
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub id: String,
    /// Character-specific name, used when the rules table has no label
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sub_skills: Vec<SubSkill>,
}

/// A user-declared specialization of a skill, e.g. one Craft or Perform
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubSkill {
    pub id: String,
    pub name: String,
}

impl SkillEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            sub_skills: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_sub_skill(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.sub_skills.push(SubSkill {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    /// Roll identifier of one of this skill's sub-skills
    pub fn sub_skill_key(&self, sub_skill: &SubSkill) -> String {
        format!("{}.subSkills.{}", self.id, sub_skill.id)
    }
}
