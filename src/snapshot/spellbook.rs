use serde::Deserialize;

use crate::actions::catalog::Info;

/// Remaining and maximum slots of one spell level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SpellSlots {
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub max: u32,
}

/// One of a character's spellbooks
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spellbook {
    /// Key spell items refer to (e.g. "primary")
    pub key: String,
    pub name: String,
    /// Translation key preferred over `name` when a translation exists
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub in_use: bool,
    /// Spontaneous casters track slots per level rather than per spell
    #[serde(default)]
    pub spontaneous: bool,
    /// Slots indexed by spell level
    #[serde(default)]
    pub slots: Vec<SpellSlots>,
}

impl Spellbook {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            label: None,
            in_use: true,
            spontaneous: false,
            slots: Vec::new(),
        }
    }

    pub fn spontaneous(mut self, slots: Vec<SpellSlots>) -> Self {
        self.spontaneous = true;
        self.slots = slots;
        self
    }

    pub fn slots(&self, level: u8) -> SpellSlots {
        self.slots.get(level as usize).copied().unwrap_or_default()
    }

    /// "remaining/max" side label of a level subcategory
    ///
    /// Only spontaneous books label their levels, cantrips are never
    /// labeled, and a level without slots stays blank.
    pub fn slot_counter(&self, level: u8) -> Option<Info> {
        let slots = self.slots(level);
        (level > 0 && self.spontaneous && slots.max > 0).then(|| Info::text(format!("{}/{}", slots.value, slots.max)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_counter_only_for_spontaneous() {
        let slots = vec![SpellSlots { value: 0, max: 6 }, SpellSlots { value: 3, max: 5 }];
        let prepared = Spellbook {
            slots: slots.clone(),
            ..Spellbook::new("primary", "Primary")
        };
        assert_eq!(prepared.slot_counter(1), None);

        let sorcerer = Spellbook::new("primary", "Primary").spontaneous(slots);
        assert_eq!(sorcerer.slot_counter(0), None);
        assert_eq!(sorcerer.slot_counter(1), Some(Info::text("3/5")));
        assert_eq!(sorcerer.slot_counter(2), None);
    }
}
