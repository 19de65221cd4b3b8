//! HUD settings with documented defaults
//!
//! These mirror the options a user can change in the host's settings
//! panel. They are read-only for the duration of a build.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{HudError, Result};

/// How items with several internal actions are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionLayout {
    /// One leaf per item, sub-actions are never shown
    OnlyItems,
    /// Multi-action items expand to one "item - action" leaf per sub-action
    OnlyActions,
    /// Multi-action items get their own derived subcategory
    #[default]
    Categorized,
}

/// Which spells are listed under a spellbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpellPreparation {
    /// Every spell regardless of preparation
    AllSpells,
    /// Spells with at least one prepared use at any time
    AllPrepared,
    /// Spells with at least one use left right now
    #[default]
    OnlyRemaining,
}

/// User-facing HUD configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HudSettings {
    /// Layout strategy for items with multiple sub-actions
    pub action_layout: ActionLayout,

    /// Group skills into sub-skill and knowledge subcategories
    ///
    /// When off, every skill and sub-skill is one flat, name-sorted list.
    pub categorize_skills: bool,

    /// Add a nested "passive" subcategory for features that fail the
    /// usability check
    pub show_passive_features: bool,

    /// Same as `show_passive_features`, for inventory sections
    pub show_passive_inventory: bool,

    /// Spell preparation filter
    pub spell_preparation: SpellPreparation,

    /// State of the HUD grid display toggle
    pub show_grid: bool,

    /// State of the rules system's "skip action dialogs" option
    pub skip_action_dialogs: bool,
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            action_layout: ActionLayout::Categorized,
            categorize_skills: true,
            show_passive_features: false,
            show_passive_inventory: false,
            spell_preparation: SpellPreparation::OnlyRemaining,
            show_grid: false,
            skip_action_dialogs: false,
        }
    }
}

impl HudSettings {
    /// Parse settings from a TOML string, filling missing keys with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject an unknown layout name coming from a host string setting
    pub fn parse_layout(name: &str) -> Result<ActionLayout> {
        match name {
            "onlyItems" => Ok(ActionLayout::OnlyItems),
            "onlyActions" => Ok(ActionLayout::OnlyActions),
            "categorized" => Ok(ActionLayout::Categorized),
            other => Err(HudError::InvalidSettings(format!("unknown action layout `{}`", other))),
        }
    }

    /// Reject an unknown spell preparation mode coming from a host string setting
    pub fn parse_spell_preparation(name: &str) -> Result<SpellPreparation> {
        match name {
            "allSpells" => Ok(SpellPreparation::AllSpells),
            "allPrepared" => Ok(SpellPreparation::AllPrepared),
            "onlyRemaining" => Ok(SpellPreparation::OnlyRemaining),
            other => Err(HudError::InvalidSettings(format!(
                "unknown spell preparation `{}`",
                other
            ))),
        }
    }
}
