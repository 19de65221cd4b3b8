//! Read-only context passed into every build
//!
//! Everything the builders would otherwise read from host globals lives
//! here: settings, rules tables, the current user's permissions, the
//! active encounter and the translation table.

use ahash::AHashMap;
use serde::Deserialize;
use std::path::Path;

use crate::core::config::HudSettings;
use crate::core::error::Result;
use crate::rules::{Encounter, RulesTables};

/// Permissions of the user the HUD is shown to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserContext {
    /// Game master privileges
    pub is_gm: bool,
    /// Holds the host's token configuration permission
    pub can_configure_tokens: bool,
}

/// Translation table, key -> localized string
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Translations(AHashMap<String, String>);

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Localized string, or the key itself when untranslated
    pub fn localize(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HudContext {
    pub settings: HudSettings,
    pub rules: RulesTables,
    pub user: UserContext,
    pub encounter: Option<Encounter>,
    pub strings: Translations,
}

impl HudContext {
    pub fn new(settings: HudSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Load a context from JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn with_user(mut self, user: UserContext) -> Self {
        self.user = user;
        self
    }

    pub fn with_encounter(mut self, encounter: Encounter) -> Self {
        self.encounter = Some(encounter);
        self
    }

    pub fn localize(&self, key: &str) -> String {
        self.strings.localize(key)
    }
}
