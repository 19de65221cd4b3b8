//! Static category registry
//!
//! Maps each HUD domain to its category id and the ids of its statically
//! registered subcategories. Builders resolve every static subcategory
//! through this table; a missing entry is a configuration defect and is
//! reported as [`HudError::UnknownSubcategory`].

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::actions::catalog::SubcategoryId;
use crate::core::error::{HudError, Result};

/// A domain of character capability that owns one HUD category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Domain {
    Checks,
    Saves,
    Skills,
    Conditions,
    Combat,
    Buffs,
    Inventory,
    Spells,
    Features,
    Other,
    Utility,
}

impl Domain {
    pub const ALL: [Domain; 11] = [
        Domain::Checks,
        Domain::Saves,
        Domain::Skills,
        Domain::Conditions,
        Domain::Combat,
        Domain::Buffs,
        Domain::Inventory,
        Domain::Spells,
        Domain::Features,
        Domain::Other,
        Domain::Utility,
    ];

    /// Registry key of this domain
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Checks => "checks",
            Domain::Saves => "saves",
            Domain::Skills => "skills",
            Domain::Conditions => "conditions",
            Domain::Combat => "combat",
            Domain::Buffs => "buffs",
            Domain::Inventory => "inventory",
            Domain::Spells => "spells",
            Domain::Features => "features",
            Domain::Other => "other",
            Domain::Utility => "utility",
        }
    }

    pub fn from_name(name: &str) -> Option<Domain> {
        Domain::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Subcategory names the standard registry declares for this domain
    fn standard_subcategories(&self) -> &'static [&'static str] {
        match self {
            Domain::Checks => &["checks"],
            Domain::Saves => &["saves"],
            Domain::Skills => &["skills"],
            Domain::Conditions => &["conditions"],
            Domain::Combat => &[
                "base",
                "weaponAttack",
                "naturalAttack",
                "classAbilities",
                "racialAbilities",
                "items",
                "miscellaneous",
                "other",
            ],
            Domain::Buffs => &["item", "temporary", "permanent", "miscellaneous", "other"],
            Domain::Inventory => &[
                "weapons",
                "equipment",
                "consumables",
                "containers",
                "tradeGoods",
                "miscellaneous",
                "ammunition",
                "gear",
                "other",
            ],
            Domain::Spells => &["spells"],
            Domain::Features => &[
                "classFeat",
                "feat",
                "racial",
                "template",
                "trait",
                "misc",
                "combatTalents",
                "magicTalents",
                "other",
            ],
            Domain::Other => &["other"],
            Domain::Utility => &["rest", "token", "utility"],
        }
    }
}

/// Category id plus subcategory name -> id table for one domain
#[derive(Debug, Clone)]
pub struct CategoryEntry {
    pub id: String,
    subcategories: AHashMap<String, String>,
}

impl CategoryEntry {
    pub fn subcategory_id(&self, name: &str) -> Option<&str> {
        self.subcategories.get(name).map(String::as_str)
    }
}

/// Read-only domain -> category -> subcategory mapping
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: AHashMap<Domain, CategoryEntry>,
}

/// TOML representation of one category
#[derive(Debug, Deserialize)]
struct TomlCategory {
    id: String,
    #[serde(default)]
    subcategories: BTreeMap<String, String>,
}

impl CategoryRegistry {
    /// The registry shipped with the HUD: category id = domain name,
    /// subcategory id = `<domain>_<name>`
    pub fn standard() -> Self {
        let categories = Domain::ALL
            .into_iter()
            .map(|domain| {
                let subcategories = domain
                    .standard_subcategories()
                    .iter()
                    .map(|name| (name.to_string(), format!("{}_{}", domain.name(), name)))
                    .collect();
                let entry = CategoryEntry {
                    id: domain.name().to_string(),
                    subcategories,
                };
                (domain, entry)
            })
            .collect();
        Self { categories }
    }

    /// Parse a registry from TOML, one table per domain
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: BTreeMap<String, TomlCategory> = toml::from_str(content)?;

        let mut categories = AHashMap::with_capacity(raw.len());
        for (name, category) in raw {
            let domain = Domain::from_name(&name).ok_or_else(|| HudError::UnknownDomain(name.clone()))?;
            categories.insert(
                domain,
                CategoryEntry {
                    id: category.id,
                    subcategories: category.subcategories.into_iter().collect(),
                },
            );
        }
        Ok(Self { categories })
    }

    /// Load a registry from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn category(&self, domain: Domain) -> Result<&CategoryEntry> {
        self.categories
            .get(&domain)
            .ok_or_else(|| HudError::UnknownDomain(domain.name().to_string()))
    }

    /// Resolve a static subcategory of `domain` by registry name
    pub fn subcategory(&self, domain: Domain, name: &str) -> Result<SubcategoryId> {
        self.category(domain)?
            .subcategory_id(name)
            .map(SubcategoryId::registered)
            .ok_or_else(|| HudError::UnknownSubcategory {
                domain,
                name: name.to_string(),
            })
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
