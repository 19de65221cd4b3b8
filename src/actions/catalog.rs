//! Roll kinds, leaf action descriptors and subcategory records

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::core::types::ItemId;

/// Tag telling the dispatcher what kind of effect a leaf performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RollType {
    AbilityCheck,
    Save,
    Skill,
    Condition,
    Buff,
    Item,
    CasterLevel,
    Concentration,
    Defenses,
    Bab,
    Cmb,
    Melee,
    Ranged,
    Initiative,
    AddToCombat,
    RemoveFromCombat,
    EndTurn,
    Rest,
    MakeVisible,
    MakeInvisible,
    OpenTokenConfig,
    ToggleTahGrid,
    ToggleSkip,
    OpenSettings,
}

/// What a derived subcategory groups under its parent
///
/// Each kind is its own variant, so an item whose id happens to read
/// "unusable" or "knowledge" still gets a different id from the passive
/// bucket or the Knowledge group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DerivedKey {
    /// Sub-actions of one item
    Item(ItemId),
    /// Items the character cannot use
    Passive,
    /// A skill and its declared sub-skills
    SkillGroup(String),
    Knowledge,
    Book(String),
    Level(u8),
}

impl DerivedKey {
    pub fn item(id: impl Into<String>) -> Self {
        DerivedKey::Item(ItemId::new(id))
    }

    pub fn skill_group(id: impl Into<String>) -> Self {
        DerivedKey::SkillGroup(id.into())
    }

    pub fn book(key: impl Into<String>) -> Self {
        DerivedKey::Book(key.into())
    }
}

impl fmt::Display for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivedKey::Item(id) => write!(f, "{}", id),
            DerivedKey::Passive => f.write_str("unusable"),
            DerivedKey::SkillGroup(id) | DerivedKey::Book(id) => f.write_str(id),
            DerivedKey::Knowledge => f.write_str("knowledge"),
            DerivedKey::Level(level) => write!(f, "{}", level),
        }
    }
}

/// Identity of a subcategory
///
/// Registered ids come from the category registry. Derived ids are
/// synthesized at build time as (parent, key). Equality is structural; the
/// rendered "parent_key" string is only what the host sees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubcategoryId {
    Registered(String),
    Derived {
        parent: Box<SubcategoryId>,
        key: DerivedKey,
    },
}

impl SubcategoryId {
    pub fn registered(id: impl Into<String>) -> Self {
        SubcategoryId::Registered(id.into())
    }

    /// Derive a child id under `self`
    pub fn derive(&self, key: DerivedKey) -> Self {
        SubcategoryId::Derived {
            parent: Box::new(self.clone()),
            key,
        }
    }

    pub fn parent(&self) -> Option<&SubcategoryId> {
        match self {
            SubcategoryId::Registered(_) => None,
            SubcategoryId::Derived { parent, .. } => Some(parent),
        }
    }

    /// Host-facing subcategory type
    pub fn kind(&self) -> &'static str {
        match self {
            SubcategoryId::Registered(_) => "system",
            SubcategoryId::Derived { .. } => "system-derived",
        }
    }
}

impl fmt::Display for SubcategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubcategoryId::Registered(id) => f.write_str(id),
            SubcategoryId::Derived { parent, key } => write!(f, "{}_{}", parent, key),
        }
    }
}

impl Serialize for SubcategoryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Side label shown next to a leaf or subcategory, e.g. "3/5"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Info {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl Info {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    /// Label styled as a charge counter
    pub fn charged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: Some("charged".to_string()),
        }
    }
}

/// A leaf of the action tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Serialized [`EncodedPayload`](crate::actions::EncodedPayload)
    pub encoded_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info1: Option<Info>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info2: Option<Info>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info3: Option<Info>,
}

impl ActionDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, encoded_value: String) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            img: None,
            encoded_value,
            css_class: None,
            info1: None,
            info2: None,
            info3: None,
        }
    }

    pub fn with_img(mut self, img: Option<String>) -> Self {
        self.img = img;
        self
    }

    pub fn with_css_class(mut self, css_class: Option<String>) -> Self {
        self.css_class = css_class;
        self
    }

    pub fn with_info1(mut self, info: Option<Info>) -> Self {
        self.info1 = info;
        self
    }

    pub fn with_info3(mut self, info: Option<Info>) -> Self {
        self.info3 = info;
        self
    }

    pub fn is_active(&self) -> bool {
        self.css_class
            .as_deref()
            .is_some_and(|class| class.split_whitespace().any(|c| c == "active"))
    }
}

/// CSS class for a toggle leaf
pub fn toggle_class(active: bool) -> Option<String> {
    Some(if active { "toggle active" } else { "toggle" }.to_string())
}

/// CSS class marking a non-toggle leaf as active
pub fn active_class(active: bool) -> Option<String> {
    active.then(|| "active".to_string())
}

/// A subcategory handed to the sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryData {
    pub id: SubcategoryId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info1: Option<Info>,
    /// Set when this subcategory hosts further derived subcategories
    pub has_derived_subcategories: bool,
}

impl SubcategoryData {
    pub fn derived(id: SubcategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            info1: None,
            has_derived_subcategories: false,
        }
    }

    pub fn with_info1(mut self, info: Option<Info>) -> Self {
        self.info1 = info;
        self
    }

    pub fn hosting_derived(mut self) -> Self {
        self.has_derived_subcategories = true;
        self
    }
}
