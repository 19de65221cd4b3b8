//! Normalized item model
//!
//! Host items arrive as loosely typed records with a free-form `subType`.
//! They are parsed once into [`ItemKind`]; every sub-kind enum carries an
//! `Other` catch-all so unknown subtypes from newer rules data or third
//! party modules still land in a HUD section.
//!
//! This file is also the single table that maps each kind to the registry
//! subcategory it belongs to. The `*_SUBCATEGORIES` lists give the emission
//! order and always end with the leftover bucket.

use serde::Deserialize;

use crate::core::types::ItemId;

/// Subtype of an `attack` item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackKind {
    Weapon,
    Natural,
    Ability,
    RacialAbility,
    Item,
    Misc,
    Other(String),
}

impl AttackKind {
    pub fn from_sub_type(sub_type: &str) -> Self {
        match sub_type {
            "weapon" => AttackKind::Weapon,
            "natural" => AttackKind::Natural,
            "ability" => AttackKind::Ability,
            "racialAbility" => AttackKind::RacialAbility,
            "item" => AttackKind::Item,
            "misc" => AttackKind::Misc,
            other => AttackKind::Other(other.to_string()),
        }
    }

    /// Combat subcategory name
    pub fn subcategory(&self) -> &'static str {
        match self {
            AttackKind::Weapon => "weaponAttack",
            AttackKind::Natural => "naturalAttack",
            AttackKind::Ability => "classAbilities",
            AttackKind::RacialAbility => "racialAbilities",
            AttackKind::Item => "items",
            AttackKind::Misc => "miscellaneous",
            AttackKind::Other(_) => "other",
        }
    }
}

/// Subtype of a `buff` item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuffKind {
    Item,
    Temp,
    Perm,
    Misc,
    Other(String),
}

impl BuffKind {
    pub fn from_sub_type(sub_type: &str) -> Self {
        match sub_type {
            "item" => BuffKind::Item,
            "temp" => BuffKind::Temp,
            "perm" => BuffKind::Perm,
            "misc" => BuffKind::Misc,
            other => BuffKind::Other(other.to_string()),
        }
    }

    /// Buffs subcategory name
    pub fn subcategory(&self) -> &'static str {
        match self {
            BuffKind::Item => "item",
            BuffKind::Temp => "temporary",
            BuffKind::Perm => "permanent",
            BuffKind::Misc => "miscellaneous",
            BuffKind::Other(_) => "other",
        }
    }
}

/// Subtype of a `feat` item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatKind {
    ClassFeat,
    Feat,
    Racial,
    Template,
    Trait,
    Misc,
    /// Spheres of Power combat talent
    CombatTalent,
    /// Spheres of Power magic talent
    MagicTalent,
    Other(String),
}

impl FeatKind {
    pub fn from_sub_type(sub_type: &str) -> Self {
        match sub_type {
            "classFeat" => FeatKind::ClassFeat,
            "feat" => FeatKind::Feat,
            "racial" => FeatKind::Racial,
            "template" => FeatKind::Template,
            "trait" => FeatKind::Trait,
            "misc" => FeatKind::Misc,
            "combatTalent" => FeatKind::CombatTalent,
            "magicTalent" => FeatKind::MagicTalent,
            other => FeatKind::Other(other.to_string()),
        }
    }

    /// Features subcategory name
    pub fn subcategory(&self) -> &'static str {
        match self {
            FeatKind::ClassFeat => "classFeat",
            FeatKind::Feat => "feat",
            FeatKind::Racial => "racial",
            FeatKind::Template => "template",
            FeatKind::Trait => "trait",
            FeatKind::Misc => "misc",
            FeatKind::CombatTalent => "combatTalents",
            FeatKind::MagicTalent => "magicTalents",
            FeatKind::Other(_) => "other",
        }
    }
}

/// Subtype of a `loot` item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LootKind {
    TradeGoods,
    Misc,
    Ammo,
    Gear,
    Other(String),
}

impl LootKind {
    pub fn from_sub_type(sub_type: &str) -> Self {
        match sub_type {
            "tradeGoods" => LootKind::TradeGoods,
            "misc" => LootKind::Misc,
            "ammo" => LootKind::Ammo,
            "gear" => LootKind::Gear,
            other => LootKind::Other(other.to_string()),
        }
    }

    /// Inventory subcategory name
    pub fn subcategory(&self) -> &'static str {
        match self {
            LootKind::TradeGoods => "tradeGoods",
            LootKind::Misc => "miscellaneous",
            LootKind::Ammo => "ammunition",
            LootKind::Gear => "gear",
            LootKind::Other(_) => "other",
        }
    }
}

/// Spellbook placement of a spell item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellInfo {
    pub spellbook: String,
    pub level: u8,
}

/// Item type with its domain-specific subtype
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Attack(AttackKind),
    Buff(BuffKind),
    Consumable,
    Container,
    Equipment,
    Feat(FeatKind),
    Loot(LootKind),
    Spell(SpellInfo),
    Weapon,
    /// Any item type not handled by a dedicated domain
    Unrecognized(String),
}

pub const COMBAT_SUBCATEGORIES: [&str; 7] = [
    "weaponAttack",
    "naturalAttack",
    "classAbilities",
    "racialAbilities",
    "items",
    "miscellaneous",
    "other",
];

pub const BUFF_SUBCATEGORIES: [&str; 5] = ["item", "temporary", "permanent", "miscellaneous", "other"];

pub const INVENTORY_SUBCATEGORIES: [&str; 9] = [
    "weapons",
    "equipment",
    "consumables",
    "containers",
    "tradeGoods",
    "miscellaneous",
    "ammunition",
    "gear",
    "other",
];

pub const FEATURE_SUBCATEGORIES: [&str; 9] = [
    "classFeat",
    "feat",
    "racial",
    "template",
    "trait",
    "misc",
    "combatTalents",
    "magicTalents",
    "other",
];

impl ItemKind {
    pub fn parse(item_type: &str, sub_type: &str, spellbook: &str, spell_level: u8) -> Self {
        match item_type {
            "attack" => ItemKind::Attack(AttackKind::from_sub_type(sub_type)),
            "buff" => ItemKind::Buff(BuffKind::from_sub_type(sub_type)),
            "consumable" => ItemKind::Consumable,
            "container" => ItemKind::Container,
            "equipment" => ItemKind::Equipment,
            "feat" => ItemKind::Feat(FeatKind::from_sub_type(sub_type)),
            "loot" => ItemKind::Loot(LootKind::from_sub_type(sub_type)),
            "spell" => ItemKind::Spell(SpellInfo {
                spellbook: spellbook.to_string(),
                level: spell_level,
            }),
            "weapon" => ItemKind::Weapon,
            other => ItemKind::Unrecognized(other.to_string()),
        }
    }

    pub fn combat_subcategory(&self) -> Option<&'static str> {
        match self {
            ItemKind::Attack(kind) => Some(kind.subcategory()),
            _ => None,
        }
    }

    pub fn buff_subcategory(&self) -> Option<&'static str> {
        match self {
            ItemKind::Buff(kind) => Some(kind.subcategory()),
            _ => None,
        }
    }

    pub fn inventory_subcategory(&self) -> Option<&'static str> {
        match self {
            ItemKind::Weapon => Some("weapons"),
            ItemKind::Equipment => Some("equipment"),
            ItemKind::Consumable => Some("consumables"),
            ItemKind::Container => Some("containers"),
            ItemKind::Loot(kind) => Some(kind.subcategory()),
            _ => None,
        }
    }

    pub fn feature_subcategory(&self) -> Option<&'static str> {
        match self {
            ItemKind::Feat(kind) => Some(kind.subcategory()),
            _ => None,
        }
    }

    pub fn spell(&self) -> Option<&SpellInfo> {
        match self {
            ItemKind::Spell(info) => Some(info),
            _ => None,
        }
    }
}

/// Charge state of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Uses {
    #[default]
    None,
    Limited { value: u32, max: u32 },
    Unlimited,
}

impl Uses {
    pub fn limited(value: u32, max: u32) -> Self {
        Uses::Limited { value, max }
    }

    /// Declares a maximum charge count (infinite counts)
    pub fn has_max(&self) -> bool {
        match self {
            Uses::None => false,
            Uses::Limited { max, .. } => *max > 0,
            Uses::Unlimited => true,
        }
    }

    /// Has at least one charge left right now
    pub fn has_remaining(&self) -> bool {
        match self {
            Uses::None => false,
            Uses::Limited { value, .. } => *value > 0,
            Uses::Unlimited => true,
        }
    }

    /// "current/maximum", `None` for unlimited uses
    pub fn counter(&self) -> Option<String> {
        match self {
            Uses::None => Some("0/0".to_string()),
            Uses::Limited { value, max } => Some(format!("{}/{}", value, max)),
            Uses::Unlimited => None,
        }
    }
}

/// Self-charged resource pool of a sub-action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SelfUses {
    pub value: u32,
    pub max: u32,
}

/// One internal action of an item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAction {
    pub id: String,
    pub name: String,
    /// Charges consumed from the parent item, as computed by the rules system
    #[serde(default)]
    pub charge_cost: i32,
    /// Present when the action tracks its own uses
    #[serde(default)]
    pub self_uses: Option<SelfUses>,
}

impl SubAction {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            charge_cost: 0,
            self_uses: None,
        }
    }

    pub fn with_charge_cost(mut self, cost: i32) -> Self {
        self.charge_cost = cost;
        self
    }

    pub fn with_self_uses(mut self, value: u32, max: u32) -> Self {
        self.self_uses = Some(SelfUses { value, max });
        self
    }
}

/// An owned item as seen by the HUD
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawItem")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub img: Option<String>,
    pub kind: ItemKind,
    pub uses: Uses,
    /// Result of the rules system's usability check
    pub can_use: bool,
    /// Buff toggle state
    pub active: bool,
    pub actions: Vec<SubAction>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            img: None,
            kind,
            uses: Uses::None,
            can_use: true,
            active: false,
            actions: Vec::new(),
        }
    }

    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = Some(img.into());
        self
    }

    pub fn with_uses(mut self, uses: Uses) -> Self {
        self.uses = uses;
        self
    }

    pub fn with_actions(mut self, actions: Vec<SubAction>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn unusable(mut self) -> Self {
        self.can_use = false;
        self
    }
}

/// Wire shape of an item produced by the host adapter
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    id: ItemId,
    name: String,
    #[serde(default)]
    img: Option<String>,
    #[serde(rename = "type")]
    item_type: String,
    #[serde(default)]
    sub_type: String,
    #[serde(default)]
    spellbook: String,
    #[serde(default)]
    spell_level: u8,
    #[serde(default)]
    uses: Uses,
    #[serde(default = "default_can_use")]
    can_use: bool,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    actions: Vec<SubAction>,
}

fn default_can_use() -> bool {
    true
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        Self {
            kind: ItemKind::parse(&raw.item_type, &raw.sub_type, &raw.spellbook, raw.spell_level),
            id: raw.id,
            name: raw.name,
            img: raw.img,
            uses: raw.uses,
            can_use: raw.can_use,
            active: raw.active,
            actions: raw.actions,
        }
    }
}
