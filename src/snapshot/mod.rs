//! Read-only view over the selected characters
//!
//! A fresh [`ActorSnapshot`] is produced for every build by a
//! [`SnapshotAdapter`] owned by the host. When more than one actor is
//! selected the snapshot is "multi": single-actor data (ids, items,
//! skills, spellbooks) is hidden behind accessors so no builder can read
//! it by mistake.

pub mod item;
pub mod skills;
pub mod spellbook;

pub use item::{
    AttackKind, BuffKind, FeatKind, Item, ItemKind, LootKind, SelfUses, SpellInfo, SubAction, Uses,
    BUFF_SUBCATEGORIES, COMBAT_SUBCATEGORIES, FEATURE_SUBCATEGORIES, INVENTORY_SUBCATEGORIES,
};
pub use skills::{SkillEntry, SubSkill};
pub use spellbook::{SpellSlots, Spellbook};

use serde::Deserialize;

use crate::core::types::{ActorId, TokenId};

/// A selected character
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActorRef {
    pub id: ActorId,
    #[serde(default)]
    pub name: String,
    /// Keys of the conditions currently applied
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl ActorRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ActorId::new(id),
            name: String::new(),
            conditions: Vec::new(),
        }
    }

    pub fn with_condition(mut self, key: impl Into<String>) -> Self {
        self.conditions.push(key.into());
        self
    }

    pub fn has_condition(&self, key: &str) -> bool {
        self.conditions.iter().any(|c| c == key)
    }
}

/// A selected token on the canvas
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenRef {
    pub id: TokenId,
    #[serde(default)]
    pub hidden: bool,
    /// Current user owns this token; assumed when the host leaves it out
    #[serde(default = "owned_by_default")]
    pub owned: bool,
}

fn owned_by_default() -> bool {
    true
}

impl TokenRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: TokenId::new(id),
            hidden: false,
            owned: owned_by_default(),
        }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn owned(mut self, owned: bool) -> Self {
        self.owned = owned;
        self
    }
}

/// Snapshot of the characters a HUD is built for
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActorSnapshot {
    actors: Vec<ActorRef>,
    tokens: Vec<TokenRef>,
    items: Vec<Item>,
    skills: Vec<SkillEntry>,
    spellbooks: Vec<Spellbook>,
    in_combat: bool,
}

impl ActorSnapshot {
    pub fn new(actors: Vec<ActorRef>, tokens: Vec<TokenRef>) -> Self {
        Self {
            actors,
            tokens,
            ..Self::default()
        }
    }

    /// Snapshot of one actor through one token
    pub fn single(actor: ActorRef, token: TokenRef) -> Self {
        Self::new(vec![actor], vec![token])
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_skills(mut self, skills: Vec<SkillEntry>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_spellbooks(mut self, spellbooks: Vec<Spellbook>) -> Self {
        self.spellbooks = spellbooks;
        self
    }

    pub fn with_in_combat(mut self, in_combat: bool) -> Self {
        self.in_combat = in_combat;
        self
    }

    /// A snapshot with no selected actor builds nothing
    pub fn is_valid(&self) -> bool {
        !self.actors.is_empty()
    }

    pub fn is_multi(&self) -> bool {
        self.actors.len() > 1
    }

    pub fn actors(&self) -> &[ActorRef] {
        &self.actors
    }

    pub fn tokens(&self) -> &[TokenRef] {
        &self.tokens
    }

    /// The single selected actor's id, `None` for multi or invalid snapshots
    pub fn actor_id(&self) -> Option<&ActorId> {
        match self.actors.as_slice() {
            [actor] => Some(&actor.id),
            _ => None,
        }
    }

    pub fn token_id(&self) -> Option<&TokenId> {
        if self.is_multi() {
            return None;
        }
        self.tokens.first().map(|t| &t.id)
    }

    /// Items of the single selected actor; empty in multi mode
    pub fn items(&self) -> &[Item] {
        if self.is_multi() {
            &[]
        } else {
            &self.items
        }
    }

    /// Skills of the single selected actor; empty in multi mode
    pub fn skills(&self) -> &[SkillEntry] {
        if self.is_multi() {
            &[]
        } else {
            &self.skills
        }
    }

    /// Spellbooks of the single selected actor; empty in multi mode
    pub fn spellbooks(&self) -> &[Spellbook] {
        if self.is_multi() {
            &[]
        } else {
            &self.spellbooks
        }
    }

    /// Selection currently takes part in the active encounter
    pub fn in_combat(&self) -> bool {
        self.in_combat
    }
}

/// Host boundary that turns host characters into a snapshot
pub trait SnapshotAdapter {
    type Character;

    fn snapshot(&self, characters: &[Self::Character]) -> ActorSnapshot;
}
