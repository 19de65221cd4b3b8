//! Active encounter state as reported by the host

use serde::Deserialize;

use crate::core::types::{ActorId, TokenId};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub id: String,
    pub actor_id: ActorId,
    pub token_id: TokenId,
    /// `None` until initiative has been rolled
    #[serde(default)]
    pub initiative: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    #[serde(default)]
    pub combatants: Vec<Combatant>,
    /// Combatant whose turn it is
    #[serde(default)]
    pub current_combatant_id: Option<String>,
}

impl Encounter {
    /// Combatant entry for an (actor, token) pair
    pub fn combatant(&self, actor_id: &ActorId, token_id: &TokenId) -> Option<&Combatant> {
        self.combatants
            .iter()
            .find(|c| &c.actor_id == actor_id && &c.token_id == token_id)
    }

    pub fn is_current_turn(&self, combatant: &Combatant) -> bool {
        self.current_combatant_id.as_deref() == Some(combatant.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combatant_lookup_needs_both_ids() {
        let encounter = Encounter {
            combatants: vec![Combatant {
                id: "c1".to_string(),
                actor_id: ActorId::new("a1"),
                token_id: TokenId::new("t1"),
                initiative: Some(14.0),
            }],
            current_combatant_id: Some("c1".to_string()),
        };
        let found = encounter.combatant(&ActorId::new("a1"), &TokenId::new("t1")).unwrap();
        assert!(encounter.is_current_turn(found));
        assert!(encounter.combatant(&ActorId::new("a1"), &TokenId::new("t2")).is_none());
    }
}
