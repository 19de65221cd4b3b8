//! Identity payload attached to every leaf
//!
//! The payload is a JSON object the dispatcher decodes later to run the
//! actual roll. Encoding is deterministic: reserved keys come first in a
//! fixed order and extra keys follow sorted by name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::actions::catalog::RollType;
use crate::core::error::Result;
use crate::snapshot::ActorSnapshot;

/// Keys the encoder always writes; extra fields may not replace them
pub const RESERVED_KEYS: [&str; 5] = ["rollType", "actionId", "actorId", "tokenId", "isMulti"];

/// Decoded form of a leaf's `encoded_value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedPayload {
    pub roll_type: RollType,
    pub action_id: String,
    /// Empty for multi-target builds
    pub actor_id: String,
    /// Empty for multi-target builds
    pub token_id: String,
    pub is_multi: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EncodedPayload {
    pub fn decode(encoded: &str) -> Result<Self> {
        Ok(serde_json::from_str(encoded)?)
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn extra_bool(&self, key: &str) -> Option<bool> {
        self.extra.get(key).and_then(Value::as_bool)
    }

    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

/// Encodes payloads against the snapshot of the current build
#[derive(Debug, Clone, Copy)]
pub struct ActionEncoder<'a> {
    snapshot: &'a ActorSnapshot,
}

impl<'a> ActionEncoder<'a> {
    pub fn new(snapshot: &'a ActorSnapshot) -> Self {
        Self { snapshot }
    }

    /// Build the payload without serializing it
    pub fn payload<I>(&self, roll_type: RollType, action_id: &str, extra: I) -> EncodedPayload
    where
        I: IntoIterator<Item = (&'static str, Value)>,
    {
        let is_multi = self.snapshot.is_multi();
        let (actor_id, token_id) = if is_multi {
            (String::new(), String::new())
        } else {
            (
                self.snapshot.actor_id().map(|id| id.to_string()).unwrap_or_default(),
                self.snapshot.token_id().map(|id| id.to_string()).unwrap_or_default(),
            )
        };

        let mut fields = Map::new();
        for (key, value) in extra {
            if RESERVED_KEYS.contains(&key) {
                tracing::warn!(key, action_id, "extra payload field shadows a reserved key, dropped");
                continue;
            }
            fields.insert(key.to_string(), value);
        }

        EncodedPayload {
            roll_type,
            action_id: action_id.to_string(),
            actor_id,
            token_id,
            is_multi,
            extra: fields,
        }
    }

    pub fn encode(&self, roll_type: RollType, action_id: &str) -> Result<String> {
        self.encode_with(roll_type, action_id, std::iter::empty::<(&'static str, Value)>())
    }

    pub fn encode_with<I>(&self, roll_type: RollType, action_id: &str, extra: I) -> Result<String>
    where
        I: IntoIterator<Item = (&'static str, Value)>,
    {
        self.payload(roll_type, action_id, extra).encode()
    }
}
