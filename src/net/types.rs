//! Wire DTOs for the send-message endpoint.
//!
//! DESIGN
//! ======
//! Action options partly come from hand-written plot-point files on the
//! server, so their optional fields are decoded leniently: `null` or absent
//! flags fall back to defaults and numeric point ids are accepted as strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/send_message/{session_id}/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    pub is_major: bool,
    pub next_point_id: Option<String>,
}

/// A message as the server formats it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageData {
    pub message: String,
    /// Wall-clock time formatted `HH:MM`.
    pub timestamp: String,
}

/// A suggested follow-up the user can pick instead of typing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOption {
    pub text: String,
    #[serde(default, deserialize_with = "deserialize_bool_or_null")]
    pub is_major: bool,
    #[serde(default, deserialize_with = "deserialize_point_id")]
    pub next_point_id: Option<String>,
}

/// Successful response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageResponse {
    /// Server echo of the stored user message. Not displayed; the optimistic
    /// entry already shows it.
    #[serde(default)]
    pub user_message: Option<MessageData>,
    pub ai_message: MessageData,
    #[serde(default, deserialize_with = "deserialize_options_or_null")]
    pub next_action_options: Vec<ActionOption>,
}

fn deserialize_bool_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn deserialize_options_or_null<'de, D>(deserializer: D) -> Result<Vec<ActionOption>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ActionOption>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_point_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) if s.is_empty() => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected string, number, or null for next_point_id")),
    }
}
