//! Fields shared by every webhook payload.

use dnsimple::models::Account;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::WebhookError;

/// Who triggered the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    pub id: String,
    /// Kind of actor, e.g. `user` or `dnsimple`.
    pub entity: String,
    /// Human readable description of the actor.
    pub pretty: String,
}

/// Envelope header present on every event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventHeader {
    pub api_version: String,
    #[serde(rename = "request_identifier")]
    pub request_id: String,
    pub name: String,
    pub actor: Option<Actor>,
    pub account: Option<Account>,
}

impl EventHeader {
    /// Decodes only the header from a raw payload.
    pub fn from_payload(payload: &[u8]) -> Result<Self, WebhookError> {
        let object = decode_object(payload)?;
        Ok(Self::deserialize(&Value::Object(object))?)
    }
}

/// Decodes `payload`, rejecting anything but a JSON object.
pub(crate) fn decode_object(payload: &[u8]) -> Result<Map<String, Value>, WebhookError> {
    match serde_json::from_slice::<Value>(payload)? {
        Value::Object(object) => Ok(object),
        other => Err(WebhookError::Decode(serde_json::Error::custom(format!(
            "webhook payload must be a JSON object, found {}",
            kind_of(&other)
        )))),
    }
}

/// Folds the `data` object into the top level.
///
/// The provider nests subject objects under `data` while the header sits at
/// the top level; after folding, header and subject decode from one object.
/// A `null` member counts as absent; any other non-object is a type mismatch.
pub(crate) fn flatten_data(mut object: Map<String, Value>) -> Result<Value, WebhookError> {
    loop {
        match object.remove("data") {
            Some(Value::Object(nested)) => object.extend(nested),
            Some(Value::Null) | None => return Ok(Value::Object(object)),
            Some(other) => {
                return Err(WebhookError::Decode(serde_json::Error::custom(format!(
                    "webhook `data` must be a JSON object, found {}",
                    kind_of(&other)
                ))))
            },
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
