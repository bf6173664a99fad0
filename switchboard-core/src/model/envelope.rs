use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A frame that could not be read as a JSON object. This ends the session
/// that sent it.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("frame is not a JSON object: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// The `{ action, payload }` shape every frame has on the wire, in both
/// directions.
///
/// Inbound frames are decoded leniently: a missing or non-string `action`
/// becomes `""` and a missing or non-object `payload` becomes an empty map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

impl Envelope {
    pub fn new(action: impl Into<String>, payload: Map<String, Value>) -> Self {
        Self {
            action: action.into(),
            payload,
        }
    }

    pub fn decode(text: &str) -> Result<Self, DecodeError> {
        let frame: Map<String, Value> = serde_json::from_str(text)?;
        Ok(Self::from_frame(frame))
    }

    pub fn decode_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let frame: Map<String, Value> = serde_json::from_slice(bytes)?;
        Ok(Self::from_frame(frame))
    }

    fn from_frame(mut frame: Map<String, Value>) -> Self {
        let action = match frame.remove("action") {
            Some(Value::String(action)) => action,
            _ => String::new(),
        };
        let payload = match frame.remove("payload") {
            Some(Value::Object(payload)) => payload,
            _ => Map::new(),
        };

        Self { action, payload }
    }

    /// String field of the payload, or `""` when absent or not a string.
    pub fn payload_str(&self, key: &str) -> &str {
        self.payload
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}
