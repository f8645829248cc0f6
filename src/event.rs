use crate::error::RuntimeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `Envelope` represents a CloudEvents message exchanged with the CA manager.
///
/// The router only reads `id` and `type`. Every other attribute, `data`
/// included, stays raw JSON so the downstream function gets it exactly
/// as it was sent, explicit nulls and odd types included.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Envelope {
    /// Correlation id, echoed back by the downstream functions
    pub id: String,
    /// Event type used to pick the downstream function
    #[serde(rename = "type")]
    pub event_type: String,
    /// Every other attribute, untouched
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Envelope {
    /// Decode an SQS message body into an envelope.
    pub fn from_body(body: &str) -> Result<Envelope, RuntimeError> {
        serde_json::from_str(body).map_err(RuntimeError::Decode)
    }

    /// Serialize the envelope into the payload sent to a downstream function.
    pub fn to_payload(&self) -> Result<Vec<u8>, RuntimeError> {
        serde_json::to_vec(self).map_err(RuntimeError::Encode)
    }

    /// Producer of the event.
    pub fn source(&self) -> Option<&Value> {
        self.attributes.get("source")
    }

    /// Timestamp, in whatever format the producer used.
    pub fn time(&self) -> Option<&Value> {
        self.attributes.get("time")
    }

    /// CloudEvents spec version.
    pub fn specversion(&self) -> Option<&Value> {
        self.attributes.get("specversion")
    }

    /// Event payload, only understood by the downstream function.
    pub fn data(&self) -> Option<&Value> {
        self.attributes.get("data")
    }
}
