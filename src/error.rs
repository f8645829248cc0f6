use crate::registry::EventKind;
use thiserror::Error as ThisError;

/// Different errors that the router can raise while handling a message
#[derive(Debug, ThisError)]
pub enum RuntimeError {
    /// Error returned when a message body is not a valid event envelope
    #[error("unable to decode event envelope")]
    Decode(#[source] serde_json::Error),
    /// Error returned when an SQS record arrives without a body
    #[error("message {0} has no body")]
    MissingBody(String),
    /// Error returned when the event type is known but no function is configured for it
    #[error("missing lambda name for event type {0}")]
    MissingHandler(EventKind),
    /// Error returned if the envelope cannot be serialized back into a payload
    #[error("unable to encode event envelope")]
    Encode(#[source] serde_json::Error),
    /// Error returned by the Lambda API when submitting an invocation
    #[error("unexpected lambda error")]
    Invoke(#[from] aws_sdk_lambda::Error),
}
