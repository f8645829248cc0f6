use crate::{
    dispatch::Dispatcher,
    error::RuntimeError,
    event::Envelope,
    registry::{EventKind, HandlerRegistry},
};
use aws_lambda_events::event::sqs::SqsMessage;

/// `Outcome` records what happened to a single message of a batch.
#[derive(Debug)]
pub enum Outcome {
    /// The envelope was handed over to `handler`
    Dispatched {
        /// Event type of the envelope
        event_type: EventKind,
        /// Function name or ARN that received the envelope
        handler: String,
    },
    /// No function handles this event type, the message was dropped
    Ignored {
        /// Event type of the envelope
        event_type: String,
    },
    /// The message could not be routed
    Failed(RuntimeError),
}

/// `Router` sends each inbound envelope to the function registered for its type.
pub struct Router<D> {
    registry: HandlerRegistry,
    dispatcher: D,
}

impl<D: Dispatcher> Router<D> {
    /// Create a router on top of a fixed registry.
    pub fn new(registry: HandlerRegistry, dispatcher: D) -> Router<D> {
        Router {
            registry,
            dispatcher,
        }
    }

    /// The dispatcher used to reach downstream functions.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Route every message in delivery order.
    /// A message that fails never stops the ones after it.
    pub async fn route_batch(&self, messages: &[SqsMessage]) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(messages.len());
        for message in messages {
            let message_id = message.message_id.as_deref().unwrap_or_default();
            let outcome = match message.body.as_deref() {
                Some(body) => self.route(body).await,
                None => Outcome::Failed(RuntimeError::MissingBody(message_id.into())),
            };

            match &outcome {
                Outcome::Dispatched {
                    event_type,
                    handler,
                } => tracing::info!(message_id, %event_type, handler = handler.as_str(), "event dispatched"),
                Outcome::Ignored { event_type } => {
                    tracing::debug!(message_id, event_type = event_type.as_str(), "ignoring event")
                }
                Outcome::Failed(err) => {
                    tracing::error!(message_id, error = ?err, "failed to route message")
                }
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Decode one message body and dispatch it.
    #[tracing::instrument(skip(self, body))]
    pub async fn route(&self, body: &str) -> Outcome {
        tracing::debug!(body, "message body");
        let envelope = match Envelope::from_body(body) {
            Ok(envelope) => envelope,
            Err(err) => return Outcome::Failed(err),
        };
        tracing::info!(
            id = envelope.id.as_str(),
            event_type = envelope.event_type.as_str(),
            "message received"
        );

        let kind = match EventKind::from_type(&envelope.event_type) {
            Some(kind) => kind,
            None => {
                return Outcome::Ignored {
                    event_type: envelope.event_type,
                }
            }
        };

        match self.dispatch(kind, &envelope).await {
            Ok(handler) => Outcome::Dispatched {
                event_type: kind,
                handler: handler.into(),
            },
            Err(err) => Outcome::Failed(err),
        }
    }

    async fn dispatch(&self, kind: EventKind, envelope: &Envelope) -> Result<&str, RuntimeError> {
        let handler = self.registry.handler_for(kind)?;
        let payload = envelope.to_payload()?;
        self.dispatcher.dispatch(handler, payload).await?;
        Ok(handler)
    }
}
