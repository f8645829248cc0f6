#![deny(missing_docs)]
//! <fullname>Lamassu IoT Core event router</fullname>
//!
//! Lambda function that receives CloudEvents from the Lamassu
//! inbound SQS queue. It looks at the type of every event, and
//! invokes the Lambda function that handles that type with the
//! event untouched.
use aws_lambda_events::event::sqs::SqsEvent;
use lambda_runtime::LambdaEvent;

mod error;
pub use error::RuntimeError;

mod event;
pub use event::Envelope;

/// `dispatch` includes the invocation of downstream functions
pub mod dispatch;
pub use dispatch::{Dispatcher, LambdaDispatcher};

mod registry;
pub use registry::{EventKind, HandlerRegistry};

mod router;
pub use router::{Outcome, Router};

#[cfg(test)]
mod test_util;

/// `handle_batch` is the Lambda function entry point
/// that receives the events from the inbound SQS queue
#[tracing::instrument(skip(router, event), fields(request_id = %event.context.request_id))]
pub async fn handle_batch<D: Dispatcher>(
    router: &Router<D>,
    event: LambdaEvent<SqsEvent>,
) -> Result<(), RuntimeError> {
    let records = event.payload.records;
    tracing::info!(messages = records.len(), "routing batch");

    let outcomes = router.route_batch(&records).await;

    let (mut dispatched, mut ignored, mut failed) = (0, 0, 0);
    for outcome in &outcomes {
        match outcome {
            Outcome::Dispatched { .. } => dispatched += 1,
            Outcome::Ignored { .. } => ignored += 1,
            Outcome::Failed(_) => failed += 1,
        }
    }
    tracing::info!(dispatched, ignored, failed, "batch routed");

    // failures were logged per message, the queue must not redeliver the batch
    Ok(())
}
