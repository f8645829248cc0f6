use crate::error::RuntimeError;
use async_trait::async_trait;
use aws_sdk_lambda::{
    model::{InvocationType, LogType},
    types::Blob,
    Client, Error,
};

/// `Dispatcher` hands an event over to a downstream function.
///
/// A successful return only means the invocation was accepted, the
/// downstream function runs on its own and reports nothing back.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Submit `payload` to the function named `handler`.
    async fn dispatch(&self, handler: &str, payload: Vec<u8>) -> Result<(), RuntimeError>;
}

/// Lambda client implementation.
pub struct LambdaDispatcher {
    inner: Client,
}

impl LambdaDispatcher {
    /// Initialize the Lambda client.
    #[tracing::instrument(skip(config))]
    pub fn new(config: &aws_types::SdkConfig) -> LambdaDispatcher {
        tracing::info!("Initializing Lambda client");
        LambdaDispatcher {
            inner: Client::new(config),
        }
    }
}

#[async_trait]
impl Dispatcher for LambdaDispatcher {
    /// Queue an asynchronous invocation, Lambda answers as soon as the event is accepted.
    #[tracing::instrument(skip(self, payload))]
    async fn dispatch(&self, handler: &str, payload: Vec<u8>) -> Result<(), RuntimeError> {
        let res = self
            .inner
            .invoke()
            .function_name(handler)
            .invocation_type(InvocationType::Event)
            .log_type(LogType::None)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(Error::from)?;

        tracing::info!(status = res.status_code, "lambda invocation accepted");
        Ok(())
    }
}
