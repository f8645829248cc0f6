use crate::{dispatch::Dispatcher, error::RuntimeError};
use async_trait::async_trait;
use aws_lambda_events::event::sqs::SqsEvent;
use aws_types::{region::Region, Credentials, SdkConfig};
use std::sync::Mutex;

/// Configuration for mocking AWS SDK clients
pub async fn get_mock_config() -> SdkConfig {
    aws_config::from_env()
        .region(Region::new("us-west-1"))
        .credentials_provider(Credentials::new(
            "accesskey",
            "privatekey",
            None,
            None,
            "dummy",
        ))
        .load()
        .await
}

/// Base request builder for the AWS SDK calls
pub fn get_request_builder(service: &str) -> http::request::Builder {
    http::Request::builder().uri(format!("https://{service}.us-west-1.amazonaws.com/"))
}

/// Dispatcher that records every submission instead of calling Lambda
#[derive(Default)]
pub struct RecordingDispatcher {
    calls: Mutex<Vec<(String, Vec<u8>)>>,
    failing: Option<String>,
}

impl RecordingDispatcher {
    /// Reject every submission to `handler`
    pub fn failing(handler: &str) -> RecordingDispatcher {
        RecordingDispatcher {
            failing: Some(handler.into()),
            ..Default::default()
        }
    }

    /// Accepted submissions, in order
    pub fn calls(&self) -> Vec<(String, Vec<u8>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn dispatch(&self, handler: &str, payload: Vec<u8>) -> Result<(), RuntimeError> {
        if self.failing.as_deref() == Some(handler) {
            return Err(RuntimeError::Invoke(aws_sdk_lambda::Error::Unhandled(
                format!("rejected invocation of {handler}").into(),
            )));
        }
        self.calls
            .lock()
            .unwrap()
            .push((handler.to_string(), payload));
        Ok(())
    }
}

/// SQS event with one record per body, `None` leaves the body out
pub fn sqs_event(bodies: &[Option<&str>]) -> SqsEvent {
    let records: Vec<serde_json::Value> = bodies
        .iter()
        .enumerate()
        .map(|(i, body)| {
            serde_json::json!({
                "messageId": format!("059f36b4-87a3-44ab-83d2-661975830a7{i}"),
                "receiptHandle": "AQEBwJnKyrHigUMZj6rYigCgxlaS3SLy0a...",
                "body": body,
                "attributes": {
                    "ApproximateReceiveCount": "1",
                    "SentTimestamp": "1545082649183",
                    "SenderId": "AIDAIENQZJOLO23YVJ4VO",
                    "ApproximateFirstReceiveTimestamp": "1545082649185"
                },
                "messageAttributes": {},
                "md5OfBody": "e4e68fb7bd0e697a0ae8f1bb342846b3",
                "eventSource": "aws:sqs",
                "eventSourceARN": "arn:aws:sqs:us-east-2:123456789012:lamassu-inbound",
                "awsRegion": "us-east-2"
            })
        })
        .collect();
    serde_json::from_value(serde_json::json!({ "Records": records }))
        .expect("failed to deserialize sqs event")
}
