use aws_lambda_events::event::sqs::SqsEvent;
use iotcore_event_router::{handle_batch, HandlerRegistry, LambdaDispatcher, Router};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    // Get AWS Configuration
    let config = aws_config::load_from_env().await;
    let dispatcher = LambdaDispatcher::new(&config);

    let registry = HandlerRegistry::from_env();
    let router = Router::new(registry, dispatcher);

    run(service_fn(|event: LambdaEvent<SqsEvent>| {
        handle_batch(&router, event)
    }))
    .await
}
