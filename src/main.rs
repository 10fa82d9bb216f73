use invocation_handler::{function_handler, HandlerConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch stamps each line itself; colors would show up as escapes.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();

    let config = HandlerConfig::default();
    let config = &config;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(event, config).await
    }))
    .await
}
