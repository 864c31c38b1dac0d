#![allow(non_snake_case)]
use cloudwatch_embedded_logger::{Builder, Dimensions, JsonLogger, Logger, Metrics, Unit};
use serde_json::json;
use std::time::Instant;

fn handle_login(logger: &cloudwatch_embedded_logger::MetricLogger<JsonLogger<std::io::Stdout>>, user_id: &str) {
    let started = Instant::now();

    // Do something important

    logger
        .increment("LoginAttempts")
        .namespace("MyApp/Auth")
        .dimensions([("ServiceName", "AuthService")])
        .info((json!({ "userId": user_id }), "User login attempt"));

    logger
        .metric(
            Metrics::new()
                .with("Latency", (started.elapsed().as_secs_f64() * 1000.0, Unit::Milliseconds))
                .with("PayloadSize", (512, Unit::Bytes)),
        )
        .dimensions(Dimensions::new().with("ServiceName", "AuthService").with("Port", 8080))
        .info(&format!("Processed login for {user_id}"));
}

fn main() {
    // Diagnostics of the extension itself go to stderr, metrics documents to stdout
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();

    let logger = Builder::new()
        .default_namespace("MetricsDemo")
        .with_dimension("Function", std::env::var("AWS_LAMBDA_FUNCTION_NAME").unwrap_or_else(|_| "local".to_owned()))
        .extend(JsonLogger::new(std::io::stdout()));

    logger.info("Starting");
    handle_login(&logger, "12345");
    logger.metric([("ColdStart", (1, Unit::Count))]).fatal(());
}
