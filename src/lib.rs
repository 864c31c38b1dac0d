//! Extends a structured logger with CloudWatch embedded metrics: each metric log statement carries an
//! `_aws` metadata block that CloudWatch Logs extracts into metrics.
//!
//! <https://docs.aws.amazon.com/AmazonCloudWatch/latest/monitoring/CloudWatch_Embedded_Metric_Format_Specification.html>

pub use {
    builder::{Builder, Config, DEFAULT_NAMESPACE},
    extension::{Extension, MetricBuilder, MetricLogger},
    json::JsonLogger,
    logger::{Entry, Fields, Level, Logger},
    metric::{DimensionValue, Dimensions, MetricValue, Metrics, Unit},
    tracing_logger::TracingLogger,
};

mod builder;
pub mod emf;
mod extension;
mod json;
mod logger;
mod metric;
mod tracing_logger;
