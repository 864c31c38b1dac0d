//! # EMF
//!
//! Helpers for building CloudWatch Embedded Metrics documents via serde_json
//!
//! <https://docs.aws.amazon.com/AmazonCloudWatch/latest/monitoring/CloudWatch_Embedded_Metric_Format_Specification.html>

use super::logger::Fields;
use super::metric::{Dimensions, Metrics, Unit};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::value::Value;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// The Embedded Metric Format supports a maximum of 30 dimensions per dimension set
pub const MAX_DIMENSIONS: usize = 30;

#[derive(Serialize)]
pub struct EmbeddedMetrics<'a> {
    #[serde(rename = "_aws")]
    pub aws: EmbeddedMetricsAws<'a>,
    // Dimensions then metric values, a metric replaces a dimension of the same name
    #[serde(flatten)]
    pub values: IndexMap<&'a str, Value>,
}

#[derive(Serialize)]
pub struct EmbeddedMetricsAws<'a> {
    #[serde(rename = "Timestamp")]
    pub timestamp: u64,
    // A document never carries more than one namespace
    #[serde(rename = "CloudWatchMetrics")]
    pub cloudwatch_metrics: [EmbeddedNamespace<'a>; 1],
}

#[derive(Serialize)]
pub struct EmbeddedNamespace<'a> {
    #[serde(rename = "Namespace")]
    pub namespace: &'a str,
    // A single dimension set with all dimensions
    #[serde(rename = "Dimensions")]
    pub dimensions: [Vec<&'a str>; 1],
    #[serde(rename = "Metrics")]
    pub metrics: Vec<EmbeddedMetric<'a>>,
}

#[derive(Serialize)]
pub struct EmbeddedMetric<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Unit")]
    pub unit: Unit,
}

impl EmbeddedMetrics<'_> {
    /// Flatten the document into the top level fields of a log entry
    ///
    pub fn to_fields(&self) -> serde_json::Result<Fields> {
        match serde_json::to_value(self)? {
            Value::Object(fields) => Ok(fields),
            // A struct always serializes to an object
            _ => Ok(Fields::new()),
        }
    }
}

/// Current wall clock time in epoch milliseconds
pub fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Build an embedded metrics document stamped with the current time
pub fn build<'a>(metrics: &'a Metrics, dimensions: &'a Dimensions, namespace: &'a str) -> EmbeddedMetrics<'a> {
    build_at(metrics, dimensions, namespace, now())
}

/// Build an embedded metrics document with the given epoch millisecond timestamp
pub fn build_at<'a>(
    metrics: &'a Metrics,
    dimensions: &'a Dimensions,
    namespace: &'a str,
    timestamp: u64,
) -> EmbeddedMetrics<'a> {
    if dimensions.len() > MAX_DIMENSIONS {
        warn!(
            "Metrics document in namespace {namespace} has {} dimensions, CloudWatch only extracts up to {MAX_DIMENSIONS}",
            dimensions.len()
        );
    }

    let mut emf = EmbeddedMetrics {
        aws: EmbeddedMetricsAws {
            timestamp,
            cloudwatch_metrics: [EmbeddedNamespace {
                namespace,
                dimensions: [Vec::with_capacity(dimensions.len())],
                metrics: Vec::with_capacity(metrics.len()),
            }],
        },
        values: IndexMap::with_capacity(dimensions.len() + metrics.len()),
    };

    for (name, value) in dimensions.iter() {
        emf.aws.cloudwatch_metrics[0].dimensions[0].push(name);
        emf.values.insert(name, Value::String(value.to_string()));
    }

    for (name, value) in metrics.iter() {
        emf.aws.cloudwatch_metrics[0].metrics.push(EmbeddedMetric {
            name,
            unit: value.unit().unwrap_or_default(),
        });
        emf.values.insert(name, value.value().clone());
    }

    emf
}
