//! # Extension
//!
//! Metric logger returned from cloudwatch_embedded_logger::Builder, and the chainable
//! [MetricBuilder] it hands out for each metric log statement

use super::builder::Config;
use super::emf;
use super::logger::{Entry, Level, Logger};
use super::metric::{Dimensions, MetricValue, Metrics, Unit};
use metrics::SharedString;
use std::sync::Arc;
use tracing::{error, trace};

/// Reusable logger extension configured via [Builder](super::Builder)
///
/// The same extension can be applied to any number of loggers
#[derive(Clone, Debug)]
pub struct Extension {
    config: Arc<Config>,
}

impl Extension {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Wrap a logger, adding `metric()` and `increment()` on top of its own log levels
    ///
    /// The logger itself is left untouched
    pub fn extend<L: Logger>(&self, logger: L) -> MetricLogger<L> {
        MetricLogger {
            logger,
            config: self.config.clone(),
        }
    }
}

/// A [Logger] extended with CloudWatch embedded metrics
///
/// Plain log calls are forwarded to the wrapped logger unchanged.
///
/// # Example
/// ```
/// use cloudwatch_embedded_logger::{JsonLogger, Logger, Unit};
/// use serde_json::json;
///
/// let logger = cloudwatch_embedded_logger::Builder::new().extend(JsonLogger::new(std::io::stdout()));
///
/// logger
///     .metric([("Latency", (123, Unit::Milliseconds))])
///     .dimensions([("ServiceName", "AuthService"), ("Region", "us-east-1")])
///     .info((json!({"requestId": "abc123"}), "Processed login"));
///
/// logger.increment("LoginAttempts").namespace("MyApp/Auth").warn("Slow login");
/// ```
#[derive(Debug)]
pub struct MetricLogger<L> {
    logger: L,
    config: Arc<Config>,
}

impl<L: Logger> MetricLogger<L> {
    /// Start a metric chain with the given metrics, the default dimensions and the default namespace
    pub fn metric(&self, metrics: impl Into<Metrics>) -> MetricBuilder<'_, L> {
        MetricBuilder {
            logger: &self.logger,
            config: &self.config,
            metrics: metrics.into(),
            dimensions: self.config.default_dimensions.clone(),
            namespace: self.config.default_namespace.clone(),
        }
    }

    /// Start a metric chain counting a single occurrence of `name`
    pub fn increment(&self, name: impl Into<SharedString>) -> MetricBuilder<'_, L> {
        self.metric(Metrics::new().with(name, MetricValue::from(1).with_unit(Unit::Count)))
    }
}

impl<L> MetricLogger<L> {
    pub fn inner(&self) -> &L {
        &self.logger
    }

    pub fn into_inner(self) -> L {
        self.logger
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<L: Logger> Logger for MetricLogger<L> {
    fn log(&self, level: Level, entry: Entry<'_>) {
        self.logger.log(level, entry)
    }

    fn trace<'a>(&self, entry: impl Into<Entry<'a>>) {
        self.logger.trace(entry)
    }

    fn debug<'a>(&self, entry: impl Into<Entry<'a>>) {
        self.logger.debug(entry)
    }

    fn info<'a>(&self, entry: impl Into<Entry<'a>>) {
        self.logger.info(entry)
    }

    fn warn<'a>(&self, entry: impl Into<Entry<'a>>) {
        self.logger.warn(entry)
    }

    fn error<'a>(&self, entry: impl Into<Entry<'a>>) {
        self.logger.error(entry)
    }

    fn fatal<'a>(&self, entry: impl Into<Entry<'a>>) {
        self.logger.fatal(entry)
    }
}

/// Chainable metric log statement
///
/// Accumulates dimensions and a namespace, then every log level call builds a fresh metrics document
/// from the accumulated state and forwards it, merged with the caller's fields, to the wrapped logger.
/// The chain can be logged any number of times.
pub struct MetricBuilder<'a, L> {
    logger: &'a L,
    config: &'a Config,
    metrics: Metrics,
    dimensions: Dimensions,
    namespace: SharedString,
}

impl<L> Clone for MetricBuilder<'_, L> {
    fn clone(&self) -> Self {
        Self {
            logger: self.logger,
            config: self.config,
            metrics: self.metrics.clone(),
            dimensions: self.dimensions.clone(),
            namespace: self.namespace.clone(),
        }
    }
}

impl<'a, L: Logger> MetricBuilder<'a, L> {
    /// Merge dimensions into the chain, overwriting any existing dimension with the same name
    pub fn dimensions(mut self, dimensions: impl Into<Dimensions>) -> Self {
        self.dimensions.merge(dimensions.into());
        self
    }

    /// Replace the namespace of the chain
    pub fn namespace(self, namespace: impl Into<SharedString>) -> Self {
        Self {
            namespace: namespace.into(),
            ..self
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn current_dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn current_namespace(&self) -> &str {
        &self.namespace
    }

    /// The metrics document for the current state, stamped now unless the timestamp is fixed
    pub fn envelope(&self) -> emf::EmbeddedMetrics<'_> {
        match self.config.timestamp {
            Some(timestamp) => emf::build_at(&self.metrics, &self.dimensions, &self.namespace, timestamp),
            None => emf::build(&self.metrics, &self.dimensions, &self.namespace),
        }
    }

    /// Merge the metrics document with the caller's entry, the document wins on duplicate keys
    fn merge<'e>(&self, entry: Entry<'e>) -> Entry<'e> {
        let (fields, message) = entry.into_parts();

        match self.envelope().to_fields() {
            Ok(mut merged) => {
                for (key, value) in fields {
                    merged.entry(key).or_insert(value);
                }
                Entry::Fields(merged, message)
            }
            Err(err) => {
                error!("Failed to build metrics document in namespace {}: {err}", &*self.namespace);
                Entry::Fields(fields, message)
            }
        }
    }
}

impl<L: Logger> Logger for MetricBuilder<'_, L> {
    fn log(&self, level: Level, entry: Entry<'_>) {
        let entry = self.merge(entry);

        trace!(
            log_level = level.as_str(),
            namespace = &*self.namespace,
            metrics = self.metrics.len(),
            dimensions = self.dimensions.len(),
            "Forwarding metrics document"
        );

        match level {
            Level::Trace => self.logger.trace(entry),
            Level::Debug => self.logger.debug(entry),
            Level::Info => self.logger.info(entry),
            Level::Warn => self.logger.warn(entry),
            Level::Error => self.logger.error(entry),
            Level::Fatal => self.logger.fatal(entry),
        }
    }
}
