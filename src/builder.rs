use super::extension::{Extension, MetricLogger};
use super::logger::Logger;
use super::metric::{DimensionValue, Dimensions};
use metrics::SharedString;

/// Namespace used when [Builder::default_namespace] is not called
pub const DEFAULT_NAMESPACE: &str = "Pino";

/// Configuration via Builder
#[derive(Clone, Debug)]
pub struct Config {
    pub default_namespace: SharedString,
    pub default_dimensions: Dimensions,
    pub timestamp: Option<u64>,
}

/// Builder for the metrics logger extension
///
/// # Example
/// ```
/// use cloudwatch_embedded_logger::{JsonLogger, Logger};
///
/// let logger = cloudwatch_embedded_logger::Builder::new()
///     .default_namespace("MyApplication")
///     .extend(JsonLogger::new(std::io::stdout()));
///
/// logger
///     .metric([("Latency", 250)])
///     .dimensions([("ServiceName", "API")])
///     .info("Response sent");
/// ```
#[derive(Debug)]
pub struct Builder {
    default_namespace: SharedString,
    default_dimensions: Dimensions,
    timestamp: Option<u64>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            default_namespace: SharedString::from(DEFAULT_NAMESPACE),
            default_dimensions: Dimensions::new(),
            timestamp: None,
        }
    }

    /// Sets the CloudWatch namespace for every metric chain that doesn't call `namespace()`
    /// * Defaults to "Pino"
    pub fn default_namespace(self, namespace: impl Into<SharedString>) -> Self {
        Self {
            default_namespace: namespace.into(),
            ..self
        }
    }

    /// Adds a dimension (name, value) that every metric chain starts with
    /// * This method can be called multiple times with distinct names
    /// * Chains can overwrite it through `dimensions()`
    pub fn with_dimension(mut self, name: impl Into<SharedString>, value: impl Into<DimensionValue>) -> Self {
        self.default_dimensions.insert(name, value);
        self
    }

    /// Stamps every document with a fixed timestamp instead of the current time
    ///
    /// Mostly useful for reproducible output in tests
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Consume the builder into a reusable [Extension]
    pub fn build(self) -> Extension {
        Extension::new(Config {
            default_namespace: self.default_namespace,
            default_dimensions: self.default_dimensions,
            timestamp: self.timestamp,
        })
    }

    /// Shorthand for `build().extend(logger)`
    pub fn extend<L: Logger>(self, logger: L) -> MetricLogger<L> {
        self.build().extend(logger)
    }
}
