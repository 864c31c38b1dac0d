//! # Metric
//!
//! Metric values, units and dimensions accepted by [MetricLogger](super::MetricLogger)

use indexmap::IndexMap;
use metrics::SharedString;
use serde::Serialize;
use serde_json::value::Value;
use std::fmt;

/// CloudWatch metric unit
///
/// <https://docs.aws.amazon.com/AmazonCloudWatch/latest/APIReference/API_MetricDatum.html>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    #[default]
    None,
    Seconds,
    Microseconds,
    Milliseconds,
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Bits,
    Kilobits,
    Megabits,
    Gigabits,
    Terabits,
    Percent,
    Count,
    #[serde(rename = "Bytes/Second")]
    BytesPerSecond,
    #[serde(rename = "Kilobytes/Second")]
    KilobytesPerSecond,
    #[serde(rename = "Megabytes/Second")]
    MegabytesPerSecond,
    #[serde(rename = "Gigabytes/Second")]
    GigabytesPerSecond,
    #[serde(rename = "Terabytes/Second")]
    TerabytesPerSecond,
    #[serde(rename = "Bits/Second")]
    BitsPerSecond,
    #[serde(rename = "Kilobits/Second")]
    KilobitsPerSecond,
    #[serde(rename = "Megabits/Second")]
    MegabitsPerSecond,
    #[serde(rename = "Gigabits/Second")]
    GigabitsPerSecond,
    #[serde(rename = "Terabits/Second")]
    TerabitsPerSecond,
    #[serde(rename = "Count/Second")]
    CountPerSecond,
}

impl Unit {
    /// The CloudWatch string for this unit
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::None => "None",
            Unit::Seconds => "Seconds",
            Unit::Microseconds => "Microseconds",
            Unit::Milliseconds => "Milliseconds",
            Unit::Bytes => "Bytes",
            Unit::Kilobytes => "Kilobytes",
            Unit::Megabytes => "Megabytes",
            Unit::Gigabytes => "Gigabytes",
            Unit::Terabytes => "Terabytes",
            Unit::Bits => "Bits",
            Unit::Kilobits => "Kilobits",
            Unit::Megabits => "Megabits",
            Unit::Gigabits => "Gigabits",
            Unit::Terabits => "Terabits",
            Unit::Percent => "Percent",
            Unit::Count => "Count",
            Unit::BytesPerSecond => "Bytes/Second",
            Unit::KilobytesPerSecond => "Kilobytes/Second",
            Unit::MegabytesPerSecond => "Megabytes/Second",
            Unit::GigabytesPerSecond => "Gigabytes/Second",
            Unit::TerabytesPerSecond => "Terabytes/Second",
            Unit::BitsPerSecond => "Bits/Second",
            Unit::KilobitsPerSecond => "Kilobits/Second",
            Unit::MegabitsPerSecond => "Megabits/Second",
            Unit::GigabitsPerSecond => "Gigabits/Second",
            Unit::TerabitsPerSecond => "Terabits/Second",
            Unit::CountPerSecond => "Count/Second",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a metrics::Unit into the closest CloudWatch unit
///
/// CloudWatch has no binary byte units nor nanoseconds
impl From<metrics::Unit> for Unit {
    fn from(unit: metrics::Unit) -> Self {
        match unit {
            metrics::Unit::Count => Unit::Count,
            metrics::Unit::Percent => Unit::Percent,
            metrics::Unit::Seconds => Unit::Seconds,
            metrics::Unit::Milliseconds => Unit::Milliseconds,
            metrics::Unit::Microseconds => Unit::Microseconds,
            metrics::Unit::Nanoseconds => Unit::None,
            metrics::Unit::Tebibytes => Unit::Terabytes,
            metrics::Unit::Gibibytes => Unit::Gigabytes,
            metrics::Unit::Mebibytes => Unit::Megabytes,
            metrics::Unit::Kibibytes => Unit::Kilobytes,
            metrics::Unit::Bytes => Unit::Bytes,
            metrics::Unit::TerabitsPerSecond => Unit::TerabitsPerSecond,
            metrics::Unit::GigabitsPerSecond => Unit::GigabitsPerSecond,
            metrics::Unit::MegabitsPerSecond => Unit::MegabitsPerSecond,
            metrics::Unit::KilobitsPerSecond => Unit::KilobitsPerSecond,
            metrics::Unit::BitsPerSecond => Unit::BitsPerSecond,
            metrics::Unit::CountPerSecond => Unit::CountPerSecond,
        }
    }
}

/// A numeric metric value with an optional unit
///
/// A bare number converts into a [MetricValue] without a unit, which is emitted as [Unit::None]
#[derive(Clone, Debug, PartialEq)]
pub struct MetricValue {
    value: Value,
    unit: Option<Unit>,
}

impl MetricValue {
    pub fn with_unit(self, unit: impl Into<Unit>) -> Self {
        Self {
            unit: Some(unit.into()),
            ..self
        }
    }

    /// The raw number written at the top level of the document
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn unit(&self) -> Option<Unit> {
        self.unit
    }
}

macro_rules! metric_value_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for MetricValue {
                fn from(value: $t) -> Self {
                    MetricValue {
                        value: Value::from(value),
                        unit: None,
                    }
                }
            }
        )*
    };
}

metric_value_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<MetricValue>> From<(T, Unit)> for MetricValue {
    fn from((value, unit): (T, Unit)) -> Self {
        let value: MetricValue = value.into();
        value.with_unit(unit)
    }
}

/// Metric name to value, in insertion order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metrics(IndexMap<SharedString, MetricValue>);

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a metric, replacing the value of an existing metric with the same name
    pub fn with(mut self, name: impl Into<SharedString>, value: impl Into<MetricValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<SharedString>, value: impl Into<MetricValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.0.iter().map(|(name, value)| (&**name, value))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Metrics
where
    K: Into<SharedString>,
    V: Into<MetricValue>,
{
    fn from(metrics: [(K, V); N]) -> Self {
        metrics.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Metrics
where
    K: Into<SharedString>,
    V: Into<MetricValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Dimension value, always emitted in its string form
#[derive(Clone, Debug, PartialEq)]
pub enum DimensionValue {
    String(SharedString),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionValue::String(s) => f.write_str(s),
            DimensionValue::Integer(i) => write!(f, "{i}"),
            DimensionValue::Unsigned(u) => write!(f, "{u}"),
            DimensionValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&'static str> for DimensionValue {
    fn from(value: &'static str) -> Self {
        DimensionValue::String(value.into())
    }
}

impl From<SharedString> for DimensionValue {
    fn from(value: SharedString) -> Self {
        DimensionValue::String(value)
    }
}

impl From<String> for DimensionValue {
    fn from(value: String) -> Self {
        DimensionValue::String(value.into())
    }
}

macro_rules! dimension_value_from {
    ($variant:ident as $as:ty: $($t:ty),*) => {
        $(
            impl From<$t> for DimensionValue {
                fn from(value: $t) -> Self {
                    DimensionValue::$variant(value as $as)
                }
            }
        )*
    };
}

dimension_value_from!(Integer as i64: i8, i16, i32, i64, isize);
dimension_value_from!(Unsigned as u64: u8, u16, u32, u64, usize);
dimension_value_from!(Float as f64: f32, f64);

/// Dimension name to value, in insertion order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dimensions(IndexMap<SharedString, DimensionValue>);

impl Dimensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<SharedString>, value: impl Into<DimensionValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Overwrites an existing dimension in place, otherwise appends it
    pub fn insert(&mut self, name: impl Into<SharedString>, value: impl Into<DimensionValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Shallow merge where the other side wins on duplicate names
    pub fn merge(&mut self, other: Dimensions) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&DimensionValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DimensionValue)> {
        self.0.iter().map(|(name, value)| (&**name, value))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Dimensions
where
    K: Into<SharedString>,
    V: Into<DimensionValue>,
{
    fn from(dimensions: [(K, V); N]) -> Self {
        dimensions.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Dimensions
where
    K: Into<SharedString>,
    V: Into<DimensionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unit_serializes_as_cloudwatch_token() {
        assert_eq!(serde_json::to_value(Unit::CountPerSecond).unwrap(), json!("Count/Second"));
        assert_eq!(serde_json::to_value(Unit::Milliseconds).unwrap(), json!("Milliseconds"));
        assert_eq!(serde_json::to_value(Unit::default()).unwrap(), json!("None"));
        assert_eq!(Unit::KilobytesPerSecond.to_string(), "Kilobytes/Second");
    }

    #[test]
    fn unit_from_metrics_crate() {
        assert_eq!(Unit::from(metrics::Unit::Kibibytes), Unit::Kilobytes);
        assert_eq!(Unit::from(metrics::Unit::Count), Unit::Count);
        assert_eq!(Unit::from(metrics::Unit::Nanoseconds), Unit::None);
    }

    #[test]
    fn metric_value_keeps_number_shape() {
        let bare = MetricValue::from(5);
        assert_eq!(bare.value(), &json!(5));
        assert_eq!(bare.unit(), None);

        let timed = MetricValue::from((2.5, Unit::Seconds));
        assert_eq!(timed.value(), &json!(2.5));
        assert_eq!(timed.unit(), Some(Unit::Seconds));
    }

    #[test]
    fn metrics_keep_insertion_order() {
        let metrics = Metrics::new()
            .with("Zeta", 1)
            .with("Alpha", (200, Unit::Milliseconds))
            .with("Zeta", 3);

        let names: Vec<&str> = metrics.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
        assert_eq!(metrics.iter().next().unwrap().1.value(), &json!(3));
    }

    #[test]
    fn dimension_values_display_canonically() {
        assert_eq!(DimensionValue::from(8080).to_string(), "8080");
        assert_eq!(DimensionValue::from(12345u64).to_string(), "12345");
        assert_eq!(DimensionValue::from(-3i64).to_string(), "-3");
        assert_eq!(DimensionValue::from(1.5).to_string(), "1.5");
        assert_eq!(DimensionValue::from("us-east-1").to_string(), "us-east-1");
    }

    #[test]
    fn dimensions_merge_later_wins() {
        let mut dimensions = Dimensions::from([("A", 1), ("B", 2)]);
        dimensions.merge(Dimensions::from([("A", 3)]));

        assert_eq!(dimensions.len(), 2);
        assert_eq!(dimensions.get("A"), Some(&DimensionValue::Integer(3)));
        let names: Vec<&str> = dimensions.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["A", "B"]);
    }
}
