//! # Logger
//!
//! The narrow logging capability this crate extends: six log levels, each taking structured fields
//! and an optional message. Serialization and transport are left to the implementation.

use serde_json::value::Value;
use std::fmt;
use std::sync::Arc;

/// Structured fields of a log entry
pub type Fields = serde_json::Map<String, Value>;

/// Log level, numbered like pino so the JSON output stays compatible
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace = 10,
    Debug = 20,
    Info = 30,
    Warn = 40,
    Error = 50,
    Fatal = 60,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    pub fn as_number(self) -> u64 {
        self as u64
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments of a single log call
///
/// Either structured fields with an optional message, or a bare message
#[derive(Clone, Debug, PartialEq)]
pub enum Entry<'a> {
    Fields(Fields, Option<&'a str>),
    Message(&'a str),
}

impl<'a> Entry<'a> {
    pub fn into_parts(self) -> (Fields, Option<&'a str>) {
        match self {
            Entry::Fields(fields, message) => (fields, message),
            Entry::Message(message) => (Fields::new(), Some(message)),
        }
    }

    pub fn message(&self) -> Option<&'a str> {
        match self {
            Entry::Fields(_, message) => *message,
            Entry::Message(message) => Some(*message),
        }
    }
}

/// No fields and no message
impl Default for Entry<'_> {
    fn default() -> Self {
        Entry::Fields(Fields::new(), None)
    }
}

impl From<()> for Entry<'_> {
    fn from(_: ()) -> Self {
        Entry::default()
    }
}

impl<'a> From<&'a str> for Entry<'a> {
    fn from(message: &'a str) -> Self {
        Entry::Message(message)
    }
}

impl<'a> From<&'a String> for Entry<'a> {
    fn from(message: &'a String) -> Self {
        Entry::Message(message)
    }
}

impl From<Fields> for Entry<'_> {
    fn from(fields: Fields) -> Self {
        Entry::Fields(fields, None)
    }
}

impl<'a> From<(Fields, &'a str)> for Entry<'a> {
    fn from((fields, message): (Fields, &'a str)) -> Self {
        Entry::Fields(fields, Some(message))
    }
}

/// Only a JSON object contributes fields, any other value is ignored
impl From<Value> for Entry<'_> {
    fn from(value: Value) -> Self {
        Entry::Fields(object_or_empty(value), None)
    }
}

impl<'a> From<(Value, &'a str)> for Entry<'a> {
    fn from((value, message): (Value, &'a str)) -> Self {
        Entry::Fields(object_or_empty(value), Some(message))
    }
}

fn object_or_empty(value: Value) -> Fields {
    match value {
        Value::Object(fields) => fields,
        _ => Fields::new(),
    }
}

/// Logging capability consumed by [MetricLogger](super::MetricLogger)
///
/// Implementors only need [Logger::log]; the level methods route to it unless overridden.
pub trait Logger {
    fn log(&self, level: Level, entry: Entry<'_>);

    fn trace<'a>(&self, entry: impl Into<Entry<'a>>)
    where
        Self: Sized,
    {
        self.log(Level::Trace, entry.into())
    }

    fn debug<'a>(&self, entry: impl Into<Entry<'a>>)
    where
        Self: Sized,
    {
        self.log(Level::Debug, entry.into())
    }

    fn info<'a>(&self, entry: impl Into<Entry<'a>>)
    where
        Self: Sized,
    {
        self.log(Level::Info, entry.into())
    }

    fn warn<'a>(&self, entry: impl Into<Entry<'a>>)
    where
        Self: Sized,
    {
        self.log(Level::Warn, entry.into())
    }

    fn error<'a>(&self, entry: impl Into<Entry<'a>>)
    where
        Self: Sized,
    {
        self.log(Level::Error, entry.into())
    }

    fn fatal<'a>(&self, entry: impl Into<Entry<'a>>)
    where
        Self: Sized,
    {
        self.log(Level::Fatal, entry.into())
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, level: Level, entry: Entry<'_>) {
        (**self).log(level, entry)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: Level, entry: Entry<'_>) {
        (**self).log(level, entry)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: Level, entry: Entry<'_>) {
        (**self).log(level, entry)
    }
}
