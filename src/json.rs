//! # JSON
//!
//! Line delimited JSON logger with pino compatible output, suitable for CloudWatch Logs ingestion
//! of embedded metrics documents

use super::emf;
use super::logger::{Entry, Fields, Level, Logger};
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use tracing::error;

/// Writes each entry as `{"level":30,"time":<epoch ms>,...fields,"msg":"..."}` followed by a newline
///
/// # Example
/// ```
/// use cloudwatch_embedded_logger::{JsonLogger, Level, Logger};
///
/// let logger = JsonLogger::new(Vec::new()).with_level(Level::Info).without_time();
/// logger.debug("filtered out");
/// logger.info("kept");
///
/// assert_eq!(logger.into_inner(), b"{\"level\":30,\"msg\":\"kept\"}\n");
/// ```
pub struct JsonLogger<W> {
    writer: Mutex<W>,
    level: Level,
    time: bool,
}

impl<W: Write> JsonLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            level: Level::Trace,
            time: true,
        }
    }

    /// Drop entries below the given level
    pub fn with_level(self, level: Level) -> Self {
        Self { level, ..self }
    }

    /// Omit the `time` field
    pub fn without_time(self) -> Self {
        Self { time: false, ..self }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entry(&self, level: Level, entry: Entry<'_>) -> std::io::Result<()> {
        let (fields, message) = entry.into_parts();

        let mut line = Fields::new();
        line.insert("level".to_owned(), level.as_number().into());
        if self.time {
            line.insert("time".to_owned(), emf::now().into());
        }
        for (key, value) in fields {
            line.entry(key).or_insert(value);
        }
        if let Some(message) = message {
            line.insert("msg".to_owned(), message.into());
        }

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        serde_json::to_writer(&mut *writer, &line)?;
        writeln!(writer)?;
        writer.flush()
    }
}

impl<W: Write> Logger for JsonLogger<W> {
    fn log(&self, level: Level, entry: Entry<'_>) {
        if level < self.level {
            return;
        }

        if let Err(err) = self.write_entry(level, entry) {
            error!("Failed to write {level} log entry: {err}");
        }
    }
}
