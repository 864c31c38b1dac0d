//! # Tracing
//!
//! Bridge that forwards log entries to the [tracing] ecosystem

use super::logger::{Entry, Level, Logger};
use tracing::error;

/// Emits each entry as a [tracing] event
///
/// The fields, including any metrics document, are serialized into the `emf` field as a JSON string and
/// the message becomes the event message. `fatal` entries are emitted at ERROR with `fatal = true`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: Level, entry: Entry<'_>) {
        let (fields, message) = entry.into_parts();
        let emf = match serde_json::to_string(&fields) {
            Ok(emf) => emf,
            Err(err) => {
                error!("Failed to serialize {level} log entry: {err}");
                return;
            }
        };
        let message = message.unwrap_or_default();

        match level {
            Level::Trace => tracing::trace!(emf = %emf, "{message}"),
            Level::Debug => tracing::debug!(emf = %emf, "{message}"),
            Level::Info => tracing::info!(emf = %emf, "{message}"),
            Level::Warn => tracing::warn!(emf = %emf, "{message}"),
            Level::Error => tracing::error!(emf = %emf, "{message}"),
            Level::Fatal => tracing::error!(fatal = true, emf = %emf, "{message}"),
        }
    }
}
