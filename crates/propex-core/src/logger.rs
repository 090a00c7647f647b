//! Diagnostic logging.
//!
//! Hosts may offer a log sink. [`Logger`] forwards to it when present and
//! falls back to the [`log`] facade otherwise, so diagnostics are never lost
//! and the plugin code does not care which one is active.
//!
//! Messages are passed as [`fmt::Arguments`], so the logger itself never
//! formats into an owned string. Whether the sink allocates is up to the sink.

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Informational, e.g. an accepted parameter value.
    Note,
    Warning,
    /// A rejected message or failed instantiation.
    Error,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Note => log::Level::Info,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Host-provided destination for diagnostics.
pub trait LogSink: Send {
    fn log(&self, level: LogLevel, message: fmt::Arguments<'_>);
}

/// Logger owned by a plugin instance.
pub struct Logger {
    sink: Option<Box<dyn LogSink>>,
    prefix: &'static str,
}

impl Logger {
    /// Create a logger. Every message is prefixed with `prefix` and `": "`.
    pub fn new(sink: Option<Box<dyn LogSink>>, prefix: &'static str) -> Self {
        Self { sink, prefix }
    }

    /// A logger that always goes through the `log` facade.
    pub fn fallback(prefix: &'static str) -> Self {
        Self::new(None, prefix)
    }

    /// Returns true if messages reach a host sink.
    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub fn log(&self, level: LogLevel, message: fmt::Arguments<'_>) {
        match &self.sink {
            Some(sink) => sink.log(level, format_args!("{}: {}", self.prefix, message)),
            None => log::log!(log::Level::from(level), "{}: {}", self.prefix, message),
        }
    }

    #[inline]
    pub fn note(&self, message: fmt::Arguments<'_>) {
        self.log(LogLevel::Note, message);
    }

    #[inline]
    pub fn warning(&self, message: fmt::Arguments<'_>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("prefix", &self.prefix)
            .field("has_sink", &self.has_sink())
            .finish()
    }
}

/// Test doubles for code that logs through a [`Logger`].
#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Sink that keeps every message for inspection.
    ///
    /// Clones share one message list, so a test can keep a handle while the
    /// plugin owns the boxed sink.
    #[derive(Clone, Default)]
    pub struct RecordingSink {
        entries: Arc<Mutex<Vec<(LogLevel, String)>>>,
    }

    impl RecordingSink {
        /// A logger writing into this sink with the prefix `"Test"`.
        pub fn logger(&self) -> Logger {
            Logger::new(Some(Box::new(self.clone())), "Test")
        }

        pub fn entries(&self) -> Vec<(LogLevel, String)> {
            self.entries.lock().unwrap().clone()
        }

        /// Messages logged at `level`, in order.
        pub fn messages(&self, level: LogLevel) -> Vec<String> {
            self.entries()
                .into_iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, message)| message)
                .collect()
        }

        pub fn count(&self, level: LogLevel) -> usize {
            self.messages(level).len()
        }
    }

    impl LogSink for RecordingSink {
        fn log(&self, level: LogLevel, message: fmt::Arguments<'_>) {
            self.entries.lock().unwrap().push((level, message.to_string()));
        }
    }
}
