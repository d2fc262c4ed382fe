//! Request-scoped structured logging.

use std::collections::HashMap;
use std::fmt;

/// Unique request identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        // Simple pseudo-random suffix; WASM has no std::random
        let id = format!(
            "{:x}-{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            rand_simple()
        );
        Self(id)
    }
}

fn rand_simple() -> u32 {
    static mut SEED: u32 = 12345;
    unsafe {
        SEED = SEED.wrapping_mul(1103515245).wrapping_add(12345);
        SEED
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Structured logger with request context.
///
/// Emits one JSON line per entry to stderr, where the Spin host
/// collects component logs.
#[derive(Debug, Clone)]
pub struct WidgetLogger {
    request_id: RequestId,
    min_level: LogLevel,
}

impl WidgetLogger {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            min_level: LogLevel::Info,
        }
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Log a bare message at debug level.
    pub fn debug(&self, message: &str) {
        self.entry(LogLevel::Debug, message).emit();
    }

    /// Start a log entry with extra fields.
    pub fn entry(&self, level: LogLevel, message: &str) -> LogEntryBuilder {
        LogEntryBuilder {
            enabled: level >= self.min_level,
            level,
            message: message.to_string(),
            request_id: self.request_id.clone(),
            fields: HashMap::new(),
        }
    }
}

/// Builder for a single structured log entry.
pub struct LogEntryBuilder {
    enabled: bool,
    level: LogLevel,
    message: String,
    request_id: RequestId,
    fields: HashMap<String, serde_json::Value>,
}

impl LogEntryBuilder {
    pub fn field(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn emit(self) {
        if !self.enabled {
            return;
        }

        let mut entry = serde_json::Map::new();
        entry.insert("level".into(), self.level.to_string().into());
        entry.insert("message".into(), self.message.into());
        entry.insert("request_id".into(), self.request_id.to_string().into());
        entry.insert("widget".into(), "search-widget".into());
        for (k, v) in self.fields {
            entry.insert(k, v);
        }

        eprintln!("{}", serde_json::Value::Object(entry));
    }
}
