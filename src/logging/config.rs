//! Subscriber settings, stored under `logging` in `GraphConfig`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use tracing_appender::rolling::Rotation;

/// Verbosity threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive spelling understood by `EnvFilter`
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// How often the log file rolls over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    #[default]
    Daily,
    Hourly,
    Never,
}

impl LogRotation {
    pub(crate) fn to_rotation(self) -> Rotation {
        match self {
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

/// Rolling file sink
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Falls back to the platform data directory when unset
    pub directory: Option<PathBuf>,
    pub rotation: LogRotation,
}

impl FileLogConfig {
    /// File sink writing into `directory`
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(directory.into()),
            ..Self::default()
        }
    }

    /// Directory the log files are written to
    pub fn directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(default_log_directory)
    }
}

/// Metadata printed next to each event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogFields {
    /// Module path of the event
    pub target: bool,
    pub thread_ids: bool,
    /// File and line
    pub source_location: bool,
}

impl Default for LogFields {
    fn default() -> Self {
        Self {
            target: true,
            thread_ids: false,
            source_location: false,
        }
    }
}

/// Global subscriber settings
///
/// Missing keys take their defaults, so a config file may carry only the
/// settings it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Write events to stderr
    pub console: bool,
    /// Also write events to rolling files
    pub file: Option<FileLogConfig>,
    pub fields: LogFields,
    /// Per-target overrides of `level`, e.g. `tag_graph::tag::paths`
    pub module_levels: BTreeMap<String, LogLevel>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Text,
            console: true,
            file: None,
            fields: LogFields::default(),
            module_levels: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Debug level with every cycle-broken edge traced
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            fields: LogFields {
                target: true,
                thread_ids: true,
                source_location: true,
            },
            ..Self::default()
        }
        .with_module_level("tag_graph::tag::paths", LogLevel::Trace)
    }

    pub fn with_file(mut self, file: FileLogConfig) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_module_level(mut self, target: impl Into<String>, level: LogLevel) -> Self {
        self.module_levels.insert(target.into(), level);
        self
    }

    /// `EnvFilter` directive string: the global level followed by each
    /// override, sorted by target
    pub fn filter_directives(&self) -> String {
        let mut directives = self.level.as_str().to_string();
        for (target, level) in &self.module_levels {
            directives.push(',');
            directives.push_str(target);
            directives.push('=');
            directives.push_str(level.as_str());
        }
        directives
    }

    pub(crate) fn has_output(&self) -> bool {
        self.console || self.file.is_some()
    }
}

fn default_log_directory() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("tag-graph").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
