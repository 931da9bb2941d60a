//! Logging System
//!
//! The library itself only emits `tracing` events. This module is for
//! embedders that want a ready-made subscriber, usually installed from the
//! stored configuration with `ConfigStore::init_logging`:
//! - Global level plus per-target overrides
//! - Text or JSON formatting
//! - Console (stderr) and rolling file sinks, independently switched

mod config;


pub use config::{FileLogConfig, LogFields, LogFormat, LogLevel, LogRotation, LoggingConfig};

use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Logging system errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to create log directory: {0}")]
    DirectoryCreationError(String),
}

/// Result type for logging operations
pub type LoggingResult<T> = Result<T, LoggingError>;

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "tag-graph.log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// An installed global subscriber
///
/// Keep this alive for as long as logs should be written: dropping it
/// flushes and stops the background file writer.
pub struct LoggingSystem {
    config: LoggingConfig,
    _guard: Option<WorkerGuard>,
}

impl LoggingSystem {
    /// Install the global subscriber. Fails if one is already installed.
    pub fn init(config: LoggingConfig) -> LoggingResult<Self> {
        if !config.has_output() {
            return Err(LoggingError::InitializationError(
                "neither console nor file output is enabled".to_string(),
            ));
        }

        let filter = Self::build_env_filter(&config)?;

        let mut guard = None;
        let file_layer = match &config.file {
            Some(file) => {
                let directory = file.directory();
                std::fs::create_dir_all(&directory).map_err(|e| {
                    LoggingError::DirectoryCreationError(format!("{:?}: {}", directory, e))
                })?;
                let (layer, file_guard) = Self::create_file_layer(&config, file);
                guard = Some(file_guard);
                Some(layer)
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(config.console.then(|| Self::create_console_layer(&config)))
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;

        tracing::debug!(
            filter = %config.filter_directives(),
            console = config.console,
            file = ?config.file.as_ref().map(FileLogConfig::directory),
            "Logging initialized"
        );

        Ok(Self {
            config,
            _guard: guard,
        })
    }

    pub(crate) fn build_env_filter(config: &LoggingConfig) -> LoggingResult<EnvFilter> {
        EnvFilter::try_new(config.filter_directives())
            .map_err(|e| LoggingError::InvalidFilter(e.to_string()))
    }

    fn create_console_layer<S>(config: &LoggingConfig) -> BoxedLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.fields.target)
            .with_thread_ids(config.fields.thread_ids)
            .with_file(config.fields.source_location)
            .with_line_number(config.fields.source_location);

        match config.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Text => layer.boxed(),
        }
    }

    fn create_file_layer<S>(
        config: &LoggingConfig,
        file: &FileLogConfig,
    ) -> (BoxedLayer<S>, WorkerGuard)
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        let appender = RollingFileAppender::new(
            file.rotation.to_rotation(),
            file.directory(),
            LOG_FILE_NAME,
        );
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(config.fields.target)
            .with_thread_ids(config.fields.thread_ids)
            .with_file(config.fields.source_location)
            .with_line_number(config.fields.source_location);

        let layer = match config.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Text => layer.boxed(),
        };
        (layer, guard)
    }

    /// Directory of the file sink, if there is one
    pub fn log_directory(&self) -> Option<PathBuf> {
        self.config.file.as_ref().map(FileLogConfig::directory)
    }

    pub fn log_level(&self) -> LogLevel {
        self.config.level
    }
}
