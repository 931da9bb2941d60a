//! Configuration Management Module
//!
//! Provides persistent configuration storage with:
//! - JSON file-based storage
//! - Import/export functionality
//! - Thread-safe access

mod storage;
#[cfg(test)]
mod tests;

pub use storage::{ConfigError, ConfigResult, ConfigStore, ConfigStoreConfig, GraphConfig};
