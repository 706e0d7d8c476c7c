//! Configuration for filekv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a filekv instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the snapshot file holding the full key-value mapping.
    /// A sibling `<name>.tmp` file is used transiently during saves.
    pub data_path: PathBuf,

    // -------------------------------------------------------------------------
    // Flush Configuration
    // -------------------------------------------------------------------------
    /// When to write the snapshot to disk
    pub flush_policy: FlushPolicy,
}

/// Snapshot flush policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushPolicy {
    /// Write the snapshot after every successful mutating command
    /// (safest: a completed PUT/DELETE survives a crash)
    EveryMutation,

    /// Write the snapshot only on EXIT / end-of-input
    /// (faster for bulk piped input, weaker durability)
    OnExit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./filekv.json"),
            flush_policy: FlushPolicy::EveryMutation,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the snapshot file path
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_path = path.into();
        self
    }

    /// Set the flush policy
    pub fn flush_policy(mut self, policy: FlushPolicy) -> Self {
        self.config.flush_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
