//! # filekv
//!
//! A single-process, interactive key-value store:
//! - Line-oriented command interface (PUT / GET / DELETE / LIST / EXIT)
//! - In-memory `BTreeMap` store with dirty tracking
//! - Full-snapshot persistence to a JSON file, written atomically
//! - Configurable flush policy (after every mutation, or on exit)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 REPL Loop                   │
//! │           (one command per line)            │
//! └────────────────────┬────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────┐
//! │              Command Parser                 │
//! │         (line → Command | ParseError)       │
//! └────────────────────┬────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────┐
//! │                Dispatcher                   │
//! │      (state machine over command kinds)     │
//! └──────────┬─────────────────────┬────────────┘
//!            │                     │
//!            ▼                     ▼
//!     ┌─────────────┐      ┌──────────────┐
//!     │    Store    │      │   Snapshot   │
//!     │  (BTreeMap) │      │ (tmp+rename) │
//!     └─────────────┘      └──────────────┘
//! ```
//!
//! Single-threaded and synchronous: each command is handled end to end,
//! including any snapshot write, before the next input line is read. The
//! snapshot file is assumed to have a single owning process at a time.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod snapshot;
pub mod protocol;
pub mod dispatch;
pub mod repl;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::{Config, FlushPolicy};
pub use store::Store;
pub use protocol::{Command, Reply};
pub use dispatch::{Dispatcher, Outcome};
pub use repl::Repl;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of filekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
