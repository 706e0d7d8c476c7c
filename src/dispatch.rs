//! Dispatch Module
//!
//! The state machine that applies parsed commands to the store.
//!
//! ## Responsibilities
//! - Load the snapshot on startup (corrupt snapshots are fatal, never
//!   silently replaced with an empty store)
//! - Route each command kind to the store
//! - Trigger snapshot saves per the configured flush policy
//! - Surface a failed save as a warning while keeping the in-memory
//!   mutation applied
//!
//! Every dispatch is a single request-response cycle: a command either
//! applies fully (store mutation plus attempted save) or not at all. An
//! `InvalidKey` or `KeyNotFound` never leaves the store partially updated.

use tracing::{info, warn};

use crate::config::{Config, FlushPolicy};
use crate::error::{KvError, Result};
use crate::protocol::{Command, Reply};
use crate::snapshot;
use crate::store::Store;

/// The result of dispatching one command
#[derive(Debug)]
pub struct Outcome {
    /// The reply to render
    pub reply: Reply,

    /// Set when the mutation applied in memory but the snapshot write
    /// failed; the user must be told the change may not survive a crash
    pub warning: Option<KvError>,

    /// Set by EXIT: the REPL loop should terminate after this reply
    pub exit: bool,
}

impl Outcome {
    fn reply(reply: Reply) -> Self {
        Self {
            reply,
            warning: None,
            exit: false,
        }
    }
}

/// Owns the store and drives command execution against it
#[derive(Debug)]
pub struct Dispatcher {
    config: Config,
    store: Store,
}

impl Dispatcher {
    /// Load the snapshot at the configured path and build a dispatcher.
    ///
    /// A missing snapshot is a first run and yields an empty store. A
    /// corrupt snapshot propagates `CorruptStore` to the caller, which is
    /// expected to refuse to start.
    pub fn open(config: Config) -> Result<Self> {
        let store = snapshot::load(&config.data_path)?;
        info!(
            path = %config.data_path.display(),
            entries = store.len(),
            "store opened"
        );
        Ok(Self { config, store })
    }

    /// Apply one parsed command to the store
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Put { key, value } => {
                self.store.put(&key, &value)?;
                let warning = self.flush_after_mutation();
                Ok(Outcome {
                    reply: Reply::Stored { key, value },
                    warning,
                    exit: false,
                })
            }
            Command::Get { key } => {
                let value = self.store.get(&key)?.to_string();
                Ok(Outcome::reply(Reply::Value(value)))
            }
            Command::Delete { key } => {
                self.store.delete(&key)?;
                let warning = self.flush_after_mutation();
                Ok(Outcome {
                    reply: Reply::Deleted { key },
                    warning,
                    exit: false,
                })
            }
            Command::List => {
                let reply = if self.store.is_empty() {
                    Reply::EmptyStore
                } else {
                    Reply::Listing(self.store.list())
                };
                Ok(Outcome::reply(reply))
            }
            Command::Exit => Ok(Outcome {
                reply: Reply::Bye,
                warning: self.flush_if_dirty(),
                exit: true,
            }),
            Command::Noop => Ok(Outcome::reply(Reply::None)),
        }
    }

    /// Final flush for end-of-input, equivalent to the one EXIT performs.
    /// Returns a warning instead of an error: the session is ending either
    /// way, the user just needs to know durability is at risk.
    pub fn finish(&mut self) -> Option<KvError> {
        self.flush_if_dirty()
    }

    /// Read access to the store, mainly for tests and embedding
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Save after a successful PUT/DELETE when the policy asks for it
    fn flush_after_mutation(&mut self) -> Option<KvError> {
        match self.config.flush_policy {
            FlushPolicy::EveryMutation => self.flush(),
            FlushPolicy::OnExit => None,
        }
    }

    fn flush_if_dirty(&mut self) -> Option<KvError> {
        if self.store.dirty() {
            self.flush()
        } else {
            None
        }
    }

    /// Write the snapshot; on success the store is clean, on failure the
    /// error is returned as a warning and the store stays dirty
    fn flush(&mut self) -> Option<KvError> {
        match snapshot::save(&self.config.data_path, &self.store) {
            Ok(()) => {
                self.store.mark_clean();
                None
            }
            Err(e) => {
                warn!(error = %e, "snapshot save failed, in-memory state kept");
                Some(e)
            }
        }
    }
}
