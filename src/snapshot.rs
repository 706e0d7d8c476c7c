//! Snapshot persistence
//!
//! Serializes the full store mapping to a JSON file and loads it back on
//! startup.
//!
//! ## Responsibilities
//! - On-disk representation: a JSON array of `{key, value}` records
//! - Atomic saves: write a sibling temp file, sync, then rename over the
//!   target, so a crash mid-write never clobbers a good snapshot
//! - Corruption detection on load: surfaced as `CorruptStore`, never
//!   silently discarded
//!
//! Assumes a single owning process per snapshot file; concurrent writers are
//! not guarded against.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{KvError, Result};
use crate::store::Store;

/// Suffix of the transient sibling file used for atomic saves
const TMP_SUFFIX: &str = ".tmp";

/// One persisted entry. The artifact is an array of these, one per key.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    key: String,
    value: String,
}

/// Load a store from the snapshot at `path`.
///
/// A missing file is a first run, not an error: returns an empty store.
/// An existing file that cannot be parsed into a valid mapping (malformed
/// JSON, duplicate keys, a key the store would reject) fails with
/// `CorruptStore`.
pub fn load(path: &Path) -> Result<Store> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no snapshot found, starting empty");
            return Ok(Store::new());
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(corrupt(path, "snapshot is not valid UTF-8 text"));
        }
        Err(e) => return Err(e.into()),
    };

    let records: Vec<Record> = serde_json::from_str(&text)
        .map_err(|e| corrupt(path, format!("malformed snapshot: {e}")))?;

    let mut entries = BTreeMap::new();
    for record in records {
        Store::validate_key(&record.key)
            .map_err(|e| corrupt(path, format!("unusable key in snapshot: {e}")))?;
        if entries.insert(record.key.clone(), record.value).is_some() {
            return Err(corrupt(
                path,
                format!("duplicate key {:?} in snapshot", record.key),
            ));
        }
    }

    debug!(path = %path.display(), entries = entries.len(), "snapshot loaded");
    Ok(Store::from_entries(entries))
}

/// Write the full mapping from `store` to `path`.
///
/// Atomic with respect to a crash: the snapshot is written to a sibling
/// temp file and renamed into place only once fully on disk. On failure the
/// previous snapshot (if any) is left untouched and the in-memory store is
/// unaffected.
pub fn save(path: &Path, store: &Store) -> Result<()> {
    let records: Vec<Record> = store
        .iter()
        .map(|(key, value)| Record {
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| KvError::Persistence(format!("cannot serialize snapshot: {e}")))?;

    let tmp_path = tmp_path(path);
    write_and_sync(&tmp_path, json.as_bytes())
        .map_err(|e| KvError::Persistence(format!("cannot write {}: {e}", tmp_path.display())))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Leave no stray temp file behind on a failed rename
        let _ = fs::remove_file(&tmp_path);
        KvError::Persistence(format!("cannot replace {}: {e}", path.display()))
    })?;

    debug!(path = %path.display(), entries = store.len(), "snapshot saved");
    Ok(())
}

/// Sibling temp path: same directory as the target so the rename is atomic
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(TMP_SUFFIX);
    path.with_file_name(name)
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}

fn corrupt(path: &Path, reason: impl Into<String>) -> KvError {
    KvError::CorruptStore {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
