//! Key-value persistence for the stateful slots.
//!
//! The history store and triage session are the only stateful resources in
//! the crate; both live behind the small [`KeyValueStore`] interface so the
//! same logic runs against an in-memory fake in tests and a file-backed
//! store in the CLI.
//!
//! Store operations never fail from the caller's point of view: a backend
//! problem (unwritable directory, corrupt file) is absorbed with a stderr
//! warning and the store degrades to in-memory behavior, so the persisted
//! effect simply does not survive a restart.

use std::cell::RefCell;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Slot holding the search history JSON array.
pub const HISTORY_SLOT: &str = "search_history";
/// Slot holding the last submitted symptoms (display form, JSON array).
pub const LAST_SYMPTOMS_SLOT: &str = "last_selected_symptoms";
/// Session-scoped slot holding the triage session JSON object.
pub const TRIAGE_SESSION_SLOT: &str = "triage_session";

/// Minimal repository interface: one string value per named slot.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store, used for session-scoped state and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

/// File-backed store: one file per slot under the data directory.
///
/// Writes go through a temp file + rename so a crash mid-write never leaves
/// a half-written slot. Every write also lands in an in-memory overlay, so
/// when the backing directory is unavailable reads within the same process
/// still observe earlier writes.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    overlay: RefCell<HashMap<String, String>>,
}

impl FileStore {
    /// Store rooted at the platform data directory (see [`data_dir`]).
    pub fn open_default() -> Self {
        Self::open(data_dir())
    }

    pub fn open(dir: PathBuf) -> Self {
        if let Err(e) = fs::create_dir_all(&dir) {
            eprintln!("Warning: Failed to create store directory {}: {}", dir.display(), e);
        }
        Self { dir, overlay: RefCell::new(HashMap::new()) }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(_) => self.overlay.borrow().get(key).cloned(),
        }
    }

    fn set(&self, key: &str, value: &str) {
        self.overlay.borrow_mut().insert(key.to_string(), value.to_string());

        let path = self.slot_path(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));
        let write_result =
            fs::write(&temp, value).and_then(|_| fs::rename(&temp, &path));
        if let Err(e) = write_result {
            eprintln!("Warning: Failed to persist slot {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        self.overlay.borrow_mut().remove(key);

        let path = self.slot_path(key);
        if path.exists() {
            if let Err(e) = fs::remove_file(&path) {
                eprintln!("Warning: Failed to remove slot {}: {}", key, e);
            }
        }
    }
}

/// Resolve the data directory for the file-backed store.
///
/// `REMEDY_FINDER_DATA_DIR` overrides the platform default
/// (`dirs::data_dir()/remedy-finder`, falling back to the working
/// directory when the platform reports none).
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var("REMEDY_FINDER_DATA_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::data_dir() {
        Some(base) => base.join("remedy-finder"),
        None => Path::new(".").join("remedy-finder-data"),
    }
}
