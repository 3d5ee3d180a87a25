/*!
 * Slot Storage
 * Named JSON slots backing the virtual disk and OS configuration
 */

use ahash::RandomState;
use dashmap::DashMap;
use log::warn;
use std::fs;
use std::path::PathBuf;

/// Well-known slot keys
pub mod keys {
    /// Serialized filesystem entry collection
    pub const VFS: &str = "orbit_os_fs";

    /// Serialized OS configuration
    pub const CONFIG: &str = "orbit_os_config";
}

/// A keyed store of string payloads.
///
/// Durability is best-effort: `put` never raises, a failed write only
/// logs. Readers must treat any payload as potentially corrupt.
pub trait SlotStore: Send + Sync {
    /// Fetch the payload for a key, if one was ever stored
    fn get(&self, key: &str) -> Option<String>;

    /// Store (or overwrite) the payload for a key
    fn put(&self, key: &str, value: &str);
}

/// Volatile slot store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemSlots {
    slots: DashMap<String, String, RandomState>,
}

impl MemSlots {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: DashMap::with_hasher(RandomState::new()),
        }
    }
}

impl SlotStore for MemSlots {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).map(|v| v.clone())
    }

    fn put(&self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
    }
}

/// Durable slot store, one JSON file per slot under a root directory
#[derive(Debug, Clone)]
pub struct DiskSlots {
    root: PathBuf,
}

impl DiskSlots {
    /// Create a slot store rooted at the given directory.
    ///
    /// The directory is created eagerly; failure to create it is logged
    /// and every subsequent write will simply keep failing best-effort.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        if let Err(e) = fs::create_dir_all(&root) {
            warn!("could not create slot directory {}: {}", root.display(), e);
        }
        Self { root }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl SlotStore for DiskSlots {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn put(&self, key: &str, value: &str) {
        let path = self.slot_path(key);
        if let Err(e) = fs::write(&path, value) {
            warn!("slot write failed for {}: {}", path.display(), e);
        }
    }
}
