/*!
 * VFS Store
 * Owns the persisted entry collection: queries, tagged create/update,
 * cascading delete, and path resolution
 */

use super::observable::ChangeBroadcaster;
use super::seed;
use super::types::{derive_extension, EntryPatch, FileEntry, NewEntry};
use super::wellknown;
use crate::core::EntryId;
use crate::storage::{keys, SlotStore};
use ahash::RandomState;
use log::{debug, warn};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

/// Persisted tree of file/folder entries.
///
/// All operations are synchronous; durability is best-effort via the
/// slot store. Query misses return `None`/empty, never errors. The only
/// failure the store recognizes is a corrupt slot, which it silently
/// repairs by reseeding the default tree.
pub struct VfsStore {
    entries: RwLock<Vec<FileEntry>>,
    slots: Arc<dyn SlotStore>,
    changes: ChangeBroadcaster,
}

impl VfsStore {
    /// Open the store over a slot store, loading the persisted tree or
    /// reseeding the default one when the slot is absent or corrupt.
    pub fn open(slots: Arc<dyn SlotStore>) -> Arc<Self> {
        let entries = Self::load_or_reseed(slots.as_ref());
        let store = Arc::new(Self {
            entries: RwLock::new(entries),
            slots,
            changes: ChangeBroadcaster::new(),
        });
        debug!("vfs store opened with {} entries", store.len());
        store
    }

    fn load_or_reseed(slots: &dyn SlotStore) -> Vec<FileEntry> {
        match slots.get(keys::VFS) {
            Some(raw) => match serde_json::from_str::<Vec<FileEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("virtual disk corrupted, resetting to defaults: {e}");
                    Self::reseed(slots)
                }
            },
            None => Self::reseed(slots),
        }
    }

    fn reseed(slots: &dyn SlotStore) -> Vec<FileEntry> {
        let entries = seed::default_tree();
        Self::write_slot(slots, &entries);
        entries
    }

    fn write_slot(slots: &dyn SlotStore, entries: &[FileEntry]) {
        match serde_json::to_string(entries) {
            Ok(json) => slots.put(keys::VFS, &json),
            Err(e) => warn!("virtual disk serialization failed: {e}"),
        }
    }

    /// Change broadcaster fired after every mutation
    #[must_use]
    pub fn changes(&self) -> &ChangeBroadcaster {
        &self.changes
    }

    /// Number of entries currently in the tree
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Every entry, in insertion order
    #[must_use]
    pub fn list_all(&self) -> Vec<FileEntry> {
        self.entries.read().clone()
    }

    /// Entries whose parent is the given id, in insertion order
    #[must_use]
    pub fn children(&self, parent: &EntryId) -> Vec<FileEntry> {
        self.entries
            .read()
            .iter()
            .filter(|e| e.parent_id.as_ref() == Some(parent))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: &EntryId) -> Option<FileEntry> {
        self.entries.read().iter().find(|e| &e.id == id).cloned()
    }

    /// First entry matching name under the given parent; siblings may
    /// share names, so "first" means earliest inserted.
    #[must_use]
    pub fn get_by_name(&self, name: &str, parent: &EntryId) -> Option<FileEntry> {
        self.entries
            .read()
            .iter()
            .find(|e| e.name == name && e.parent_id.as_ref() == Some(parent))
            .cloned()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Create a new entry, filling creation defaults, then persist the
    /// collection and broadcast the change.
    ///
    /// The parent id is accepted as given: it is not validated against
    /// an existing folder (permissive policy, matching lookups that
    /// tolerate broken chains).
    pub fn create(&self, new: NewEntry) -> FileEntry {
        let extension = new
            .extension
            .or_else(|| derive_extension(&new.name, new.kind));
        let entry = FileEntry {
            id: new.id.unwrap_or_else(EntryId::generate),
            name: new.name,
            kind: new.kind,
            parent_id: Some(new.parent_id.unwrap_or_else(wellknown::root_id)),
            content: Some(new.content.unwrap_or_default()),
            extension,
        };

        {
            let mut entries = self.entries.write();
            entries.push(entry.clone());
            Self::write_slot(self.slots.as_ref(), &entries);
        }
        debug!("created entry {} ({})", entry.id, entry.name);
        self.changes.emit();
        entry
    }

    /// Merge a patch into the entry with the given id. Returns whether
    /// an entry was found; unspecified fields keep their prior values.
    pub fn update(&self, id: &EntryId, patch: EntryPatch) -> bool {
        let found = {
            let mut entries = self.entries.write();
            match entries.iter().position(|e| &e.id == id) {
                Some(index) => {
                    patch.apply(&mut entries[index]);
                    Self::write_slot(self.slots.as_ref(), &entries);
                    true
                }
                None => false,
            }
        };
        if found {
            debug!("updated entry {id}");
            self.changes.emit();
        }
        found
    }

    /// Delete an entry and its whole descendant closure in one write.
    /// Deleting the root is a silent no-op.
    pub fn remove(&self, id: &EntryId) {
        if wellknown::is_root(id) {
            return;
        }

        let removed = {
            let mut entries = self.entries.write();

            // Collect the transitive closure, folders first
            let mut doomed: HashSet<EntryId, RandomState> = HashSet::default();
            doomed.insert(id.clone());
            let mut to_visit = vec![id.clone()];
            while let Some(current) = to_visit.pop() {
                for child in entries
                    .iter()
                    .filter(|e| e.parent_id.as_ref() == Some(&current))
                {
                    if doomed.insert(child.id.clone()) && child.is_folder() {
                        to_visit.push(child.id.clone());
                    }
                }
            }

            let before = entries.len();
            entries.retain(|e| !doomed.contains(&e.id));
            let removed = before - entries.len();
            if removed > 0 {
                Self::write_slot(self.slots.as_ref(), &entries);
            }
            removed
        };

        if removed > 0 {
            debug!("removed entry {id} and {} descendants", removed - 1);
            self.changes.emit();
        }
    }

    // ------------------------------------------------------------------
    // Path resolution
    // ------------------------------------------------------------------

    /// Render the root-relative `/`-joined path for an entry.
    ///
    /// The root resolves to `/`. A broken parent link ends the walk
    /// without error, yielding the path of the reachable suffix.
    #[must_use]
    pub fn resolve_path(&self, id: &EntryId) -> String {
        if wellknown::is_root(id) {
            return "/".to_string();
        }

        let entries = self.entries.read();

        let mut parts: Vec<&str> = Vec::new();
        let mut current = entries.iter().find(|e| &e.id == id);
        while let Some(entry) = current {
            if wellknown::is_root(&entry.id) {
                break;
            }
            parts.push(&entry.name);
            current = match entry.parent_id.as_ref() {
                Some(parent) => entries.iter().find(|e| &e.id == parent),
                None => None,
            };
        }
        parts.reverse();
        format!("/{}", parts.join("/"))
    }
}
