/*!
 * Clipboard Coordinator
 * One-slot copy/cut clipboard and context-menu pass-throughs
 */

use crate::core::EntryId;
use crate::vfs::{EntryPatch, FileEntry, NewEntry, VfsStore};
use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Suffix appended to a pasted copy's name
const COPY_SUFFIX: &str = " - Copy";

/// Clipboard transfer mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipMode {
    Copy,
    Cut,
}

/// The single clipboard slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntry {
    pub entry: EntryId,
    pub mode: ClipMode,
}

/// Mediates right-click actions and the one-slot clipboard into VFS
/// mutations. No multi-select, no history: `copy`/`cut` overwrite the
/// slot, a Cut paste consumes it, a Copy paste is repeatable.
pub struct Clipboard {
    vfs: Arc<VfsStore>,
    slot: RwLock<Option<ClipboardEntry>>,
}

impl Clipboard {
    #[must_use]
    pub fn new(vfs: Arc<VfsStore>) -> Self {
        Self {
            vfs,
            slot: RwLock::new(None),
        }
    }

    /// Current slot contents
    #[must_use]
    pub fn current(&self) -> Option<ClipboardEntry> {
        self.slot.read().clone()
    }

    pub fn copy(&self, entry: EntryId) {
        debug!("clipboard: copy {entry}");
        *self.slot.write() = Some(ClipboardEntry {
            entry,
            mode: ClipMode::Copy,
        });
    }

    pub fn cut(&self, entry: EntryId) {
        debug!("clipboard: cut {entry}");
        *self.slot.write() = Some(ClipboardEntry {
            entry,
            mode: ClipMode::Cut,
        });
    }

    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    /// Paste the slot into a destination folder.
    ///
    /// Copy duplicates kind/content/extension under a `" - Copy"` name
    /// and keeps the slot; Cut re-parents the original and clears it.
    /// An empty slot, or a source deleted since it was claimed, pastes
    /// nothing.
    pub fn paste(&self, destination: &EntryId) -> Option<EntryId> {
        let claimed = self.current()?;
        let source = self.vfs.get(&claimed.entry)?;

        match claimed.mode {
            ClipMode::Copy => {
                let duplicate = NewEntry {
                    name: format!("{}{COPY_SUFFIX}", source.name),
                    kind: source.kind,
                    parent_id: Some(destination.clone()),
                    content: source.content,
                    extension: source.extension,
                    ..NewEntry::default()
                };
                let created = self.vfs.create(duplicate);
                debug!("clipboard: pasted copy of {} as {}", source.id, created.id);
                Some(created.id)
            }
            ClipMode::Cut => {
                self.vfs
                    .update(&source.id, EntryPatch::reparent(destination.clone()));
                self.clear();
                debug!("clipboard: moved {} into {destination}", source.id);
                Some(source.id)
            }
        }
    }

    // ------------------------------------------------------------------
    // Context-menu pass-throughs
    // ------------------------------------------------------------------

    pub fn rename(&self, id: &EntryId, name: impl Into<String>) -> bool {
        self.vfs.update(id, EntryPatch::rename(name.into()))
    }

    pub fn new_file(&self, destination: &EntryId, name: impl Into<String>) -> FileEntry {
        self.vfs
            .create(NewEntry::file(name.into()).in_folder(destination.clone()))
    }

    pub fn new_folder(&self, destination: &EntryId, name: impl Into<String>) -> FileEntry {
        self.vfs
            .create(NewEntry::folder(name.into()).in_folder(destination.clone()))
    }

    pub fn remove(&self, id: &EntryId) {
        self.vfs.remove(id);
    }

    #[must_use]
    pub fn properties(&self, id: &EntryId) -> Option<FileEntry> {
        self.vfs.get(id)
    }
}
