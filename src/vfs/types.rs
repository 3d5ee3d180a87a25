/*!
 * VFS Entry Types
 * File/folder records and the tagged create/update forms
 */

use crate::core::serde::is_none;
use crate::core::EntryId;
use serde::{Deserialize, Serialize};

/// Entry kind discriminator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    #[default]
    File,
    Folder,
}

impl EntryKind {
    #[inline]
    #[must_use]
    pub const fn is_folder(self) -> bool {
        matches!(self, Self::Folder)
    }

    #[inline]
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }
}

/// One node of the filesystem tree.
///
/// `parent_id` is `None` only for the root. Sibling names are not
/// required to be unique; ids are unique across the whole tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: EntryId,
    pub name: String,
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "is_none", default)]
    pub parent_id: Option<EntryId>,
    #[serde(skip_serializing_if = "is_none", default)]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "is_none", default)]
    pub extension: Option<String>,
}

impl FileEntry {
    #[inline]
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }

    #[inline]
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }
}

/// Fields for creating a new entry.
///
/// Unset fields take the store's creation defaults: kind `File`, parent
/// root, content empty, extension derived from the name.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    /// Explicit id; seeded system records use deterministic ids, every
    /// other caller leaves this unset and gets a generated one.
    pub id: Option<EntryId>,
    pub name: String,
    pub kind: EntryKind,
    pub parent_id: Option<EntryId>,
    pub content: Option<String>,
    pub extension: Option<String>,
}

impl NewEntry {
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Folder,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<EntryId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn in_folder(mut self, parent: EntryId) -> Self {
        self.parent_id = Some(parent);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }
}

/// Partial update for an existing entry.
///
/// `None` fields retain their prior values; a patch cannot clear a
/// field back to absent.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub name: Option<String>,
    pub parent_id: Option<EntryId>,
    pub content: Option<String>,
    pub extension: Option<String>,
}

impl EntryPatch {
    #[must_use]
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn reparent(parent: EntryId) -> Self {
        Self {
            parent_id: Some(parent),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Merge this patch into an entry, field by field
    pub(crate) fn apply(self, entry: &mut FileEntry) {
        if let Some(name) = self.name {
            entry.name = name;
        }
        if let Some(parent) = self.parent_id {
            entry.parent_id = Some(parent);
        }
        if let Some(content) = self.content {
            entry.content = Some(content);
        }
        if let Some(extension) = self.extension {
            entry.extension = Some(extension);
        }
    }
}

/// Derive an extension from the trailing dot-segment of a name.
///
/// Folders never derive one; a file name without a dot defaults to
/// `txt` so every file classifies to some icon type.
#[must_use]
pub(crate) fn derive_extension(name: &str, kind: EntryKind) -> Option<String> {
    if kind.is_folder() {
        return None;
    }
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext.to_ascii_lowercase()),
        _ => Some("txt".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_derivation() {
        assert_eq!(
            derive_extension("notes.TXT", EntryKind::File).as_deref(),
            Some("txt")
        );
        assert_eq!(
            derive_extension("archive.tar.gz", EntryKind::File).as_deref(),
            Some("gz")
        );
        assert_eq!(
            derive_extension("README", EntryKind::File).as_deref(),
            Some("txt")
        );
        assert_eq!(derive_extension("Documents", EntryKind::Folder), None);
    }

    #[test]
    fn test_patch_merge_retains_unset_fields() {
        let mut entry = FileEntry {
            id: EntryId::from("e1"),
            name: "draft.txt".to_string(),
            kind: EntryKind::File,
            parent_id: Some(EntryId::from("root")),
            content: Some("hello".to_string()),
            extension: Some("txt".to_string()),
        };

        EntryPatch::rename("final.txt").apply(&mut entry);

        assert_eq!(entry.name, "final.txt");
        assert_eq!(entry.content.as_deref(), Some("hello"));
        assert_eq!(entry.parent_id, Some(EntryId::from("root")));
    }

    #[test]
    fn test_entry_serialization_skips_absent_fields() {
        let entry = FileEntry {
            id: EntryId::from("root"),
            name: "root".to_string(),
            kind: EntryKind::Folder,
            parent_id: None,
            content: None,
            extension: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("parent_id"));

        let back: FileEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
