/*!
 * Default Filesystem Tree
 * Deterministic seed used on first boot and after corruption resets
 */

use super::types::{EntryKind, FileEntry};
use super::wellknown::{system, user, PROGRAM_FILES, ROOT};
use crate::apps::AppId;
use crate::core::EntryId;

/// Content blob for synthetic system files
const SYSTEM_FILE_CONTENT: &str = "[HEX DATA]";

/// Apps pinned to the Desktop on first boot
const PINNED: [AppId; 5] = [
    AppId::Explorer,
    AppId::Terminal,
    AppId::Assistant,
    AppId::AppStore,
    AppId::Notepad,
];

fn folder(id: &str, name: &str, parent: Option<&str>) -> FileEntry {
    FileEntry {
        id: EntryId::from(id),
        name: name.to_string(),
        kind: EntryKind::Folder,
        parent_id: parent.map(EntryId::from),
        content: None,
        extension: None,
    }
}

fn system_files(parent: &str, prefix: &str, count: usize, ext: &str) -> Vec<FileEntry> {
    (0..count)
        .map(|i| FileEntry {
            id: EntryId::new(format!("sys_{prefix}_{i}")),
            name: format!("{prefix}_{i:03}.{ext}"),
            kind: EntryKind::File,
            parent_id: Some(EntryId::from(parent)),
            content: Some(SYSTEM_FILE_CONTENT.to_string()),
            extension: Some(ext.to_string()),
        })
        .collect()
}

/// Build the full default tree: system folders with synthetic records,
/// one binary per built-in app, the user folder tree, and the default
/// Desktop shortcuts.
#[must_use]
pub fn default_tree() -> Vec<FileEntry> {
    let mut entries = vec![
        folder(ROOT, "root", None),
        folder(system::BASE, "Orbit", Some(ROOT)),
        folder(system::CORE, "Core", Some(system::BASE)),
        folder(system::DRIVERS, "drivers", Some(system::BASE)),
        folder(system::LOGS, "Logs", Some(system::BASE)),
        folder(PROGRAM_FILES, "Program Files", Some(ROOT)),
        folder(user::USERS, "Users", Some(ROOT)),
        folder(user::HOME, "User", Some(user::USERS)),
        folder(user::DOCUMENTS, "Documents", Some(user::HOME)),
        folder(user::PICTURES, "Pictures", Some(user::HOME)),
        folder(user::MUSIC, "Music", Some(user::HOME)),
        folder(user::VIDEOS, "Videos", Some(user::HOME)),
        folder(user::DESKTOP, "Desktop", Some(user::HOME)),
        folder(user::DOWNLOADS, "Downloads", Some(user::HOME)),
    ];

    // App binaries in Program Files (installed by default)
    for app in AppId::ALL {
        entries.push(FileEntry {
            id: EntryId::new(format!("bin_{app}")),
            name: format!("{app}.exe"),
            kind: EntryKind::File,
            parent_id: Some(EntryId::from(PROGRAM_FILES)),
            content: None,
            extension: Some("exe".to_string()),
        });
    }

    // Desktop shortcuts for the pinned apps
    for app in PINNED {
        entries.push(FileEntry {
            id: EntryId::new(format!("desk_{app}")),
            name: format!("{}.lnk", app.title()),
            kind: EntryKind::File,
            parent_id: Some(EntryId::from(user::DESKTOP)),
            content: None,
            extension: Some("lnk".to_string()),
        });
    }

    // Synthetic system records
    entries.extend(system_files(system::CORE, "kernel", 50, "sys"));
    entries.extend(system_files(system::CORE, "lib", 80, "dll"));
    entries.extend(system_files(system::DRIVERS, "input", 15, "sys"));
    entries.extend(system_files(system::LOGS, "boot", 40, "log"));

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::wellknown;

    #[test]
    fn test_default_tree_structure() {
        let tree = default_tree();

        let root = tree.iter().find(|e| wellknown::is_root(&e.id)).unwrap();
        assert!(root.parent_id.is_none());
        assert!(root.is_folder());

        // Every non-root entry has a parent
        assert!(tree
            .iter()
            .filter(|e| !wellknown::is_root(&e.id))
            .all(|e| e.parent_id.is_some()));

        // Synthetic record naming pattern
        let kernel0 = tree.iter().find(|e| e.name == "kernel_000.sys").unwrap();
        assert_eq!(kernel0.parent_id, Some(EntryId::from(system::CORE)));
        assert_eq!(kernel0.content.as_deref(), Some(SYSTEM_FILE_CONTENT));
    }

    #[test]
    fn test_default_tree_ids_unique() {
        let tree = default_tree();
        let mut ids: Vec<&str> = tree.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_every_app_has_a_binary() {
        let tree = default_tree();
        for app in AppId::ALL {
            let name = format!("{app}.exe");
            assert!(
                tree.iter().any(|e| e.name == name),
                "missing binary {name}"
            );
        }
    }
}
