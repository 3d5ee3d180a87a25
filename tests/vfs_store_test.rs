/*!
 * VFS Store Tests
 * Path resolution, cascading delete, and persistence behavior
 */

use proptest::prelude::*;
use std::sync::Arc;

use orbit_core::core::EntryId;
use orbit_core::storage::{keys, DiskSlots, MemSlots, SlotStore};
use orbit_core::vfs::wellknown::{self, user};
use orbit_core::vfs::{EntryKind, NewEntry, VfsStore};

fn open_store() -> Arc<VfsStore> {
    VfsStore::open(Arc::new(MemSlots::new()))
}

#[test]
fn test_root_resolves_to_slash() {
    let store = open_store();
    assert_eq!(store.resolve_path(&wellknown::root_id()), "/");
}

#[test]
fn test_seeded_paths_resolve() {
    let store = open_store();
    assert_eq!(
        store.resolve_path(&EntryId::from(user::DESKTOP)),
        "/Users/User/Desktop"
    );
    assert_eq!(
        store.resolve_path(&EntryId::from(wellknown::system::CORE)),
        "/Orbit/Core"
    );
}

#[test]
fn test_create_and_delete_folder_scenario() {
    let store = open_store();
    let desktop = EntryId::from(user::DESKTOP);

    let docs = store.create(NewEntry::folder("Docs").in_folder(desktop.clone()));
    let listed = store.children(&desktop);
    assert!(listed
        .iter()
        .any(|e| e.name == "Docs" && e.kind == EntryKind::Folder));

    store.remove(&docs.id);
    assert!(!store.children(&desktop).iter().any(|e| e.name == "Docs"));
    assert!(store.get(&docs.id).is_none());
}

#[test]
fn test_cascading_delete_removes_all_depths() {
    let store = open_store();
    let users = EntryId::from(user::USERS);

    // Users/User/Desktop plus everything under them must go
    let desktop_children = store.children(&EntryId::from(user::DESKTOP));
    assert!(!desktop_children.is_empty());

    store.remove(&users);

    assert!(store.get(&users).is_none());
    assert!(store.get(&EntryId::from(user::HOME)).is_none());
    assert!(store.get(&EntryId::from(user::DESKTOP)).is_none());
    for child in desktop_children {
        assert!(store.get(&child.id).is_none());
    }

    // No survivor's parent chain passes through the deleted subtree
    for entry in store.list_all() {
        let mut cursor = entry.parent_id.clone();
        while let Some(parent) = cursor {
            assert_ne!(parent, users);
            cursor = store.get(&parent).and_then(|e| e.parent_id);
        }
    }
}

#[test]
fn test_persistence_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let slots = Arc::new(DiskSlots::new(dir.path()));

    let created_id = {
        let store = VfsStore::open(slots.clone());
        store
            .create(
                NewEntry::file("keep.txt")
                    .in_folder(EntryId::from(user::DOCUMENTS))
                    .with_content("still here"),
            )
            .id
    };

    let reopened = VfsStore::open(slots);
    let entry = reopened.get(&created_id).expect("entry should persist");
    assert_eq!(entry.content.as_deref(), Some("still here"));
}

#[test]
fn test_corrupted_disk_slot_resets_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let slots = Arc::new(DiskSlots::new(dir.path()));
    slots.put(keys::VFS, "]]]] definitely not json");

    let store = VfsStore::open(slots);
    assert!(store.get(&wellknown::root_id()).is_some());
    assert!(store.get(&EntryId::from(user::DESKTOP)).is_some());
}

proptest! {
    /// Any folder chain built from root resolves to the slash-joined
    /// sequence of its ancestor names ending with its own name.
    #[test]
    fn prop_resolve_path_joins_ancestor_names(
        names in proptest::collection::vec("[a-z]{1,8}", 1..6)
    ) {
        let store = open_store();

        let mut parent = wellknown::root_id();
        let mut last = parent.clone();
        for name in &names {
            let folder = store.create(
                NewEntry::folder(name.clone()).in_folder(parent.clone()),
            );
            parent = folder.id.clone();
            last = folder.id;
        }

        prop_assert_eq!(
            store.resolve_path(&last),
            format!("/{}", names.join("/"))
        );
    }

    /// Deleting any link of a folder chain removes exactly the chain's
    /// suffix from that link down.
    #[test]
    fn prop_cascading_delete_removes_suffix(
        names in proptest::collection::vec("[a-z]{1,8}", 2..6),
        cut in 0usize..5,
    ) {
        let store = open_store();

        let mut parent = wellknown::root_id();
        let mut chain = Vec::new();
        for name in &names {
            let folder = store.create(
                NewEntry::folder(name.clone()).in_folder(parent.clone()),
            );
            parent = folder.id.clone();
            chain.push(folder.id);
        }

        let cut = cut % chain.len();
        store.remove(&chain[cut]);

        for (i, id) in chain.iter().enumerate() {
            prop_assert_eq!(store.get(id).is_some(), i < cut);
        }
    }
}
