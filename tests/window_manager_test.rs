/*!
 * Window Manager Tests
 * Single-instance and z-order invariants across lifecycle sequences
 */

use orbit_core::apps::AppId;
use orbit_core::window::WindowManager;

fn launch(wm: &WindowManager, app: AppId) -> orbit_core::core::WindowId {
    wm.launch(app, app.title(), app.default_size())
}

#[test]
fn test_second_launch_focuses_existing_window() {
    let wm = WindowManager::new();

    let first = launch(&wm, AppId::Terminal);
    let z_first = wm.get(first).unwrap().z_index;

    let second = launch(&wm, AppId::Terminal);

    assert_eq!(first, second);
    let terminals: Vec<_> = wm
        .windows()
        .into_iter()
        .filter(|w| w.app == AppId::Terminal)
        .collect();
    assert_eq!(terminals.len(), 1);
    assert!(terminals[0].z_index > z_first);
}

#[test]
fn test_topmost_is_last_launched_or_focused() {
    let wm = WindowManager::new();

    let terminal = launch(&wm, AppId::Terminal);
    let explorer = launch(&wm, AppId::Explorer);
    let paint = launch(&wm, AppId::Paint);
    assert_eq!(wm.topmost().unwrap().id, paint);

    wm.focus(terminal);
    assert_eq!(wm.topmost().unwrap().id, terminal);

    // Relaunching an open app counts as a focus
    launch(&wm, AppId::Explorer);
    assert_eq!(wm.topmost().unwrap().id, explorer);

    // z-indices stay strictly ordered, so ties cannot occur
    let mut zs: Vec<u32> = wm.windows().iter().map(|w| w.z_index).collect();
    zs.sort_unstable();
    zs.dedup();
    assert_eq!(zs.len(), wm.len());
}

#[test]
fn test_minimized_windows_are_skipped_for_topmost() {
    let wm = WindowManager::new();

    let notepad = launch(&wm, AppId::Notepad);
    let settings = launch(&wm, AppId::Settings);

    wm.minimize(settings);
    assert_eq!(wm.topmost().unwrap().id, notepad);

    // Minimized window keeps its frame state for restore
    let hidden = wm.get(settings).unwrap();
    assert!(hidden.minimized);
    assert!(hidden.z_index > wm.get(notepad).unwrap().z_index);

    wm.minimize(notepad);
    assert!(wm.topmost().is_none());
    assert_eq!(wm.len(), 2);
}

#[test]
fn test_close_forgets_the_window_entirely() {
    let wm = WindowManager::new();

    let a = launch(&wm, AppId::Terminal);
    wm.close(a);
    assert!(wm.get(a).is_none());

    // A fresh launch creates a new instance with a new id
    let b = launch(&wm, AppId::Terminal);
    assert_ne!(a, b);
}

#[test]
fn test_maximize_restore_roundtrip() {
    let wm = WindowManager::new();
    let id = launch(&wm, AppId::Explorer);
    let original = wm.get(id).unwrap();

    wm.toggle_maximize(id);
    wm.move_to(id, 400, 300);
    wm.toggle_maximize(id);

    let restored = wm.get(id).unwrap();
    assert!(!restored.maximized);
    assert_eq!(restored.size, original.size);
    // The move issued while maximized was stored for restore
    assert_eq!(restored.position.x, 400);
    assert_eq!(restored.position.y, 300);
}
