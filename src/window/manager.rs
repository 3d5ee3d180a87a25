/*!
 * Window Manager
 * Lifecycle and z-order arbitration for open application windows
 */

use super::types::WindowState;
use crate::apps::AppId;
use crate::core::types::ZIndex;
use crate::core::{AtomicGenerator, Dimensions, Position, WindowId};
use log::debug;
use parking_lot::RwLock;

/// Windows never stack below this; taskbar and menu chrome live under it
const Z_FLOOR: ZIndex = 10;

/// Successive launches cascade diagonally by this many pixels
const CASCADE_STEP: i32 = 30;

/// Top-left corner of the first launched window
const CASCADE_ORIGIN: Position = Position::new(100, 100);

/// Owns the collection of open windows.
///
/// Invariants: at most one window per app id; every focus or launch
/// assigns a z-index strictly greater than the current maximum, so
/// "topmost" is always the most recently launched-or-focused window.
pub struct WindowManager {
    windows: RwLock<Vec<WindowState>>,
    ids: AtomicGenerator,
}

impl WindowManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            windows: RwLock::new(Vec::new()),
            ids: AtomicGenerator::default_start(),
        }
    }

    /// Open a window for an app, or focus the existing one.
    ///
    /// Returns the id of the window now holding focus for this app.
    pub fn launch(&self, app: AppId, title: impl Into<String>, size: Dimensions) -> WindowId {
        let mut windows = self.windows.write();

        if let Some(existing) = windows.iter().find(|w| w.app == app).map(|w| w.id) {
            Self::raise(&mut windows, existing);
            debug!("app {app} already open, focused window {existing}");
            return existing;
        }

        let id = WindowId(self.ids.next());
        let cascade = windows.len() as i32;
        let window = WindowState {
            id,
            app,
            title: title.into(),
            position: Position::new(
                CASCADE_ORIGIN.x + cascade * CASCADE_STEP,
                CASCADE_ORIGIN.y + cascade * CASCADE_STEP,
            ),
            size,
            z_index: Self::max_z(&windows) + 1,
            minimized: false,
            maximized: false,
        };
        debug!("launched {app} as window {id} (z={})", window.z_index);
        windows.push(window);
        id
    }

    /// Raise a window above everything else and un-minimize it.
    /// Unknown ids are ignored.
    pub fn focus(&self, id: WindowId) {
        let mut windows = self.windows.write();
        Self::raise(&mut windows, id);
    }

    /// Remove a window entirely. Unknown ids are ignored.
    pub fn close(&self, id: WindowId) {
        let mut windows = self.windows.write();
        let before = windows.len();
        windows.retain(|w| w.id != id);
        if windows.len() < before {
            debug!("closed window {id}");
        }
    }

    /// Hide a window from rendering while keeping its taskbar entry
    pub fn minimize(&self, id: WindowId) {
        if let Some(w) = self.windows.write().iter_mut().find(|w| w.id == id) {
            w.minimized = true;
        }
    }

    /// Flip between maximized and framed layout
    pub fn toggle_maximize(&self, id: WindowId) {
        if let Some(w) = self.windows.write().iter_mut().find(|w| w.id == id) {
            w.maximized = !w.maximized;
        }
    }

    /// Update a window's stored position.
    ///
    /// Stored even while maximized: layout ignores it until restore,
    /// but the value must survive for un-maximize.
    pub fn move_to(&self, id: WindowId, x: i32, y: i32) {
        if let Some(w) = self.windows.write().iter_mut().find(|w| w.id == id) {
            w.position = Position::new(x, y);
        }
    }

    /// Snapshot of all windows in launch order
    #[must_use]
    pub fn windows(&self) -> Vec<WindowState> {
        self.windows.read().clone()
    }

    #[must_use]
    pub fn get(&self, id: WindowId) -> Option<WindowState> {
        self.windows.read().iter().find(|w| w.id == id).cloned()
    }

    /// The window currently rendered on top: maximum z-index among
    /// non-minimized windows
    #[must_use]
    pub fn topmost(&self) -> Option<WindowState> {
        self.windows
            .read()
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
            .cloned()
    }

    /// Number of open windows (minimized included)
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.read().is_empty()
    }

    fn max_z(windows: &[WindowState]) -> ZIndex {
        windows
            .iter()
            .map(|w| w.z_index)
            .max()
            .unwrap_or(Z_FLOOR)
            .max(Z_FLOOR)
    }

    fn raise(windows: &mut [WindowState], id: WindowId) {
        let top = Self::max_z(windows) + 1;
        if let Some(w) = windows.iter_mut().find(|w| w.id == id) {
            w.z_index = top;
            w.minimized = false;
        }
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch(wm: &WindowManager, app: AppId) -> WindowId {
        wm.launch(app, app.title(), app.default_size())
    }

    #[test]
    fn test_launch_assigns_cascading_positions() {
        let wm = WindowManager::new();
        let a = launch(&wm, AppId::Terminal);
        let b = launch(&wm, AppId::Explorer);

        let first = wm.get(a).unwrap();
        let second = wm.get(b).unwrap();
        assert_eq!(first.position, Position::new(100, 100));
        assert_eq!(second.position, Position::new(130, 130));
        assert!(second.z_index > first.z_index);
    }

    #[test]
    fn test_single_instance_per_app() {
        let wm = WindowManager::new();
        let first = launch(&wm, AppId::Terminal);
        let z_after_first = wm.get(first).unwrap().z_index;

        let _other = launch(&wm, AppId::Explorer);
        let second = launch(&wm, AppId::Terminal);

        assert_eq!(first, second);
        assert_eq!(wm.len(), 2);
        assert!(wm.get(first).unwrap().z_index > z_after_first);
        assert_eq!(wm.topmost().unwrap().id, first);
    }

    #[test]
    fn test_focus_clears_minimized() {
        let wm = WindowManager::new();
        let id = launch(&wm, AppId::Paint);

        wm.minimize(id);
        assert!(wm.get(id).unwrap().minimized);
        assert!(wm.topmost().is_none());

        wm.focus(id);
        let w = wm.get(id).unwrap();
        assert!(!w.minimized);
        assert_eq!(wm.topmost().unwrap().id, id);
    }

    #[test]
    fn test_close_removes_window() {
        let wm = WindowManager::new();
        let id = launch(&wm, AppId::Notepad);
        wm.close(id);
        assert!(wm.get(id).is_none());
        assert!(wm.is_empty());

        // Closing again is a no-op
        wm.close(id);
    }

    #[test]
    fn test_move_while_maximized_is_stored() {
        let wm = WindowManager::new();
        let id = launch(&wm, AppId::Settings);

        wm.toggle_maximize(id);
        assert!(wm.get(id).unwrap().maximized);

        wm.move_to(id, 42, 24);
        wm.toggle_maximize(id);

        let w = wm.get(id).unwrap();
        assert!(!w.maximized);
        assert_eq!(w.position, Position::new(42, 24));
    }

    #[test]
    fn test_topmost_follows_focus_history() {
        let wm = WindowManager::new();
        let a = launch(&wm, AppId::Terminal);
        let b = launch(&wm, AppId::Explorer);
        let c = launch(&wm, AppId::Paint);

        assert_eq!(wm.topmost().unwrap().id, c);
        wm.focus(a);
        assert_eq!(wm.topmost().unwrap().id, a);
        wm.minimize(a);
        assert_eq!(wm.topmost().unwrap().id, c);
        wm.focus(b);
        assert_eq!(wm.topmost().unwrap().id, b);
    }
}
