/*!
 * Desktop Session
 * Wires the filesystem, window manager, clipboard, and configuration
 * into one running user session
 */

use super::clipboard::Clipboard;
use super::config::ConfigStore;
use crate::apps::AppId;
use crate::core::{EntryId, WindowId};
use crate::storage::SlotStore;
use crate::vfs::observable::Subscription;
use crate::vfs::wellknown::{system, user, PROGRAM_FILES};
use crate::vfs::{FileEntry, NewEntry, VfsStore};
use crate::window::WindowManager;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use thiserror::Error;
use tracing::{info, warn};

/// Degraded-mode banner text shown while the system folder is missing
const INTEGRITY_FAULT: &str =
    "CRITICAL_SYSTEM_ERROR: Orbit folder is missing. System integrity failure.";

/// User-facing session failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("The application binary for {0} is missing. Please reinstall via App Store.")]
    AppMissing(AppId),
}

/// One logged-in desktop session.
///
/// Constructed once at session start and passed to every consumer; the
/// sole owner of the window collection and the clipboard slot.
pub struct Session {
    vfs: Arc<VfsStore>,
    windows: WindowManager,
    clipboard: Clipboard,
    config: ConfigStore,
    fault: Arc<RwLock<Option<String>>>,
    _watch: Subscription,
}

impl Session {
    /// Boot a session over the given slot store
    pub fn start(slots: Arc<dyn SlotStore>) -> Self {
        info!("starting desktop session");
        let config = ConfigStore::open(slots.clone());
        let vfs = VfsStore::open(slots);
        info!(entries = vfs.len(), "virtual disk ready");

        let fault = Arc::new(RwLock::new(check_integrity(&vfs)));
        if fault.read().is_some() {
            warn!("session booted in degraded mode: system folder missing");
        }

        // Re-evaluate integrity on every filesystem change, like any
        // other mounted view re-reading after the broadcast
        let watch = {
            let weak_vfs = Arc::downgrade(&vfs);
            let fault = Arc::clone(&fault);
            vfs.changes().subscribe(move || {
                if let Some(vfs) = Weak::upgrade(&weak_vfs) {
                    *fault.write() = check_integrity(&vfs);
                }
            })
        };

        Self {
            clipboard: Clipboard::new(vfs.clone()),
            windows: WindowManager::new(),
            config,
            fault,
            _watch: watch,
            vfs,
        }
    }

    #[must_use]
    pub fn vfs(&self) -> &Arc<VfsStore> {
        &self.vfs
    }

    #[must_use]
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    #[must_use]
    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    #[must_use]
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Current degraded-mode banner, if any
    #[must_use]
    pub fn fault(&self) -> Option<String> {
        self.fault.read().clone()
    }

    // ------------------------------------------------------------------
    // Install state
    // ------------------------------------------------------------------

    /// Which apps are installed, derived from the `Program Files`
    /// binaries. This derivation is the sole source of install truth.
    #[must_use]
    pub fn installed_apps(&self) -> Vec<AppId> {
        let binaries = self.vfs.children(&EntryId::from(PROGRAM_FILES));
        AppId::ALL
            .into_iter()
            .filter(|app| {
                let exe = format!("{app}.exe");
                binaries.iter().any(|e| e.name == exe)
            })
            .collect()
    }

    #[must_use]
    pub fn is_installed(&self, app: AppId) -> bool {
        let exe = format!("{app}.exe");
        self.vfs
            .get_by_name(&exe, &EntryId::from(PROGRAM_FILES))
            .is_some()
    }

    /// Install an app: create its binary and a desktop shortcut
    pub fn install(&self, app: AppId) {
        info!(%app, "installing application");
        self.vfs.create(
            NewEntry::file(format!("{app}.exe"))
                .in_folder(EntryId::from(PROGRAM_FILES))
                .with_extension("exe"),
        );
        self.vfs.create(
            NewEntry::file(format!("{}.lnk", app.title()))
                .in_folder(EntryId::from(user::DESKTOP))
                .with_extension("lnk"),
        );
    }

    /// Uninstall an app: remove its binary and its desktop shortcut
    pub fn uninstall(&self, app: AppId) {
        info!(%app, "uninstalling application");
        let exe = format!("{app}.exe");
        if let Some(binary) = self.vfs.get_by_name(&exe, &EntryId::from(PROGRAM_FILES)) {
            self.vfs.remove(&binary.id);
        }
        let shortcut = format!("{}.lnk", app.title());
        if let Some(link) = self
            .vfs
            .get_by_name(&shortcut, &EntryId::from(user::DESKTOP))
        {
            self.vfs.remove(&link.id);
        }
    }

    // ------------------------------------------------------------------
    // Launching
    // ------------------------------------------------------------------

    /// Launch an app window (or focus the open one). Launching an app
    /// whose binary is missing fails with user-facing text and creates
    /// no window.
    pub fn launch(&self, app: AppId) -> Result<WindowId, SessionError> {
        if !self.is_installed(app) {
            warn!(%app, "launch refused: binary missing");
            return Err(SessionError::AppMissing(app));
        }
        Ok(self.windows.launch(app, app.title(), app.default_size()))
    }

    // ------------------------------------------------------------------
    // Desktop surface
    // ------------------------------------------------------------------

    /// Entries shown as desktop icons
    #[must_use]
    pub fn desktop_entries(&self) -> Vec<FileEntry> {
        self.vfs.children(&EntryId::from(user::DESKTOP))
    }

    /// Resolve a desktop entry to the app its shortcut points at
    #[must_use]
    pub fn shortcut_target(entry: &FileEntry) -> Option<AppId> {
        if entry.extension.as_deref() != Some("lnk") {
            return None;
        }
        let stem = entry.name.strip_suffix(".lnk").unwrap_or(&entry.name);
        AppId::from_shortcut(stem)
    }
}

fn check_integrity(vfs: &VfsStore) -> Option<String> {
    if vfs.get(&EntryId::from(system::BASE)).is_none() {
        Some(INTEGRITY_FAULT.to_string())
    } else {
        None
    }
}
