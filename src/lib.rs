/*!
 * OrbitOS Core Library
 * Virtual filesystem, window management, and desktop session services
 */

pub mod apps;
pub mod core;
pub mod desktop;
pub mod storage;
pub mod vfs;
pub mod window;

// Re-exports
pub use apps::{AppId, Assistant, Shell, ShellOutput};
pub use desktop::{Clipboard, ClipboardEntry, ConfigStore, OsConfig, Session, SessionError};
pub use storage::{DiskSlots, MemSlots, SlotStore};
pub use vfs::{ChangeBroadcaster, EntryKind, EntryPatch, FileEntry, NewEntry, VfsStore};
pub use window::{WindowManager, WindowState};
