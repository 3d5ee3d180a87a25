/*!
 * Desktop Session Module
 * OS configuration, clipboard coordination, and session wiring
 */

pub mod clipboard;
pub mod config;
pub mod session;

// Re-exports
pub use clipboard::{ClipMode, Clipboard, ClipboardEntry};
pub use config::{ConfigStore, OsConfig, Theme};
pub use session::{Session, SessionError};
