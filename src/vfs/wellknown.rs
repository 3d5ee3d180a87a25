/*!
 * Well-Known Entry Ids
 * Centralized id constants for the seeded filesystem structure
 */

use crate::core::EntryId;

/// Root of the tree; never deleted, resolves to `/`
pub const ROOT: &str = "root";

/// System folder ids
pub mod system {
    /// Top-level `Orbit` system folder
    pub const BASE: &str = "orbit";
    pub const CORE: &str = "core";
    pub const DRIVERS: &str = "drivers";
    pub const LOGS: &str = "logs";
}

/// `Program Files`, holding one `.exe` record per installed app
pub const PROGRAM_FILES: &str = "prog";

/// User tree ids
pub mod user {
    pub const USERS: &str = "users";
    pub const HOME: &str = "home";
    pub const DOCUMENTS: &str = "documents";
    pub const PICTURES: &str = "pictures";
    pub const MUSIC: &str = "music";
    pub const VIDEOS: &str = "videos";
    pub const DESKTOP: &str = "desktop";
    pub const DOWNLOADS: &str = "downloads";
}

/// The root id as an `EntryId`
#[inline]
#[must_use]
pub fn root_id() -> EntryId {
    EntryId::from(ROOT)
}

/// Check whether an id addresses the root entry
#[inline]
#[must_use]
pub fn is_root(id: &EntryId) -> bool {
    id.as_str() == ROOT
}
