/*!
 * Window Types
 * Frame state for one running application instance
 */

use crate::apps::AppId;
use crate::core::serde::is_false;
use crate::core::types::ZIndex;
use crate::core::{Dimensions, Position, WindowId};
use serde::{Deserialize, Serialize};

/// Ephemeral state of one open window.
///
/// Never persisted; owned exclusively by the `WindowManager`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WindowState {
    pub id: WindowId,
    pub app: AppId,
    pub title: String,
    pub position: Position,
    pub size: Dimensions,
    pub z_index: ZIndex,
    #[serde(skip_serializing_if = "is_false", default)]
    pub minimized: bool,
    #[serde(skip_serializing_if = "is_false", default)]
    pub maximized: bool,
}

impl WindowState {
    /// Whether the window participates in rendering and hit-testing.
    ///
    /// A minimized window keeps its frame state for restore but is
    /// excluded; a maximized one is visible with its stored geometry
    /// ignored for layout.
    #[inline]
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !self.minimized
    }
}
