/*!
 * Application Registry
 * Built-in app identities and their launch metadata
 */

use crate::core::Dimensions;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a built-in application shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppId {
    Explorer,
    Notepad,
    Terminal,
    Paint,
    Settings,
    #[serde(rename = "ai")]
    Assistant,
    #[serde(rename = "taskmanager")]
    TaskManager,
    #[serde(rename = "appstore")]
    AppStore,
}

impl AppId {
    /// Every built-in app, in registry order
    pub const ALL: [AppId; 8] = [
        AppId::Explorer,
        AppId::Notepad,
        AppId::Terminal,
        AppId::Paint,
        AppId::Settings,
        AppId::Assistant,
        AppId::TaskManager,
        AppId::AppStore,
    ];

    /// Binary stem: `<as_str>.exe` is the installed marker record
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explorer => "explorer",
            Self::Notepad => "notepad",
            Self::Terminal => "terminal",
            Self::Paint => "paint",
            Self::Settings => "settings",
            Self::Assistant => "ai",
            Self::TaskManager => "taskmanager",
            Self::AppStore => "appstore",
        }
    }

    /// Parse a binary stem back to an app id
    #[must_use]
    pub fn parse(stem: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.as_str() == stem)
    }

    /// Display title, used for window chrome and `.lnk` shortcut names
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Explorer => "File Explorer",
            Self::Notepad => "Text Editor",
            Self::Terminal => "Terminal",
            Self::Paint => "Paint",
            Self::Settings => "Settings",
            Self::Assistant => "Orbit AI",
            Self::TaskManager => "Task Manager",
            Self::AppStore => "App Store",
        }
    }

    /// Initial window size when launched
    #[must_use]
    pub const fn default_size(self) -> Dimensions {
        match self {
            Self::Explorer => Dimensions::new(820, 520),
            Self::Notepad => Dimensions::new(600, 450),
            Self::Terminal => Dimensions::new(640, 420),
            Self::Paint => Dimensions::new(760, 540),
            Self::Settings => Dimensions::new(720, 520),
            Self::Assistant => Dimensions::new(420, 560),
            Self::TaskManager => Dimensions::new(560, 460),
            Self::AppStore => Dimensions::new(680, 540),
        }
    }

    /// Short blurb shown in the app store
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Explorer => "Browse and manage the files on your virtual disk.",
            Self::Notepad => "Minimal text editor for quick notes and drafts.",
            Self::Terminal => "Command-line access to the virtual filesystem.",
            Self::Paint => "Freehand drawing canvas with basic brushes.",
            Self::Settings => "Personalize wallpaper, theme, and account.",
            Self::Assistant => "Conversational assistant built into the OS.",
            Self::TaskManager => "Inspect and end running application windows.",
            Self::AppStore => "Install and remove OrbitOS software packages.",
        }
    }

    /// Resolve a desktop shortcut display name (the `.lnk` stem) to an
    /// app. Matching ignores case and spaces and accepts the legacy
    /// aliases the seeded shortcuts use.
    #[must_use]
    pub fn from_shortcut(stem: &str) -> Option<Self> {
        let normalized: String = stem
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "fileexplorer" => Some(Self::Explorer),
            "texteditor" => Some(Self::Notepad),
            "orbitai" => Some(Self::Assistant),
            other => Self::ALL
                .into_iter()
                .find(|app| app.as_str() == other || app.title().eq_ignore_ascii_case(stem)),
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
