/*!
 * Terminal Shell
 * Command interpreter operating on the virtual filesystem
 */

use crate::core::EntryId;
use crate::vfs::{wellknown, NewEntry, VfsStore};
use std::sync::Arc;
use time::macros::format_description;
use time::OffsetDateTime;

const VERSION_BANNER: &str = "OrbitOS Terminal [Version 1.0.0]";
const KERNEL_VERSION: &str = "OrbitOS Kernel 1.0.0-gold";
const HELP: &str = "Available: ls, cd, mkdir, touch, rm, cat, clear, pwd, whoami, date, version";

/// Result of executing one command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutput {
    /// Text to print below the echoed command
    Text(String),
    /// The screen should be cleared
    Clear,
    /// Nothing to print (empty input)
    Silence,
}

/// One terminal session: a working-directory cursor over the VFS
pub struct Shell {
    vfs: Arc<VfsStore>,
    cwd: EntryId,
}

impl Shell {
    #[must_use]
    pub fn new(vfs: Arc<VfsStore>) -> Self {
        Self {
            vfs,
            cwd: wellknown::root_id(),
        }
    }

    /// Greeting lines printed when the terminal opens
    #[must_use]
    pub fn banner() -> [&'static str; 3] {
        [VERSION_BANNER, "(c) Orbit Systems. All rights reserved.", ""]
    }

    /// Current working directory id
    #[must_use]
    pub fn cwd(&self) -> &EntryId {
        &self.cwd
    }

    /// Prompt string, e.g. `user@orbit:/Users/User$`
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("user@orbit:{}$", self.vfs.resolve_path(&self.cwd))
    }

    /// Execute one command line
    pub fn exec(&mut self, line: &str) -> ShellOutput {
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            return ShellOutput::Silence;
        };
        let arg = words.next();

        let response = match cmd.to_ascii_lowercase().as_str() {
            "help" => HELP.to_string(),
            "ls" => self.list(),
            "pwd" => self.vfs.resolve_path(&self.cwd),
            "whoami" => "user".to_string(),
            "date" => current_date(),
            "version" => KERNEL_VERSION.to_string(),
            "clear" => return ShellOutput::Clear,
            "mkdir" => self.mkdir(arg),
            "touch" => self.touch(arg),
            "rm" => self.remove(arg),
            "cat" => self.cat(arg),
            "cd" => match self.chdir(arg) {
                Some(err) => err,
                None => return ShellOutput::Silence,
            },
            unknown => {
                format!("'{unknown}' is not recognized as an internal or external command.")
            }
        };
        ShellOutput::Text(response)
    }

    fn list(&self) -> String {
        let listing: Vec<String> = self
            .vfs
            .children(&self.cwd)
            .iter()
            .map(|e| {
                if e.is_folder() {
                    format!("[DIR] {}", e.name)
                } else {
                    e.name.clone()
                }
            })
            .collect();
        if listing.is_empty() {
            "(directory empty)".to_string()
        } else {
            listing.join("\n")
        }
    }

    fn mkdir(&self, arg: Option<&str>) -> String {
        match arg {
            None => "Usage: mkdir <dirname>".to_string(),
            Some(name) => {
                self.vfs
                    .create(NewEntry::folder(name).in_folder(self.cwd.clone()));
                format!("Created directory: {name}")
            }
        }
    }

    fn touch(&self, arg: Option<&str>) -> String {
        match arg {
            None => "Usage: touch <filename>".to_string(),
            Some(name) => {
                self.vfs
                    .create(NewEntry::file(name).in_folder(self.cwd.clone()));
                format!("Created file: {name}")
            }
        }
    }

    fn remove(&self, arg: Option<&str>) -> String {
        match arg {
            None => "Usage: rm <name>".to_string(),
            Some(name) => match self.vfs.get_by_name(name, &self.cwd) {
                Some(target) => {
                    self.vfs.remove(&target.id);
                    format!("Removed: {name}")
                }
                None => format!("rm: cannot remove '{name}': No such file or directory"),
            },
        }
    }

    fn cat(&self, arg: Option<&str>) -> String {
        match arg {
            None => "Usage: cat <filename>".to_string(),
            Some(name) => match self.vfs.get_by_name(name, &self.cwd) {
                Some(file) if file.is_file() => match file.content.as_deref() {
                    Some("") | None => "(empty file)".to_string(),
                    Some(content) => content.to_string(),
                },
                _ => format!("cat: {name}: No such file or directory"),
            },
        }
    }

    /// Returns an error message, or `None` when the directory changed
    fn chdir(&mut self, arg: Option<&str>) -> Option<String> {
        match arg {
            None | Some("/") => {
                self.cwd = wellknown::root_id();
                None
            }
            Some("..") => {
                if let Some(parent) = self.vfs.get(&self.cwd).and_then(|e| e.parent_id) {
                    self.cwd = parent;
                }
                None
            }
            Some(name) => match self.vfs.get_by_name(name, &self.cwd) {
                Some(target) if target.is_folder() => {
                    self.cwd = target.id;
                    None
                }
                _ => Some(format!("cd: {name}: No such directory")),
            },
        }
    }
}

fn current_date() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let format = format_description!(
        "[weekday repr:short] [month repr:short] [day] [year] [hour]:[minute]:[second]"
    );
    now.format(&format)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}
