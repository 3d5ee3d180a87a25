/*!
 * Built-in Applications
 * App registry, terminal shell, and assistant client
 */

pub mod assistant;
pub mod registry;
pub mod terminal;

// Re-exports
pub use assistant::Assistant;
pub use registry::AppId;
pub use terminal::{Shell, ShellOutput};
