/*!
 * ID Generation System
 * Type-safe id wrappers for filesystem entries and windows
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

// ============================================================================
// Type-Safe ID Wrappers
// ============================================================================

/// Filesystem entry id
///
/// Opaque and immutable once assigned. Freshly created entries get a
/// collision-resistant uuid; seeded system entries keep deterministic
/// well-known ids so they can be addressed by constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Window id, unique per launch instance (32-bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Atomic Counter Generator
// ============================================================================

/// Monotonic counter for window ids
///
/// # Performance
/// - Cache-line aligned to prevent false sharing
/// - Lock-free atomic operations
#[repr(C, align(64))]
pub struct AtomicGenerator {
    counter: Arc<AtomicU32>,
}

impl AtomicGenerator {
    /// Create new generator starting at given value
    #[inline]
    #[must_use]
    pub fn new(start: u32) -> Self {
        Self {
            counter: Arc::new(AtomicU32::new(start)),
        }
    }

    /// Create new generator starting at 1
    #[inline]
    #[must_use]
    pub fn default_start() -> Self {
        Self::new(1)
    }

    /// Generate next id
    #[inline]
    pub fn next(&self) -> u32 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }

    /// Get current counter value (for debugging)
    #[inline]
    pub fn current(&self) -> u32 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl Clone for AtomicGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: Arc::clone(&self.counter),
        }
    }
}
