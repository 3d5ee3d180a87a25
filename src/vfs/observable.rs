/*!
 * Observable VFS - Change Notification
 * Payload-less broadcast delivered synchronously after every mutation
 */

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

type Listener = Arc<dyn Fn() + Send + Sync>;

struct Registry {
    listeners: RwLock<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

/// Broadcasts a payload-less change signal to every subscriber.
///
/// Delivery is synchronous: `emit` returns only after every listener
/// has run on the calling thread. Listeners re-read full store state
/// rather than receiving a diff (invalidate-all semantics).
#[derive(Clone)]
pub struct ChangeBroadcaster {
    registry: Arc<Registry>,
}

impl ChangeBroadcaster {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry {
                listeners: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Subscribe to change signals.
    ///
    /// The listener stays registered until the returned guard drops.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry
            .listeners
            .write()
            .push((id, Arc::new(listener)));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Notify all subscribers. No subscribers is fine.
    pub fn emit(&self) {
        // Snapshot outside the lock so listeners may subscribe/unsubscribe
        let snapshot: Vec<Listener> = self
            .registry
            .listeners
            .read()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    /// Number of active subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.listeners.read().len()
    }
}

impl Default for ChangeBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscription guard; dropping it removes the listener
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.listeners.write().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_emit_reaches_all_subscribers() {
        let hub = ChangeBroadcaster::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let a = {
            let hits = Arc::clone(&hits);
            hub.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        let b = {
            let hits = Arc::clone(&hits);
            hub.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        hub.emit();
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        drop(a);
        hub.emit();
        assert_eq!(hits.load(Ordering::SeqCst), 3);
        drop(b);
    }

    #[test]
    fn test_emit_with_no_subscribers() {
        let hub = ChangeBroadcaster::new();
        hub.emit();
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_drop_unsubscribes() {
        let hub = ChangeBroadcaster::new();
        let sub = hub.subscribe(|| {});
        assert_eq!(hub.subscriber_count(), 1);
        drop(sub);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_delivery_is_synchronous() {
        let hub = ChangeBroadcaster::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let _sub = {
            let seen = Arc::clone(&seen);
            hub.subscribe(move || {
                seen.fetch_add(1, Ordering::SeqCst);
            })
        };

        hub.emit();
        // Observed before emit returns control flow to the caller
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
