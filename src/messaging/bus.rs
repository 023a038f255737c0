use crossbeam_channel::{unbounded, Receiver, Sender, TrySendError};
use parking_lot::Mutex;
/// Event bus for wizard change notifications
///
/// Fans each event out to every live subscriber without blocking the
/// transition that produced it.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::events::WizardEvent;

/// Subscriber ID for tracking subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

struct Subscriber {
    id: SubscriberId,
    sender: Sender<WizardEvent>,
}

/// Broadcasts wizard events; clones share the same subscriber list
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
    next_id: Arc<AtomicUsize>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events, returns a receiver and subscription ID
    pub fn subscribe(&self) -> (Receiver<WizardEvent>, SubscriberId) {
        let (tx, rx) = unbounded();
        let id = SubscriberId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.lock().push(Subscriber { id, sender: tx });
        (rx, id)
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.lock().retain(|s| s.id != id);
    }

    /// Publish an event to all subscribers
    ///
    /// Subscribers whose receiver has been dropped are pruned.
    pub fn publish(&self, event: WizardEvent) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|subscriber| {
            match subscriber.sender.try_send(event.clone()) {
                Err(TrySendError::Disconnected(_)) => {
                    tracing::trace!(subscriber = subscriber.id.0, "Dropping closed subscriber");
                    false
                }
                _ => true,
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}
