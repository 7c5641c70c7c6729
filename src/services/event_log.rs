//! Bounded in-memory log of received webhook notifications.
//!
//! Nothing is persisted; the log starts empty on every restart.

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

use serde_json::Value;

/// Number of notifications kept before the oldest is evicted.
pub const WEBHOOK_EVENT_CAPACITY: usize = 50;

/// Ordered, capped log of webhook events.
///
/// Writers take the lock exclusively, readers share it. The lock is never
/// held across an `.await`.
#[derive(Debug)]
pub struct WebhookEventLog {
    events: RwLock<VecDeque<Value>>,
    capacity: usize,
}

impl WebhookEventLog {
    pub fn new() -> Self {
        Self::with_capacity(WEBHOOK_EVENT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Append an event, evicting from the head until the log fits.
    pub fn record(&self, event: Value) {
        let mut events = self.events.write().unwrap_or_else(PoisonError::into_inner);
        events.push_back(event);
        while events.len() > self.capacity {
            events.pop_front();
        }
    }

    /// Copy of every stored event, oldest first.
    pub fn snapshot(&self) -> Vec<Value> {
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);
        events.iter().cloned().collect()
    }
}

impl Default for WebhookEventLog {
    fn default() -> Self {
        Self::new()
    }
}
