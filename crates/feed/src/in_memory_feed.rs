//! In-memory snapshot feed for tests/dev.

use std::sync::{Mutex, mpsc};

use crate::feed::{SnapshotFeed, Subscription};

#[derive(Debug)]
pub enum InMemoryFeedError {
    /// Publish failed due to internal lock poisoning.
    Poisoned,
}

/// In-memory broadcast feed.
///
/// - No IO / no async
/// - Retains the latest snapshot and delivers it immediately to new
///   subscribers, matching the external feed's fire-once-at-subscribe
///   behavior
/// - Dead subscribers are dropped on the next publish
#[derive(Debug)]
pub struct InMemoryFeed<M> {
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
    latest: Mutex<Option<M>>,
}

impl<M> InMemoryFeed<M> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M> Default for InMemoryFeed<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
            latest: Mutex::new(None),
        }
    }
}

impl<M> SnapshotFeed<M> for InMemoryFeed<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryFeedError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subs = self
            .subscribers
            .lock()
            .map_err(|_| InMemoryFeedError::Poisoned)?;

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(message.clone()).is_ok());

        let mut latest = self.latest.lock().map_err(|_| InMemoryFeedError::Poisoned)?;
        *latest = Some(message);

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // New subscribers see the current state right away, then every
        // subsequent replacement set.
        if let Ok(latest) = self.latest.lock() {
            if let Some(current) = latest.clone() {
                let _ = tx.send(current);
            }
        }

        // If the lock is poisoned, we still return a subscription;
        // it just won't receive messages until the process restarts.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}
