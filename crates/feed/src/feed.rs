//! Snapshot publishing/subscription abstraction (mechanics only).
//!
//! A [`SnapshotFeed`] distributes full-replace snapshots to any number of
//! subscribers (broadcast semantics). The feed is intentionally lightweight:
//!
//! - **Transport-agnostic**: works with in-memory channels or a real
//!   change-notification transport behind the same contract.
//! - **Full-replace delivery**: every message is a complete [`Snapshot`];
//!   a later delivery supersedes all earlier ones, so consumers that only
//!   care about the latest state may drain and keep the last message.
//! - **No ordering across feeds**: independent feeds are unordered relative
//!   to each other; consumers must tolerate transient inconsistency between
//!   views built from different feeds.
//!
//! [`Snapshot`]: crate::Snapshot

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to a snapshot stream.
///
/// Each subscription receives every snapshot published after (and, depending
/// on the feed implementation, the current one at) subscribe time.
/// Subscriptions are designed for single-threaded consumption; the dashboard
/// drains them between UI events rather than blocking on them.
///
/// Dropping the subscription detaches it from the feed; subscription
/// lifetime is tied to whatever owns it (here: the session's dashboard).
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain everything currently queued and return only the newest message.
    ///
    /// Because deliveries are full replacements, intermediate snapshots carry
    /// no information once a newer one has arrived.
    pub fn latest(&self) -> Option<M> {
        let mut newest = None;
        while let Ok(msg) = self.receiver.try_recv() {
            newest = Some(msg);
        }
        newest
    }
}

/// Domain-agnostic snapshot feed (pub/sub abstraction).
///
/// The feed sits between the document store and its consumers: after every
/// committed mutation the store publishes the full matching set, and each
/// subscriber gets its own copy. `publish` can fail (transport errors);
/// failures surface to the publisher, which may republish since a newer
/// snapshot always supersedes a lost one.
pub trait SnapshotFeed<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, F> SnapshotFeed<M> for Arc<F>
where
    F: SnapshotFeed<M> + ?Sized,
{
    type Error = F::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
