//! `clinicdesk-feed` — change-feed abstraction (mechanics only).
//!
//! The external document store notifies consumers by delivering a **complete
//! replacement set** of matching documents on every change, never a diff.
//! This crate models that delivery contract: an immutable [`Snapshot`], a
//! [`SnapshotFeed`] to publish/subscribe it, and the [`Projector`] contract
//! consumers implement to turn snapshots into view state.

pub mod feed;
pub mod in_memory_feed;
pub mod projector;
pub mod snapshot;

pub use feed::{SnapshotFeed, Subscription};
pub use in_memory_feed::{InMemoryFeed, InMemoryFeedError};
pub use projector::Projector;
pub use snapshot::Snapshot;
