//! Infrastructure layer: document-store boundary, live projections, roster.
//!
//! The store itself (persistence, query execution, change notification
//! transport) is owned by an external collaborator; this crate defines the
//! contract the dashboard needs from it, an in-memory implementation for
//! tests/dev, and the read-model projectors that turn feed snapshots into
//! view state.

pub mod projections;
pub mod roster;
pub mod store;
