//! Document store boundary.
//!
//! This module defines the dashboard-facing abstraction over the hosted
//! document store without making any storage assumptions: typed filters,
//! the [`DocumentStore`] trait, and an in-memory implementation whose
//! watches deliver full-replace snapshots the way the real feed does.

pub mod filter;
pub mod in_memory;
pub mod r#trait;

pub use filter::Filter;
pub use in_memory::InMemoryDocumentStore;
pub use r#trait::{DocumentStore, StoreError, server_timestamp};

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::warn;

/// Collection names used by the dashboard.
pub mod collections {
    /// Staff profile documents (id, name, role).
    pub const USERS: &str = "users";
    /// Patient visit tokens.
    pub const TOKENS: &str = "tokens";
    /// Billed invoices.
    pub const INVOICES: &str = "invoices";
}

/// Decode a batch of raw documents into typed records.
///
/// Documents that fail to decode are skipped with a warning rather than
/// failing the whole snapshot: one malformed record must not blank the live
/// views. (Lenient fields like invoice amounts coerce inside their own
/// `Deserialize` impls and never reach this path.)
pub fn decode_all<T, I>(collection: &str, docs: I) -> Vec<T>
where
    T: DeserializeOwned,
    I: IntoIterator,
    I::Item: core::borrow::Borrow<JsonValue>,
{
    docs.into_iter()
        .filter_map(|doc| {
            let doc = core::borrow::Borrow::borrow(&doc);
            match serde_json::from_value(doc.clone()) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(collection, %err, "skipping undecodable document");
                    None
                }
            }
        })
        .collect()
}
