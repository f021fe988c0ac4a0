use std::sync::Arc;

use serde_json::{Value as JsonValue, json};
use thiserror::Error;

use clinicdesk_core::RecordId;
use clinicdesk_feed::{Snapshot, Subscription};

use crate::store::Filter;

/// Sentinel field value resolved to the commit-time clock by the store.
///
/// Mirrors the hosted store's server-timestamp marker: the writer never picks
/// the wall clock, the store does at commit.
pub const SERVER_TIMESTAMP: &str = "__serverTimestamp";

/// Marker value for a field that the store must stamp at commit time.
pub fn server_timestamp() -> JsonValue {
    json!({ SERVER_TIMESTAMP: true })
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// Update target does not exist.
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: RecordId },

    /// The store rejected a create/update. Carries the raw error text so the
    /// UI can surface it verbatim.
    #[error("write rejected: {0}")]
    WriteRejected(String),

    /// A document is not a JSON object and cannot hold fields.
    #[error("malformed document: {0}")]
    Malformed(String),
}

/// Boundary contract for the hosted document store.
///
/// Documents are JSON objects carrying their own `id` field (assigned by the
/// store on create). Long-running calls suspend only the triggering
/// operation; ordering between independently triggered operations is not
/// guaranteed. No retries: a failed write surfaces immediately and the
/// caller's state is left intact for manual correction.
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document by id, `None` if absent.
    fn get_one(&self, collection: &str, id: RecordId) -> Result<Option<JsonValue>, StoreError>;

    /// Create a document; the store assigns and returns its id.
    fn add_one(&self, collection: &str, fields: JsonValue) -> Result<RecordId, StoreError>;

    /// Merge `patch`'s top-level fields into an existing document.
    fn update_one(
        &self,
        collection: &str,
        id: RecordId,
        patch: JsonValue,
    ) -> Result<(), StoreError>;

    /// One-shot query of the current matching set.
    fn query(&self, collection: &str, filter: &Filter) -> Result<Vec<JsonValue>, StoreError>;

    /// Live subscription: delivers the full current matching set immediately,
    /// then the complete replacement set after every mutation of the
    /// collection. Never deltas.
    fn watch(&self, collection: &str, filter: Filter) -> Subscription<Snapshot<JsonValue>>;
}

impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    fn get_one(&self, collection: &str, id: RecordId) -> Result<Option<JsonValue>, StoreError> {
        (**self).get_one(collection, id)
    }

    fn add_one(&self, collection: &str, fields: JsonValue) -> Result<RecordId, StoreError> {
        (**self).add_one(collection, fields)
    }

    fn update_one(
        &self,
        collection: &str,
        id: RecordId,
        patch: JsonValue,
    ) -> Result<(), StoreError> {
        (**self).update_one(collection, id, patch)
    }

    fn query(&self, collection: &str, filter: &Filter) -> Result<Vec<JsonValue>, StoreError> {
        (**self).query(collection, filter)
    }

    fn watch(&self, collection: &str, filter: Filter) -> Subscription<Snapshot<JsonValue>> {
        (**self).watch(collection, filter)
    }
}
