//! In-memory document store for tests/dev.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, RwLock, mpsc};

use chrono::Utc;
use serde_json::{Value as JsonValue, json};

use clinicdesk_core::RecordId;
use clinicdesk_feed::{Snapshot, Subscription};

use crate::store::Filter;
use crate::store::r#trait::{DocumentStore, SERVER_TIMESTAMP, StoreError};

struct Watcher {
    collection: String,
    filter: Filter,
    tx: mpsc::Sender<Snapshot<JsonValue>>,
}

/// In-memory document store.
///
/// - No IO / no async; writes run to completion before returning
/// - Documents are JSON objects keyed by [`RecordId`]; iteration order is
///   id order, so query results are deterministic
/// - Every committed mutation publishes the full matching set to each live
///   watcher of that collection (full-replace, never a diff)
/// - Server-timestamp markers resolve to the commit-time clock
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<RecordId, JsonValue>>>,
    watchers: Mutex<Vec<Watcher>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document at a caller-chosen id.
    ///
    /// The dashboard itself only creates documents through
    /// [`DocumentStore::add_one`]; staff profiles keyed by auth uid are
    /// provisioned out of band, which is what this models for tests/dev.
    pub fn seed(
        &self,
        collection: &str,
        id: RecordId,
        mut fields: JsonValue,
    ) -> Result<(), StoreError> {
        if !fields.is_object() {
            return Err(StoreError::Malformed(format!(
                "document for {collection} must be a JSON object"
            )));
        }
        Self::resolve_timestamps(&mut fields);
        fields["id"] = json!(id);

        {
            let mut map = self
                .collections
                .write()
                .map_err(|_| StoreError::WriteRejected("store lock poisoned".into()))?;
            map.entry(collection.to_string())
                .or_default()
                .insert(id, fields);
        }

        self.notify(collection);
        Ok(())
    }

    fn matching_set(
        collections: &HashMap<String, BTreeMap<RecordId, JsonValue>>,
        collection: &str,
        filter: &Filter,
    ) -> Vec<JsonValue> {
        collections
            .get(collection)
            .map(|docs| {
                docs.values()
                    .filter(|doc| filter.matches(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Push the full replacement set to every watcher of `collection`,
    /// dropping watchers whose subscriptions are gone.
    fn notify(&self, collection: &str) {
        let Ok(map) = self.collections.read() else {
            return;
        };
        let Ok(mut watchers) = self.watchers.lock() else {
            return;
        };
        watchers.retain(|w| {
            if w.collection != collection {
                return true;
            }
            let set = Self::matching_set(&map, collection, &w.filter);
            w.tx.send(Snapshot::new(set)).is_ok()
        });
    }

    /// Replace any top-level server-timestamp marker with the commit clock.
    fn resolve_timestamps(fields: &mut JsonValue) {
        if let Some(map) = fields.as_object_mut() {
            let now = json!(Utc::now());
            for value in map.values_mut() {
                let is_marker = value
                    .as_object()
                    .is_some_and(|m| m.get(SERVER_TIMESTAMP).is_some());
                if is_marker {
                    *value = now.clone();
                }
            }
        }
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn get_one(&self, collection: &str, id: RecordId) -> Result<Option<JsonValue>, StoreError> {
        let map = self
            .collections
            .read()
            .map_err(|_| StoreError::WriteRejected("store lock poisoned".into()))?;
        Ok(map.get(collection).and_then(|docs| docs.get(&id)).cloned())
    }

    fn add_one(&self, collection: &str, mut fields: JsonValue) -> Result<RecordId, StoreError> {
        if !fields.is_object() {
            return Err(StoreError::Malformed(format!(
                "document for {collection} must be a JSON object"
            )));
        }
        Self::resolve_timestamps(&mut fields);

        let id = RecordId::new();
        fields["id"] = json!(id);

        {
            let mut map = self
                .collections
                .write()
                .map_err(|_| StoreError::WriteRejected("store lock poisoned".into()))?;
            map.entry(collection.to_string())
                .or_default()
                .insert(id, fields);
        }

        self.notify(collection);
        Ok(id)
    }

    fn update_one(
        &self,
        collection: &str,
        id: RecordId,
        mut patch: JsonValue,
    ) -> Result<(), StoreError> {
        Self::resolve_timestamps(&mut patch);
        let JsonValue::Object(patch_map) = patch else {
            return Err(StoreError::Malformed(format!(
                "patch for {collection}/{id} must be a JSON object"
            )));
        };

        {
            let mut map = self
                .collections
                .write()
                .map_err(|_| StoreError::WriteRejected("store lock poisoned".into()))?;
            let doc = map
                .get_mut(collection)
                .and_then(|docs| docs.get_mut(&id))
                .ok_or_else(|| StoreError::NotFound {
                    collection: collection.to_string(),
                    id,
                })?;
            let Some(doc_map) = doc.as_object_mut() else {
                return Err(StoreError::Malformed(format!(
                    "stored document {collection}/{id} is not an object"
                )));
            };
            for (key, value) in patch_map {
                doc_map.insert(key, value);
            }
        }

        self.notify(collection);
        Ok(())
    }

    fn query(&self, collection: &str, filter: &Filter) -> Result<Vec<JsonValue>, StoreError> {
        let map = self
            .collections
            .read()
            .map_err(|_| StoreError::WriteRejected("store lock poisoned".into()))?;
        Ok(Self::matching_set(&map, collection, filter))
    }

    fn watch(&self, collection: &str, filter: Filter) -> Subscription<Snapshot<JsonValue>> {
        let (tx, rx) = mpsc::channel();

        // The feed fires once at subscribe time with the current state.
        if let Ok(map) = self.collections.read() {
            let current = Self::matching_set(&map, collection, &filter);
            let _ = tx.send(Snapshot::new(current));
        }

        if let Ok(mut watchers) = self.watchers.lock() {
            watchers.push(Watcher {
                collection: collection.to_string(),
                filter,
                tx,
            });
        }

        Subscription::new(rx)
    }
}
