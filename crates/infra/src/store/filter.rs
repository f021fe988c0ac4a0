//! Field filters for queries and watches.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Filter criteria for document queries and watches.
///
/// The store's query surface is deliberately small: match everything, match a
/// field by equality, or match a field against a set of values. Compound
/// predicates are out of scope; the dashboard never needs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Every document in the collection.
    All,
    /// Documents whose `field` equals `value`.
    Eq { field: String, value: JsonValue },
    /// Documents whose `field` is one of `values`.
    In { field: String, values: Vec<JsonValue> },
}

impl Filter {
    pub fn all() -> Self {
        Self::All
    }

    pub fn field_eq(field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn field_in(
        field: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<JsonValue>>,
    ) -> Self {
        Self::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a document matches. A missing field never matches `Eq`/`In`.
    pub fn matches(&self, doc: &JsonValue) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq { field, value } => doc.get(field) == Some(value),
            Filter::In { field, values } => {
                doc.get(field).is_some_and(|v| values.contains(v))
            }
        }
    }
}
