//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// value objects with the same values are the same value. `Amount` and
/// `TokenNumber` are the canonical instances in this workspace: a token
/// number carries no identity of its own, only its printed value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
