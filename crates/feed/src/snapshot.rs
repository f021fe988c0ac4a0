use std::sync::Arc;

/// A complete, self-consistent set of documents delivered on every change.
///
/// A snapshot **supersedes** the previous one entirely; consumers must not
/// merge it with earlier deliveries. Cloning is cheap (shared backing
/// storage), so one snapshot can fan out to many subscribers.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    docs: Arc<[T]>,
}

impl<T> Snapshot<T> {
    pub fn new(docs: Vec<T>) -> Self {
        Self { docs: docs.into() }
    }

    /// The empty set (no matching documents).
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.docs.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.docs
    }
}

impl<T> From<Vec<T>> for Snapshot<T> {
    fn from(docs: Vec<T>) -> Self {
        Self::new(docs)
    }
}

impl<'a, T> IntoIterator for &'a Snapshot<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_has_no_documents() {
        let snap: Snapshot<u32> = Snapshot::empty();
        assert!(snap.is_empty());
        assert_eq!(snap.len(), 0);
    }

    #[test]
    fn clones_share_the_same_backing_set() {
        let snap = Snapshot::new(vec![1, 2, 3]);
        let other = snap.clone();
        assert_eq!(snap.as_slice(), other.as_slice());
        assert_eq!(other.iter().sum::<u32>(), 6);
    }
}
