use crate::snapshot::Snapshot;

/// A projector turns a full feed snapshot into derived view state.
///
/// Projectors are **pure**: the output is a total function of the snapshot
/// (and whatever viewer context the projector was constructed with). There is
/// no accumulation across calls: every delivery replaces the previous view
/// entirely, which keeps the view correct under missed or duplicated
/// deliveries.
///
/// This is the read-model half of the system: the store owns the documents,
/// projectors own nothing and can be re-run against any snapshot (including
/// in tests, with no live feed at all).
pub trait Projector {
    /// Document type this projector consumes.
    type Doc;
    /// Derived view state this projector produces.
    type View;

    /// Recompute the entire view from one snapshot.
    fn project(&self, snapshot: &Snapshot<Self::Doc>) -> Self::View;
}
