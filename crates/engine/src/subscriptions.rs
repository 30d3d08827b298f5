//! Component D: outstanding-subscription dedup sets
//!
//! Two sets, `ids` and `idsubs`, both `rustc_hash::FxHashSet`. Consulted
//! before issuing a subscription to the data service: a hit means some
//! other transform already registered interest in this datum (or
//! datum+subscript), and its eventual close notification will fan out to
//! every blocked transform, so there is nothing more to do. A miss that the
//! data service confirms as still-pending is inserted — but only on the
//! remote path; see [`crate::service::DataService`] for why the local path
//! does not duplicate the data store's own listener bookkeeping here.

use dataflow_core::{CompositeKey, DatumId};
use rustc_hash::FxHashSet;

#[derive(Default)]
pub(crate) struct SubscriptionSets {
    ids: FxHashSet<DatumId>,
    idsubs: FxHashSet<CompositeKey>,
}

impl SubscriptionSets {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        SubscriptionSets {
            ids: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            idsubs: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub(crate) fn contains_id(&self, id: DatumId) -> bool {
        self.ids.contains(&id)
    }

    pub(crate) fn contains_idsub(&self, key: &CompositeKey) -> bool {
        self.idsubs.contains(key)
    }

    pub(crate) fn insert_id(&mut self, id: DatumId) {
        self.ids.insert(id);
    }

    pub(crate) fn insert_idsub(&mut self, key: CompositeKey) {
        self.idsubs.insert(key);
    }

    /// Remove `id`'s dedup marker, returning whether it was present.
    pub(crate) fn remove_id(&mut self, id: DatumId) -> bool {
        self.ids.remove(&id)
    }

    /// Remove `key`'s dedup marker, returning whether it was present.
    pub(crate) fn remove_idsub(&mut self, key: &CompositeKey) -> bool {
        self.idsubs.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataflow_core::Subscript;

    #[test]
    fn insert_then_contains_reports_the_marker() {
        let mut subs = SubscriptionSets::with_capacity(0);
        let id = DatumId::new(1);
        assert!(!subs.contains_id(id));
        subs.insert_id(id);
        assert!(subs.contains_id(id));
    }

    #[test]
    fn remove_reports_prior_presence() {
        let mut subs = SubscriptionSets::with_capacity(0);
        let id = DatumId::new(1);
        assert!(!subs.remove_id(id));
        subs.insert_id(id);
        assert!(subs.remove_id(id));
        assert!(!subs.contains_id(id));
    }

    #[test]
    fn id_and_idsub_markers_are_independent() {
        let mut subs = SubscriptionSets::with_capacity(0);
        let id = DatumId::new(1);
        let key = CompositeKey::new(id, &Subscript::from("x"));
        subs.insert_id(id);
        assert!(subs.contains_id(id));
        assert!(!subs.contains_idsub(&key));
        subs.insert_idsub(key.clone());
        assert!(subs.contains_idsub(&key));
    }
}
