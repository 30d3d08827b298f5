//! Component C: the id+subscript blocker index
//!
//! Same shape as [`crate::id_blockers::IdBlockerIndex`] but keyed on the
//! composite `(id, subscript)` byte encoding, for rules blocked on a single
//! element of a datum rather than the whole thing.

use dataflow_core::{CompositeKey, WorkUnitId};
use rustc_hash::FxHashMap;

#[derive(Default)]
pub(crate) struct IdSubBlockerIndex {
    blocked: FxHashMap<CompositeKey, Vec<WorkUnitId>>,
}

impl IdSubBlockerIndex {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        IdSubBlockerIndex {
            blocked: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub(crate) fn add(&mut self, key: CompositeKey, wid: WorkUnitId) {
        self.blocked.entry(key).or_default().push(wid);
    }

    pub(crate) fn take(&mut self, key: &CompositeKey) -> Vec<WorkUnitId> {
        self.blocked.remove(key).unwrap_or_default()
    }

    pub(crate) fn is_blocked(&self, key: &CompositeKey) -> bool {
        self.blocked.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataflow_core::{DatumId, Subscript};

    fn key(id: i64, sub: &str) -> CompositeKey {
        CompositeKey::new(DatumId::new(id), &Subscript::from(sub))
    }

    #[test]
    fn take_drains_all_blockers_for_a_key() {
        let mut idx = IdSubBlockerIndex::with_capacity(0);
        let k = key(1, "a");
        idx.add(k.clone(), WorkUnitId::new(1));
        idx.add(k.clone(), WorkUnitId::new(2));
        let mut got = idx.take(&k);
        got.sort();
        assert_eq!(got, vec![WorkUnitId::new(1), WorkUnitId::new(2)]);
        assert!(!idx.is_blocked(&k));
    }

    #[test]
    fn distinct_subscripts_on_same_id_do_not_interfere() {
        let mut idx = IdSubBlockerIndex::with_capacity(0);
        let a = key(1, "a");
        let b = key(1, "b");
        idx.add(a.clone(), WorkUnitId::new(1));
        idx.add(b.clone(), WorkUnitId::new(2));
        assert_eq!(idx.take(&a), vec![WorkUnitId::new(1)]);
        assert_eq!(idx.take(&b), vec![WorkUnitId::new(2)]);
    }
}
