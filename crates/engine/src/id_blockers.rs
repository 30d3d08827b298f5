//! Component B: the whole-datum blocker index
//!
//! Maps a [`DatumId`] to the work units blocked on that datum closing in
//! full, independent of any subscript. Many-to-many: one id can block many
//! transforms, and one transform can appear under many ids.

use dataflow_core::{DatumId, WorkUnitId};
use rustc_hash::FxHashMap;

#[derive(Default)]
pub(crate) struct IdBlockerIndex {
    blocked: FxHashMap<DatumId, Vec<WorkUnitId>>,
}

impl IdBlockerIndex {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        IdBlockerIndex {
            blocked: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Record that `wid` is blocked on `id`.
    pub(crate) fn add(&mut self, id: DatumId, wid: WorkUnitId) {
        self.blocked.entry(id).or_default().push(wid);
    }

    /// Remove and return every work unit blocked on `id`. A subsequent close
    /// notification for the same `id` finds nothing, which is correct: the
    /// blocklist was fully drained the first time.
    pub(crate) fn take(&mut self, id: DatumId) -> Vec<WorkUnitId> {
        self.blocked.remove(&id).unwrap_or_default()
    }

    pub(crate) fn is_blocked(&self, id: DatumId) -> bool {
        self.blocked.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_drains_all_blockers_for_an_id() {
        let mut idx = IdBlockerIndex::with_capacity(0);
        let id = DatumId::new(1);
        idx.add(id, WorkUnitId::new(1));
        idx.add(id, WorkUnitId::new(2));
        let mut got = idx.take(id);
        got.sort();
        assert_eq!(got, vec![WorkUnitId::new(1), WorkUnitId::new(2)]);
        assert!(!idx.is_blocked(id));
    }

    #[test]
    fn take_on_unknown_id_is_empty_not_an_error() {
        let mut idx = IdBlockerIndex::with_capacity(0);
        assert!(idx.take(DatumId::new(404)).is_empty());
    }

    #[test]
    fn second_take_after_drain_is_empty() {
        let mut idx = IdBlockerIndex::with_capacity(0);
        let id = DatumId::new(1);
        idx.add(id, WorkUnitId::new(1));
        idx.take(id);
        assert!(idx.take(id).is_empty());
    }

    #[test]
    fn distinct_ids_do_not_interfere() {
        let mut idx = IdBlockerIndex::with_capacity(0);
        idx.add(DatumId::new(1), WorkUnitId::new(1));
        idx.add(DatumId::new(2), WorkUnitId::new(2));
        assert_eq!(idx.take(DatumId::new(1)), vec![WorkUnitId::new(1)]);
        assert_eq!(idx.take(DatumId::new(2)), vec![WorkUnitId::new(2)]);
    }
}
