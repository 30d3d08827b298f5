//! Component A: the transform registry
//!
//! Owns every parked [`Transform`] by work-unit id. Blocker indices never
//! hold the transform itself, only the id to look it back up here, which is
//! what lets `Engine::close_update` pull a transform out, mutate it without
//! any borrow conflict against the rest of the engine, and put it back (or
//! release it) when done.

use crate::transform::Transform;
use dataflow_core::WorkUnitId;
use rustc_hash::FxHashMap;

#[derive(Default)]
pub(crate) struct TransformRegistry<W> {
    parked: FxHashMap<WorkUnitId, Transform<W>>,
}

impl<W> TransformRegistry<W> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        TransformRegistry {
            parked: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub(crate) fn contains(&self, wid: WorkUnitId) -> bool {
        self.parked.contains_key(&wid)
    }

    /// Admit a new transform. Returns `false` if `wid` was already parked.
    #[must_use]
    pub(crate) fn park(&mut self, wid: WorkUnitId, transform: Transform<W>) -> bool {
        use std::collections::hash_map::Entry;
        match self.parked.entry(wid) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(transform);
                true
            }
        }
    }

    /// Remove and return the transform for `wid`, if still parked. A miss
    /// here is expected, not exceptional: a blocker list can still name a
    /// work unit that a different close notification already released.
    pub(crate) fn take(&mut self, wid: WorkUnitId) -> Option<Transform<W>> {
        self.parked.remove(&wid)
    }

    /// Re-park a transform that is still blocked after an update.
    pub(crate) fn put(&mut self, wid: WorkUnitId, transform: Transform<W>) {
        self.parked.insert(wid, transform);
    }

    pub(crate) fn len(&self) -> usize {
        self.parked.len()
    }

    /// Consume the registry, returning the names of every transform still
    /// parked. Used only by `Engine::finalize`'s diagnostic leak report.
    pub(crate) fn into_names(self) -> Vec<String> {
        self.parked.into_values().map(|t| t.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataflow_core::WorkUnit;

    struct Task(u64);
    impl WorkUnit for Task {
        fn work_unit_id(&self) -> WorkUnitId {
            WorkUnitId::new(self.0)
        }
    }

    #[test]
    fn park_rejects_duplicate_work_unit_id() {
        let mut reg = TransformRegistry::with_capacity(0);
        let wid = WorkUnitId::new(1);
        assert!(reg.park(wid, Transform::new("t".into(), Task(1), vec![], vec![])));
        assert!(!reg.park(wid, Transform::new("t".into(), Task(1), vec![], vec![])));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn take_on_unparked_id_returns_none() {
        let mut reg: TransformRegistry<Task> = TransformRegistry::with_capacity(0);
        assert!(reg.take(WorkUnitId::new(99)).is_none());
    }

    #[test]
    fn take_then_put_round_trips() {
        let mut reg = TransformRegistry::with_capacity(0);
        let wid = WorkUnitId::new(1);
        reg.park(wid, Transform::new("t".into(), Task(1), vec![], vec![]));
        let t = reg.take(wid).expect("parked");
        assert!(!reg.contains(wid));
        reg.put(wid, t);
        assert!(reg.contains(wid));
    }
}
