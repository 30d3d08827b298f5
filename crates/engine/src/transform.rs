//! A single admitted rule, parked until every input closes

use crate::bitset::Bitset;
use dataflow_core::{DatumId, IdSub, WorkUnit};

/// Where a parked [`Transform`] stands relative to its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStatus {
    /// At least one input is still outstanding.
    Blocked,
    /// Every input has closed; the work unit is ready for release.
    Ready,
}

/// A rule admitted via `Engine::submit_rule`, parked until every input in
/// its blocklist has closed.
///
/// Inputs are split into whole-datum (`td_inputs`) and id+subscript
/// (`ts_inputs`) lists, concatenated into one logical slot space
/// `[0, td_inputs.len() + ts_inputs.len())` for the readiness bitmap and
/// the `blocker` scan cursor. `work` is `Some` from admission until
/// release, at which point `Engine::close_update` takes it out via
/// [`Option::take`] and hands ownership to the caller's ready list.
pub(crate) struct Transform<W> {
    pub(crate) name: String,
    pub(crate) td_inputs: Vec<DatumId>,
    pub(crate) ts_inputs: Vec<IdSub>,
    pub(crate) closed: Bitset,
    /// Monotonic scan cursor into the combined slot space. A pure
    /// optimization, never a closedness oracle: slots at or beyond
    /// `blocker` may already be marked closed by an out-of-order close
    /// notification, and `progress` re-tests the bit before re-subscribing.
    pub(crate) blocker: usize,
    pub(crate) work: Option<W>,
}

impl<W: WorkUnit> Transform<W> {
    /// Park `work` behind `td_inputs` and `ts_inputs`. Both may be empty.
    pub(crate) fn new(name: String, work: W, td_inputs: Vec<DatumId>, ts_inputs: Vec<IdSub>) -> Self {
        let total = td_inputs.len() + ts_inputs.len();
        Transform {
            name,
            td_inputs,
            ts_inputs,
            closed: Bitset::new(total),
            blocker: 0,
            work: Some(work),
        }
    }

    pub(crate) fn total_slots(&self) -> usize {
        self.td_inputs.len() + self.ts_inputs.len()
    }

    /// The slot index of whole-datum input `i`.
    pub(crate) fn td_slot(i: usize) -> usize {
        i
    }

    /// The slot index of id+subscript input `j`.
    pub(crate) fn ts_slot(&self, j: usize) -> usize {
        self.td_inputs.len() + j
    }

    pub(crate) fn status(&self) -> TransformStatus {
        if self.blocker >= self.total_slots() {
            TransformStatus::Ready
        } else {
            TransformStatus::Blocked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataflow_core::{DatumId, Subscript, WorkUnitId};

    struct Task(u64);
    impl WorkUnit for Task {
        fn work_unit_id(&self) -> WorkUnitId {
            WorkUnitId::new(self.0)
        }
    }

    #[test]
    fn empty_inputs_are_immediately_ready() {
        let t = Transform::new("t".into(), Task(1), vec![], vec![]);
        assert_eq!(t.status(), TransformStatus::Ready);
    }

    #[test]
    fn blocked_until_cursor_reaches_total_slots() {
        let t = Transform::new(
            "t".into(),
            Task(1),
            vec![DatumId::new(1), DatumId::new(2)],
            vec![IdSub::new(DatumId::new(3), Subscript::from("x"))],
        );
        assert_eq!(t.total_slots(), 3);
        assert_eq!(t.status(), TransformStatus::Blocked);
    }

    #[test]
    fn ts_slot_offsets_past_td_inputs() {
        let t = Transform::new(
            "t".into(),
            Task(1),
            vec![DatumId::new(1), DatumId::new(2)],
            vec![IdSub::new(DatumId::new(3), Subscript::from("x"))],
        );
        assert_eq!(Transform::<Task>::td_slot(1), 1);
        assert_eq!(t.ts_slot(0), 2);
    }
}
