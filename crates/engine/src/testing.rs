//! In-memory mock [`DataService`] for exercising the engine without a real
//! data store
//!
//! # Example
//!
//! ```ignore
//! use dataflow_engine::testing::MockDataService;
//! use dataflow_engine::{Engine, EngineConfig};
//! use dataflow_core::{DatumId, ServerRank};
//!
//! let rank = ServerRank::new(0);
//! let mut service = MockDataService::new(rank);
//! service.close(DatumId::new(1)); // pre-close a datum before any rule subscribes to it
//! let mut engine = Engine::new(service, EngineConfig::new(rank));
//! ```

use crate::service::{DataService, ServiceError, SubscribeOutcome};
use dataflow_core::{CompositeKey, DatumId, ServerRank, Subscript};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared call-recording handle, cloneable and outliving a `MockDataService`
/// moved into an `Engine` — lets a test assert on subscription counts after
/// ownership of the service itself has passed to the engine under test.
#[derive(Default, Clone)]
pub struct CallLog(Rc<RefCell<CallLogInner>>);

#[derive(Default)]
struct CallLogInner {
    local: Vec<(DatumId, Option<Subscript>)>,
    remote: Vec<(ServerRank, DatumId, Option<Subscript>)>,
}

impl CallLog {
    /// Every `(id, subscript)` pair subscribed to via the local path, in
    /// call order.
    pub fn local_subscribe_calls(&self) -> Vec<(DatumId, Option<Subscript>)> {
        self.0.borrow().local.clone()
    }

    /// Every `(server, id, subscript)` triple subscribed to via the remote
    /// path, in call order.
    pub fn remote_subscribe_calls(&self) -> Vec<(ServerRank, DatumId, Option<Subscript>)> {
        self.0.borrow().remote.clone()
    }
}

/// A single-process, in-memory stand-in for the real data-item store.
///
/// Every datum not explicitly `declare`d is treated as owned by the local
/// rank and open (subscriptions on it report `Pending`). Calling `close`/
/// `sub_close` on the mock itself only updates the mock's own bookkeeping;
/// it does not drive the engine — tests call `Engine::close`/`sub_close`
/// separately once they've arranged for the mock to report the matching
/// state.
pub struct MockDataService {
    local_rank: ServerRank,
    owners: FxHashMap<DatumId, ServerRank>,
    closed_ids: FxHashSet<DatumId>,
    closed_idsubs: FxHashSet<CompositeKey>,
    log: CallLog,
}

impl MockDataService {
    /// Construct a mock that treats `local_rank` as the calling engine's own
    /// rank.
    pub fn new(local_rank: ServerRank) -> Self {
        MockDataService {
            local_rank,
            owners: FxHashMap::default(),
            closed_ids: FxHashSet::default(),
            closed_idsubs: FxHashSet::default(),
            log: CallLog::default(),
        }
    }

    /// Mark `id` as owned by `owner` rather than the local rank.
    pub fn set_owner(&mut self, id: DatumId, owner: ServerRank) {
        self.owners.insert(id, owner);
    }

    /// Mark `id` closed as a whole datum.
    pub fn close(&mut self, id: DatumId) {
        self.closed_ids.insert(id);
    }

    /// Mark `(id, subscript)` closed.
    pub fn sub_close(&mut self, id: DatumId, subscript: &Subscript) {
        self.closed_idsubs.insert(CompositeKey::new(id, subscript));
    }

    /// A cloneable handle onto this mock's call log, usable to assert on
    /// subscribe-call counts even after the mock itself has been moved into
    /// an `Engine`.
    pub fn call_log(&self) -> CallLog {
        self.log.clone()
    }
}

impl DataService for MockDataService {
    fn locate(&self, id: DatumId) -> ServerRank {
        self.owners.get(&id).copied().unwrap_or(self.local_rank)
    }

    fn local_subscribe(
        &mut self,
        id: DatumId,
        subscript: Option<&Subscript>,
        _listener_rank: ServerRank,
    ) -> Result<SubscribeOutcome, ServiceError> {
        self.log.0.borrow_mut().local.push((id, subscript.cloned()));
        Ok(self.outcome_for(id, subscript))
    }

    fn remote_subscribe(
        &mut self,
        server: ServerRank,
        id: DatumId,
        subscript: Option<&Subscript>,
    ) -> Result<SubscribeOutcome, ServiceError> {
        self.log
            .0
            .borrow_mut()
            .remote
            .push((server, id, subscript.cloned()));
        Ok(self.outcome_for(id, subscript))
    }
}

impl MockDataService {
    fn outcome_for(&self, id: DatumId, subscript: Option<&Subscript>) -> SubscribeOutcome {
        let closed = match subscript {
            None => self.closed_ids.contains(&id),
            Some(sub) => self.closed_idsubs.contains(&CompositeKey::new(id, sub)),
        };
        if closed {
            SubscribeOutcome::NotFound
        } else {
            SubscribeOutcome::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_datum_reports_not_found() {
        let mut svc = MockDataService::new(ServerRank::new(0));
        let id = DatumId::new(1);
        svc.close(id);
        assert_eq!(svc.outcome_for(id, None), SubscribeOutcome::NotFound);
    }

    #[test]
    fn open_datum_reports_pending() {
        let svc = MockDataService::new(ServerRank::new(0));
        assert_eq!(svc.outcome_for(DatumId::new(1), None), SubscribeOutcome::Pending);
    }

    #[test]
    fn remote_owner_routes_through_locate() {
        let mut svc = MockDataService::new(ServerRank::new(0));
        let id = DatumId::new(1);
        svc.set_owner(id, ServerRank::new(7));
        assert_eq!(svc.locate(id), ServerRank::new(7));
    }
}
