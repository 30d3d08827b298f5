//! Component E: rule admission, progress, subscription, and close-driven release

use crate::config::EngineConfig;
use crate::id_blockers::IdBlockerIndex;
use crate::idsub_blockers::IdSubBlockerIndex;
use crate::registry::TransformRegistry;
use crate::service::{DataService, SubscribeOutcome};
use crate::subscriptions::SubscriptionSets;
use crate::transform::Transform;
use dataflow_core::{CompositeKey, DatumId, Error, IdSub, Result, Subscript, WorkUnit, WorkUnitId};

/// The dataflow rule engine.
///
/// Generic over the caller's work-unit payload `W` and its data service
/// implementation `S`. Construction takes ownership of `S`; there is no
/// global or process-wide instance, so a process that needs more than one
/// independent rule graph (tests, for instance) can simply construct more
/// than one `Engine`.
pub struct Engine<W, S> {
    registry: TransformRegistry<W>,
    id_blockers: IdBlockerIndex,
    idsub_blockers: IdSubBlockerIndex,
    subscriptions: SubscriptionSets,
    service: S,
    local_rank: dataflow_core::ServerRank,
}

impl<W, S> Engine<W, S>
where
    W: WorkUnit,
    S: DataService,
{
    /// Construct a new engine over `service`, sized per `config`.
    pub fn new(service: S, config: EngineConfig) -> Self {
        let dedup_capacity = config.expected_id_blockers + config.expected_idsub_blockers;
        Engine {
            registry: TransformRegistry::with_capacity(config.expected_transforms),
            id_blockers: IdBlockerIndex::with_capacity(config.expected_id_blockers),
            idsub_blockers: IdSubBlockerIndex::with_capacity(config.expected_idsub_blockers),
            subscriptions: SubscriptionSets::with_capacity(dedup_capacity),
            service,
            local_rank: config.local_rank,
        }
    }

    /// Admit a rule. `name` is a diagnostic label only, used in
    /// [`Engine::finalize`]'s leak report. On `Ok(Some(work))` every input
    /// was already closed and the caller owns `work` for immediate
    /// dispatch; on `Ok(None)` the rule is parked and `work` will come back
    /// through a later `close`/`sub_close` call.
    pub fn submit_rule(
        &mut self,
        name: impl Into<String>,
        td_inputs: Vec<DatumId>,
        ts_inputs: Vec<IdSub>,
        work: W,
    ) -> Result<Option<W>> {
        if td_inputs.iter().any(DatumId::is_null) || ts_inputs.iter().any(|ts| ts.id.is_null()) {
            return Err(Error::Invalid("null datum id in rule inputs".into()));
        }

        let wid = work.work_unit_id();
        let name = name.into();
        tracing::trace!(
            work_unit = %wid,
            rule = %name,
            td_inputs = td_inputs.len(),
            ts_inputs = ts_inputs.len(),
            "submitting rule"
        );

        let mut t = Transform::new(name, work, td_inputs, ts_inputs);
        self.rule_inputs(wid, &t);

        if self.progress(&mut t)? {
            if !self.registry.park(wid, t) {
                return Err(Error::AlreadyExists(wid));
            }
            Ok(None)
        } else {
            Ok(t.work.take())
        }
    }

    /// Notify the engine that `id` has closed as a whole datum, returning
    /// every work unit now ready to run as a result.
    pub fn close(&mut self, id: DatumId) -> Result<Vec<W>> {
        if id.is_null() {
            return Err(Error::Invalid("null datum id in close".into()));
        }
        // The id dedup set only ever gained an entry for `id` if some
        // blocked transform's subscription went out over the *remote*
        // path (§4.E.2's asymmetric dedup) — a locally-owned datum with
        // blockers never appears here, so this is a best-effort removal,
        // not an invariant to assert on.
        self.subscriptions.remove_id(id);

        let blockers = self.id_blockers.take(id);
        if blockers.is_empty() {
            tracing::trace!(id = %id, "close on id with no waiters");
            return Ok(Vec::new());
        }
        self.close_update(blockers, id, None)
    }

    /// Notify the engine that `(id, subscript)` has closed, returning every
    /// work unit now ready to run as a result.
    pub fn sub_close(&mut self, id: DatumId, subscript: Subscript) -> Result<Vec<W>> {
        if id.is_null() {
            return Err(Error::Invalid("null datum id in sub_close".into()));
        }
        let key = CompositeKey::new(id, &subscript);
        self.subscriptions.remove_idsub(&key);

        let blockers = self.idsub_blockers.take(&key);
        if blockers.is_empty() {
            tracing::trace!(id = %id, "sub_close on id+subscript with no waiters");
            return Ok(Vec::new());
        }
        self.close_update(blockers, id, Some(subscript))
    }

    /// Consume the engine, returning the names of any transforms still
    /// parked. Diagnostic only: every remaining `Transform` (and any work it
    /// still owns) is dropped as `self` goes out of scope.
    pub fn finalize(self) -> Vec<String> {
        let leaked: Vec<String> = self.registry.into_names();
        if !leaked.is_empty() {
            tracing::warn!(count = leaked.len(), rules = ?leaked, "engine finalized with transforms still parked");
        }
        leaked
    }

    fn rule_inputs(&mut self, wid: WorkUnitId, t: &Transform<W>) {
        for &id in &t.td_inputs {
            self.id_blockers.add(id, wid);
        }
        for ts in &t.ts_inputs {
            self.idsub_blockers.add(ts.composite_key(), wid);
        }
    }

    /// Subscribe to `id` (optionally narrowed to `subscript`). Returns
    /// `true` iff the caller must wait for a future close.
    fn subscribe(&mut self, id: DatumId, subscript: Option<&Subscript>) -> Result<bool> {
        if id.is_null() {
            return Err(Error::Invalid("null datum id in subscribe".into()));
        }

        let key = subscript.map(|s| CompositeKey::new(id, s));
        let already_subscribed = match &key {
            None => self.subscriptions.contains_id(id),
            Some(k) => self.subscriptions.contains_idsub(k),
        };
        if already_subscribed {
            return Ok(true);
        }

        let owner = self.service.locate(id);
        let local = owner == self.local_rank;
        let outcome = if local {
            self.service.local_subscribe(id, subscript, self.local_rank)
        } else {
            self.service.remote_subscribe(owner, id, subscript)
        }
        .map_err(|e| Error::Unknown(e.to_string()))?;

        match outcome {
            SubscribeOutcome::NotFound => Ok(false),
            SubscribeOutcome::Pending => {
                // The local data store records its own listener list; only
                // the remote path needs this engine's dedup set as the
                // authority.
                if !local {
                    match key {
                        None => self.subscriptions.insert_id(id),
                        Some(k) => self.subscriptions.insert_idsub(k),
                    }
                }
                Ok(true)
            }
        }
    }

    /// Walk `t.blocker` forward, subscribing to each not-yet-closed input in
    /// turn. Returns `true` iff an input is still pending.
    fn progress(&mut self, t: &mut Transform<W>) -> Result<bool> {
        let total = t.total_slots();
        while t.blocker < total {
            if t.closed.test(t.blocker) {
                t.blocker += 1;
                continue;
            }

            let nt = t.td_inputs.len();
            let pending = if t.blocker < nt {
                self.subscribe(t.td_inputs[t.blocker], None)?
            } else {
                let ts = &t.ts_inputs[t.blocker - nt];
                self.subscribe(ts.id, Some(&ts.subscript))?
            };

            if pending {
                return Ok(true);
            }
            t.closed.set(t.blocker);
            t.blocker += 1;
        }
        Ok(false)
    }

    fn close_update(
        &mut self,
        blockers: Vec<WorkUnitId>,
        id: DatumId,
        sub: Option<Subscript>,
    ) -> Result<Vec<W>> {
        let mut ready = Vec::with_capacity(16);

        for wid in blockers {
            let Some(mut t) = self.registry.take(wid) else {
                tracing::trace!(
                    work_unit = %wid,
                    "blocker list named a transform already released elsewhere, skipping"
                );
                continue;
            };

            match &sub {
                None => {
                    let nt = t.td_inputs.len();
                    for i in t.blocker.min(nt)..nt {
                        if t.td_inputs[i] == id {
                            t.closed.set(Transform::<W>::td_slot(i));
                        }
                    }
                }
                Some(sub) => {
                    let nt = t.td_inputs.len();
                    let ns = t.ts_inputs.len();
                    let first = t.blocker.saturating_sub(nt).min(ns);
                    for j in first..ns {
                        if t.ts_inputs[j].id == id && &t.ts_inputs[j].subscript == sub {
                            let slot = t.ts_slot(j);
                            t.closed.set(slot);
                        }
                    }
                }
            }

            if self.progress(&mut t)? {
                self.registry.put(wid, t);
            } else if let Some(w) = t.work.take() {
                ready.push(w);
            }
        }

        Ok(ready)
    }
}
