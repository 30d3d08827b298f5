//! The engine's boundary to the external data-item store
//!
//! The engine never stores data itself; it only needs to know who owns a
//! datum and whether a close notification for it is still pending. Callers
//! implement [`DataService`] over whatever transport their data store
//! actually uses (in-process, RPC, or both).

use dataflow_core::{DatumId, ServerRank, Subscript};
use thiserror::Error;

/// The outcome of a subscribe call against the data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// The datum (or id+subscript pair) has not closed yet; the caller will
    /// receive a close notification later.
    Pending,
    /// The datum is already closed, or was garbage-collected before the
    /// subscription could be registered — the two are indistinguishable and
    /// treated identically.
    NotFound,
}

/// Failures the data service can report back to the engine.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service rejected the request as malformed.
    #[error("data service rejected request: {0}")]
    Invalid(String),
    /// Any other downstream failure (RPC timeout, storage error, etc).
    #[error("data service failure: {0}")]
    Failure(String),
}

/// The engine's trait boundary to the external data-item store and its
/// locate/subscribe RPCs.
///
/// `locate` is a pure function of `id`; the two subscribe methods are
/// synchronous from the engine's point of view even though `remote_subscribe`
/// may block on network I/O.
pub trait DataService {
    /// The server that owns `id`.
    fn locate(&self, id: DatumId) -> ServerRank;

    /// Subscribe to `id` (optionally narrowed to `subscript`) against the
    /// locally-owned data store.
    ///
    /// The local store maintains its own per-datum listener list and does
    /// not tolerate a duplicate subscriber from the same rank, so the
    /// engine's own dedup set is consulted before this call but never
    /// updated from it.
    fn local_subscribe(
        &mut self,
        id: DatumId,
        subscript: Option<&Subscript>,
        listener_rank: ServerRank,
    ) -> Result<SubscribeOutcome, ServiceError>;

    /// Subscribe to `id` (optionally narrowed to `subscript`) on a remote
    /// server via RPC.
    ///
    /// Unlike [`Self::local_subscribe`], the engine's dedup set is the sole
    /// authority for the remote path and is updated on a confirmed pending
    /// subscription.
    fn remote_subscribe(
        &mut self,
        server: ServerRank,
        id: DatumId,
        subscript: Option<&Subscript>,
    ) -> Result<SubscribeOutcome, ServiceError>;
}
