//! The dataflow rule engine
//!
//! Five in-memory components compose the engine:
//!
//! | Component | Type | Responsibility |
//! |---|---|---|
//! | A | [`registry::TransformRegistry`] | Rules still awaiting any input, keyed by work-unit id. |
//! | B | [`id_blockers::IdBlockerIndex`] | Transforms blocked on a whole datum. |
//! | C | [`idsub_blockers::IdSubBlockerIndex`] | Transforms blocked on a (datum, subscript) pair. |
//! | D | [`subscriptions::SubscriptionSets`] | Outstanding-subscription dedup. |
//! | E | [`engine::Engine`] | Admission, progress, subscribe, and close-driven release. |
//!
//! The engine is single-threaded and cooperative: every
//! method call runs to completion before the next one starts, and the only
//! suspension points are synchronous calls into the caller-supplied
//! [`service::DataService`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bitset;
pub mod config;
pub mod debug;
pub mod engine;
mod id_blockers;
mod idsub_blockers;
mod registry;
pub mod service;
pub mod testing;
mod subscriptions;
mod transform;

pub use config::EngineConfig;
pub use engine::Engine;
pub use service::{DataService, ServiceError, SubscribeOutcome};
pub use transform::TransformStatus;

pub use dataflow_core::{
    CompositeKey, DatumId, Error, ErrorCode, IdSub, Result, ServerRank, Subscript, WorkUnit,
    WorkUnitId, NULL_ID,
};
