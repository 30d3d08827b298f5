//! # dataflow-rules
//!
//! The local dataflow rule engine of a distributed task-parallel runtime.
//!
//! Workers submit *rules* naming a work unit and the data items it depends
//! on; the engine holds the work unit until every input has closed, then
//! hands it back for dispatch. This crate is a thin facade: the data model
//! lives in [`dataflow_core`], the indices and admission/progress/close
//! logic live in [`dataflow_engine`].
//!
//! ```no_run
//! use dataflow_rules::{DatumId, Engine, EngineConfig, ServerRank, WorkUnit, WorkUnitId};
//! use dataflow_rules::testing::MockDataService;
//!
//! struct Task(u64);
//! impl WorkUnit for Task {
//!     fn work_unit_id(&self) -> WorkUnitId { WorkUnitId::new(self.0) }
//! }
//!
//! let rank = ServerRank::new(0);
//! let service = MockDataService::new(rank);
//! let mut engine = Engine::new(service, EngineConfig::new(rank));
//!
//! let ready = engine.submit_rule("t0", vec![DatumId::new(42)], vec![], Task(1)).unwrap();
//! assert!(ready.is_none());
//!
//! let released = engine.close(DatumId::new(42)).unwrap();
//! assert_eq!(released.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use dataflow_engine::{
    config::EngineConfig, debug, service, testing, DataService, Engine, ServiceError,
    SubscribeOutcome, TransformStatus,
};

pub use dataflow_core::{
    CompositeKey, DatumId, Error, ErrorCode, IdSub, Result, ServerRank, Subscript, WorkUnit,
    WorkUnitId, NULL_ID,
};
