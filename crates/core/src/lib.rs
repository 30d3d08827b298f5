//! Data model for the dataflow rule engine
//!
//! This crate defines the types the rule engine (`dataflow-engine`) reasons
//! about, with no knowledge of indices, subscriptions, or the data service:
//! - `DatumId` / `NULL_ID`: the identity of a data item
//! - `Subscript`: a binary-safe selector into a composite datum
//! - `IdSub` / `CompositeKey`: the (id, subscript) pair and its stable wire
//!   encoding
//! - `vint`: the variable-length signed integer codec the composite-key
//!   format is built on
//! - `WorkUnit` / `WorkUnitId`: the opaque task handle the engine holds
//! - `Error` / `ErrorCode`: the crate's error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod datum;
pub mod error;
pub mod idsub;
pub mod rank;
pub mod subscript;
pub mod vint;
pub mod work;

pub use datum::{DatumId, NULL_ID};
pub use error::{Error, ErrorCode, Result};
pub use idsub::{CompositeKey, IdSub};
pub use rank::ServerRank;
pub use subscript::Subscript;
pub use work::{WorkUnit, WorkUnitId};
