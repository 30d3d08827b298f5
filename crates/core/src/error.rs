//! Error types for the dataflow rule engine
//!
//! `Error` is the ergonomic Rust error every fallible operation in this
//! workspace returns. [`ErrorCode`] is the stable wire-level taxonomy the
//! engine shares with its external collaborators: the data service, the
//! executor, and the refcount collector. Only a subset of `ErrorCode` is
//! ever produced by this crate; the rest exist for parity with the larger
//! system this engine plugs into.

use crate::work::WorkUnitId;
use thiserror::Error;

/// Result type alias for dataflow rule engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the dataflow rule engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A null datum id or other structurally invalid argument was passed.
    #[error("invalid argument: {0}")]
    Invalid(String),

    /// A work unit id was already parked in the transform registry.
    #[error("work unit {0} is already parked")]
    AlreadyExists(WorkUnitId),

    /// The data service reported a failure other than "not found".
    #[error("data service error: {0}")]
    Unknown(String),

    /// Reserved for parity with the external error taxonomy.
    ///
    /// Ordinary `Vec`/`String`/hash-map growth in this crate aborts the
    /// process on allocation failure rather than returning a `Result`, so
    /// nothing in the current code path actually constructs this variant.
    #[error("out of memory")]
    OutOfMemory,

    /// Reserved for parity with the external error taxonomy. Structurally
    /// unreachable through this crate's safe API: there is no way to call
    /// an `Engine` method without first constructing an `Engine`.
    #[error("engine not initialized")]
    Uninitialized,
}

impl Error {
    /// Map this error to its stable wire-level [`ErrorCode`].
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Invalid(_) => ErrorCode::Invalid,
            Error::AlreadyExists(_) => ErrorCode::DoubleDeclare,
            Error::Unknown(_) => ErrorCode::Unknown,
            Error::OutOfMemory => ErrorCode::OutOfMemory,
            Error::Uninitialized => ErrorCode::Uninitialized,
        }
    }
}

/// The external error code taxonomy shared with the data service, the
/// executor, and the refcount collector.
///
/// Only [`ErrorCode::Success`] (via `Ok`), [`ErrorCode::OutOfMemory`],
/// [`ErrorCode::Invalid`], [`ErrorCode::Unknown`], and
/// [`ErrorCode::Uninitialized`] are ever produced by this crate; the rest
/// of the taxonomy belongs to collaborators this crate does not implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The operation succeeded.
    Success,
    /// Allocation failure.
    OutOfMemory,
    /// A value was declared more than once (owned by the data store).
    DoubleDeclare,
    /// A value was written more than once (owned by the data store).
    DoubleWrite,
    /// A value was read before being set (owned by the data store).
    Unset,
    /// The requested item does not exist (owned by the data store).
    NotFound,
    /// A numeric value failed to parse (owned by upstream parsing code).
    NumberFormat,
    /// A structurally invalid argument was passed.
    Invalid,
    /// A null pointer/handle was encountered (owned by FFI boundaries).
    Null,
    /// An unclassified downstream failure.
    Unknown,
    /// A type mismatch (owned by the data store's type system).
    Type,
    /// A storage-layer failure (owned by the data store).
    Storage,
    /// An operation was attempted before initialization.
    Uninitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_match_taxonomy() {
        assert_eq!(Error::Invalid("x".into()).code(), ErrorCode::Invalid);
        assert_eq!(
            Error::AlreadyExists(WorkUnitId::new(1)).code(),
            ErrorCode::DoubleDeclare
        );
        assert_eq!(Error::Unknown("x".into()).code(), ErrorCode::Unknown);
        assert_eq!(Error::OutOfMemory.code(), ErrorCode::OutOfMemory);
        assert_eq!(Error::Uninitialized.code(), ErrorCode::Uninitialized);
    }
}
