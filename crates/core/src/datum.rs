//! Datum identifiers
//!
//! A `DatumId` names a write-once value in the external data store. The
//! engine never interprets the value, only its identity.

use std::fmt;

/// Reserved sentinel denoting "no datum".
///
/// Submitting a rule or calling `subscribe` with `NULL_ID` is a programmer
/// error and surfaces as [`crate::Error::Invalid`].
pub const NULL_ID: DatumId = DatumId(0);

/// A 64-bit signed datum identifier.
///
/// Non-zero values are well-formed ids; zero is [`NULL_ID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatumId(pub i64);

impl DatumId {
    /// Construct a `DatumId` from a raw `i64`.
    pub const fn new(id: i64) -> Self {
        DatumId(id)
    }

    /// Returns `true` if this is the [`NULL_ID`] sentinel.
    pub const fn is_null(self) -> bool {
        self.0 == NULL_ID.0
    }

    /// The raw signed integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DatumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DatumId {
    fn from(id: i64) -> Self {
        DatumId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_id_is_zero() {
        assert_eq!(NULL_ID.get(), 0);
        assert!(NULL_ID.is_null());
    }

    #[test]
    fn nonzero_ids_are_not_null() {
        assert!(!DatumId::new(42).is_null());
        assert!(!DatumId::new(-42).is_null());
    }
}
