//! Subscripts: binary-safe selectors into a composite datum
//!
//! The whole-datum case is represented by `Option<Subscript>` being `None`,
//! which stays distinct from `Some(Subscript::empty())` — an explicit empty
//! subscript is a valid selector, not "no subscript" (`§3`).

use std::fmt;

/// A binary-safe byte-string selector into a composite datum.
///
/// Equality and ordering are byte-wise; length is carried explicitly rather
/// than relying on a NUL terminator, so subscripts may contain arbitrary
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Subscript(Vec<u8>);

impl Subscript {
    /// The empty subscript: distinct from "no subscript" (`None`).
    pub fn empty() -> Self {
        Subscript(Vec::new())
    }

    /// Borrow the subscript's bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The subscript's length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` iff this is the explicit empty subscript (not `None`).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Subscript {
    fn from(bytes: Vec<u8>) -> Self {
        Subscript(bytes)
    }
}

impl From<&[u8]> for Subscript {
    fn from(bytes: &[u8]) -> Self {
        Subscript(bytes.to_vec())
    }
}

impl From<&str> for Subscript {
    fn from(s: &str) -> Self {
        Subscript(s.as_bytes().to_vec())
    }
}

impl From<String> for Subscript {
    fn from(s: String) -> Self {
        Subscript(s.into_bytes())
    }
}

impl fmt::Display for Subscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) => write!(f, "\"{s}\""),
            Err(_) => write!(f, "<{} raw bytes>", self.0.len()),
        }
    }
}
