//! Server rank identity
//!
//! `ServerRank` is the MPI-like rank used to locate the server that owns a
//! given [`crate::DatumId`] (`§6`). Rank discovery itself is an external
//! collaborator; this crate only carries the value.

use std::fmt;

/// The rank of a server in the distributed data store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServerRank(pub i32);

impl ServerRank {
    /// Construct a `ServerRank` from a raw rank number.
    pub const fn new(rank: i32) -> Self {
        ServerRank(rank)
    }

    /// The raw rank number.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ServerRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ServerRank {
    fn from(rank: i32) -> Self {
        ServerRank(rank)
    }
}
