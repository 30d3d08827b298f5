//! The opaque work unit the engine holds on behalf of a pending rule

use std::fmt;

/// Unique identifier for a work unit.
///
/// Keys the transform registry (component A): globally unique within the
/// process, so close notifications — which always address data, never a
/// transform directly — reach transforms only through the blocker indices,
/// never this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkUnitId(pub u64);

impl WorkUnitId {
    /// Construct a `WorkUnitId` from a raw value.
    pub const fn new(id: u64) -> Self {
        WorkUnitId(id)
    }

    /// The raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WorkUnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for WorkUnitId {
    fn from(id: u64) -> Self {
        WorkUnitId(id)
    }
}

/// An opaque task handle the engine owns while its rule's inputs are
/// outstanding, and hands back to the caller once every input is closed.
///
/// The engine is generic over `W: WorkUnit` rather than assuming a single
/// concrete payload type, so callers can plug in whatever task
/// representation their dispatcher already uses.
pub trait WorkUnit {
    /// This work unit's unique identifier.
    fn work_unit_id(&self) -> WorkUnitId;
}
