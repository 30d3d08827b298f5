//! Id+Subscript pairs and their stable composite-key byte encoding
//!
//! The wire format is stable and reconstructible by external code:
//!
//! ```text
//! key := vint(id) ++ vint(len(subscript)) ++ subscript_bytes
//! ```

use crate::datum::DatumId;
use crate::subscript::Subscript;
use crate::vint;
use smallvec::SmallVec;

/// Inline capacity for [`CompositeKey`]: a vint-encoded id (at most 10
/// bytes), a vint-encoded length (at most 10 bytes), and a handful of
/// subscript bytes fit without spilling to the heap for the common case.
const INLINE_KEY_CAPACITY: usize = 32;

/// A `(DatumId, Subscript)` pair. Equality is id-equal *and* byte-equal
/// subscript.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdSub {
    /// The datum this pair selects into.
    pub id: DatumId,
    /// The subscript within that datum.
    pub subscript: Subscript,
}

impl IdSub {
    /// Construct an `IdSub` pair.
    pub fn new(id: DatumId, subscript: impl Into<Subscript>) -> Self {
        IdSub {
            id,
            subscript: subscript.into(),
        }
    }

    /// Encode this pair's stable composite-key bytes.
    pub fn composite_key(&self) -> CompositeKey {
        CompositeKey::new(self.id, &self.subscript)
    }
}

/// The stable byte encoding of an `(id, subscript)` pair, used as the key of
/// the id+subscript blocker index and dedup set.
///
/// Stores up to [`INLINE_KEY_CAPACITY`] bytes inline, matching the teacher
/// stack's habit of reaching for `smallvec` on small, hot, per-operation
/// buffers instead of a heap `Vec` per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey(SmallVec<[u8; INLINE_KEY_CAPACITY]>);

impl CompositeKey {
    /// Encode the composite key for `(id, subscript)`.
    pub fn new(id: DatumId, subscript: &Subscript) -> Self {
        let mut bytes = SmallVec::new();
        vint::encode(id.get(), &mut bytes);
        vint::encode(subscript.len() as i64, &mut bytes);
        bytes.extend_from_slice(subscript.as_bytes());
        CompositeKey(bytes)
    }

    /// Borrow the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Decode a composite key back into its `(id, subscript)` parts.
    ///
    /// The engine itself never needs to decode a key, only to build and
    /// compare them, but the format is stable and external code may rely
    /// on decoding it.
    pub fn decode(&self) -> Result<(DatumId, Subscript), vint::VintError> {
        let (id, id_len) = vint::decode(&self.0)?;
        let (sub_len, len_len) = vint::decode(&self.0[id_len..])?;
        let start = id_len + len_len;
        let end = start + sub_len as usize;
        let sub_bytes = self.0.get(start..end).ok_or(vint::VintError::Truncated)?;
        Ok((DatumId::new(id), Subscript::from(sub_bytes.to_vec())))
    }
}
