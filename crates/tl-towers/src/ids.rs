//! Strongly typed tower identifier.
//!
//! A [`TowerId`] is a tower's position in its field's storage, so
//! `id.index()` is a direct `Vec` index with no lookup table in
//! between. Ids are assigned sequentially from 0 by the field builder
//! and stay stable for the lifetime of the field.

use std::fmt;

/// Identifier of a tower within a [`TowerField`](crate::TowerField).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TowerId(pub u32);

impl TowerId {
    /// Sentinel meaning "no valid id".
    pub const INVALID: TowerId = TowerId(u32::MAX);

    /// Cast to `usize` for direct use as a slice index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for TowerId {
    #[inline]
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<TowerId> for u32 {
    #[inline]
    fn from(id: TowerId) -> u32 {
        id.0
    }
}

impl From<u32> for TowerId {
    #[inline]
    fn from(raw: u32) -> TowerId {
        TowerId(raw)
    }
}

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TowerId({})", self.0)
    }
}
