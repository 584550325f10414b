//! Cache slot model shared by every replacement policy.
//!
//! A cache is a fixed-length array of [`CacheSlot`] values. Emptiness is a
//! first-class state: an empty slot carries no address and no metadata, so
//! policies never have to special-case sentinel keys.
//!
//! ## Slot State Machine
//!
//! ```text
//!   Empty ──first fill──► Occupied ──eviction / cyclic overwrite──► Occupied
//!                            │
//!                            └── never transitions back to Empty
//! ```
//!
//! Capacity only grows toward full, never shrinks. This is a design
//! invariant of the slot array, not a per-policy choice.
//!
//! ## Key Components
//!
//! - [`CacheSlot`]: tagged `Empty` / `Occupied` variant.
//! - [`SlotMeta`]: recency and frequency counters interpreted per-policy
//!   (the cyclic policy ignores both).
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::slot::CacheSlot;
//!
//! let mut slot: CacheSlot<u64, &str> = CacheSlot::Empty;
//! assert!(slot.is_empty());
//!
//! slot = CacheSlot::occupied(7, "data");
//! assert!(slot.holds(&7));
//! assert_eq!(slot.data(), Some(&"data"));
//! ```

/// Per-slot replacement metadata.
///
/// `recency` counts steps since the slot was last referenced (0 = just
/// used). `frequency` counts references to the held data since the slot
/// was last (re)filled and starts at 1. Only occupied slots carry
/// metadata, so no sentinel values are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotMeta {
    /// Steps since this slot was last referenced.
    pub recency: u64,
    /// References to the held data since the last (re)fill.
    pub frequency: u64,
}

impl SlotMeta {
    /// Metadata for a freshly filled slot: just used, referenced once.
    #[inline]
    pub fn fresh() -> Self {
        Self {
            recency: 0,
            frequency: 1,
        }
    }
}

impl Default for SlotMeta {
    fn default() -> Self {
        Self::fresh()
    }
}

/// One fixed storage unit of cache capacity.
///
/// Holds at most one `(address, data)` pair plus policy metadata. At most
/// one occupied slot in a cache may hold a given address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheSlot<K, V> {
    /// Never filled. Distinguishable from every occupied state.
    Empty,
    /// Holds an address, its data, and replacement metadata.
    Occupied {
        /// The cached address.
        address: K,
        /// The data fetched from the backing store for `address`.
        data: V,
        /// Replacement metadata, interpreted by the active policy.
        meta: SlotMeta,
    },
}

impl<K, V> CacheSlot<K, V> {
    /// Creates an occupied slot with fresh metadata.
    #[inline]
    pub fn occupied(address: K, data: V) -> Self {
        Self::Occupied {
            address,
            data,
            meta: SlotMeta::fresh(),
        }
    }

    /// Returns `true` if this slot has never been filled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if this slot holds an entry.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if this slot holds the given address.
    #[inline]
    pub fn holds(&self, address: &K) -> bool
    where
        K: PartialEq,
    {
        matches!(self, Self::Occupied { address: held, .. } if held == address)
    }

    /// Returns the held address, if occupied.
    #[inline]
    pub fn address(&self) -> Option<&K> {
        match self {
            Self::Empty => None,
            Self::Occupied { address, .. } => Some(address),
        }
    }

    /// Returns the held data, if occupied.
    #[inline]
    pub fn data(&self) -> Option<&V> {
        match self {
            Self::Empty => None,
            Self::Occupied { data, .. } => Some(data),
        }
    }

    /// Returns the replacement metadata, if occupied.
    #[inline]
    pub fn meta(&self) -> Option<&SlotMeta> {
        match self {
            Self::Empty => None,
            Self::Occupied { meta, .. } => Some(meta),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
