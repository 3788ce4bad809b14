//! Bit mask values
//!
//! A bit mask is a single unsigned integer whose bits are independent flags.
//! Flag tables are declared with [`bitflags`](bitflags::bitflags!) over `u64`;
//! [`BitMask`] wraps such a table and adds the chainable mutators and the
//! "any of" check the column types rely on.
//!
//! ```rust
//! use bitflags::bitflags;
//! use typehaus::bitmask::BitMask;
//!
//! bitflags! {
//!     /// Article publishing state
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//!     pub struct ArticleFlags: u64 {
//!         const PUBLISHED = 1 << 0;
//!         const FEATURED = 1 << 1;
//!         const ARCHIVED = 1 << 2;
//!         const VISIBLE = Self::PUBLISHED.bits() | Self::FEATURED.bits();
//!     }
//! }
//!
//! let mut flags = BitMask::<ArticleFlags>::default();
//! flags.set(ArticleFlags::PUBLISHED).toggle(ArticleFlags::ARCHIVED);
//! assert!(flags.check(ArticleFlags::VISIBLE));
//! assert_eq!(flags.bits(), 0b101);
//! ```
//!
//! Widths are not validated: a mask keeps all 64 bits even when its column is
//! narrower, and the database decides what happens to values that do not fit.
//! Bits without a named flag are retained.

pub mod column;

pub use column::{BitMaskType, SizeClass};

use std::any::Any;
use std::fmt;

use bitflags::{bitflags, Flags};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::column_type::ColumnValue;

/// Flag tables usable in a [`BitMask`]
pub trait FlagSet: Flags<Bits = u64> + Copy + Send + Sync + 'static {}

impl<T> FlagSet for T where T: Flags<Bits = u64> + Copy + Send + Sync + 'static {}

bitflags! {
    /// Flag table without named flags, for callers that only need the raw bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RawFlags: u64 {
        const _ = !0;
    }
}

pub type RawBitMask = BitMask<RawFlags>;

/// Flag set value over the table `F`
///
/// All mutators return `&mut Self` so calls can be chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitMask<F> {
    flags: F,
}

impl<F: FlagSet> BitMask<F> {
    /// No flags set
    pub const NONE: u64 = 0;

    pub fn new(bits: u64) -> Self {
        Self {
            flags: F::from_bits_retain(bits),
        }
    }

    pub fn from_flags(flags: F) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> F {
        self.flags
    }

    pub fn bits(&self) -> u64 {
        self.flags.bits()
    }

    /// Replace the whole state
    pub fn set_bits(&mut self, bits: u64) -> &mut Self {
        self.flags = F::from_bits_retain(bits);
        self
    }

    pub fn set(&mut self, flags: F) -> &mut Self {
        self.flags.insert(flags);
        self
    }

    pub fn unset(&mut self, flags: F) -> &mut Self {
        self.flags.remove(flags);
        self
    }

    pub fn toggle(&mut self, flags: F) -> &mut Self {
        self.flags.toggle(flags);
        self
    }

    /// `set` when `set_or_unset` is true, `unset` otherwise
    pub fn flip(&mut self, flags: F, set_or_unset: bool) -> &mut Self {
        if set_or_unset {
            self.set(flags)
        } else {
            self.unset(flags)
        }
    }

    pub fn reset(&mut self) -> &mut Self {
        self.set_bits(Self::NONE)
    }

    /// True if any bit of `flags` is set. This is not an "all of" test.
    pub fn check(&self, flags: F) -> bool {
        self.flags.intersects(flags)
    }

    pub fn is_empty(&self) -> bool {
        self.bits() == Self::NONE
    }
}

impl<F: FlagSet> Default for BitMask<F> {
    fn default() -> Self {
        Self::new(Self::NONE)
    }
}

impl<F: FlagSet> From<F> for BitMask<F> {
    fn from(flags: F) -> Self {
        Self::from_flags(flags)
    }
}

impl<F: FlagSet> From<BitMask<F>> for u64 {
    fn from(mask: BitMask<F>) -> u64 {
        mask.bits()
    }
}

impl<F: FlagSet> fmt::Display for BitMask<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.bits(), f)
    }
}

impl<F: FlagSet> fmt::Binary for BitMask<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.bits(), f)
    }
}

impl<F: FlagSet> Serialize for BitMask<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de, F: FlagSet> Deserialize<'de> for BitMask<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u64::deserialize(deserializer)?;
        Ok(Self::new(bits))
    }
}

impl<F: FlagSet> ColumnValue for BitMask<F> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn flag_bits(&self) -> Option<u64> {
        Some(self.bits())
    }
}
