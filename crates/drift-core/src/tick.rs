//! Protocol time.
//!
//! # Design
//!
//! The wire protocol counts time in *ticks* (100 ticks ≈ 1 second) carried
//! as a 31-bit unsigned value that wraps.  Ordering two ticks therefore
//! cannot use plain `<`: the comparison must be done on the signed
//! difference so that a recently-wrapped "small" tick still compares after
//! a "large" one.  All timer logic in the framework goes through
//! [`Tick::gt`] / [`Tick::gte`]; `Tick` deliberately does not implement
//! `Ord`.

use std::fmt;

/// Mask applied to every tick value — the protocol uses 31 significant bits.
pub const TICK_MASK: u32 = 0x7FFF_FFFF;

/// Clamp a raw counter into the protocol's 31-bit tick space.
#[inline]
pub fn make_tick(raw: u32) -> Tick {
    Tick(raw & TICK_MASK)
}

/// A wrap-aware 31-bit protocol tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Tick(pub u32);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `true` when `self` is strictly after `other`, accounting for wrap.
    #[inline]
    pub fn gt(self, other: Tick) -> bool {
        self.since(other) > 0
    }

    /// `true` when `self` is at or after `other`, accounting for wrap.
    #[inline]
    pub fn gte(self, other: Tick) -> bool {
        self.since(other) >= 0
    }

    /// Signed tick delta `self - earlier`.  Positive when `self` is later.
    ///
    /// Both operands are shifted into the top 31 bits first so the signed
    /// subtraction wraps at the protocol's 31-bit boundary, not at 32.
    #[inline]
    pub fn since(self, earlier: Tick) -> i32 {
        ((self.0 << 1).wrapping_sub(earlier.0 << 1) as i32) >> 1
    }

    /// The tick `n` ticks after `self`, wrapped into tick space.
    #[inline]
    pub fn offset(self, n: u32) -> Tick {
        make_tick(self.0.wrapping_add(n))
    }
}

impl std::ops::Add<u32> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u32) -> Tick {
        self.offset(rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
