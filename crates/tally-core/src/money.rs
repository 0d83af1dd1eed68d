//! # Money Module
//!
//! Provides the `TotalPrice` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    Every amount is a whole number of the smallest currency unit.    │
//! │    Addition is exact; a till never drifts by a cent.                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::TotalPrice;
//!
//! // Create from cents (the only way)
//! let price = TotalPrice::from_cents(50);
//!
//! // Value-style addition returns a new amount
//! let total = price.add(TotalPrice::from_cents(30));
//! assert_eq!(total.cents(), 80);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// TotalPrice Type
// =============================================================================

/// A monetary amount in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **u64 (unsigned)**: Catalog prices and running totals are never
///   negative; the type makes that unrepresentable
/// - **Single field tuple struct**: Zero-cost abstraction over u64
/// - **Immutable value**: Every operation returns a new amount
///
/// ## Where TotalPrice is Used
/// ```text
/// Catalog base price ──┐
///                      ├──► charged price per scan ──► running total
/// Catalog rule price ──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TotalPrice(u64);

impl TotalPrice {
    /// Creates an amount from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::TotalPrice;
    ///
    /// let price = TotalPrice::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        TotalPrice(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the zero amount, the identity for [`TotalPrice::add`].
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::TotalPrice;
    ///
    /// let zero = TotalPrice::zero();
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.add(TotalPrice::from_cents(50)).cents(), 50);
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        TotalPrice(0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns a new amount holding the sum of both operands.
    ///
    /// Commutative and associative, with [`TotalPrice::zero`] as identity.
    /// Neither operand is modified.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::TotalPrice;
    ///
    /// let a = TotalPrice::from_cents(50);
    /// let b = TotalPrice::from_cents(30);
    /// assert_eq!(a.add(b), b.add(a));
    /// assert_eq!(a.add(b).cents(), 80);
    /// ```
    #[inline]
    pub const fn add(self, other: Self) -> Self {
        TotalPrice(self.0 + other.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and receipts. Embedding front ends handle
/// localization themselves.
impl fmt::Display for TotalPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Default amount is zero.
impl Default for TotalPrice {
    fn default() -> Self {
        TotalPrice::zero()
    }
}

/// Operator form of [`TotalPrice::add`].
impl Add for TotalPrice {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        TotalPrice(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for TotalPrice {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Summing an iterator of amounts starts from zero.
impl Sum for TotalPrice {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(TotalPrice::zero(), |acc, p| acc + p)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
