//! Growth policies for [`GrowableArray`](crate::GrowableArray).
//!
//! A policy decides the next capacity when an append finds the array full.
//! It is chosen per container type through a type parameter, so two arrays
//! in the same program can grow differently:
//!
//! ```
//! use ran_array::{GrowableArray, Linear, Logarithmic};
//!
//! let mut tight: GrowableArray<u8, Linear> = GrowableArray::new();
//! let mut doubling: GrowableArray<u8, Logarithmic> = GrowableArray::new();
//! for b in 0..5 {
//!     tight.push_back(b);
//!     doubling.push_back(b);
//! }
//! assert_eq!(tight.capacity(), 5);
//! assert_eq!(doubling.capacity(), 8);
//! ```

use std::fmt;

/// Identifies a growth policy at runtime (for diagnostics and reporting).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrowthKind {
    /// One extra slot per reallocation.
    Linear,
    /// Capacity doubles on each reallocation.
    Logarithmic,
}

impl fmt::Display for GrowthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Logarithmic => write!(f, "logarithmic"),
        }
    }
}

/// Rule for computing the next capacity of a full array.
///
/// Implementors are zero-sized markers; the array never stores one.
pub trait GrowthPolicy {
    /// Runtime tag for this policy.
    const KIND: GrowthKind;

    /// Capacity to grow to from `current`.
    ///
    /// Must return a value strictly greater than `current`; the array
    /// panics on growth otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the next capacity does not fit in `usize`.
    fn next_capacity(current: usize) -> usize;
}

/// Grow by exactly one slot: `current + 1`.
///
/// Minimal over-allocation at the price of a reallocation per append,
/// so `n` appends cost O(n²) element moves in total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linear;

impl GrowthPolicy for Linear {
    const KIND: GrowthKind = GrowthKind::Linear;

    #[inline(always)]
    fn next_capacity(current: usize) -> usize {
        current.checked_add(1).expect("capacity overflow")
    }
}

/// Double the capacity: `current * 2`, or `1` from an empty array.
///
/// Amortised O(1) per append.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Logarithmic;

impl GrowthPolicy for Logarithmic {
    const KIND: GrowthKind = GrowthKind::Logarithmic;

    #[inline(always)]
    fn next_capacity(current: usize) -> usize {
        if current == 0 {
            1
        } else {
            current.checked_mul(2).expect("capacity overflow")
        }
    }
}

/// Policy used when a [`GrowableArray`](crate::GrowableArray) names none.
///
/// [`Linear`] unless the `logarithmic-growth` feature is enabled.
#[cfg(not(feature = "logarithmic-growth"))]
pub type DefaultGrowth = Linear;

/// Policy used when a [`GrowableArray`](crate::GrowableArray) names none.
///
/// [`Logarithmic`] because the `logarithmic-growth` feature is enabled.
#[cfg(feature = "logarithmic-growth")]
pub type DefaultGrowth = Logarithmic;
