//! Rubric point values.
//!
//! Every rubric value has exactly one fractional digit, so points are kept as
//! an integer count of tenths. Sums are exact and never need rounding.

use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative score with one decimal digit of precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(u32);

impl Points {
    /// Zero points.
    pub const ZERO: Self = Self(0);

    /// Create a value from a count of tenths (`12` is 1.2 points).
    #[inline]
    pub const fn from_tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    /// The value as a count of tenths.
    #[inline]
    pub const fn tenths(self) -> u32 {
        self.0
    }

    /// The value as a float, for display and serialization.
    #[inline]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Whole-number percentage of `self` relative to `of`, rounded down.
    ///
    /// Returns 0 when `of` is zero.
    pub fn percent_of(self, of: Points) -> u32 {
        if of.0 == 0 {
            return 0;
        }
        ((u64::from(self.0) * 100) / u64::from(of.0)) as u32
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}.{}", self.0 / 10, self.0 % 10))
    }
}

impl Add for Points {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Points> for Points {
    fn sum<I: Iterator<Item = &'a Points>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Points {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}
