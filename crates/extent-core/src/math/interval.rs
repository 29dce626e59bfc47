// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::math::error::IntervalError;
use num_traits::Float;
use std::{
    hash::{Hash, Hasher},
    ops::{Bound, RangeBounds, RangeInclusive},
};

/// A closed interval `[min, max]` over finite floating-point numbers.
///
/// Both endpoints belong to the interval. An interval whose endpoints are
/// equal is a single point and has length zero.
///
/// # Invariants
///
/// * Both endpoints are finite and not NaN.
/// * `min <= max`.
/// * A negative zero endpoint is stored as positive zero, so `[-0.0, 1.0]`
///   and `[0.0, 1.0]` are equal and hash identically.
///
/// The type has no mutators; once built, an interval never changes.
#[derive(Clone, Copy, Debug)]
pub struct Interval1D<T = f64>
where
    T: Float,
{
    min: T,
    max: T,
}

/// Maps `-0.0` to `0.0` and leaves every other value untouched.
#[inline(always)]
fn normalize_zero<T: Float>(value: T) -> T {
    if value == T::zero() { T::zero() } else { value }
}

impl<T> Interval1D<T>
where
    T: Float,
{
    /// Creates a new `Interval1D`.
    ///
    /// # Errors
    ///
    /// * [`IntervalError::NonFinite`] if either endpoint is infinite.
    /// * [`IntervalError::NotANumber`] if either endpoint is NaN.
    /// * [`IntervalError::Inverted`] if `min > max`.
    ///
    /// The checks run in this order, so `new(f64::INFINITY, f64::NAN)`
    /// reports `NonFinite`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::math::interval::Interval1D;
    /// # use extent_core::math::error::IntervalError;
    ///
    /// let iv = Interval1D::new(1.0, 5.0).unwrap();
    /// assert_eq!(iv.length(), 4.0);
    ///
    /// assert_eq!(Interval1D::new(5.0, 3.0), Err(IntervalError::Inverted));
    /// assert_eq!(Interval1D::new(f64::NAN, 1.0), Err(IntervalError::NotANumber));
    /// ```
    pub fn new(min: T, max: T) -> Result<Self, IntervalError> {
        if min.is_infinite() || max.is_infinite() {
            return Err(IntervalError::NonFinite);
        }
        if min.is_nan() || max.is_nan() {
            return Err(IntervalError::NotANumber);
        }

        let min = normalize_zero(min);
        let max = normalize_zero(max);

        if min <= max {
            Ok(Self { min, max })
        } else {
            Err(IntervalError::Inverted)
        }
    }

    /// Creates a degenerate interval `[value, value]`.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Interval1D::new`].
    #[inline]
    pub fn point(value: T) -> Result<Self, IntervalError> {
        Self::new(value, value)
    }

    /// Returns the lower endpoint.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the upper endpoint.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Returns the length of the interval (`max - min`).
    ///
    /// The result is never negative, and it is zero exactly when
    /// `min == max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::math::interval::Interval1D;
    ///
    /// assert_eq!(Interval1D::new(15.0, 33.0).unwrap().length(), 18.0);
    /// assert_eq!(Interval1D::new(3.0, 3.0).unwrap().length(), 0.0);
    /// ```
    #[inline]
    pub fn length(&self) -> T {
        self.max - self.min
    }

    /// Returns the midpoint `(min + max) / 2`.
    ///
    /// When the sum overflows, each term is halved first instead.
    #[inline]
    pub fn midpoint(&self) -> T {
        let two = T::one() + T::one();
        let sum = self.min + self.max;
        if sum.is_finite() {
            sum / two
        } else {
            self.min / two + self.max / two
        }
    }

    /// Returns `true` if `value` lies in `[min, max]`, both ends inclusive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::math::interval::Interval1D;
    ///
    /// let iv = Interval1D::new(2.0, 4.0).unwrap();
    /// assert!(iv.contains(2.0));
    /// assert!(iv.contains(4.0));
    /// assert!(!iv.contains(1.999));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if `other` lies entirely inside `self`.
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Returns `true` if the two closed intervals share at least one point.
    ///
    /// Intervals that only touch at an endpoint intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::math::interval::Interval1D;
    ///
    /// let a = Interval1D::new(1.0, 5.0).unwrap();
    /// assert!(a.intersects(&Interval1D::new(5.0, 9.0).unwrap()));
    /// assert!(!a.intersects(&Interval1D::new(6.0, 9.0).unwrap()));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.max < other.min {
            return false;
        }
        if other.max < self.min {
            return false;
        }
        true
    }
}

impl<T> PartialEq for Interval1D<T>
where
    T: Float,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

// NaN endpoints are rejected at construction, so float equality is reflexive here.
impl<T> Eq for Interval1D<T> where T: Float {}

impl<T> Hash for Interval1D<T>
where
    T: Float,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.min.integer_decode().hash(state);
        self.max.integer_decode().hash(state);
    }
}

impl<T> std::fmt::Display for Interval1D<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl<T> RangeBounds<T> for Interval1D<T>
where
    T: Float,
{
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.min)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.max)
    }
}

impl<T> TryFrom<(T, T)> for Interval1D<T>
where
    T: Float,
{
    type Error = IntervalError;

    #[inline]
    fn try_from((min, max): (T, T)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl<T> TryFrom<RangeInclusive<T>> for Interval1D<T>
where
    T: Float,
{
    type Error = IntervalError;

    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (min, max) = range.into_inner();
        Self::new(min, max)
    }
}

impl<T> From<Interval1D<T>> for RangeInclusive<T>
where
    T: Float,
{
    #[inline]
    fn from(iv: Interval1D<T>) -> Self {
        iv.min..=iv.max
    }
}
