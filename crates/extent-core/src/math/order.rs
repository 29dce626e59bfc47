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

//! # Interval Orderings
//!
//! Three independent total orders over [`Interval1D`], each a stateless
//! strategy implementing [`IntervalOrder`]. The caller picks one at sort time;
//! none of them is the "natural" order of the interval type, which is why
//! `Interval1D` itself does not implement `Ord`.
//!
//! - [`MinEndpointOrder`]: by `min`, ties broken by `max`.
//! - [`MaxEndpointOrder`]: by `max`, ties broken by `min`.
//! - [`LengthOrder`]: by `length()` only. Intervals of equal length compare
//!   equal even when they sit at different positions, so this order is
//!   coarser than equality.
//!
//! All comparisons are total because interval endpoints are always finite.

use crate::math::interval::Interval1D;
use num_traits::Float;
use std::cmp::Ordering;

/// Compares two values that are known not to be NaN.
#[inline(always)]
fn compare_values<T: Float>(a: T, b: T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// A strategy that totally orders intervals.
pub trait IntervalOrder<T>
where
    T: Float,
{
    /// Returns the name of the ordering.
    fn name(&self) -> &str;

    /// Compares `a` with `b`.
    fn compare(&self, a: &Interval1D<T>, b: &Interval1D<T>) -> Ordering;
}

impl<T> std::fmt::Debug for dyn IntervalOrder<T>
where
    T: Float,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IntervalOrder({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn IntervalOrder<T>
where
    T: Float,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IntervalOrder({})", self.name())
    }
}

/// Orders intervals by their lower endpoint, then by their upper endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MinEndpointOrder;

impl<T> IntervalOrder<T> for MinEndpointOrder
where
    T: Float,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "MinEndpointOrder"
    }

    #[inline]
    fn compare(&self, a: &Interval1D<T>, b: &Interval1D<T>) -> Ordering {
        compare_values(a.min(), b.min()).then_with(|| compare_values(a.max(), b.max()))
    }
}

/// Orders intervals by their upper endpoint, then by their lower endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaxEndpointOrder;

impl<T> IntervalOrder<T> for MaxEndpointOrder
where
    T: Float,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "MaxEndpointOrder"
    }

    #[inline]
    fn compare(&self, a: &Interval1D<T>, b: &Interval1D<T>) -> Ordering {
        compare_values(a.max(), b.max()).then_with(|| compare_values(a.min(), b.min()))
    }
}

/// Orders intervals by length alone, with no tie-break.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LengthOrder;

impl<T> IntervalOrder<T> for LengthOrder
where
    T: Float,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "LengthOrder"
    }

    #[inline]
    fn compare(&self, a: &Interval1D<T>, b: &Interval1D<T>) -> Ordering {
        compare_values(a.length(), b.length())
    }
}

/// Sorts `intervals` in ascending order under `order`.
///
/// The sort is stable: intervals that compare equal keep their relative
/// positions, which matters for [`LengthOrder`].
///
/// # Examples
///
/// ```rust
/// # use extent_core::math::interval::Interval1D;
/// # use extent_core::math::order::{sort_intervals, MaxEndpointOrder};
///
/// let mut intervals = vec![
///     Interval1D::new(20.0, 70.0).unwrap(),
///     Interval1D::new(15.0, 33.0).unwrap(),
/// ];
/// sort_intervals(&mut intervals, &MaxEndpointOrder);
/// assert_eq!(intervals[0].max(), 33.0);
/// ```
pub fn sort_intervals<T, O>(intervals: &mut [Interval1D<T>], order: &O)
where
    T: Float,
    O: IntervalOrder<T> + ?Sized,
{
    intervals.sort_by(|a, b| order.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn iv(min: f64, max: f64) -> Interval1D {
        Interval1D::new(min, max).unwrap()
    }

    fn sample() -> Vec<Interval1D> {
        vec![
            iv(15.0, 33.0),
            iv(45.0, 60.0),
            iv(20.0, 70.0),
            iv(46.0, 55.0),
        ]
    }

    fn random_intervals(seed: u64, n: usize) -> Vec<Interval1D> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                let a = rng.random_range(-10..=10) as f64;
                let b = rng.random_range(-10..=10) as f64;
                iv(a.min(b), a.max(b))
            })
            .collect()
    }

    fn assert_total_order<O: IntervalOrder<f64>>(order: &O, intervals: &[Interval1D]) {
        for a in intervals {
            assert_eq!(order.compare(a, a), Ordering::Equal, "reflexive: {}", a);
            for b in intervals {
                let ab = order.compare(a, b);
                assert_eq!(ab, order.compare(b, a).reverse(), "antisymmetric");
                for c in intervals {
                    if ab != Ordering::Greater && order.compare(b, c) != Ordering::Greater {
                        assert_ne!(order.compare(a, c), Ordering::Greater, "transitive");
                    }
                }
            }
        }
    }

    #[test]
    fn test_sort_by_min_endpoint() {
        let mut intervals = sample();
        sort_intervals(&mut intervals, &MinEndpointOrder);
        assert_eq!(
            intervals,
            vec![
                iv(15.0, 33.0),
                iv(20.0, 70.0),
                iv(45.0, 60.0),
                iv(46.0, 55.0)
            ]
        );
    }

    #[test]
    fn test_sort_by_max_endpoint() {
        let mut intervals = sample();
        sort_intervals(&mut intervals, &MaxEndpointOrder);
        assert_eq!(
            intervals,
            vec![
                iv(15.0, 33.0),
                iv(46.0, 55.0),
                iv(45.0, 60.0),
                iv(20.0, 70.0)
            ]
        );
    }

    #[test]
    fn test_sort_by_length() {
        let mut intervals = sample();
        sort_intervals(&mut intervals, &LengthOrder);
        let lengths: Vec<f64> = intervals.iter().map(|i| i.length()).collect();
        assert_eq!(lengths, vec![9.0, 15.0, 18.0, 50.0]);
        assert_eq!(intervals[0], iv(46.0, 55.0));
        assert_eq!(intervals[3], iv(20.0, 70.0));
    }

    #[test]
    fn test_min_endpoint_tie_break() {
        let a = iv(1.0, 3.0);
        let b = iv(1.0, 5.0);
        assert_eq!(MinEndpointOrder.compare(&a, &b), Ordering::Less);
        assert_eq!(MinEndpointOrder.compare(&b, &a), Ordering::Greater);
        assert_eq!(MinEndpointOrder.compare(&a, &iv(1.0, 3.0)), Ordering::Equal);
    }

    #[test]
    fn test_max_endpoint_tie_break() {
        let a = iv(1.0, 5.0);
        let b = iv(2.0, 5.0);
        assert_eq!(MaxEndpointOrder.compare(&a, &b), Ordering::Less);
        assert_eq!(MaxEndpointOrder.compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_length_has_no_tie_break() {
        let a = iv(0.0, 4.0);
        let b = iv(10.0, 14.0);
        assert_ne!(a, b);
        assert_eq!(LengthOrder.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_length_sort_is_stable() {
        let mut intervals = vec![iv(10.0, 14.0), iv(0.0, 1.0), iv(0.0, 4.0)];
        sort_intervals(&mut intervals, &LengthOrder);
        assert_eq!(intervals, vec![iv(0.0, 1.0), iv(10.0, 14.0), iv(0.0, 4.0)]);
    }

    #[test]
    fn test_orders_are_total() {
        let intervals = random_intervals(42, 40);
        assert_total_order(&MinEndpointOrder, &intervals);
        assert_total_order(&MaxEndpointOrder, &intervals);
        assert_total_order(&LengthOrder, &intervals);
    }

    #[test]
    fn test_endpoint_orders_refine_equality() {
        let intervals = random_intervals(7, 60);
        for a in &intervals {
            for b in &intervals {
                let equal = a == b;
                assert_eq!(MinEndpointOrder.compare(a, b) == Ordering::Equal, equal);
                assert_eq!(MaxEndpointOrder.compare(a, b) == Ordering::Equal, equal);
            }
        }
    }

    #[test]
    fn test_sorted_output_is_ascending() {
        let mut intervals = random_intervals(2025, 200);
        sort_intervals(&mut intervals, &MinEndpointOrder);
        assert!(intervals.windows(2).all(|w| w[0].min() <= w[1].min()));

        sort_intervals(&mut intervals, &MaxEndpointOrder);
        assert!(intervals.windows(2).all(|w| w[0].max() <= w[1].max()));

        sort_intervals(&mut intervals, &LengthOrder);
        assert!(intervals.windows(2).all(|w| w[0].length() <= w[1].length()));
    }

    #[test]
    fn test_dyn_order() {
        let orders: [&dyn IntervalOrder<f64>; 3] =
            [&MinEndpointOrder, &MaxEndpointOrder, &LengthOrder];
        let names: Vec<&str> = orders.iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["MinEndpointOrder", "MaxEndpointOrder", "LengthOrder"]);

        let boxed: Box<dyn IntervalOrder<f64>> = Box::new(LengthOrder);
        assert_eq!(format!("{}", boxed), "IntervalOrder(LengthOrder)");

        let mut intervals = sample();
        sort_intervals(&mut intervals, orders[2]);
        assert_eq!(intervals[0], iv(46.0, 55.0));
    }
}
