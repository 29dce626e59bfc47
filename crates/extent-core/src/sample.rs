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

//! Uniform random sampling
//!
//! [`UniformSampler`] is the single capability the demonstration paths need
//! from a random source: a real number drawn uniformly from `[lo, hi)`. Every
//! [`rand::Rng`] is a sampler, so callers choose the generator (and its seed)
//! at the boundary.

use crate::math::{interval::Interval1D, rect::Point2D};
use rand::Rng;

/// A source of uniformly distributed real numbers.
pub trait UniformSampler {
    /// Returns a number drawn uniformly from `[lo, hi)`.
    ///
    /// When `lo == hi` the range is a single value and `lo` is returned.
    /// The caller must ensure `lo <= hi` and that both are finite. The width
    /// `hi - lo` may exceed `f64::MAX`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// Returns a point drawn uniformly from `[x.min, x.max) × [y.min, y.max)`.
    #[inline]
    fn uniform_point(&mut self, x: &Interval1D<f64>, y: &Interval1D<f64>) -> Point2D<f64> {
        let px = self.uniform(x.min(), x.max());
        let py = self.uniform(y.min(), y.max());
        Point2D::new(px, py)
    }
}

impl<R> UniformSampler for R
where
    R: Rng,
{
    #[inline]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        debug_assert!(
            lo <= hi,
            "called `UniformSampler::uniform` with an empty range: lo is {} but hi is {}",
            lo,
            hi
        );
        if lo >= hi {
            return lo;
        }
        if (hi - lo).is_finite() {
            self.random_range(lo..hi)
        } else {
            // Halving is exact for magnitudes this large, and so is doubling back.
            self.random_range(lo / 2.0..hi / 2.0) * 2.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_uniform_stays_in_half_open_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..10_000 {
            let v = rng.uniform(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&v));
        }
    }

    #[test]
    fn test_uniform_degenerate_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(rng.uniform(4.0, 4.0), 4.0);
    }

    #[test]
    fn test_uniform_full_float_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..1_000 {
            let v = rng.uniform(-f64::MAX, f64::MAX);
            assert!(v.is_finite());
            assert!((-f64::MAX..f64::MAX).contains(&v));
        }
    }

    #[test]
    fn test_uniform_point_in_widest_region() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let widest = Interval1D::new(-f64::MAX, f64::MAX).unwrap();
        for _ in 0..100 {
            let p = rng.uniform_point(&widest, &widest);
            assert!(widest.contains(p.x()));
            assert!(widest.contains(p.y()));
        }
    }

    #[test]
    fn test_uniform_is_deterministic_per_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
        }
    }

    #[test]
    fn test_uniform_point_lands_in_region() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let x = Interval1D::new(0.0, 1.0).unwrap();
        let y = Interval1D::new(10.0, 20.0).unwrap();
        for _ in 0..1_000 {
            let p = rng.uniform_point(&x, &y);
            assert!(x.contains(p.x()) && p.x() < 1.0);
            assert!(y.contains(p.y()) && p.y() < 20.0);
        }
    }

    #[test]
    fn test_uniform_covers_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(2025);
        let mut buckets = [0usize; 10];
        for _ in 0..10_000 {
            let v = rng.uniform(0.0, 1.0);
            buckets[(v * 10.0) as usize] += 1;
        }
        assert!(buckets.iter().all(|&n| n > 800 && n < 1_200), "{:?}", buckets);
    }

    #[test]
    #[should_panic(expected = "empty range")]
    #[cfg(debug_assertions)]
    fn test_uniform_inverted_range_panics_in_debug() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        rng.uniform(1.0, 0.0);
    }
}
