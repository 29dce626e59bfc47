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

//! Axis-aligned boxes built from two closed intervals.
//!
//! An [`Interval2D`] is the Cartesian product `x × y` of two [`Interval1D`]
//! values. Every geometric question is answered by asking both axes and
//! combining the answers with a logical AND; the box adds nothing beyond that
//! conjunction and the area.

use crate::{draw::DrawingSurface, math::interval::Interval1D};
use num_traits::Float;
use std::hash::{Hash, Hasher};

/// A point in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point2D<T = f64> {
    x: T,
    y: T,
}

impl<T> Point2D<T>
where
    T: Float,
{
    /// Creates a new `Point2D`.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the y-coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Draws the point onto `surface`.
    #[inline]
    pub fn draw<S>(&self, surface: &mut S)
    where
        S: DrawingSurface<T> + ?Sized,
    {
        surface.point(self.x, self.y);
    }
}

impl<T> From<(T, T)> for Point2D<T>
where
    T: Float,
{
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> std::fmt::Display for Point2D<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned box `x × y`.
///
/// The box performs no validation of its own; both components are already
/// valid intervals. A component of length zero yields a degenerate box
/// (a segment or a single point) whose area is zero.
#[derive(Clone, Copy, Debug)]
pub struct Interval2D<T = f64>
where
    T: Float,
{
    x: Interval1D<T>,
    y: Interval1D<T>,
}

impl<T> Interval2D<T>
where
    T: Float,
{
    /// Creates a new `Interval2D` from its x- and y-extent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::math::interval::Interval1D;
    /// # use extent_core::math::rect::{Interval2D, Point2D};
    ///
    /// let x = Interval1D::new(0.0, 10.0).unwrap();
    /// let y = Interval1D::new(0.0, 5.0).unwrap();
    /// let b = Interval2D::new(x, y);
    /// assert_eq!(b.area(), 50.0);
    /// assert!(b.contains(Point2D::new(10.0, 0.0)));
    /// ```
    #[inline]
    pub const fn new(x: Interval1D<T>, y: Interval1D<T>) -> Self {
        Self { x, y }
    }

    /// Returns the extent along the x-axis.
    #[inline]
    pub fn x(&self) -> Interval1D<T> {
        self.x
    }

    /// Returns the extent along the y-axis.
    #[inline]
    pub fn y(&self) -> Interval1D<T> {
        self.y
    }

    /// Returns `true` if the two boxes share at least one point.
    ///
    /// Both axes must overlap; overlap on a single axis is not enough.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::math::interval::Interval1D;
    /// # use extent_core::math::rect::Interval2D;
    ///
    /// let iv = |a: f64, b: f64| Interval1D::new(a, b).unwrap();
    /// let a = Interval2D::new(iv(0.0, 10.0), iv(0.0, 10.0));
    /// let b = Interval2D::new(iv(5.0, 15.0), iv(20.0, 30.0));
    /// assert!(!a.intersects(&b));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        if !self.x.intersects(&other.x) {
            return false;
        }
        if !self.y.intersects(&other.y) {
            return false;
        }
        true
    }

    /// Returns `true` if `point` lies inside the box, boundary included.
    #[inline]
    pub fn contains(&self, point: Point2D<T>) -> bool {
        self.x.contains(point.x()) && self.y.contains(point.y())
    }

    /// Returns the area `x.length() * y.length()`.
    #[inline]
    pub fn area(&self) -> T {
        self.x.length() * self.y.length()
    }

    /// Returns the center of the box.
    #[inline]
    pub fn center(&self) -> Point2D<T> {
        Point2D::new(self.x.midpoint(), self.y.midpoint())
    }

    /// Draws the box onto `surface` as a rectangle given by its center and
    /// half-extents.
    pub fn draw<S>(&self, surface: &mut S)
    where
        S: DrawingSurface<T> + ?Sized,
    {
        let two = T::one() + T::one();
        let center = self.center();
        surface.rectangle(
            center.x(),
            center.y(),
            self.x.length() / two,
            self.y.length() / two,
        );
    }
}

impl<T> PartialEq for Interval2D<T>
where
    T: Float,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<T> Eq for Interval2D<T> where T: Float {}

impl<T> Hash for Interval2D<T>
where
    T: Float,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl<T> std::fmt::Display for Interval2D<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.x, self.y)
    }
}
