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

//! Drawing surface interface
//!
//! Boxes and points can render themselves onto anything that implements
//! [`DrawingSurface`]. The core never owns a surface: callers inject one at
//! the boundary, and nothing in the geometric predicates depends on it.

/// A target that shapes can be drawn onto.
pub trait DrawingSurface<T> {
    /// Draws an axis-aligned rectangle centered at `(center_x, center_y)`
    /// extending `half_width` left and right and `half_height` up and down.
    fn rectangle(&mut self, center_x: T, center_y: T, half_width: T, half_height: T);

    /// Draws a single point. Surfaces that cannot show points ignore it.
    #[inline(always)]
    fn point(&mut self, _x: T, _y: T) {}
}

/// A surface that discards everything drawn on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoOpSurface;

impl NoOpSurface {
    /// Creates a new `NoOpSurface`.
    #[inline(always)]
    pub const fn new() -> Self {
        Self
    }
}

impl<T> DrawingSurface<T> for NoOpSurface {
    #[inline(always)]
    fn rectangle(&mut self, _center_x: T, _center_y: T, _half_width: T, _half_height: T) {}
}

impl<T, S> DrawingSurface<T> for &mut S
where
    S: DrawingSurface<T> + ?Sized,
{
    #[inline]
    fn rectangle(&mut self, center_x: T, center_y: T, half_width: T, half_height: T) {
        (**self).rectangle(center_x, center_y, half_width, half_height);
    }

    #[inline]
    fn point(&mut self, x: T, y: T) {
        (**self).point(x, y);
    }
}
