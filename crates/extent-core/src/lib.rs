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

//! # Extent Core
//!
//! Immutable closed intervals over finite reals and the axis-aligned boxes
//! built from them. This is the primitive layer beneath interval trees,
//! range-search structures and collision tests: it answers "does A overlap
//! B" and "does A contain P" and provides total orders for sorting
//! collections of intervals.
//!
//! ## Modules
//!
//! - `math`: `Interval1D`, `Interval2D`, `Point2D`, the `IntervalOrder`
//!   strategies and `IntervalError`.
//! - `draw`: the `DrawingSurface` trait boxes and points render onto.
//! - `sample`: the `UniformSampler` trait, implemented for every `rand::Rng`.
//! - `utils`: a named `Counter`.
//!
//! ## Usage
//!
//! ```rust
//! use extent_core::math::interval::Interval1D;
//! use extent_core::math::order::{sort_intervals, MinEndpointOrder};
//! use extent_core::math::rect::{Interval2D, Point2D};
//!
//! let mut intervals = vec![
//!     Interval1D::new(45.0, 60.0).unwrap(),
//!     Interval1D::new(15.0, 33.0).unwrap(),
//! ];
//! sort_intervals(&mut intervals, &MinEndpointOrder);
//! assert_eq!(intervals[0].to_string(), "[15, 33]");
//!
//! let b = Interval2D::new(intervals[0], intervals[1]);
//! assert!(b.contains(Point2D::new(20.0, 50.0)));
//! assert_eq!(b.area(), 18.0 * 15.0);
//! ```
//!
//! Invalid endpoints are rejected when an interval is built; everything
//! after that is total.

pub mod draw;
pub mod math;
pub mod sample;
pub mod utils;
