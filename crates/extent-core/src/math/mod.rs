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

//! # Interval Math
//!
//! The value types of the crate and the orderings over them.
//!
//! ## Submodules
//!
//! - `interval`: `Interval1D`, a validated closed interval `[min, max]` over
//!   finite floats with containment and overlap predicates, length,
//!   structural equality and hashing that treat `-0.0` as `0.0`.
//! - `order`: three stateless total orders over `Interval1D` (by min
//!   endpoint, by max endpoint, by length) behind the `IntervalOrder` trait.
//! - `rect`: `Interval2D`, the axis-aligned box `x × y`, and `Point2D`.
//! - `error`: `IntervalError`, the only way constructing a value can fail.
//!
//! Every type here is immutable once built, `Copy`, and safe to share across
//! threads without synchronization.

pub mod error;
pub mod interval;
pub mod order;
pub mod rect;
