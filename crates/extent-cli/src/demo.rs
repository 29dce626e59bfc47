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

//! The two demonstration drivers: sorting sample intervals under each
//! ordering, and counting uniform random points that land inside a box.

use extent_core::{
    draw::DrawingSurface,
    math::{
        interval::Interval1D,
        order::{IntervalOrder, LengthOrder, MaxEndpointOrder, MinEndpointOrder, sort_intervals},
        rect::{Interval2D, Point2D},
    },
    sample::UniformSampler,
    utils::counter::Counter,
};
use tracing::debug;

/// The intervals sorted when no others are given.
pub const DEFAULT_INTERVALS: [[f64; 2]; 4] =
    [[15.0, 33.0], [45.0, 60.0], [20.0, 70.0], [46.0, 55.0]];

/// The box probed by the hit demo when no other is given.
pub const DEFAULT_X: [f64; 2] = [0.2, 0.5];
pub const DEFAULT_Y: [f64; 2] = [0.5, 0.6];
pub const DEFAULT_TRIALS: u64 = 10_000;

/// One titled snapshot of the sort demo.
#[derive(Debug, Clone, PartialEq)]
pub struct SortSection {
    pub title: &'static str,
    pub intervals: Vec<Interval1D>,
}

impl std::fmt::Display for SortSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        for iv in &self.intervals {
            writeln!(f, "{}", iv)?;
        }
        Ok(())
    }
}

/// Sorts one working copy of `intervals` by min endpoint, then max endpoint,
/// then length, recording the sequence after each step.
///
/// Each sort starts from the previous result, so intervals of equal length
/// appear in max-endpoint order in the final section.
pub fn sort_demo(intervals: &[Interval1D]) -> Vec<SortSection> {
    let steps: [(&'static str, &dyn IntervalOrder<f64>); 3] = [
        ("Sort by min endpoint", &MinEndpointOrder),
        ("Sort by max endpoint", &MaxEndpointOrder),
        ("Sort by length", &LengthOrder),
    ];

    let mut working = intervals.to_vec();
    let mut sections = Vec::with_capacity(steps.len() + 1);
    sections.push(SortSection {
        title: "Unsorted",
        intervals: working.clone(),
    });
    for (title, order) in steps {
        debug!(order = order.name(), count = working.len(), "sorting intervals");
        sort_intervals(&mut working, order);
        sections.push(SortSection {
            title,
            intervals: working.clone(),
        });
    }
    sections
}

/// The outcome of the hit demo.
#[derive(Debug, Clone, PartialEq)]
pub struct HitReport {
    pub hits: Counter,
    pub trials: u64,
    pub area: f64,
}

impl HitReport {
    /// Returns the fraction of trials that landed inside the box.
    pub fn hit_ratio(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.hits.tally() as f64 / self.trials as f64
        }
    }
}

/// Draws `region`, then samples `trials` points uniformly from `[0, 1)²`.
/// Points inside the box are counted; the others are drawn on `surface`.
pub fn hit_demo<R, S>(
    region: &Interval2D,
    trials: u64,
    sampler: &mut R,
    surface: &mut S,
) -> HitReport
where
    R: UniformSampler + ?Sized,
    S: DrawingSurface<f64> + ?Sized,
{
    region.draw(surface);

    let mut hits = Counter::new("hits");
    for _ in 0..trials {
        let x = sampler.uniform(0.0, 1.0);
        let y = sampler.uniform(0.0, 1.0);
        let point = Point2D::new(x, y);
        if region.contains(point) {
            hits.increment();
        } else {
            point.draw(surface);
        }
    }

    HitReport {
        hits,
        trials,
        area: region.area(),
    }
}
