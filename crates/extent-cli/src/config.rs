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

//! Optional TOML configuration for the demonstration drivers.
//!
//! ```toml
//! intervals = [[15.0, 33.0], [45.0, 60.0], [20.0, 70.0], [46.0, 55.0]]
//!
//! [box]
//! x = [0.2, 0.5]
//! y = [0.5, 0.6]
//! trials = 10000
//! seed = 42
//! ```
//!
//! Every key is optional. Values given on the command line take precedence.

use anyhow::{Context, Result};
use extent_core::math::{interval::Interval1D, rect::Interval2D};
use serde::Deserialize;
use std::path::Path;

/// The contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Intervals for the sort demo, as `[min, max]` pairs.
    pub intervals: Option<Vec<[f64; 2]>>,
    /// Settings for the hit-counting demo.
    #[serde(rename = "box")]
    pub region: Option<RegionConfig>,
}

/// The `[box]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionConfig {
    pub x: Option<[f64; 2]>,
    pub y: Option<[f64; 2]>,
    pub trials: Option<u64>,
    pub seed: Option<u64>,
}

impl DemoConfig {
    /// Reads and parses the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parses configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Returns the configured intervals, validated.
    pub fn intervals(&self) -> Result<Option<Vec<Interval1D>>> {
        let Some(pairs) = &self.intervals else {
            return Ok(None);
        };
        pairs
            .iter()
            .enumerate()
            .map(|(i, &[min, max])| {
                Interval1D::new(min, max)
                    .with_context(|| format!("intervals[{}] = [{}, {}]", i, min, max))
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }
}

/// Builds an interval from a `[min, max]` endpoint pair, naming the axis in
/// the error.
pub fn axis(axis: &str, endpoints: [f64; 2]) -> Result<Interval1D> {
    let [min, max] = endpoints;
    Interval1D::new(min, max).with_context(|| format!("{} = [{}, {}]", axis, min, max))
}

/// Builds a box from its two axes.
pub fn region(x: [f64; 2], y: [f64; 2]) -> Result<Interval2D> {
    Ok(Interval2D::new(axis("x", x)?, axis("y", y)?))
}
