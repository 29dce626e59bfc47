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

/// A named tally that can only go up.
///
/// # Examples
///
/// ```rust
/// # use extent_core::utils::counter::Counter;
///
/// let mut hits = Counter::new("hits");
/// hits.increment();
/// hits.increment();
/// assert_eq!(hits.tally(), 2);
/// assert_eq!(hits.to_string(), "2 hits");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Counter {
    name: String,
    count: u64,
}

impl Counter {
    /// Creates a new `Counter` starting at zero.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
        }
    }

    /// Increments the counter by one.
    #[inline]
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Returns the current count.
    #[inline]
    pub fn tally(&self) -> u64 {
        self.count
    }

    /// Returns the name of the counter.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.count, self.name)
    }
}
