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

//! Construction errors for interval primitives.
//!
//! Validity of an interval is established once, when it is built. Every
//! failure mode of that check has its own variant so callers can tell a
//! non-finite endpoint apart from an inverted pair without parsing messages.

/// The error returned when an interval cannot be constructed from the
/// given endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalError {
    /// At least one endpoint is positive or negative infinity.
    NonFinite,
    /// At least one endpoint is not a number.
    NotANumber,
    /// The lower endpoint is strictly greater than the upper endpoint.
    Inverted,
}

impl IntervalError {
    /// Returns the human-readable description of the error.
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NonFinite => "endpoints must be finite",
            Self::NotANumber => "endpoints cannot be not-a-number",
            Self::Inverted => "illegal interval",
        }
    }
}

impl std::fmt::Display for IntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid argument: {}", self.message())
    }
}

impl std::error::Error for IntervalError {}

#[cfg(test)]
mod tests {
    use super::IntervalError;

    #[test]
    fn test_messages_are_distinct() {
        let kinds = [
            IntervalError::NonFinite,
            IntervalError::NotANumber,
            IntervalError::Inverted,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            IntervalError::Inverted.to_string(),
            "Invalid argument: illegal interval"
        );
        assert_eq!(
            format!("{}", IntervalError::NonFinite),
            "Invalid argument: endpoints must be finite"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(IntervalError::NotANumber);
        assert!(err.to_string().contains("not-a-number"));
    }
}
