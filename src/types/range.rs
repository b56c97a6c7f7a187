// Copyright (c) 2024-2025  ll97calc developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Estimation intervals
====================

`Range` is a `{ low, high }` pair carried through every derived monetary and
physical quantity instead of a collapsed point estimate.

Composition must preserve the `low <= high` ordering; it is not enforced
defensively. In particular, dividing one range by another uses the
cross-bounded `div_conservative` so the result still reads best plausible to
worst plausible.
*/

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign};

use serde::{Deserialize, Serialize};

/// A `[low, high]` interval representing calculation uncertainty
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound
    pub low: f32,
    /// Upper bound
    pub high: f32,
}

impl Range {
    /// Build a range from its bounds
    pub fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Collapse the interval to its midpoint.
    ///
    /// Used where the pipeline deliberately trades the interval for a point
    /// estimate before a single comparison.
    pub fn midpoint(self) -> f32 {
        (self.low + self.high) / 2.0
    }

    /// Conservative cross-bounded division.
    ///
    /// `low` pairs the cheap bound with the high divisor (best plausible) and
    /// `high` the expensive bound with the low divisor (worst plausible), so
    /// payback-style quotients keep the `low <= high` ordering whenever both
    /// operands are well-formed and the divisor bounds are positive.
    pub fn div_conservative(self, divisor: Range) -> Range {
        Range {
            low: self.low / divisor.high,
            high: self.high / divisor.low,
        }
    }
}

impl From<(f32, f32)> for Range {
    fn from((low, high): (f32, f32)) -> Self {
        Self { low, high }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ low: {:.2}, high: {:.2} }}", self.low, self.high)
    }
}

// Elementwise addition
impl Add for Range {
    type Output = Range;

    fn add(self, other: Range) -> Range {
        Range {
            low: self.low + other.low,
            high: self.high + other.high,
        }
    }
}

impl AddAssign for Range {
    fn add_assign(&mut self, other: Range) {
        *self = *self + other;
    }
}

// Scaling by a factor
impl Mul<f32> for Range {
    type Output = Range;

    fn mul(self, rhs: f32) -> Range {
        Range {
            low: self.low * rhs,
            high: self.high * rhs,
        }
    }
}

impl Mul<Range> for f32 {
    type Output = Range;

    fn mul(self, rhs: Range) -> Range {
        rhs * self
    }
}

impl MulAssign<f32> for Range {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
