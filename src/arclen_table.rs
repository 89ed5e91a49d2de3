// Copyright 2026 the Cubic Arclen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc-length lookup tables for cubic Béziers.

use alloc::vec::Vec;

use crate::common::clamp_unit;
use crate::{CubicBez, QuadratureRule, SampleConfig};

/// One entry of an [`ArclenTable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArclenSample {
    /// Curve parameter.
    pub t: f64,
    /// Arc length from the start of the curve to `t`.
    pub length: f64,
}

/// A monotonic table mapping curve parameter to cumulative arc length.
///
/// The table partitions `[0, 1]` into equal steps of `t`, integrates the
/// curve's speed over each step, and accumulates the result. It supports
/// lookups in both directions: [`arclen_at`](Self::arclen_at) for length
/// from `t`, and [`inv_arclen`](Self::inv_arclen) /
/// [`inv_arclen_normalized`](Self::inv_arclen_normalized) for `t` from a
/// length, by binary search and linear interpolation.
///
/// Entries have strictly increasing `t`, starting at exactly 0 and ending
/// at exactly 1, and non-decreasing `length` starting at 0.
///
/// ```
/// use cubic_arclen::{ArclenTable, CubicBez, QuadratureRule};
///
/// let c = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
/// let table = ArclenTable::build(&c, 100, QuadratureRule::Trapezoid);
/// assert!(table.total_length() > 100.0);
/// assert_eq!(table.inv_arclen_normalized(0.0), 0.0);
/// assert_eq!(table.inv_arclen_normalized(1.0), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ArclenTable {
    samples: Vec<ArclenSample>,
}

impl ArclenTable {
    /// Build a table of `segments + 1` entries for `curve`.
    ///
    /// A `segments` of 0 is treated as 1.
    pub fn build(curve: &CubicBez, segments: usize, rule: QuadratureRule) -> ArclenTable {
        let n = segments.max(1);
        let step = (n as f64).recip();
        let mut samples = Vec::with_capacity(n + 1);
        samples.push(ArclenSample { t: 0.0, length: 0.0 });
        let mut length = 0.0;
        let mut t0 = 0.0;
        let mut v0 = curve.speed(0.0);
        for i in 1..=n {
            // Divide rather than accumulate so the last entry is exactly 1.
            let t1 = if i == n { 1.0 } else { i as f64 * step };
            let v1 = curve.speed(t1);
            length += rule.integrate(curve, t0, t1, v0, v1).max(0.0);
            samples.push(ArclenSample { t: t1, length });
            t0 = t1;
            v0 = v1;
        }
        log::trace!("arc-length table: {n} segments, {rule:?}, total {length}");
        ArclenTable { samples }
    }

    /// Build a table with the resolution and rule from `config`.
    pub fn with_config(curve: &CubicBez, config: &SampleConfig) -> ArclenTable {
        ArclenTable::build(curve, config.table_segments, config.quadrature)
    }

    /// The table entries, in increasing `t`.
    #[inline]
    pub fn samples(&self) -> &[ArclenSample] {
        &self.samples
    }

    /// Number of steps, one less than the number of entries.
    #[inline]
    pub fn segments(&self) -> usize {
        self.samples.len() - 1
    }

    /// Total arc length of the curve.
    #[inline]
    pub fn total_length(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.length)
    }

    /// Does the curve have zero length?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let total = self.total_length();
        total.is_nan() || total <= 0.0
    }

    /// Arc length from the start of the curve to `t`.
    ///
    /// `t` is clamped to `[0, 1]`; values between entries are interpolated
    /// linearly.
    pub fn arclen_at(&self, t: f64) -> f64 {
        let t = clamp_unit(t);
        let idx = self
            .samples
            .partition_point(|s| s.t < t)
            .clamp(1, self.samples.len() - 1);
        let lo = self.samples[idx - 1];
        let hi = self.samples[idx];
        let frac = (t - lo.t) / (hi.t - lo.t);
        lo.length + frac * (hi.length - lo.length)
    }

    /// Solve for the parameter at arc length `length` from the start.
    ///
    /// `length` is clamped to `[0, total_length]`. A zero-length curve
    /// returns 0 for every input, since every parameter maps to the same
    /// point.
    pub fn inv_arclen(&self, length: f64) -> f64 {
        let total = self.total_length();
        if total.is_nan() || total <= 0.0 || length.is_nan() || length <= 0.0 {
            return 0.0;
        }
        if length >= total {
            return 1.0;
        }
        // First entry at or beyond the target. Entry 0 has length 0 and the
        // last entry has length `total`, so this lands in 1..=segments.
        let idx = self.samples.partition_point(|s| s.length < length);
        let lo = self.samples[idx - 1];
        let hi = self.samples[idx];
        let span = hi.length - lo.length;
        if span <= 0.0 {
            return lo.t;
        }
        let frac = (length - lo.length) / span;
        lo.t + frac * (hi.t - lo.t)
    }

    /// Solve for the parameter at normalized arc length `s`.
    ///
    /// `s` is the fraction of the total length, clamped to `[0, 1]`.
    /// `s = 0` yields exactly 0 and `s = 1` exactly 1, unless the curve has
    /// zero length, in which case the result is always 0.
    #[inline]
    pub fn inv_arclen_normalized(&self, s: f64) -> f64 {
        self.inv_arclen(clamp_unit(s) * self.total_length())
    }
}
