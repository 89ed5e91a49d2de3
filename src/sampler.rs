// Copyright 2026 the Cubic Arclen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Equal-interval sampling in the natural parameter and in arc length.

use smallvec::SmallVec;

use crate::{ArclenTable, CubicBez, Point};

/// Which spacing produced a [`DisplayPoint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum SampleMode {
    /// Equal steps of the natural parameter `t`.
    EqualT,
    /// Equal steps of normalized arc length `s`.
    EqualS,
}

/// A sample ready for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayPoint {
    /// Position on the curve.
    pub point: Point,
    /// Spacing that produced this sample.
    pub mode: SampleMode,
    /// The evenly spaced value: `t` for [`SampleMode::EqualT`], `s` for
    /// [`SampleMode::EqualS`].
    pub param: f64,
    /// The curve parameter that was evaluated.
    pub t: f64,
}

/// A sequence of display points, in increasing parameter order.
///
/// Display resolutions are small, so the default sequence lives inline.
pub type DisplayPoints = SmallVec<[DisplayPoint; 16]>;

/// Iterate `i / count` for `i` in `0..=count`, ending at exactly 1.
fn unit_steps(count: usize) -> impl Iterator<Item = f64> {
    let n = count.max(1);
    let step = (n as f64).recip();
    (0..=n).map(move |i| if i == n { 1.0 } else { i as f64 * step })
}

/// Sample `curve` at `count + 1` equally spaced values of `t`.
///
/// A `count` of 0 is treated as 1. The first point is `p0` and the last is
/// `p3`.
pub fn sample_equal_t(curve: &CubicBez, count: usize) -> DisplayPoints {
    unit_steps(count)
        .map(|t| DisplayPoint {
            point: curve.evaluate(t).position,
            mode: SampleMode::EqualT,
            param: t,
            t,
        })
        .collect()
}

/// Sample `curve` at `count + 1` equally spaced fractions of arc length.
///
/// `table` must have been built from `curve`. Each fraction `s` is mapped to
/// `t` through the table, then evaluated. A `count` of 0 is treated as 1.
/// On a zero-length curve every sample lands on `p0`.
pub fn sample_equal_s(table: &ArclenTable, curve: &CubicBez, count: usize) -> DisplayPoints {
    unit_steps(count)
        .map(|s| {
            let t = table.inv_arclen_normalized(s);
            DisplayPoint {
                point: curve.evaluate(t).position,
                mode: SampleMode::EqualS,
                param: s,
                t,
            }
        })
        .collect()
}

/// Sample with either spacing.
pub fn sample(
    mode: SampleMode,
    table: &ArclenTable,
    curve: &CubicBez,
    count: usize,
) -> DisplayPoints {
    match mode {
        SampleMode::EqualT => sample_equal_t(curve, count),
        SampleMode::EqualS => sample_equal_s(table, curve, count),
    }
}
