// Copyright 2026 the Cubic Arclen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrature rules for integrating curve speed over one table step.

use crate::common::GAUSS_LEGENDRE_COEFFS_5;
use crate::CubicBez;

/// The rule used to integrate speed between two consecutive table entries.
///
/// Every rule converges to the true arc length as the table resolution
/// grows. The trapezoidal rule is plenty for on-screen accuracy at the
/// default resolution; the others trade extra speed evaluations per step
/// for a smaller error at coarse resolutions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum QuadratureRule {
    /// Average of the endpoint speeds. Error is O(h²).
    #[default]
    Trapezoid,
    /// Simpson's rule using the step midpoint. Error is O(h⁴).
    Simpson,
    /// Five-point Gauss-Legendre quadrature within each step.
    GaussLegendre,
}

impl QuadratureRule {
    /// Integrate `curve`'s speed over `[t0, t1]`.
    ///
    /// `v0` and `v1` are the speeds at `t0` and `t1`, which the table builder
    /// already has on hand from the neighbouring steps.
    pub(crate) fn integrate(self, curve: &CubicBez, t0: f64, t1: f64, v0: f64, v1: f64) -> f64 {
        let h = t1 - t0;
        match self {
            QuadratureRule::Trapezoid => 0.5 * h * (v0 + v1),
            QuadratureRule::Simpson => {
                let vm = curve.speed(0.5 * (t0 + t1));
                h * (1.0 / 6.0) * (v0 + 4.0 * vm + v1)
            }
            QuadratureRule::GaussLegendre => {
                let half = 0.5 * h;
                let mid = t0 + half;
                half * GAUSS_LEGENDRE_COEFFS_5
                    .iter()
                    .map(|&(wi, xi)| wi * curve.speed(mid + half * xi))
                    .sum::<f64>()
            }
        }
    }
}
