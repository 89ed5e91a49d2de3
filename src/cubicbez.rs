// Copyright 2026 the Cubic Arclen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::ops::Range;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::common::clamp_unit;
use crate::{ParamCurve, ParamCurveArclen, ParamCurveDeriv, Point, QuadBez, Vec2};

/// A single cubic Bézier segment.
///
/// The curve is defined by
/// `P(t) = (1 - t)³ p0 + 3 (1 - t)² t p1 + 3 (1 - t) t² p2 + t³ p3`
/// for `t` in `[0, 1]`. `p0` and `p3` are the endpoints; `p1` and `p2`
/// shape the tangents at those endpoints.
///
/// The points are held by value, so a copy taken before an edit never
/// observes that edit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

/// Position and first derivative of a curve at one parameter value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveEval {
    /// The point on the curve.
    pub position: Point,
    /// The analytic first derivative with respect to `t`.
    pub tangent: Vec2,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Create a cubic from its four points, in order.
    #[inline]
    pub fn from_points(points: [Point; 4]) -> CubicBez {
        let [p0, p1, p2, p3] = points;
        CubicBez { p0, p1, p2, p3 }
    }

    /// The four points, in order.
    #[inline]
    pub fn points(&self) -> [Point; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Returns a copy with the point at `index` replaced.
    ///
    /// Returns `None` if `index` is not in `0..4`.
    #[must_use]
    pub fn with_point(&self, index: usize, p: Point) -> Option<CubicBez> {
        let mut points = self.points();
        *points.get_mut(index)? = p;
        Some(CubicBez::from_points(points))
    }

    /// Evaluate position and derivative at `t`.
    ///
    /// `t` is clamped to `[0, 1]`; extrapolation is not supported. The
    /// tangent comes from the hodograph, not from finite differences.
    ///
    /// When all four points coincide, the position is exactly that point
    /// for every `t`.
    #[inline]
    pub fn evaluate(&self, t: f64) -> CurveEval {
        let t = clamp_unit(t);
        let position = if self.is_constant() {
            self.p0
        } else {
            self.eval(t)
        };
        CurveEval {
            position,
            tangent: self.deriv().eval(t).to_vec2(),
        }
    }

    // Exact comparison; the Bernstein sum of equal points can be off by
    // an ulp.
    fn is_constant(&self) -> bool {
        self.p1 == self.p0 && self.p2 == self.p0 && self.p3 == self.p0
    }

    /// The derivative at `t`, clamped to `[0, 1]`.
    #[inline]
    pub fn tangent(&self, t: f64) -> Vec2 {
        self.deriv().eval(clamp_unit(t)).to_vec2()
    }

    /// The speed `|P'(t)|` at `t`, clamped to `[0, 1]`.
    #[inline]
    pub fn speed(&self, t: f64) -> f64 {
        self.tangent(t).hypot()
    }

    /// Is every point within `accuracy` of `p0`?
    ///
    /// Such a curve has zero arc length for practical purposes.
    pub fn is_point(&self, accuracy: f64) -> bool {
        self.p1.is_near(self.p0, accuracy)
            && self.p2.is_near(self.p0, accuracy)
            && self.p3.is_near(self.p0, accuracy)
    }

    /// Is this cubic finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    fn subsegment(&self, range: Range<f64>) -> CubicBez {
        let (t0, t1) = (range.start, range.end);
        let p0 = self.eval(t0);
        let p3 = self.eval(t1);
        let d = self.deriv();
        let scale = (t1 - t0) * (1.0 / 3.0);
        let p1 = p0 + scale * d.eval(t0).to_vec2();
        let p2 = p3 - scale * d.eval(t1).to_vec2();
        CubicBez { p0, p1, p2, p3 }
    }

    /// Subdivide into halves, using de Casteljau.
    #[inline]
    fn subdivide(&self) -> (CubicBez, CubicBez) {
        let pm = self.eval(0.5);
        (
            CubicBez::new(
                self.p0,
                self.p0.midpoint(self.p1),
                ((self.p0.to_vec2() + self.p1.to_vec2() * 2.0 + self.p2.to_vec2()) * 0.25)
                    .to_point(),
                pm,
            ),
            CubicBez::new(
                pm,
                ((self.p1.to_vec2() + self.p2.to_vec2() * 2.0 + self.p3.to_vec2()) * 0.25)
                    .to_point(),
                self.p2.midpoint(self.p3),
                self.p3,
            ),
        )
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveDeriv for CubicBez {
    type DerivResult = QuadBez;

    #[inline]
    fn deriv(&self) -> QuadBez {
        QuadBez::new(
            (3.0 * (self.p1 - self.p0)).to_point(),
            (3.0 * (self.p2 - self.p1)).to_point(),
            (3.0 * (self.p3 - self.p2)).to_point(),
        )
    }
}

impl ParamCurveArclen for CubicBez {
    /// Arclength of a cubic Bézier segment.
    ///
    /// This algorithm is based on "Adaptive subdivision and the length and
    /// energy of Bézier curves" by Jens Gravesen.
    fn arclen(&self, accuracy: f64) -> f64 {
        // Estimate for a single segment.
        fn calc_l0(c: &CubicBez) -> f64 {
            let lc = (c.p3 - c.p0).hypot();
            let lp = (c.p1 - c.p0).hypot() + (c.p2 - c.p1).hypot() + (c.p3 - c.p2).hypot();
            (lc + lp) * 0.5
        }
        const MAX_DEPTH: usize = 16;
        fn rec(c: &CubicBez, l0: f64, accuracy: f64, depth: usize) -> f64 {
            let (c0, c1) = c.subdivide();
            let l0_c0 = calc_l0(&c0);
            let l0_c1 = calc_l0(&c1);
            let l1 = l0_c0 + l0_c1;
            let error = (l0 - l1) * (1.0 / 15.0);
            if error.abs() < accuracy || depth == MAX_DEPTH {
                l1 - error
            } else {
                rec(&c0, l0_c0, accuracy * 0.5, depth + 1)
                    + rec(&c1, l0_c1, accuracy * 0.5, depth + 1)
            }
        }
        rec(self, calc_l0(self), accuracy, 0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{CubicBez, ParamCurve, ParamCurveArclen, ParamCurveDeriv, Point, Vec2};

    fn s_curve() -> CubicBez {
        CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0))
    }

    #[test]
    fn cubicbez_endpoints_exact() {
        let c = CubicBez::new((0.1, 0.7), (13.3, -2.9), (4.4, 8.1), (-0.3, 0.3));
        assert_eq!(c.evaluate(0.0).position, c.p0);
        assert_eq!(c.evaluate(1.0).position, c.p3);
        assert_eq!(s_curve().evaluate(0.0).position, Point::new(0.0, 0.0));
        assert_eq!(s_curve().evaluate(1.0).position, Point::new(100.0, 0.0));
    }

    #[test]
    fn cubicbez_bernstein() {
        let c = s_curve();
        // (1-t)^3 p0 + 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3 p3 at t = 0.5
        let p = c.evaluate(0.5).position;
        assert_abs_diff_eq!(p.x, 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 75.0, epsilon = 1e-12);
    }

    #[test]
    fn cubicbez_evaluate_clamps() {
        let c = s_curve();
        assert_eq!(c.evaluate(-0.5), c.evaluate(0.0));
        assert_eq!(c.evaluate(1.5), c.evaluate(1.0));
        assert_eq!(c.evaluate(f64::NAN), c.evaluate(0.0));
    }

    #[test]
    fn cubicbez_deriv() {
        // y = x^2
        let c = CubicBez::new(
            (0.0, 0.0),
            (1.0 / 3.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0),
            (1.0, 1.0),
        );
        let deriv = c.deriv();

        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let delta = 1e-6;
            let p = c.eval(t);
            let p1 = c.eval(t + delta);
            let d_approx = (p1 - p) * delta.recip();
            let d = deriv.eval(t).to_vec2();
            assert!((d - d_approx).hypot() < delta * 2.0);
            assert_eq!(c.evaluate(t).tangent, d);
        }
    }

    #[test]
    fn cubicbez_tangent_at_endpoints() {
        let c = s_curve();
        assert_eq!(c.tangent(0.0), Vec2::new(0.0, 300.0));
        assert_eq!(c.tangent(1.0), Vec2::new(0.0, -300.0));
        assert_abs_diff_eq!(c.speed(0.5), 150.0, epsilon = 1e-12);
    }

    #[test]
    fn cubicbez_arclen() {
        // y = x^2
        let c = CubicBez::new(
            (0.0, 0.0),
            (1.0 / 3.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0),
            (1.0, 1.0),
        );
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        for i in 0..12 {
            let accuracy = 0.1f64.powi(i);
            let error = c.arclen(accuracy) - true_arclen;
            assert!(error.abs() < accuracy);
        }
    }

    #[test]
    fn cubicbez_inv_arclen() {
        // y = x^2
        let c = CubicBez::new(
            (0.0, 0.0),
            (1.0 / 3.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0),
            (1.0, 1.0),
        );
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        for i in 0..8 {
            let accuracy = 0.1f64.powi(i);
            let n = 10;
            for j in 0..=n {
                let arc = (j as f64) * ((n as f64).recip() * true_arclen);
                let t = c.inv_arclen(arc, accuracy * 0.5);
                let actual_arc = c.subsegment(0.0..t).arclen(accuracy * 0.5);
                assert!(
                    (arc - actual_arc).abs() < accuracy,
                    "at accuracy {accuracy:e}, wanted {actual_arc} got {arc}"
                );
            }
        }
    }

    #[test]
    fn cubicbez_degenerate() {
        let p = Point::new(5.0, 5.0);
        let c = CubicBez::new(p, p, p, p);
        assert!(c.is_point(0.0));
        assert_eq!(c.arclen(1e-9), 0.0);
        assert_eq!(c.inv_arclen(0.0, 1e-9), 0.0);
        assert_eq!(c.speed(0.3), 0.0);
        assert!(!s_curve().is_point(1e-6));
    }

    #[test]
    fn cubicbez_evaluate_coincident_points_exact() {
        for p in [
            Point::new(5.0, 5.0),
            Point::new(0.1, 0.1),
            Point::new(3.7, -12.3),
            Point::new(333333.33, 0.3),
        ] {
            let c = CubicBez::new(p, p, p, p);
            for i in 0..=20 {
                let eval = c.evaluate(i as f64 * 0.05);
                assert_eq!(eval.position, p);
                assert_eq!(eval.tangent, Vec2::ZERO);
            }
        }
    }

    #[test]
    fn cubicbez_with_point() {
        let c = s_curve();
        let moved = c.with_point(2, Point::new(50.0, 50.0)).unwrap();
        assert_eq!(moved.p2, Point::new(50.0, 50.0));
        assert_eq!(moved.p0, c.p0);
        assert_eq!(c.p2, Point::new(100.0, 100.0));
        assert!(c.with_point(4, Point::ZERO).is_none());
    }

    #[test]
    fn cubicbez_subdivide_matches_subsegment() {
        let c = CubicBez::new((0.0, 1.77), (2.9, 0.0), (4.3, 3.0), (3.2, -4.0));
        let (left, right) = c.subdivide();
        let n = 100;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            assert!(c.eval(t * 0.5).distance(left.eval(t)) < 1e-12);
            assert!(c.eval(0.5 + t * 0.5).distance(right.eval(t)) < 1e-12);
        }
    }
}
