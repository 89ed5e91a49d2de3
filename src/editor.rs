// Copyright 2026 the Cubic Arclen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An interactive four-point curve editor.
//!
//! The editor collects four control points, then keeps a cubic Bézier and
//! its arc-length table in sync as points are dragged. A UI shell feeds it
//! pointer events and draws whatever [`CurveEditor::frame`] returns.

use alloc::string::String;
use core::fmt;

use arrayvec::ArrayVec;

use crate::{
    sample_equal_s, sample_equal_t, ArclenTable, ConfigError, CubicBez, DisplayPoints, Point,
    SampleConfig,
};

/// Status line shown while control points are being collected.
pub const COLLECTING_STATUS: &str = "Click to define four cubic interpolation points";

/// Status line shown once the curve is complete.
pub const READY_STATUS: &str = "Drag control points to change interpolation";

/// The coarse state of a [`CurveEditor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EditorState {
    /// No control points yet.
    Empty,
    /// Between one and three control points.
    Collecting,
    /// Four control points; the curve and its table exist.
    Ready,
}

/// A rejected editor call. The editor is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditError {
    /// All four control points are already placed.
    CurveComplete,
    /// Points can only be dragged once the curve is complete.
    NotReady,
    /// Control point index was not in `0..4`.
    IndexOutOfRange(usize),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::CurveComplete => write!(f, "curve already has four control points"),
            EditError::NotReady => write!(f, "curve is not complete"),
            EditError::IndexOutOfRange(index) => {
                write!(f, "control point index {index} out of range")
            }
        }
    }
}

impl core::error::Error for EditError {}

/// Everything a renderer needs for one redraw.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Total arc length, 0 before the curve is complete.
    pub arc_length: f64,
    /// Equal-t samples, if the curve is complete and they are shown.
    pub equal_t: Option<DisplayPoints>,
    /// Equal-s samples, if the curve is complete and they are shown.
    pub equal_s: Option<DisplayPoints>,
}

#[derive(Clone, Debug)]
enum Phase {
    Collecting(ArrayVec<Point, 4>),
    Ready { curve: CubicBez, table: ArclenTable },
}

/// The editor state machine.
///
/// ```
/// use cubic_arclen::{CurveEditor, EditorState};
///
/// let mut editor = CurveEditor::new();
/// for p in [(0.0, 0.0), (0.0, 100.0), (100.0, 100.0)] {
///     assert_eq!(editor.add_point(p.into()), Ok(None));
/// }
/// let total = editor.add_point((100.0, 0.0).into()).unwrap().unwrap();
/// assert_eq!(editor.state(), EditorState::Ready);
/// assert!(total > 100.0);
///
/// editor.set_show_s(true);
/// let frame = editor.frame();
/// assert!(frame.equal_t.is_none());
/// assert_eq!(frame.equal_s.unwrap().len(), 11);
/// ```
#[derive(Clone, Debug)]
pub struct CurveEditor {
    config: SampleConfig,
    phase: Phase,
    show_t: bool,
    show_s: bool,
}

impl Default for CurveEditor {
    fn default() -> Self {
        CurveEditor::new()
    }
}

impl CurveEditor {
    /// An empty editor with the default configuration.
    pub fn new() -> CurveEditor {
        CurveEditor {
            config: SampleConfig::default(),
            phase: Phase::Collecting(ArrayVec::new()),
            show_t: false,
            show_s: false,
        }
    }

    /// An empty editor with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`SampleConfig::validate`].
    pub fn with_config(config: SampleConfig) -> Result<CurveEditor, ConfigError> {
        config.validate()?;
        Ok(CurveEditor {
            config,
            ..CurveEditor::new()
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// The current state.
    pub fn state(&self) -> EditorState {
        match &self.phase {
            Phase::Collecting(points) if points.is_empty() => EditorState::Empty,
            Phase::Collecting(_) => EditorState::Collecting,
            Phase::Ready { .. } => EditorState::Ready,
        }
    }

    /// Number of control points placed so far.
    pub fn point_count(&self) -> usize {
        match &self.phase {
            Phase::Collecting(points) => points.len(),
            Phase::Ready { .. } => 4,
        }
    }

    /// The control points placed so far, in order.
    pub fn control_points(&self) -> ArrayVec<Point, 4> {
        match &self.phase {
            Phase::Collecting(points) => points.clone(),
            Phase::Ready { curve, .. } => ArrayVec::from(curve.points()),
        }
    }

    /// Place the next control point.
    ///
    /// Returns the total arc length when this completes the curve, and
    /// `None` while points are still being collected.
    ///
    /// # Errors
    ///
    /// [`EditError::CurveComplete`] if four points are already placed.
    pub fn add_point(&mut self, p: Point) -> Result<Option<f64>, EditError> {
        let points = match &mut self.phase {
            Phase::Ready { .. } => return Err(EditError::CurveComplete),
            Phase::Collecting(points) => {
                points.push(p);
                match points.clone().into_inner() {
                    Ok(full) => full,
                    Err(partial) => {
                        log::debug!("collected control point {} of 4 at {p}", partial.len());
                        return Ok(None);
                    }
                }
            }
        };
        log::debug!("fourth control point placed, curve ready");
        Ok(Some(self.rebuild(CubicBez::from_points(points))))
    }

    /// Move control point `index` and rebuild the table.
    ///
    /// Returns the new total arc length.
    ///
    /// # Errors
    ///
    /// [`EditError::NotReady`] before the curve is complete, and
    /// [`EditError::IndexOutOfRange`] if `index` is not in `0..4`.
    pub fn drag_point(&mut self, index: usize, p: Point) -> Result<f64, EditError> {
        let Phase::Ready { curve, .. } = &self.phase else {
            return Err(EditError::NotReady);
        };
        let curve = curve
            .with_point(index, p)
            .ok_or(EditError::IndexOutOfRange(index))?;
        Ok(self.rebuild(curve))
    }

    /// The index of the control point nearest to `p`, if one lies within
    /// `radius`.
    ///
    /// A negative or NaN `radius` matches nothing.
    pub fn pick_point(&self, p: Point, radius: f64) -> Option<usize> {
        if radius.is_nan() || radius < 0.0 {
            return None;
        }
        let radius2 = radius * radius;
        self.control_points()
            .iter()
            .map(|q| q.distance_squared(p))
            .enumerate()
            .filter(|&(_, d2)| d2 <= radius2)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Discard all points and the table.
    pub fn clear(&mut self) {
        log::debug!("editor cleared");
        self.phase = Phase::Collecting(ArrayVec::new());
    }

    /// Show or hide the equal-t family.
    pub fn set_show_t(&mut self, show: bool) {
        self.show_t = show;
    }

    /// Show or hide the equal-s family.
    pub fn set_show_s(&mut self, show: bool) {
        self.show_s = show;
    }

    /// Whether the equal-t family is shown.
    pub fn show_t(&self) -> bool {
        self.show_t
    }

    /// Whether the equal-s family is shown.
    pub fn show_s(&self) -> bool {
        self.show_s
    }

    /// The curve, once complete.
    pub fn curve(&self) -> Option<&CubicBez> {
        match &self.phase {
            Phase::Ready { curve, .. } => Some(curve),
            Phase::Collecting(_) => None,
        }
    }

    /// The arc-length table, once the curve is complete.
    pub fn table(&self) -> Option<&ArclenTable> {
        match &self.phase {
            Phase::Ready { table, .. } => Some(table),
            Phase::Collecting(_) => None,
        }
    }

    /// Total arc length, 0 before the curve is complete.
    pub fn arc_length(&self) -> f64 {
        self.table().map_or(0.0, ArclenTable::total_length)
    }

    /// Sample the shown families for rendering.
    pub fn frame(&self) -> Frame {
        let Phase::Ready { curve, table } = &self.phase else {
            return Frame {
                arc_length: 0.0,
                equal_t: None,
                equal_s: None,
            };
        };
        let m = self.config.display_samples;
        let equal_t = self.show_t.then(|| sample_equal_t(curve, m));
        let equal_s = self.show_s.then(|| sample_equal_s(table, curve, m));
        log::trace!(
            "frame: {m} intervals, equal-t {}, equal-s {}",
            self.show_t,
            self.show_s
        );
        Frame {
            arc_length: table.total_length(),
            equal_t,
            equal_s,
        }
    }

    /// Instructions for the current state.
    pub fn status_text(&self) -> &'static str {
        match self.state() {
            EditorState::Ready => READY_STATUS,
            EditorState::Empty | EditorState::Collecting => COLLECTING_STATUS,
        }
    }

    /// The arc length formatted to two decimals.
    pub fn arc_length_text(&self) -> String {
        alloc::format!("Arc length: {:.2}", self.arc_length())
    }

    fn rebuild(&mut self, curve: CubicBez) -> f64 {
        let table = ArclenTable::with_config(&curve, &self.config);
        let total = table.total_length();
        if table.is_degenerate() {
            log::warn!("curve {curve:?} has zero length");
        }
        log::debug!(
            "rebuilt arc-length table: {} segments, total length {total}",
            table.segments()
        );
        self.phase = Phase::Ready { curve, table };
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParamCurveArclen, QuadratureRule};

    const S_CURVE: [(f64, f64); 4] = [(0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0)];

    fn ready_editor() -> CurveEditor {
        let mut editor = CurveEditor::new();
        for p in S_CURVE {
            editor.add_point(p.into()).unwrap();
        }
        editor
    }

    #[test]
    fn collect_then_ready() {
        let mut editor = CurveEditor::new();
        assert_eq!(editor.state(), EditorState::Empty);
        assert_eq!(editor.status_text(), COLLECTING_STATUS);
        for (i, p) in S_CURVE.iter().take(3).enumerate() {
            assert_eq!(editor.add_point((*p).into()), Ok(None));
            assert_eq!(editor.state(), EditorState::Collecting);
            assert_eq!(editor.point_count(), i + 1);
            assert!(editor.curve().is_none());
            assert_eq!(editor.arc_length(), 0.0);
        }
        let total = editor.add_point(S_CURVE[3].into()).unwrap().unwrap();
        assert_eq!(editor.state(), EditorState::Ready);
        assert_eq!(editor.status_text(), READY_STATUS);
        assert_eq!(editor.arc_length(), total);
        let reference = editor.curve().unwrap().arclen(1e-9);
        assert!((total - reference).abs() < 1e-2 * reference);
    }

    #[test]
    fn fifth_point_rejected() {
        let mut editor = ready_editor();
        let before = editor.control_points();
        assert_eq!(
            editor.add_point(Point::new(1.0, 1.0)),
            Err(EditError::CurveComplete)
        );
        assert_eq!(editor.control_points(), before);
        assert_eq!(editor.state(), EditorState::Ready);
    }

    #[test]
    fn drag_rebuilds() {
        let mut editor = ready_editor();
        let before = editor.arc_length();
        let after = editor.drag_point(3, Point::new(200.0, 0.0)).unwrap();
        assert!(after > before);
        assert_eq!(editor.arc_length(), after);
        assert_eq!(editor.curve().unwrap().p3, Point::new(200.0, 0.0));
        assert_eq!(
            editor.drag_point(4, Point::ZERO),
            Err(EditError::IndexOutOfRange(4))
        );
        assert_eq!(editor.arc_length(), after);
    }

    #[test]
    fn drag_before_ready_rejected() {
        let mut editor = CurveEditor::new();
        editor.add_point(Point::ZERO).unwrap();
        assert_eq!(
            editor.drag_point(0, Point::new(1.0, 1.0)),
            Err(EditError::NotReady)
        );
        assert_eq!(editor.control_points().as_slice(), &[Point::ZERO]);
    }

    #[test]
    fn clear_resets() {
        let mut editor = ready_editor();
        editor.clear();
        assert_eq!(editor.state(), EditorState::Empty);
        assert_eq!(editor.arc_length(), 0.0);
        assert!(editor.table().is_none());
        assert_eq!(editor.arc_length_text(), "Arc length: 0.00");
        assert_eq!(editor.add_point(Point::ZERO), Ok(None));
    }

    #[test]
    fn toggles_select_families() {
        let mut editor = ready_editor();
        let total = editor.arc_length();
        let frame = editor.frame();
        assert!(frame.equal_t.is_none() && frame.equal_s.is_none());

        editor.set_show_t(true);
        let frame = editor.frame();
        assert_eq!(frame.equal_t.map(|s| s.len()), Some(11));
        assert!(frame.equal_s.is_none());

        editor.set_show_s(true);
        let frame = editor.frame();
        assert!(frame.equal_t.is_some() && frame.equal_s.is_some());
        assert_eq!(frame.arc_length, total);

        editor.set_show_t(false);
        editor.set_show_s(false);
        let frame = editor.frame();
        assert!(frame.equal_t.is_none() && frame.equal_s.is_none());
        assert_eq!(editor.arc_length(), total);
    }

    #[test]
    fn no_samples_before_ready() {
        let mut editor = CurveEditor::new();
        editor.set_show_t(true);
        editor.set_show_s(true);
        editor.add_point(Point::ZERO).unwrap();
        let frame = editor.frame();
        assert_eq!(frame.arc_length, 0.0);
        assert!(frame.equal_t.is_none() && frame.equal_s.is_none());
    }

    #[test]
    fn pick_nearest_within_radius() {
        let editor = ready_editor();
        assert_eq!(editor.pick_point(Point::new(2.0, 98.0), 5.0), Some(1));
        assert_eq!(editor.pick_point(Point::new(50.0, 50.0), 5.0), None);
        assert_eq!(CurveEditor::new().pick_point(Point::ZERO, 5.0), None);
    }

    #[test]
    fn pick_rejects_bad_radius() {
        let editor = ready_editor();
        assert_eq!(editor.pick_point(Point::new(0.0, 100.0), 0.0), Some(1));
        assert_eq!(editor.pick_point(Point::new(2.0, 98.0), -5.0), None);
        assert_eq!(editor.pick_point(Point::new(0.0, 100.0), -1.0), None);
        assert_eq!(editor.pick_point(Point::new(0.0, 100.0), f64::NAN), None);
    }

    #[test]
    fn degenerate_curve_ready() {
        let mut editor = CurveEditor::new();
        let mut total = None;
        for _ in 0..4 {
            total = editor.add_point(Point::new(5.0, 5.0)).unwrap();
        }
        assert_eq!(total, Some(0.0));
        editor.set_show_t(true);
        editor.set_show_s(true);
        let frame = editor.frame();
        let equal_t = frame.equal_t.unwrap();
        let equal_s = frame.equal_s.unwrap();
        assert_eq!(equal_t.len(), equal_s.len());
        for (a, b) in equal_t.iter().zip(equal_s.iter()) {
            assert_eq!(a.point, Point::new(5.0, 5.0));
            assert_eq!(a.point, b.point);
        }
    }

    #[test]
    fn custom_config() {
        let config = SampleConfig::default()
            .with_display_samples(4)
            .with_quadrature(QuadratureRule::GaussLegendre);
        let mut editor = CurveEditor::with_config(config).unwrap();
        for p in S_CURVE {
            editor.add_point(p.into()).unwrap();
        }
        editor.set_show_s(true);
        assert_eq!(editor.frame().equal_s.unwrap().len(), 5);
        assert_eq!(
            CurveEditor::with_config(config.with_table_segments(0)).err(),
            Some(ConfigError::ZeroTableSegments)
        );
    }

    #[test]
    fn arc_length_text_format() {
        let editor = ready_editor();
        let text = editor.arc_length_text();
        assert!(text.starts_with("Arc length: "));
        assert_eq!(text, alloc::format!("Arc length: {:.2}", editor.arc_length()));
        assert_eq!(
            EditError::IndexOutOfRange(7).to_string(),
            "control point index 7 out of range"
        );
    }
}
