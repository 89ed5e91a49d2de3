// Copyright 2026 the Cubic Arclen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution and quadrature settings.

use core::fmt;

use crate::QuadratureRule;

/// Default number of steps in an arc-length table.
///
/// At this resolution the trapezoidal rule keeps equal-s spacing well
/// within a pixel for curves the size of a typical canvas.
pub const DEFAULT_TABLE_SEGMENTS: usize = 100;

/// Default number of display intervals; each family has one more point
/// than this.
pub const DEFAULT_DISPLAY_SAMPLES: usize = 10;

/// Settings for table building and sampling.
///
/// ```
/// use cubic_arclen::{QuadratureRule, SampleConfig};
///
/// let config = SampleConfig::default()
///     .with_table_segments(256)
///     .with_quadrature(QuadratureRule::Simpson);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.display_samples, 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SampleConfig {
    /// Number of equal-t steps in the arc-length table (N).
    pub table_segments: usize,
    /// Number of display intervals for each sample family (M).
    pub display_samples: usize,
    /// Rule used to integrate speed over each table step.
    pub quadrature: QuadratureRule,
}

impl Default for SampleConfig {
    fn default() -> Self {
        SampleConfig {
            table_segments: DEFAULT_TABLE_SEGMENTS,
            display_samples: DEFAULT_DISPLAY_SAMPLES,
            quadrature: QuadratureRule::Trapezoid,
        }
    }
}

impl SampleConfig {
    /// Set the arc-length table resolution.
    #[must_use]
    pub fn with_table_segments(mut self, table_segments: usize) -> Self {
        self.table_segments = table_segments;
        self
    }

    /// Set the number of display intervals.
    #[must_use]
    pub fn with_display_samples(mut self, display_samples: usize) -> Self {
        self.display_samples = display_samples;
        self
    }

    /// Set the quadrature rule.
    #[must_use]
    pub fn with_quadrature(mut self, quadrature: QuadratureRule) -> Self {
        self.quadrature = quadrature;
        self
    }

    /// Check that both resolutions are non-zero.
    ///
    /// The numeric functions quietly raise a zero resolution to 1; this is
    /// for hosts that load settings and want to report bad values instead.
    ///
    /// # Errors
    ///
    /// Returns the first zero resolution found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_segments == 0 {
            return Err(ConfigError::ZeroTableSegments);
        }
        if self.display_samples == 0 {
            return Err(ConfigError::ZeroDisplaySamples);
        }
        Ok(())
    }
}

/// An invalid [`SampleConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// `table_segments` was zero.
    ZeroTableSegments,
    /// `display_samples` was zero.
    ZeroDisplaySamples,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTableSegments => write!(f, "arc-length table needs at least one segment"),
            ConfigError::ZeroDisplaySamples => write!(f, "display sampling needs at least one interval"),
        }
    }
}

impl core::error::Error for ConfigError {}
