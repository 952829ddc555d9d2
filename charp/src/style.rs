// Copyright 2026 the CharP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke and gridline styles.

use peniko::Brush;
use peniko::color::palette::css;
use smallvec::{SmallVec, smallvec};

/// Dash pattern of a stroked line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// A continuous line.
    #[default]
    Solid,
    /// Long dashes (`--`).
    Dashed,
    /// Short dots (`:`).
    Dotted,
    /// Alternating dash and dot (`-.`).
    DashDot,
}

impl LineStyle {
    /// Dash/gap lengths for this style, scaled by `stroke_width`.
    ///
    /// Solid lines have an empty pattern.
    pub fn dashes(self, stroke_width: f64) -> SmallVec<[f64; 4]> {
        let w = stroke_width.max(0.0);
        match self {
            Self::Solid => SmallVec::new(),
            Self::Dashed => smallvec![3.7 * w, 1.6 * w],
            Self::Dotted => smallvec![1.0 * w, 1.65 * w],
            Self::DashDot => smallvec![6.4 * w, 1.6 * w, 1.0 * w, 1.6 * w],
        }
    }
}

/// A paint, width and dash pattern for stroked paths (spines, ticks, gridlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Dash pattern.
    pub line_style: LineStyle,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            line_style: LineStyle::Solid,
        }
    }

    /// Sets the dash pattern.
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 0.8)
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl GridStyle {
    /// A gridline style with the given paint and dash pattern at width 0.8.
    pub fn new(brush: impl Into<Brush>, line_style: LineStyle) -> Self {
        Self {
            stroke: StrokeStyle::solid(brush, 0.8).with_line_style(line_style),
        }
    }
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle {
                brush: Brush::Solid(css::BLACK.with_alpha(40.0 / 255.0)),
                stroke_width: 0.8,
                line_style: LineStyle::Solid,
            },
        }
    }
}
