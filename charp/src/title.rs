// Copyright 2026 the CharP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Titles aligned with the category labels.
//!
//! A default title is centered over the plot, or flush with the plot's left edge.
//! On horizontal bar charts that looks off: the eye lines the title up with the
//! category labels, which stick out to the left of the plot. [`AlignedTitle`]
//! measures the y tick labels and starts the title at their leftmost edge.

extern crate alloc;

use alloc::string::String;

use charp_text::{FontWeight, TextMeasurer, TextStyle};
use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;

use crate::axes::{Axes, AxisKind, TextAnchor, Title};
use crate::error::ChartError;
use crate::layout::AxesLayout;
use crate::theme::Theme;

/// A title that starts at the left edge of the y tick labels.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignedTitle {
    /// Title text.
    pub text: String,
    /// Text style.
    pub style: TextStyle,
    /// Text paint.
    pub fill: Brush,
}

impl AlignedTitle {
    /// Creates a 16px black title.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::new(16.0),
            fill: Brush::Solid(css::BLACK),
        }
    }

    /// Creates a title using the theme's title size and color.
    pub fn from_theme(text: impl Into<String>, theme: &Theme) -> Self {
        Self::new(text)
            .with_font_size(theme.title_font_size)
            .with_fill(theme.title_fill.clone())
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.style.font_size = font_size;
        self
    }

    /// Sets the font weight.
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.style.font_weight = font_weight;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Lays out the tick labels of `axes` and sets the title so it starts at the
    /// leftmost y tick label edge.
    ///
    /// The alignment is computed from the labels as they are now. Wrapping or
    /// rotating labels afterwards leaves the title where it was.
    pub fn apply<'a>(
        self,
        axes: &'a mut Axes,
        measurer: &dyn TextMeasurer,
    ) -> Result<&'a Title, ChartError> {
        let layout = AxesLayout::compute(axes, measurer);
        let x_min = layout
            .min_x0(AxisKind::Y)
            .ok_or(ChartError::NoTickLabels { axis: AxisKind::Y })?;
        let x = axes.pixel_to_axes(Point::new(x_min, axes.bounds.y1))?.x;
        tracing::debug!(text = %self.text, x_min, x, "aligned title with y tick labels");

        Ok(&*axes.title.insert(Title {
            text: self.text,
            x,
            anchor: TextAnchor::Start,
            style: self.style,
            fill: self.fill,
        }))
    }
}
