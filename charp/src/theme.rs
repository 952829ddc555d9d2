// Copyright 2026 the CharP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual defaults shared by the chart helpers.
//!
//! A [`Theme`] is built once by the caller and passed to every helper that needs a
//! color, size or line style. Nothing reads style settings from global state.

use charp_text::TextStyle;
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::axes::Axes;
use crate::style::{GridStyle, LineStyle, StrokeStyle};

/// Colors, sizes and line styles used by the presets.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Primary highlight color (the default line color).
    pub highlight: Color,
    /// Secondary highlight color.
    pub highlight2: Color,
    /// Tertiary highlight color.
    pub highlight3: Color,
    /// Title font size.
    pub title_font_size: f64,
    /// Title paint.
    pub title_fill: Brush,
    /// Tick label text style.
    pub tick_label_style: TextStyle,
    /// Tick label paint.
    pub tick_label_fill: Brush,
    /// Stroke for all four spines.
    pub spine: StrokeStyle,
    /// Value gridlines of vertical bar charts.
    pub bar_grid: GridStyle,
    /// Value gridlines of horizontal bar charts.
    pub barh_grid: GridStyle,
    /// Pad of the top-side value labels of horizontal bar charts.
    pub barh_label_pad: f64,
    /// Default rotation for x tick labels, in degrees.
    pub xlabel_rotation: f64,
    /// Horizontal gap between a line's last point and its label, in pixels.
    pub line_label_offset: f64,
    /// Text style of direct line labels.
    pub line_label_style: TextStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            highlight: Color::from_rgb8(0xff, 0x7f, 0x0e),
            highlight2: Color::from_rgb8(0, 153, 51),
            highlight3: Color::from_rgb8(30, 66, 139),
            title_font_size: 16.0,
            title_fill: Brush::Solid(css::BLACK),
            tick_label_style: TextStyle::new(10.0),
            tick_label_fill: Brush::Solid(css::BLACK),
            spine: StrokeStyle::default(),
            bar_grid: GridStyle::new(css::WHITE, LineStyle::Dotted),
            barh_grid: GridStyle::new(css::WHITE, LineStyle::Dashed),
            barh_label_pad: -13.0,
            xlabel_rotation: 45.0,
            line_label_offset: 4.0,
            line_label_style: TextStyle::new(10.0),
        }
    }
}

impl Theme {
    /// Sets the primary highlight color.
    pub fn with_highlight(mut self, color: Color) -> Self {
        self.highlight = color;
        self
    }

    /// Sets the title font size.
    pub fn with_title_font_size(mut self, font_size: f64) -> Self {
        self.title_font_size = font_size;
        self
    }

    /// Sets the tick label text style.
    pub fn with_tick_label_style(mut self, style: TextStyle) -> Self {
        self.tick_label_style = style;
        self
    }

    /// Sets the spine stroke.
    pub fn with_spine(mut self, spine: StrokeStyle) -> Self {
        self.spine = spine;
        self
    }

    /// Sets the gridlines used by [`bar`](crate::bar).
    pub fn with_bar_grid(mut self, grid: GridStyle) -> Self {
        self.bar_grid = grid;
        self
    }

    /// Sets the gridlines used by [`barh`](crate::barh).
    pub fn with_barh_grid(mut self, grid: GridStyle) -> Self {
        self.barh_grid = grid;
        self
    }

    /// Sets the label pad used by [`barh`](crate::barh).
    pub fn with_barh_label_pad(mut self, pad: f64) -> Self {
        self.barh_label_pad = pad;
        self
    }

    /// Sets the default x label rotation.
    pub fn with_xlabel_rotation(mut self, degrees: f64) -> Self {
        self.xlabel_rotation = degrees;
        self
    }

    /// Sets the gap between a line end and its label.
    pub fn with_line_label_offset(mut self, offset: f64) -> Self {
        self.line_label_offset = offset;
        self
    }

    /// The three highlight colors, in order.
    pub fn highlights(&self) -> [Color; 3] {
        [self.highlight, self.highlight2, self.highlight3]
    }

    /// Applies the theme's tick label and spine styles to `axes`.
    pub fn apply(&self, axes: &mut Axes) {
        for axis in [&mut axes.x, &mut axes.y] {
            axis.tick_params.label_style = self.tick_label_style.clone();
            axis.tick_params.label_fill = self.tick_label_fill.clone();
        }
        axes.spines.set_stroke(&self.spine);
    }
}
