// Copyright 2026 the CharP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axes model the helpers operate on.
//!
//! An [`Axes`] owns everything drawn for one subplot: the plot bounds in pixel space,
//! an x and a y [`Axis`] (ticks, tick parameters, gridlines), the four spines, the
//! title, plotted line series and free-standing annotations. Helpers receive it as an
//! explicit `&mut Axes`; there is no notion of a current axes.
//!
//! Pixel space follows `kurbo`: x grows to the right and y grows downward.
//! Axis-fraction space maps the plot bounds to the unit square with y growing upward.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use charp_text::TextStyle;
use kurbo::{Affine, Point, Rect, Vec2};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::error::ChartError;
use crate::scale::ScaleLinear;
use crate::style::{GridStyle, StrokeStyle};
use crate::z_order;

/// Which of the two axes of an [`Axes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// One edge of the plot bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The top edge.
    Top,
    /// The bottom edge.
    Bottom,
    /// The left edge.
    Left,
    /// The right edge.
    Right,
}

/// Horizontal text alignment relative to an anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The text starts at the anchor (left-aligned).
    Start,
    /// The text is centered on the anchor.
    Middle,
    /// The text ends at the anchor (right-aligned).
    End,
}

/// A tick position and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position in data units.
    pub value: f64,
    /// Label text; may contain `\n`.
    pub label: String,
}

impl Tick {
    /// Creates a tick.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Tick mark and tick label settings for one axis.
///
/// Side `1` is the bottom edge for the x axis and the left edge for the y axis;
/// side `2` is the opposite edge.
#[derive(Clone, Debug, PartialEq)]
pub struct TickParams {
    /// Draw tick marks on side 1.
    pub tick1: bool,
    /// Draw tick marks on side 2.
    pub tick2: bool,
    /// Draw tick labels on side 1.
    pub label1: bool,
    /// Draw tick labels on side 2.
    pub label2: bool,
    /// Tick mark length in pixels.
    pub size: f64,
    /// Distance between the tick mark and its label. Negative values pull the
    /// labels into the plot.
    pub pad: f64,
    /// Label rotation in degrees, counterclockwise.
    pub label_rotation: f64,
    /// Horizontal label alignment. `None` uses the side default: centered for
    /// x labels, flush against the plot for y labels.
    pub label_anchor: Option<TextAnchor>,
    /// Label text style.
    pub label_style: TextStyle,
    /// Label paint.
    pub label_fill: Brush,
}

impl Default for TickParams {
    fn default() -> Self {
        Self {
            tick1: true,
            tick2: false,
            label1: true,
            label2: false,
            size: 3.5,
            pad: 3.5,
            label_rotation: 0.0,
            label_anchor: None,
            label_style: TextStyle::new(10.0),
            label_fill: Brush::Solid(css::BLACK),
        }
    }
}

/// One axis of an [`Axes`].
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Which axis this is.
    pub kind: AxisKind,
    /// Data domain shown between the plot edges.
    pub domain: (f64, f64),
    /// Tick positions and labels, in axis order.
    pub ticks: Vec<Tick>,
    /// Tick mark and label settings.
    pub tick_params: TickParams,
    /// Gridlines at the tick positions, if enabled.
    pub grid: Option<GridStyle>,
}

impl Axis {
    /// Creates an axis with a `[0, 1]` domain and no ticks.
    pub fn new(kind: AxisKind) -> Self {
        Self {
            kind,
            domain: (0.0, 1.0),
            ticks: Vec::new(),
            tick_params: TickParams::default(),
            grid: None,
        }
    }

    /// The sides this axis can place ticks on, as `(side 1, side 2)`.
    pub fn sides(&self) -> (Side, Side) {
        match self.kind {
            AxisKind::X => (Side::Bottom, Side::Top),
            AxisKind::Y => (Side::Left, Side::Right),
        }
    }

    /// Returns the scale mapping this axis' domain onto `bounds`.
    pub fn scale(&self, bounds: Rect) -> ScaleLinear {
        let range = match self.kind {
            AxisKind::X => (bounds.x0, bounds.x1),
            AxisKind::Y => (bounds.y1, bounds.y0),
        };
        ScaleLinear::new(self.domain, range)
    }

    /// Iterates the tick label texts.
    pub fn tick_labels(&self) -> impl Iterator<Item = &str> {
        self.ticks.iter().map(|t| t.label.as_str())
    }

    /// Replaces tick label texts in order, keeping tick positions.
    ///
    /// Extra labels are ignored; ticks without a replacement keep their label.
    pub fn set_tick_labels<I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = String>,
    {
        for (tick, label) in self.ticks.iter_mut().zip(labels) {
            tick.label = label;
        }
    }
}

/// The border line along one edge of the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Spine {
    /// Whether the spine is drawn.
    pub visible: bool,
    /// Stroke used for the spine.
    pub stroke: StrokeStyle,
}

impl Default for Spine {
    fn default() -> Self {
        Self {
            visible: true,
            stroke: StrokeStyle::default(),
        }
    }
}

/// The four spines of an [`Axes`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spines {
    /// Top spine.
    pub top: Spine,
    /// Bottom spine.
    pub bottom: Spine,
    /// Left spine.
    pub left: Spine,
    /// Right spine.
    pub right: Spine,
}

impl Spines {
    /// Returns the spine on `side`.
    pub fn get(&self, side: Side) -> &Spine {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Returns the spine on `side` for modification.
    pub fn get_mut(&mut self, side: Side) -> &mut Spine {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Sets the stroke of all four spines.
    pub fn set_stroke(&mut self, stroke: &StrokeStyle) {
        for spine in [
            &mut self.top,
            &mut self.bottom,
            &mut self.left,
            &mut self.right,
        ] {
            spine.stroke = stroke.clone();
        }
    }
}

/// The axes title.
#[derive(Clone, Debug, PartialEq)]
pub struct Title {
    /// Title text.
    pub text: String,
    /// Anchor x position in axis-fraction coordinates. May be negative when the
    /// title starts left of the plot.
    pub x: f64,
    /// Horizontal alignment at `x`.
    pub anchor: TextAnchor,
    /// Text style.
    pub style: TextStyle,
    /// Text paint.
    pub fill: Brush,
}

/// A plotted line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    /// Legend label.
    pub label: String,
    /// Data points. A NaN or infinite coordinate marks a missing value.
    pub points: Vec<Point>,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl LineSeries {
    /// Creates a black line series of width 1.5.
    pub fn new(label: impl Into<String>, points: impl Into<Vec<Point>>) -> Self {
        Self {
            label: label.into(),
            points: points.into(),
            color: css::BLACK,
            stroke_width: 1.5,
        }
    }

    /// Creates a series from y values at x = 0, 1, 2, ...
    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &y)| Point::new(i as f64, y))
            .collect::<Vec<_>>();
        Self::new(label, points)
    }

    /// Sets the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Returns the last point whose coordinates are both finite.
    pub fn last_finite_point(&self) -> Option<Point> {
        self.points
            .iter()
            .rev()
            .copied()
            .find(|p| p.x.is_finite() && p.y.is_finite())
    }
}

/// Where an [`Annotation`] came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    /// Added by the caller.
    #[default]
    User,
    /// Generated by [`label_lines`](crate::label_lines); replaced on every call.
    LineLabel,
}

/// Text placed at a data position.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    /// Origin of the annotation.
    pub kind: AnnotationKind,
    /// Annotation text.
    pub text: String,
    /// Anchor position in data units.
    pub position: Point,
    /// Offset from the anchor in pixels.
    pub offset: Vec2,
    /// Horizontal alignment at the offset anchor.
    pub anchor: TextAnchor,
    /// Text style.
    pub style: TextStyle,
    /// Text paint.
    pub fill: Brush,
}

impl Annotation {
    /// Returns the pixel position of the offset anchor within `axes`.
    pub fn pixel_position(&self, axes: &Axes) -> Point {
        axes.data_to_pixel(self.position) + self.offset
    }
}

/// A single subplot.
#[derive(Clone, Debug, PartialEq)]
pub struct Axes {
    /// Plot bounds in pixel space.
    pub bounds: Rect,
    /// The horizontal axis.
    pub x: Axis,
    /// The vertical axis.
    pub y: Axis,
    /// Plot border lines.
    pub spines: Spines,
    /// Whether gridlines are drawn behind the series.
    pub axis_below: bool,
    /// The title, if set.
    pub title: Option<Title>,
    /// Plotted line series.
    pub lines: Vec<LineSeries>,
    /// Text annotations.
    pub annotations: Vec<Annotation>,
    /// Whether the legend is shown.
    pub legend_visible: bool,
}

impl Axes {
    /// Creates empty axes occupying `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            x: Axis::new(AxisKind::X),
            y: Axis::new(AxisKind::Y),
            spines: Spines::default(),
            axis_below: true,
            title: None,
            lines: Vec::new(),
            annotations: Vec::new(),
            legend_visible: true,
        }
    }

    /// Makes `kind` a categorical axis with one tick per label.
    ///
    /// Categories sit at `0, 1, 2, ...` and the domain leaves half a category
    /// of room on each side.
    pub fn with_categories<I, S>(mut self, kind: AxisKind, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ticks: Vec<Tick> = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Tick::new(i as f64, label))
            .collect();
        let n = ticks.len() as f64;
        let axis = self.axis_mut(kind);
        axis.domain = (-0.5, n - 0.5);
        axis.ticks = ticks;
        self
    }

    /// Sets explicit ticks on `kind`.
    pub fn with_ticks(mut self, kind: AxisKind, ticks: Vec<Tick>) -> Self {
        self.axis_mut(kind).ticks = ticks;
        self
    }

    /// Sets the data domain of `kind`.
    pub fn with_domain(mut self, kind: AxisKind, domain: (f64, f64)) -> Self {
        self.axis_mut(kind).domain = domain;
        self
    }

    /// Adds a line series.
    pub fn with_line(mut self, series: LineSeries) -> Self {
        self.plot(series);
        self
    }

    /// Returns the axis of the given kind.
    pub fn axis(&self, kind: AxisKind) -> &Axis {
        match kind {
            AxisKind::X => &self.x,
            AxisKind::Y => &self.y,
        }
    }

    /// Returns the axis of the given kind for modification.
    pub fn axis_mut(&mut self, kind: AxisKind) -> &mut Axis {
        match kind {
            AxisKind::X => &mut self.x,
            AxisKind::Y => &mut self.y,
        }
    }

    /// Adds a line series.
    pub fn plot(&mut self, series: LineSeries) {
        self.lines.push(series);
    }

    /// Maps a data point to pixel space.
    pub fn data_to_pixel(&self, p: Point) -> Point {
        Point::new(
            self.x.scale(self.bounds).map(p.x),
            self.y.scale(self.bounds).map(p.y),
        )
    }

    /// Returns the transform from axis-fraction coordinates to pixel space.
    pub fn axes_transform(&self) -> Affine {
        let b = self.bounds;
        Affine::new([b.width(), 0.0, 0.0, -b.height(), b.x0, b.y1])
    }

    /// Maps a pixel position to axis-fraction coordinates.
    pub fn pixel_to_axes(&self, p: Point) -> Result<Point, ChartError> {
        let transform = self.axes_transform();
        let det = transform.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(ChartError::DegenerateBounds {
                bounds: self.bounds,
            });
        }
        Ok(transform.inverse() * p)
    }

    /// Paint order of the gridlines.
    pub fn grid_z_index(&self) -> i32 {
        if self.axis_below {
            z_order::GRID_BELOW
        } else {
            z_order::GRID_ABOVE
        }
    }
}
