// Copyright 2026 the CharP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label extents.
//!
//! Drawing libraries only know where a label ends up after a draw. This module
//! performs the equivalent measuring pass: every visible tick label is measured as
//! a text block, rotated, and aligned next to its tick, yielding the pixel-space
//! rectangle it would occupy. Anything that depends on these rectangles (such as
//! title alignment) must run after the label text and rotation are final.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use charp_text::TextMeasurer;
use kurbo::{Affine, Point, Rect, Vec2};

use crate::axes::{Axes, Axis, AxisKind, Side, TextAnchor};

/// The measured extent of one tick label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelBox {
    /// Index of the tick in [`Axis::ticks`].
    pub tick: usize,
    /// The side the label is drawn on.
    pub side: Side,
    /// The label text.
    pub text: String,
    /// Pixel-space bounding box.
    pub bbox: Rect,
}

/// Tick label extents for both axes of an [`Axes`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxesLayout {
    /// Visible x tick labels.
    pub x_labels: Vec<LabelBox>,
    /// Visible y tick labels.
    pub y_labels: Vec<LabelBox>,
}

impl AxesLayout {
    /// Measures and places every visible tick label of `axes`.
    pub fn compute(axes: &Axes, measurer: &dyn TextMeasurer) -> Self {
        Self {
            x_labels: axis_labels(axes, &axes.x, measurer),
            y_labels: axis_labels(axes, &axes.y, measurer),
        }
    }

    /// Returns the labels of the given axis.
    pub fn labels(&self, kind: AxisKind) -> &[LabelBox] {
        match kind {
            AxisKind::X => &self.x_labels,
            AxisKind::Y => &self.y_labels,
        }
    }

    /// Smallest left edge among the labels of `kind`, if any label is visible.
    pub fn min_x0(&self, kind: AxisKind) -> Option<f64> {
        self.labels(kind)
            .iter()
            .map(|l| l.bbox.x0)
            .reduce(f64::min)
    }
}

fn axis_labels(axes: &Axes, axis: &Axis, measurer: &dyn TextMeasurer) -> Vec<LabelBox> {
    let params = &axis.tick_params;
    let (side1, side2) = axis.sides();
    let scale = axis.scale(axes.bounds);
    let rotate = Affine::rotate(-params.label_rotation.to_radians());

    let mut out = Vec::new();
    for (side, labels_on, ticks_on) in [
        (side1, params.label1, params.tick1),
        (side2, params.label2, params.tick2),
    ] {
        if !labels_on {
            continue;
        }
        let gap = if ticks_on { params.size.max(0.0) } else { 0.0 } + params.pad;
        let anchor = params.label_anchor.unwrap_or(default_anchor(side));
        for (i, tick) in axis.ticks.iter().enumerate() {
            let pos = scale.map(tick.value);
            let block = measurer.measure_block(&tick.label, &params.label_style);
            let rotated = rotate.transform_rect_bbox(Rect::new(0.0, 0.0, block.width, block.height));
            let bbox = place(
                rotated,
                anchor_point(axes.bounds, side, pos, gap),
                side,
                anchor,
            );
            out.push(LabelBox {
                tick: i,
                side,
                text: tick.label.clone(),
                bbox,
            });
        }
    }
    out
}

fn default_anchor(side: Side) -> TextAnchor {
    match side {
        Side::Top | Side::Bottom => TextAnchor::Middle,
        Side::Left => TextAnchor::End,
        Side::Right => TextAnchor::Start,
    }
}

/// The point on the outer side of the tick where its label is aligned.
fn anchor_point(bounds: Rect, side: Side, pos: f64, gap: f64) -> Point {
    match side {
        Side::Bottom => Point::new(pos, bounds.y1 + gap),
        Side::Top => Point::new(pos, bounds.y0 - gap),
        Side::Left => Point::new(bounds.x0 - gap, pos),
        Side::Right => Point::new(bounds.x1 + gap, pos),
    }
}

/// Moves the (already rotated) label box so it is aligned at `at`.
fn place(rotated: Rect, at: Point, side: Side, anchor: TextAnchor) -> Rect {
    let (w, h) = (rotated.width(), rotated.height());
    let x0 = match anchor {
        TextAnchor::Start => at.x,
        TextAnchor::Middle => at.x - 0.5 * w,
        TextAnchor::End => at.x - w,
    };
    let y0 = match side {
        Side::Bottom => at.y,
        Side::Top => at.y - h,
        Side::Left | Side::Right => at.y - 0.5 * h,
    };
    Rect::new(0.0, 0.0, w, h) + Vec2::new(x0, y0)
}

#[cfg(test)]
mod tests {
    use charp_text::HeuristicTextMeasurer;

    use super::*;

    fn bar_axes() -> Axes {
        Axes::new(Rect::new(100.0, 50.0, 300.0, 250.0))
            .with_categories(AxisKind::Y, ["abc", "abcdef"])
            .with_categories(AxisKind::X, ["a", "b"])
    }

    #[test]
    fn left_labels_end_at_tick_gap() {
        let layout = AxesLayout::compute(&bar_axes(), &HeuristicTextMeasurer::default());
        assert_eq!(layout.y_labels.len(), 2);
        let short = &layout.y_labels[0];
        // size 3.5 + pad 3.5 to the left of x0 = 100; "abc" is 18px wide at 10px.
        assert!((short.bbox.x1 - 93.0).abs() < 1e-9);
        assert!((short.bbox.x0 - 75.0).abs() < 1e-9);
        assert_eq!(layout.min_x0(AxisKind::Y), Some(57.0));
    }

    #[test]
    fn y_labels_are_vertically_centered_on_ticks() {
        let ax = bar_axes();
        let layout = AxesLayout::compute(&ax, &HeuristicTextMeasurer::default());
        for label in &layout.y_labels {
            let tick_y = ax.data_to_pixel(Point::new(0.0, ax.y.ticks[label.tick].value)).y;
            assert!((label.bbox.center().y - tick_y).abs() < 1e-9);
        }
    }

    #[test]
    fn hidden_tick_marks_pull_labels_closer() {
        let mut ax = bar_axes();
        ax.y.tick_params.tick1 = false;
        let layout = AxesLayout::compute(&ax, &HeuristicTextMeasurer::default());
        assert!((layout.y_labels[0].bbox.x1 - 96.5).abs() < 1e-9);
    }

    #[test]
    fn hidden_labels_are_not_laid_out() {
        let mut ax = bar_axes();
        ax.x.tick_params.label1 = false;
        let layout = AxesLayout::compute(&ax, &HeuristicTextMeasurer::default());
        assert!(layout.x_labels.is_empty());
        assert_eq!(layout.min_x0(AxisKind::X), None);
        ax.x.tick_params.label2 = true;
        let layout = AxesLayout::compute(&ax, &HeuristicTextMeasurer::default());
        assert!(layout.x_labels.iter().all(|l| l.side == Side::Top));
        assert!(layout.x_labels.iter().all(|l| l.bbox.y1 <= 50.0));
    }

    #[test]
    fn negative_pad_moves_top_labels_inside_plot() {
        let mut ax = bar_axes();
        ax.x.tick_params.label1 = false;
        ax.x.tick_params.label2 = true;
        ax.x.tick_params.tick2 = false;
        ax.x.tick_params.pad = -13.0;
        let layout = AxesLayout::compute(&ax, &HeuristicTextMeasurer::default());
        for label in &layout.x_labels {
            assert!((label.bbox.y1 - 63.0).abs() < 1e-9);
        }
    }

    #[test]
    fn rotation_widens_the_box_and_end_anchor_ends_at_tick() {
        let mut ax = Axes::new(Rect::new(0.0, 0.0, 200.0, 100.0))
            .with_categories(AxisKind::X, ["a long label"]);
        let flat = AxesLayout::compute(&ax, &HeuristicTextMeasurer::default());
        ax.x.tick_params.label_rotation = 45.0;
        ax.x.tick_params.label_anchor = Some(TextAnchor::End);
        let rotated = AxesLayout::compute(&ax, &HeuristicTextMeasurer::default());

        let flat = flat.x_labels[0].bbox;
        let rot = rotated.x_labels[0].bbox;
        assert!(rot.height() > flat.height());
        assert!((rot.x1 - 100.0).abs() < 1e-9, "end-anchored box: {rot:?}");
        assert!((rot.y0 - 107.0).abs() < 1e-9);
    }

    #[test]
    fn wrapped_labels_are_measured_as_blocks() {
        let ax = Axes::new(Rect::new(100.0, 0.0, 200.0, 100.0))
            .with_categories(AxisKind::Y, ["abc cde\nefg"]);
        let layout = AxesLayout::compute(&ax, &HeuristicTextMeasurer::default());
        let bbox = layout.y_labels[0].bbox;
        assert!((bbox.width() - 42.0).abs() < 1e-9);
        assert!((bbox.height() - 24.0).abs() < 1e-9);
    }
}
