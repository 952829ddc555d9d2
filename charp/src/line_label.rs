// Copyright 2026 the CharP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direct labels at the end of line series.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use peniko::{Brush, Color};

use crate::axes::{Annotation, AnnotationKind, Axes, TextAnchor};
use crate::error::ChartError;
use crate::theme::Theme;

/// Labels every line of `axes` at its last finite point and hides the legend.
///
/// Each label uses the series label as text and the series color as paint, and
/// starts [`Theme::line_label_offset`] pixels right of the point. Points with a NaN
/// or infinite coordinate are skipped.
///
/// Line labels from a previous call are replaced; other annotations are kept.
///
/// Fails with [`ChartError::NoFinitePoint`] if a series has nothing to anchor its
/// label to. `axes` is left untouched in that case.
pub fn label_lines(axes: &mut Axes, theme: &Theme) -> Result<(), ChartError> {
    let anchors = axes
        .lines
        .iter()
        .map(|line| {
            line.last_finite_point()
                .map(|p| (p, line))
                .ok_or_else(|| ChartError::NoFinitePoint {
                    label: line.label.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let labels: Vec<Annotation> = anchors
        .into_iter()
        .map(|(position, line)| line_label(line.label.clone(), position, line.color, theme))
        .collect();
    tracing::debug!(count = labels.len(), "labeled line ends");

    axes
        .annotations
        .retain(|a| a.kind != AnnotationKind::LineLabel);
    axes.annotations.extend(labels);
    axes.legend_visible = false;
    Ok(())
}

fn line_label(text: String, position: Point, color: Color, theme: &Theme) -> Annotation {
    Annotation {
        kind: AnnotationKind::LineLabel,
        text,
        position,
        offset: Vec2::new(theme.line_label_offset, 0.0),
        anchor: TextAnchor::Start,
        style: theme.line_label_style.clone(),
        fill: Brush::Solid(color),
    }
}
