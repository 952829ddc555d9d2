// Copyright 2026 the CharP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-call styling for common chart types.
//!
//! Each preset only sets properties on the given [`Axes`], so applying one twice
//! has the same effect as applying it once.

extern crate alloc;

use alloc::vec::Vec;

use crate::axes::{Axes, AxisKind, Side, TextAnchor};
use crate::theme::Theme;
use crate::wrap::break_labels;

/// Rotates the x tick labels by `degrees` and right-aligns them at their ticks.
///
/// Use [`Theme::xlabel_rotation`] for the usual 45 degrees.
pub fn rotate_xlabels(axes: &mut Axes, degrees: f64) {
    let params = &mut axes.x.tick_params;
    params.label_rotation = degrees;
    params.label_anchor = Some(TextAnchor::End);
    tracing::debug!(degrees, "rotated x tick labels");
}

/// Styles a horizontal bar chart.
///
/// Value labels move to the top edge without tick marks, pulled into the plot by
/// [`Theme::barh_label_pad`]. Vertical value gridlines are drawn over the bars,
/// there are no category gridlines, and the bottom spine is hidden.
pub fn barh(axes: &mut Axes, theme: &Theme) {
    let params = &mut axes.x.tick_params;
    params.tick1 = false;
    params.label1 = false;
    params.tick2 = false;
    params.label2 = true;
    params.pad = theme.barh_label_pad;

    axes.x.grid = Some(theme.barh_grid.clone());
    axes.y.grid = None;
    axes.axis_below = false;

    axes.spines.get_mut(Side::Bottom).visible = false;
    tracing::debug!(pad = theme.barh_label_pad, "applied horizontal bar preset");
}

/// Styles a vertical bar chart.
///
/// Horizontal value gridlines are drawn over the bars and the bottom tick marks
/// are removed.
pub fn bar(axes: &mut Axes, theme: &Theme) {
    axes.y.grid = Some(theme.bar_grid.clone());
    axes.axis_below = false;
    axes.x.tick_params.tick1 = false;
    tracing::debug!("applied bar preset");
}

/// Wraps the tick labels of `kind` into balanced lines, using the longest label's
/// line width as the budget for all of them.
///
/// See [`break_labels`]. Axes without ticks are left unchanged.
pub fn wrap_tick_labels(axes: &mut Axes, kind: AxisKind) {
    let axis = axes.axis_mut(kind);
    if axis.ticks.is_empty() {
        return;
    }
    let labels: Vec<&str> = axis.tick_labels().collect();
    let wrapped = break_labels(&labels);
    tracing::debug!(axis = %kind, count = wrapped.len(), "wrapped tick labels");
    axis.set_tick_labels(wrapped);
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;
    use crate::style::LineStyle;

    fn axes() -> Axes {
        Axes::new(Rect::new(100.0, 20.0, 400.0, 220.0))
            .with_categories(AxisKind::Y, ["abc cde efg", "abc cde"])
            .with_ticks(
                AxisKind::X,
                [0.0, 0.5, 1.0]
                    .into_iter()
                    .map(|v| crate::Tick::new(v, "v"))
                    .collect(),
            )
    }

    #[test]
    fn barh_moves_value_labels_to_top() {
        let theme = Theme::default();
        let mut ax = axes();
        barh(&mut ax, &theme);

        let p = &ax.x.tick_params;
        assert!(!p.tick1 && !p.label1 && !p.tick2 && p.label2);
        assert_eq!(p.pad, -13.0);
        assert_eq!(ax.x.grid.as_ref().unwrap().stroke.line_style, LineStyle::Dashed);
        assert!(ax.y.grid.is_none());
        assert!(!ax.axis_below);
        assert!(!ax.spines.bottom.visible);
        assert!(ax.spines.left.visible);
    }

    #[test]
    fn bar_draws_dotted_grid_over_bars() {
        let theme = Theme::default();
        let mut ax = axes();
        bar(&mut ax, &theme);
        assert_eq!(ax.y.grid, Some(theme.bar_grid.clone()));
        assert_eq!(ax.y.grid.as_ref().unwrap().stroke.line_style, LineStyle::Dotted);
        assert!(ax.x.grid.is_none());
        assert!(!ax.axis_below);
        assert!(!ax.x.tick_params.tick1);
        assert!(ax.x.tick_params.label1);
    }

    #[test]
    fn presets_are_idempotent() {
        let theme = Theme::default();
        let mut once = axes();
        barh(&mut once, &theme);
        let mut twice = once.clone();
        barh(&mut twice, &theme);
        assert_eq!(once, twice);

        let mut once = axes();
        bar(&mut once, &theme);
        rotate_xlabels(&mut once, theme.xlabel_rotation);
        let mut twice = once.clone();
        bar(&mut twice, &theme);
        rotate_xlabels(&mut twice, theme.xlabel_rotation);
        assert_eq!(once, twice);
    }

    #[test]
    fn rotate_xlabels_right_aligns() {
        let mut ax = axes();
        rotate_xlabels(&mut ax, 45.0);
        assert_eq!(ax.x.tick_params.label_rotation, 45.0);
        assert_eq!(ax.x.tick_params.label_anchor, Some(TextAnchor::End));
        assert_eq!(ax.y.tick_params.label_rotation, 0.0);
    }

    #[test]
    fn wrap_tick_labels_replaces_axis_labels() {
        let mut ax = axes();
        wrap_tick_labels(&mut ax, AxisKind::Y);
        let labels: Vec<&str> = ax.y.tick_labels().collect();
        assert_eq!(labels, ["abc cde\nefg", "abc cde"]);
        assert_eq!(ax.y.ticks[1].value, 1.0);
    }

    #[test]
    fn wrap_tick_labels_without_ticks_is_a_no_op() {
        let mut ax = Axes::new(Rect::new(0.0, 0.0, 1.0, 1.0));
        let before = ax.clone();
        wrap_tick_labels(&mut ax, AxisKind::X);
        assert_eq!(ax, before);
    }
}
