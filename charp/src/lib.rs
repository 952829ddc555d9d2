// Copyright 2026 the CharP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation helpers for charts.
//!
//! This crate works on an explicit [`Axes`] model and provides:
//! - **Label wrapping**: [`break_two_lines`] and [`break_labels`] split long category
//!   labels into two balanced lines, consistently across a whole label set.
//! - **Aligned titles**: [`AlignedTitle`] starts the title at the left edge of the
//!   y tick labels instead of the plot edge.
//! - **Presets**: [`bar`], [`barh`], [`rotate_xlabels`] and [`wrap_tick_labels`]
//!   style gridlines, spines and ticks for common chart types.
//! - **Line labels**: [`label_lines`] replaces the legend with labels at line ends.
//!
//! Visual defaults live in a [`Theme`] value that callers pass in explicitly.
//! Rendering is out of scope; [`AxesLayout`] only measures tick labels, through a
//! [`charp_text::TextMeasurer`].

#![no_std]

extern crate alloc;

mod axes;
mod error;
mod layout;
mod line_label;
mod presets;
mod scale;
mod style;
mod theme;
mod title;
mod wrap;
pub mod z_order;

pub use axes::{
    Annotation, AnnotationKind, Axes, Axis, AxisKind, LineSeries, Side, Spine, Spines, TextAnchor,
    Tick, TickParams, Title,
};
pub use charp_text::{HeuristicTextMeasurer, TextMeasurer, TextStyle};
pub use error::ChartError;
pub use layout::{AxesLayout, LabelBox};
pub use line_label::label_lines;
pub use presets::{bar, barh, rotate_xlabels, wrap_tick_labels};
pub use scale::ScaleLinear;
pub use style::{GridStyle, LineStyle, StrokeStyle};
pub use theme::Theme;
pub use title::AlignedTitle;
pub use wrap::{Lines, acceptable_size, break_labels, break_two_lines};

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("charp requires either the `std` or `libm` feature");
