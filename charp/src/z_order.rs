// Copyright 2026 the CharP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint-order conventions for gridlines relative to plotted series.
//!
//! Renderers should draw in increasing z-index. Gridlines switch between
//! [`GRID_BELOW`] and [`GRID_ABOVE`] depending on [`Axes::axis_below`](crate::Axes::axis_below).

/// Gridlines drawn behind series.
pub const GRID_BELOW: i32 = -50;

/// Plotted series (bars, lines).
pub const SERIES: i32 = 0;

/// Gridlines drawn over series, as white grids on bar charts are.
pub const GRID_ABOVE: i32 = 5;
