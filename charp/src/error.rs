// Copyright 2026 the CharP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for chart helpers.

extern crate alloc;

use alloc::string::String;

use kurbo::Rect;
use thiserror::Error;

use crate::AxisKind;

/// Errors reported by the chart helpers.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ChartError {
    /// A line series has no point with finite coordinates to anchor its label to.
    #[error("line series `{label}` has no finite point to label")]
    NoFinitePoint {
        /// Label of the offending series.
        label: String,
    },
    /// An operation needed visible tick labels and found none.
    #[error("{axis} axis has no visible tick labels")]
    NoTickLabels {
        /// The axis that was inspected.
        axis: AxisKind,
    },
    /// The axes bounds have no area, so pixel positions cannot be expressed as
    /// axis fractions.
    #[error("axes bounds {bounds:?} are degenerate")]
    DegenerateBounds {
        /// The offending bounds.
        bounds: Rect,
    },
}
