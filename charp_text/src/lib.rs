// Copyright 2026 the CharP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement for chart labels.
//!
//! Aligning a title against tick labels needs the extent each label occupies once
//! drawn. `CharP` does not render anything itself, so chart code depends on this
//! small measurement interface instead. Callers plug in a shaping-backed measurer
//! when they have one, or use [`HeuristicTextMeasurer`] for deterministic layout.
//!
//! Labels produced by the wrapping helpers contain `\n`; [`TextMeasurer::measure_block`]
//! measures such multi-line text as a single block.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A text measurement backend.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as one line even if it contains `\n`.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Measure possibly multi-line text, splitting on `\n`.
    ///
    /// The block is as wide as its widest line. Each line occupies
    /// `line_height * style.line_spacing`.
    fn measure_block(&self, text: &str, style: &TextStyle) -> TextBlockMetrics {
        let mut width: f64 = 0.0;
        let mut line_height: f64 = 0.0;
        let mut line_count = 0_usize;
        for line in text.split('\n') {
            let metrics = self.measure(line, style);
            width = width.max(metrics.advance_width);
            line_height = line_height.max(metrics.line_height());
            line_count += 1;
        }
        TextBlockMetrics {
            width,
            height: line_count as f64 * line_height * style.line_spacing.max(0.0),
            line_count,
        }
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Multiplier applied to the line height of each line in a block.
    pub line_spacing: f64,
}

impl TextStyle {
    /// Creates a sans-serif, normal-weight style with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            line_spacing: 1.2,
        }
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the line spacing multiplier.
    #[must_use]
    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = line_spacing;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family.
    Serif,
    /// A generic sans-serif family.
    SansSerif,
    /// A generic monospace family.
    Monospace,
    /// A named family (e.g. `"DejaVu Sans"`).
    Named(Arc<str>),
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Measured extent of a block of one or more lines.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBlockMetrics {
    /// Width of the widest line.
    pub width: f64,
    /// Total height of all lines, including line spacing.
    pub height: f64,
    /// Number of lines in the block.
    pub line_count: usize,
}

/// A heuristic measurer with a fixed average glyph width.
///
/// Every character advances by `glyph_width_em * font_size`; the baseline sits
/// at `0.8em`. Bold text is widened by 10%.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicTextMeasurer {
    /// Average glyph advance as a fraction of the font size.
    pub glyph_width_em: f64,
}

impl HeuristicTextMeasurer {
    /// Creates a measurer with a custom average glyph width.
    #[must_use]
    pub fn new(glyph_width_em: f64) -> Self {
        Self { glyph_width_em }
    }
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let weight = if style.font_weight >= FontWeight::BOLD {
            1.1
        } else {
            1.0
        };
        let advance_width =
            self.glyph_width_em * weight * style.font_size * text.chars().count() as f64;
        TextMetrics {
            advance_width,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}
