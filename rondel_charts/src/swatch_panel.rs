// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swatch panel mark generation.
//!
//! A vertical (or columned) list of color swatches with text labels. The same
//! panel renders two roles: a legend keyed off a dataset, and a filter
//! checklist keyed off a selector, where deselected entries keep their row but
//! drop to a muted swatch.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::color::palette::css;
use peniko::{Brush, Color};
use rondel_core::{Mark, MarkId, MarkPayload, RectPayload, TextAnchor, TextBaseline};
use rondel_state::{Dataset, FilterSelector};

use crate::measure::{Size, TextMeasurer};
use crate::palette;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

fn union_rect(a: Rect, b: Rect) -> Rect {
    Rect::new(
        a.x0.min(b.x0),
        a.y0.min(b.y0),
        a.x1.max(b.x1),
        a.y1.max(b.y1),
    )
}

fn text_bounds(
    x: f64,
    y: f64,
    size: (f64, f64),
    anchor: TextAnchor,
    baseline: TextBaseline,
) -> Rect {
    let (w, h) = size;
    let (x0, x1) = match anchor {
        TextAnchor::Start => (x, x + w),
        TextAnchor::Middle => (x - w * 0.5, x + w * 0.5),
        TextAnchor::End => (x - w, x),
    };
    let (y0, y1) = match baseline {
        TextBaseline::Middle => (y - h * 0.5, y + h * 0.5),
        TextBaseline::Alphabetic => (y - h, y),
        TextBaseline::Hanging => (y, y + h),
        TextBaseline::Ideographic => (y - h, y),
    };
    Rect::new(x0, y0, x1, y1)
}

/// A single swatch row item.
#[derive(Clone, Debug)]
pub struct SwatchItem {
    /// The label string shown next to the swatch.
    pub label: String,
    /// The swatch fill paint.
    pub fill: Brush,
}

impl SwatchItem {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            fill: Brush::Solid(color),
        }
    }
}

/// Legend rows for a dataset: one palette-colored swatch per record.
pub fn legend_items(dataset: &Dataset) -> Vec<SwatchItem> {
    dataset
        .records()
        .iter()
        .enumerate()
        .map(|(i, r)| SwatchItem::solid(r.label.clone(), palette::segment_color(i)))
        .collect()
}

/// Filter checklist rows for a selector.
///
/// Every known label keeps its row; deselected entries swap their palette
/// color for the muted swatch so the list doubles as selection feedback.
pub fn filter_items(selector: &FilterSelector) -> Vec<SwatchItem> {
    selector
        .labels()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let color = if selector.is_selected(label) {
                palette::segment_color(i)
            } else {
                palette::muted_color()
            };
            SwatchItem::solid(label.clone(), color)
        })
        .collect()
}

/// A positioned swatch panel.
#[derive(Clone, Debug)]
pub struct SwatchPanel {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Panel origin (top-left).
    pub x: f64,
    /// Panel origin (top-left).
    pub y: f64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Number of columns.
    ///
    /// Items are laid out top-to-bottom, then left-to-right into columns.
    pub columns: usize,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Items in display order.
    pub items: Vec<SwatchItem>,
}

impl SwatchPanel {
    /// Generate panel marks (swatch rect + label text per item).
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::new();
        let columns = self.columns.max(1);
        let rows_per_col = self.items.len().div_ceil(columns);
        let row_height = self.swatch_size.max(self.font_size);

        for (i, item) in self.items.iter().enumerate() {
            let col = i / rows_per_col;
            let row = i % rows_per_col;
            let x = self.x + col as f64 * (self.column_width() + self.column_gap);
            let y = self.y + row as f64 * (row_height + self.row_gap);
            let swatch_y = y + (row_height - self.swatch_size) * 0.5;
            let label_y = y + row_height * 0.5;

            out.push(Mark::new(
                MarkId::from_raw(self.id_base + i as u64),
                z_order::SWATCHES,
                MarkPayload::Rect(RectPayload {
                    rect: Rect::new(
                        x,
                        swatch_y,
                        x + self.swatch_size,
                        swatch_y + self.swatch_size,
                    ),
                    fill: item.fill.clone(),
                }),
            ));
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + 1000 + i as u64),
                    kurbo::Point::new(x + self.swatch_size + self.label_dx, label_y),
                    item.label.clone(),
                )
                .with_font_size(self.font_size)
                .with_fill(self.text_fill.clone())
                .with_anchor(TextAnchor::Start)
                .with_baseline(TextBaseline::Middle)
                .with_z_index(z_order::SWATCH_LABELS)
                .mark(),
            );
        }
        out
    }

    fn column_width(&self) -> f64 {
        self.swatch_size + self.label_dx
    }

    /// Estimates panel bounds using the provided text measurer.
    ///
    /// This is intended for simple layout (computing margins / view boxes).
    pub fn bounds(&self, measurer: &impl TextMeasurer) -> Rect {
        let mut bounds: Option<Rect> = None;

        for mark in self.marks() {
            let b = match &mark.payload {
                MarkPayload::Text(t) => {
                    let size = measurer.measure(&t.text, t.font_size);
                    text_bounds(t.pos.x, t.pos.y, size, t.anchor, t.baseline)
                }
                other => match other.bounds() {
                    Some(b) => b,
                    None => continue,
                },
            };
            bounds = Some(match bounds {
                None => b,
                Some(r) => union_rect(r, b),
            });
        }

        bounds.unwrap_or_else(|| Rect::new(self.x, self.y, self.x, self.y))
    }
}

/// An unpositioned swatch panel specification.
///
/// Use this with a measure/arrange layout pass:
/// - Measure: call [`SwatchPanelSpec::measure`] to get a desired size.
/// - Arrange: call [`SwatchPanelSpec::at`] once you know the origin.
#[derive(Clone, Debug)]
pub struct SwatchPanelSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Number of columns.
    ///
    /// Items are laid out top-to-bottom, then left-to-right into columns.
    pub columns: usize,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Items in display order.
    pub items: Vec<SwatchItem>,
}

impl SwatchPanelSpec {
    /// Creates a new panel specification with defaults.
    pub fn new(id_base: u64, items: Vec<SwatchItem>) -> Self {
        Self {
            id_base,
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            columns: 1,
            column_gap: 12.0,
            font_size: 10.0,
            text_fill: css::BLACK.into(),
            items,
        }
    }

    /// Set the label text paint.
    pub fn with_text_fill(mut self, text_fill: impl Into<Brush>) -> Self {
        self.text_fill = text_fill.into();
        self
    }

    /// Set the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the swatch size.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    /// Sets the number of columns.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Sets the gap between columns.
    pub fn with_column_gap(mut self, column_gap: f64) -> Self {
        self.column_gap = column_gap.max(0.0);
        self
    }

    /// Measures the desired panel size (width/height).
    pub fn measure(&self, measurer: &impl TextMeasurer) -> Size {
        let panel = self.at(0.0, 0.0);
        let b = panel.bounds(measurer);
        Size {
            width: b.width(),
            height: b.height(),
        }
    }

    /// Creates a positioned panel at the given origin.
    pub fn at(&self, x: f64, y: f64) -> SwatchPanel {
        SwatchPanel {
            id_base: self.id_base,
            x,
            y,
            swatch_size: self.swatch_size,
            row_gap: self.row_gap,
            label_dx: self.label_dx,
            columns: self.columns,
            column_gap: self.column_gap,
            font_size: self.font_size,
            text_fill: self.text_fill.clone(),
            items: self.items.clone(),
        }
    }

    /// Generates marks for this panel for the given origin.
    pub fn marks(&self, x: f64, y: f64) -> Vec<Mark> {
        self.at(x, y).marks()
    }
}
