// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `rondel_core`.
//!
//! This crate is a small, reusable layer above `rondel_core` and
//! `rondel_state`:
//! - **Mark specs** (sectors, text) turn resolved geometry into marks.
//! - **Composites** (pie charts, swatch panels, toggle cards) turn state from
//!   `rondel_state` into full mark sets, recomputed from scratch each frame
//!   and diffed incrementally by `rondel_core::Scene`.
//!
//! Text shaping and layout are out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod callout;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod measure;
mod palette;
mod pie_chart;
mod sector_mark;
mod style;
mod swatch_panel;
mod text_mark;
mod toggle_card;
mod z_order;

pub use callout::CalloutSpec;
pub use format::{percent_detail, percent_label};
pub use measure::{HeuristicTextMeasurer, Size, TextMeasurer};
pub use palette::{SEGMENT_COLORS, dimmed_fill, muted_color, segment_color};
pub use pie_chart::PieChartSpec;
pub use sector_mark::SectorMarkSpec;
pub use style::StrokeStyle;
pub use swatch_panel::{SwatchItem, SwatchPanel, SwatchPanelSpec, filter_items, legend_items};
pub use text_mark::TextMarkSpec;
pub use toggle_card::{ToggleCardSpec, phase_fill};
pub use z_order::*;
