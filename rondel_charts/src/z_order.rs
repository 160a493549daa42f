// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! `rondel_core` marks carry an explicit `z_index` for render ordering. The chart layer sets
//! z-indexes consistently so callers don't have to hand-tune paint order in every demo.
//!
//! These values are intentionally coarse. Renderers should sort by `(z_index, MarkId)` for a
//! deterministic tie-break.

/// Card and panel background fills.
pub const CARD_BACKGROUND: i32 = -100;

/// Pie and donut sector fills.
pub const SECTOR_FILL: i32 = 0;
/// The expanded active sector, drawn above its neighbors.
pub const SECTOR_ACTIVE: i32 = 10;
/// Percentage labels drawn inside sectors.
pub const SECTOR_LABELS: i32 = 20;

/// Callout leader lines for the active sector.
pub const CALLOUT_RULES: i32 = 30;
/// Callout text for the active sector.
pub const CALLOUT_LABELS: i32 = 40;

/// Swatch squares in filter panels and legends.
pub const SWATCHES: i32 = 60;
/// Labels next to swatches.
pub const SWATCH_LABELS: i32 = 70;
/// Card headings and chart-level titles.
pub const TITLES: i32 = 80;
