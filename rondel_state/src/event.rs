// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed UI events routed by the composer.

extern crate alloc;

use alloc::string::String;

/// Which chart widget a pointer event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartId {
    /// The chart fed by the filter selector.
    Filtered,
    /// The chart fed a raw dataset directly (no filtering concept).
    Raw,
}

/// A discrete UI event.
///
/// Events are dispatched synchronously, one at a time, in arrival order;
/// each produces at most one state transition in the owning component.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A filter checkbox was toggled for `label`.
    FilterToggled(String),
    /// The pointer entered segment `index` of `chart`.
    PointerEnter {
        /// Target chart.
        chart: ChartId,
        /// Segment index into the chart's displayed dataset.
        index: usize,
    },
    /// The pointer left `chart`.
    PointerLeave {
        /// Target chart.
        chart: ChartId,
    },
    /// The toggle card was clicked.
    ToggleClicked,
}
