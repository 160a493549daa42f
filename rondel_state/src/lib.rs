// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state for rondel's chart widgets.
//!
//! Each widget's transient state is an explicit owned struct with
//! transition methods, replacing the implicit re-render-on-mutation model
//! of UI frameworks:
//! - [`Dataset`]: ordered labeled records, the chart's ground truth.
//! - [`FilterSelector`]: a set of selected labels over a fixed master list;
//!   each effective toggle emits one [`DatasetUpdate`] message.
//! - [`HoverState`]: the optional active segment index, with an explicit
//!   [`HoverPolicy`] for pointer-leave.
//! - [`ToggleState`]: a two-phase switch whose display label derives from
//!   the phase.
//! - [`Dashboard`]: the root composer; routes [`Event`]s to the owning
//!   component and recomputes the filtered dataset on selector messages.
//!
//! All transitions are synchronous and single-owner. Nothing here renders:
//! after a dispatch the frontend regenerates marks and ticks the scene.

#![no_std]

extern crate alloc;

mod composer;
mod dataset;
mod event;
mod filter;
mod hover;
#[cfg(test)]
mod scenario_tests;
mod toggle;

pub use composer::Dashboard;
pub use dataset::{Dataset, DatasetError, Record};
pub use event::{ChartId, Event};
pub use filter::{DatasetUpdate, FilterSelector};
pub use hover::{HoverPolicy, HoverState};
pub use toggle::{TogglePhase, ToggleState};
