// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-segment hover state.
//!
//! Each chart owns one [`HoverState`]; it is never shared between charts.
//! The pointer-leave behavior is an explicit [`HoverPolicy`]: some charts
//! clear the active segment on leave, others keep the last-hovered index
//! until the next enter. A chart picks one policy at construction and keeps
//! it for its lifetime.

/// What pointer-leave does to the active segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPolicy {
    /// Leave resets the active segment to none.
    ClearOnLeave,
    /// Leave is ignored; the last-hovered index persists until the next
    /// enter.
    Sticky,
}

/// The optional active segment index of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverState {
    policy: HoverPolicy,
    active: Option<usize>,
}

impl HoverState {
    /// Creates an inactive hover state with the given policy.
    pub fn new(policy: HoverPolicy) -> Self {
        Self {
            policy,
            active: None,
        }
    }

    /// The pointer-leave policy.
    pub fn policy(&self) -> HoverPolicy {
        self.policy
    }

    /// The active segment index, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Pointer entered segment `index` of a dataset with `len` segments.
    ///
    /// Out-of-range indexes are silently ignored; repeated enters on the
    /// same index are idempotent.
    pub fn pointer_enter(&mut self, index: usize, len: usize) {
        if index < len {
            self.active = Some(index);
        }
    }

    /// Pointer left the chart; effect depends on the policy.
    pub fn pointer_leave(&mut self) {
        match self.policy {
            HoverPolicy::ClearOnLeave => self.active = None,
            HoverPolicy::Sticky => {}
        }
    }

    /// Resets to none if the displayed dataset shrank below the active
    /// index (e.g. after filtering).
    pub fn clamp(&mut self, len: usize) {
        if self.active.is_some_and(|i| i >= len) {
            self.active = None;
        }
    }
}
