// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-phase toggle card state.
//!
//! Display label and card color both derive from the phase by `match`, so
//! they can never desynchronize. The toggle is fully independent of the
//! chart widgets.

/// The two phases of the toggle card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TogglePhase {
    /// Initial phase: shows "machines" on a red card.
    Machines,
    /// Alternate phase: shows "executers" on a yellow card.
    Executers,
}

/// Click-driven two-phase state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    phase: TogglePhase,
}

impl ToggleState {
    /// Creates the toggle in its initial phase.
    pub fn new() -> Self {
        Self {
            phase: TogglePhase::Machines,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> TogglePhase {
        self.phase
    }

    /// The heading shown for the current phase.
    pub fn label(&self) -> &'static str {
        match self.phase {
            TogglePhase::Machines => "machines",
            TogglePhase::Executers => "executers",
        }
    }

    /// Flips to the other phase.
    pub fn click(&mut self) {
        self.phase = match self.phase {
            TogglePhase::Machines => TogglePhase::Executers,
            TogglePhase::Executers => TogglePhase::Machines,
        };
    }
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn even_clicks_return_to_the_initial_phase() {
        let mut toggle = ToggleState::new();
        for _ in 0..4 {
            toggle.click();
        }
        assert_eq!(toggle.phase(), TogglePhase::Machines);
        assert_eq!(toggle.label(), "machines");
    }

    #[test]
    fn odd_clicks_land_on_the_alternate_phase() {
        let mut toggle = ToggleState::new();
        for _ in 0..3 {
            toggle.click();
        }
        assert_eq!(toggle.phase(), TogglePhase::Executers);
        assert_eq!(toggle.label(), "executers");
    }
}
