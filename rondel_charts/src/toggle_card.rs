// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-phase toggle card.
//!
//! A colored card with a centered heading. Both the card color and the
//! heading come from the toggle phase, so a click swaps the whole card in one
//! update.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use rondel_core::{Mark, MarkId, MarkPayload, RectPayload, TextAnchor, TextBaseline};
use rondel_state::{TogglePhase, ToggleState};

use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// The card fill for a toggle phase.
pub fn phase_fill(phase: TogglePhase) -> Color {
    match phase {
        TogglePhase::Machines => Color::from_rgb8(0xDC, 0x35, 0x45),
        TogglePhase::Executers => Color::from_rgb8(0xFF, 0xC1, 0x07),
    }
}

fn heading_fill(phase: TogglePhase) -> Color {
    match phase {
        TogglePhase::Machines => Color::from_rgb8(0xFF, 0xFF, 0xFF),
        TogglePhase::Executers => Color::from_rgb8(0x33, 0x33, 0x33),
    }
}

/// A clickable card rendering a [`ToggleState`].
#[derive(Clone, Debug)]
pub struct ToggleCardSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Card geometry in scene coordinates.
    pub rect: Rect,
    /// Heading font size.
    pub font_size: f64,
}

impl ToggleCardSpec {
    /// Creates a card spec with the default heading size.
    pub fn new(id_base: u64, rect: Rect) -> Self {
        Self {
            id_base,
            rect,
            font_size: 16.0,
        }
    }

    /// Sets the heading font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Generates the card background and heading for the current phase.
    pub fn marks(&self, toggle: &ToggleState) -> Vec<Mark> {
        let phase = toggle.phase();
        let mut out = Vec::with_capacity(2);
        out.push(Mark::new(
            MarkId::from_raw(self.id_base),
            z_order::CARD_BACKGROUND,
            MarkPayload::Rect(RectPayload {
                rect: self.rect,
                fill: phase_fill(phase).into(),
            }),
        ));
        out.push(
            TextMarkSpec::new(
                MarkId::from_raw(self.id_base + 1),
                self.rect.center(),
                toggle.label(),
            )
            .with_font_size(self.font_size)
            .with_fill(heading_fill(phase))
            .with_anchor(TextAnchor::Middle)
            .with_baseline(TextBaseline::Middle)
            .with_z_index(z_order::TITLES)
            .mark(),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use rondel_core::Scene;

    use super::*;

    #[test]
    fn click_swaps_fill_and_heading_together() {
        let card = ToggleCardSpec::new(0, Rect::new(0.0, 0.0, 120.0, 40.0));
        let mut toggle = ToggleState::new();

        let before = card.marks(&toggle);
        toggle.click();
        let after = card.marks(&toggle);

        let MarkPayload::Rect(r0) = &before[0].payload else {
            panic!("expected rect payload");
        };
        let MarkPayload::Rect(r1) = &after[0].payload else {
            panic!("expected rect payload");
        };
        assert_ne!(r0.fill, r1.fill);

        let MarkPayload::Text(t1) = &after[1].payload else {
            panic!("expected text payload");
        };
        assert_eq!(t1.text, "executers");
    }

    #[test]
    fn click_diffs_as_updates_not_enter_exit() {
        let card = ToggleCardSpec::new(5, Rect::new(10.0, 10.0, 130.0, 50.0));
        let mut toggle = ToggleState::new();
        let mut scene = Scene::new();
        scene.tick(card.marks(&toggle));

        toggle.click();
        let diffs = scene.tick(card.marks(&toggle));
        assert_eq!(diffs.len(), 2, "both marks update in place");
        assert!(
            diffs
                .iter()
                .all(|d| matches!(d, rondel_core::MarkDiff::Update { .. }))
        );
    }
}
