// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The default categorical palette.
//!
//! Four colors assigned to segments by index, cycling when a dataset has more
//! than four records. Deselected filter entries and dimmed sectors derive
//! their paints from the same palette so charts and panels stay in sync.

use kurbo::Point;
use peniko::color::palette::css;
use peniko::{Brush, Color, Gradient};

/// The categorical palette, in assignment order.
pub const SEGMENT_COLORS: [Color; 4] = [
    Color::from_rgb8(0x00, 0x88, 0xFE),
    Color::from_rgb8(0x00, 0xC4, 0x9F),
    Color::from_rgb8(0xFF, 0xBB, 0x28),
    Color::from_rgb8(0xFF, 0x80, 0x42),
];

/// The palette color for segment `index`, cycling past the palette length.
pub fn segment_color(index: usize) -> Color {
    SEGMENT_COLORS[index % SEGMENT_COLORS.len()]
}

/// The swatch color for a deselected filter entry.
pub fn muted_color() -> Color {
    css::LIGHT_GRAY
}

/// A dimmed radial fill for inactive sectors while another sector is active.
///
/// Fades the segment color toward transparency from the pie center outward,
/// which reads as "backgrounded" without changing the hue.
pub fn dimmed_fill(index: usize, center: Point, radius: f64) -> Brush {
    let color = segment_color(index);
    Brush::Gradient(
        Gradient::new_radial(center, radius as f32)
            .with_stops([color.with_alpha(0.85), color.with_alpha(0.35)]),
    )
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn colors_cycle_past_the_palette_length() {
        assert_eq!(segment_color(0), segment_color(4));
        assert_eq!(segment_color(3), segment_color(7));
        assert_ne!(segment_color(0), segment_color(1));
    }

    #[test]
    fn dimmed_fill_is_a_gradient_over_the_segment_color() {
        let fill = dimmed_fill(1, Point::new(50.0, 50.0), 40.0);
        let Brush::Gradient(g) = fill else {
            panic!("expected a gradient brush");
        };
        assert_eq!(g.stops.len(), 2);
    }
}
