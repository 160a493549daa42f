// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callout annotation for the active sector.
//!
//! A leader line runs outward from the sector's rim along its mid-angle,
//! bends at an elbow, and ends in a short horizontal tail with the record's
//! name/value and a two-decimal share next to it. The text sits to whichever
//! side of the pie the sector faces.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{BezPath, Point};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use rondel_core::{Mark, MarkId, MarkPayload, PathPayload, TextAnchor, TextBaseline};

use crate::format::percent_detail;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A leader-line callout anchored to a sector's mid-angle.
#[derive(Clone, Debug)]
pub struct CalloutSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Pie center in scene coordinates.
    pub center: Point,
    /// Radius where the leader line starts (the active sector's outer rim).
    pub radius: f64,
    /// Radial run from the rim to the elbow.
    pub gap: f64,
    /// Horizontal tail length after the elbow.
    pub tail: f64,
    /// Sector mid-angle in radians.
    pub mid_angle: f64,
    /// Record label shown on the value line.
    pub label: String,
    /// Record value shown on the value line.
    pub value: f64,
    /// Record share of the dataset total, in `0.0..=1.0`.
    pub fraction: f64,
    /// Leader line color, normally the sector's palette color.
    pub color: Color,
    /// Font size for both text lines.
    pub font_size: f64,
}

impl CalloutSpec {
    /// Creates a callout with default geometry.
    pub fn new(id_base: u64, center: Point, radius: f64, mid_angle: f64) -> Self {
        Self {
            id_base,
            center,
            radius,
            gap: 12.0,
            tail: 22.0,
            mid_angle,
            label: String::new(),
            value: 0.0,
            fraction: 0.0,
            color: css::BLACK,
            font_size: 11.0,
        }
    }

    /// Sets the record label, value and share.
    pub fn with_record(mut self, label: impl Into<String>, value: f64, fraction: f64) -> Self {
        self.label = label.into();
        self.value = value;
        self.fraction = fraction;
        self
    }

    /// Sets the leader line color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the radial run from the rim to the elbow.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    /// Sets the font size for both text lines.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Generates the leader line and the two text marks.
    pub fn marks(&self) -> Vec<Mark> {
        let (sin, cos) = (self.mid_angle.sin(), self.mid_angle.cos());
        let start = Point::new(
            self.center.x + self.radius * cos,
            self.center.y + self.radius * sin,
        );
        let elbow = Point::new(
            self.center.x + (self.radius + self.gap) * cos,
            self.center.y + (self.radius + self.gap) * sin,
        );
        let facing_right = cos >= 0.0;
        let tail_dx = if facing_right { self.tail } else { -self.tail };
        let end = Point::new(elbow.x + tail_dx, elbow.y);

        let mut path = BezPath::new();
        path.move_to(start);
        path.line_to(elbow);
        path.line_to(end);

        let anchor = if facing_right {
            TextAnchor::Start
        } else {
            TextAnchor::End
        };
        let text_dx = if facing_right { 4.0 } else { -4.0 };
        let text_x = end.x + text_dx;

        let mut out = Vec::with_capacity(3);
        out.push(Mark::new(
            MarkId::from_raw(self.id_base),
            z_order::CALLOUT_RULES,
            MarkPayload::Path(PathPayload {
                path,
                fill: Brush::Solid(Color::TRANSPARENT),
                stroke: Brush::Solid(self.color),
                stroke_width: 1.5,
            }),
        ));
        out.push(
            TextMarkSpec::new(
                MarkId::from_raw(self.id_base + 1),
                Point::new(text_x, end.y),
                format!("{} {}", self.label, self.value),
            )
            .with_font_size(self.font_size)
            .with_fill(Color::from_rgb8(0x33, 0x33, 0x33))
            .with_anchor(anchor)
            .with_baseline(TextBaseline::Alphabetic)
            .with_z_index(z_order::CALLOUT_LABELS)
            .mark(),
        );
        out.push(
            TextMarkSpec::new(
                MarkId::from_raw(self.id_base + 2),
                Point::new(text_x, end.y + self.font_size + 2.0),
                format!("({})", percent_detail(self.fraction)),
            )
            .with_font_size(self.font_size)
            .with_fill(Color::from_rgb8(0x99, 0x99, 0x99))
            .with_anchor(anchor)
            .with_baseline(TextBaseline::Alphabetic)
            .with_z_index(z_order::CALLOUT_LABELS)
            .mark(),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use rondel_core::TextPayload;

    use super::*;

    fn text_payloads(marks: &[Mark]) -> Vec<&TextPayload> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn right_facing_callout_anchors_text_start() {
        // Mid-angle 0 points right.
        let marks = CalloutSpec::new(10, Point::new(100.0, 100.0), 50.0, 0.0)
            .with_record("Group C", 30.0, 0.3)
            .marks();
        assert_eq!(marks.len(), 3);

        let texts = text_payloads(&marks);
        assert!(texts.iter().all(|t| t.anchor == TextAnchor::Start));
        assert_eq!(texts[0].text, "Group C 30");
        assert_eq!(texts[1].text, "(30.00%)");
        assert!(texts[0].pos.x > 160.0, "text sits past the tail");
    }

    #[test]
    fn left_facing_callout_anchors_text_end() {
        // Mid-angle pi points left.
        let marks = CalloutSpec::new(10, Point::new(100.0, 100.0), 50.0, core::f64::consts::PI)
            .with_record("Apple", 10.0, 1.0 / 3.0)
            .marks();

        let texts = text_payloads(&marks);
        assert!(texts.iter().all(|t| t.anchor == TextAnchor::End));
        assert_eq!(texts[1].text, "(33.33%)");
        assert!(texts[0].pos.x < 40.0);
    }

    #[test]
    fn leader_line_is_stroked_not_filled() {
        let marks = CalloutSpec::new(0, Point::new(0.0, 0.0), 10.0, 1.0).marks();
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("expected path payload");
        };
        assert_eq!(p.fill, Brush::Solid(Color::TRANSPARENT));
        assert!(p.stroke_width > 0.0);
    }
}
