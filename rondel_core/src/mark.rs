// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable-identity marks and their payloads.
//!
//! A mark is the unit of rendering: a stable id (so diffing can track it
//! across frames), a z-index hint, and a fully resolved payload. Payloads
//! carry scene-coordinate geometry and `peniko` paints; there is no data
//! binding at this layer.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

/// Stable identity for a mark across frames.
///
/// Generators derive ids deterministically (a base plus per-item offsets) so
/// the same logical mark keeps its id from frame to frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Horizontal text anchoring relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the left edge of the text.
    Start,
    /// The position is the horizontal center of the text.
    Middle,
    /// The position is the right edge of the text.
    End,
}

/// Vertical text baseline relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// The position is the vertical midline of the text.
    Middle,
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the top (hanging) edge.
    Hanging,
    /// The position is the ideographic baseline.
    Ideographic,
}

/// A filled axis-aligned rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// An unshaped text run.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// A filled and/or stroked Bézier path.
#[derive(Clone, Debug)]
pub struct PathPayload {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint. Ignored when `stroke_width` is zero.
    pub stroke: Brush,
    /// Stroke width in scene coordinates; zero disables the stroke.
    pub stroke_width: f64,
}

impl PartialEq for PathPayload {
    fn eq(&self, other: &Self) -> bool {
        self.path.elements() == other.path.elements()
            && self.fill == other.fill
            && self.stroke == other.stroke
            && self.stroke_width == other.stroke_width
    }
}

/// The payload discriminant, without the payload data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkKind {
    /// A [`RectPayload`].
    Rect,
    /// A [`TextPayload`].
    Text,
    /// A [`PathPayload`].
    Path,
}

/// The resolved drawable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A filled rectangle.
    Rect(RectPayload),
    /// An unshaped text run.
    Text(TextPayload),
    /// A filled/stroked path.
    Path(PathPayload),
}

impl MarkPayload {
    /// Returns the payload discriminant.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
            Self::Path(_) => MarkKind::Path,
        }
    }

    /// Geometry bounds, when derivable without text shaping.
    ///
    /// Text payloads return `None`; estimating their extent is left to the
    /// consumer's text metrics.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Text(_) => None,
            Self::Path(p) => Some(p.path.bounding_box()),
        }
    }
}

/// A drawable mark: stable id, paint-order hint, resolved payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable mark id.
    pub id: MarkId,
    /// Rendering order hint; renderers sort ascending by `(z_index, id)`.
    pub z_index: i32,
    /// Resolved drawable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark from its parts.
    pub fn new(id: MarkId, z_index: i32, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Circle;
    use peniko::Color;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn path_bounds_follow_geometry() {
        let circle = Circle::new(Point::new(10.0, 10.0), 5.0);
        let payload = MarkPayload::Path(PathPayload {
            path: circle.to_path(0.1),
            fill: css::TOMATO.into(),
            stroke: Color::TRANSPARENT.into(),
            stroke_width: 0.0,
        });
        let bounds = payload.bounds().expect("path payloads have bounds");
        assert!((bounds.center().x - 10.0).abs() < 0.1);
        assert!((bounds.width() - 10.0).abs() < 0.2);
    }

    #[test]
    fn text_bounds_are_deferred_to_consumers() {
        let payload = MarkPayload::Text(TextPayload {
            pos: Point::new(0.0, 0.0),
            text: String::from("hello"),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: css::BLACK.into(),
        });
        assert_eq!(payload.kind(), MarkKind::Text);
        assert!(payload.bounds().is_none());
    }

    #[test]
    fn path_payload_equality_compares_elements() {
        let make = |r: f64| PathPayload {
            path: Circle::new(Point::new(0.0, 0.0), r).to_path(0.1),
            fill: css::GOLD.into(),
            stroke: Color::TRANSPARENT.into(),
            stroke_width: 0.0,
        };
        assert_eq!(make(4.0), make(4.0));
        assert_ne!(make(4.0), make(5.0));
    }
}
