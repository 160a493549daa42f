// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (arc) mark generation.
//!
//! Pie and donut slices are annular sectors driven by start/end angles and
//! inner/outer radii, flattened to a `BezPath` at a configurable tolerance.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Circle, Point, Shape};
use peniko::{Brush, Color};
use rondel_core::{Mark, MarkId, MarkPayload, PathPayload};

use crate::style::StrokeStyle;

/// A sector (arc slice), suitable for pie/donut charts.
///
/// Angles are in radians. A sweep of `TAU` produces a full ring.
#[derive(Clone, Debug)]
pub struct SectorMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Center in scene coordinates.
    pub center: Point,
    /// Inner radius in scene coordinates (0 for a pie slice).
    pub inner_radius: f64,
    /// Outer radius in scene coordinates.
    pub outer_radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Fill paint for the sector.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Curve flattening tolerance when converting the sector to a `BezPath`.
    pub tolerance: f64,
    /// Rendering order hint (`rondel_core::Mark::z_index`).
    pub z_index: i32,
}

impl SectorMarkSpec {
    /// Creates a new sector mark spec.
    pub fn new(
        id: MarkId,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            id,
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            fill: Brush::default(),
            stroke: None,
            tolerance: 0.1,
            z_index: crate::z_order::SECTOR_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Disables the outline stroke.
    pub fn without_stroke(mut self) -> Self {
        self.stroke = None;
        self
    }

    /// Sets the curve flattening tolerance used for `BezPath` conversion.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates marks for this spec.
    pub fn marks(&self) -> Vec<Mark> {
        let circle = Circle::new(self.center, self.outer_radius);
        let sweep = self.end_angle - self.start_angle;
        let segment = circle.segment(self.inner_radius, self.start_angle, sweep);
        let path = segment.path_elements(self.tolerance).collect();

        let (stroke, stroke_width) = match &self.stroke {
            Some(style) => (style.brush.clone(), style.stroke_width),
            None => (Brush::Solid(Color::TRANSPARENT), 0.0),
        };

        alloc::vec![Mark::new(
            self.id,
            self.z_index,
            MarkPayload::Path(PathPayload {
                path,
                fill: self.fill.clone(),
                stroke,
                stroke_width,
            }),
        )]
    }
}
