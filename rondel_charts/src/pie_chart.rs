// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie and donut chart mark generation.
//!
//! The chart is a pure function of a dataset and an optional active segment:
//! every call recomputes the sector geometry from record fractions, starting
//! at twelve o'clock and sweeping clockwise in record order. The active
//! segment is drawn expanded with a callout while its neighbors dim.

extern crate alloc;

use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::Point;
use rondel_core::{Mark, MarkId, TextAnchor, TextBaseline};
use rondel_state::Dataset;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::callout::CalloutSpec;
use crate::format::percent_label;
use crate::palette;
use crate::sector_mark::SectorMarkSpec;
use crate::style::StrokeStyle;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A pie (or donut) chart over a dataset.
///
/// Mark ids are derived from `id_base`: sectors at `id_base + i`, inline
/// labels at `id_base + 1000 + i`, and the callout group at `id_base + 2000`.
/// Segment `i` keeps its ids across frames, so scene diffs stay incremental
/// as datasets are filtered and hover moves between segments.
#[derive(Clone, Debug)]
pub struct PieChartSpec {
    /// Stable-id base for all generated marks.
    pub id_base: u64,
    /// Pie center in scene coordinates.
    pub center: Point,
    /// Outer radius of resting sectors.
    pub outer_radius: f64,
    /// Inner radius; zero for a pie, positive for a donut.
    pub inner_radius: f64,
    /// Extra outer radius applied to the active sector.
    pub active_expand: f64,
    /// Radial run of the callout leader line past the active rim.
    pub callout_gap: f64,
    /// Font size for inline percent labels.
    pub label_font_size: f64,
    /// Whether to draw inline percent labels.
    pub labels: bool,
    /// Whether to draw the callout for the active sector.
    pub callout: bool,
    /// Optional outline stroke for sectors.
    pub stroke: Option<StrokeStyle>,
    /// Curve flattening tolerance for sector paths.
    pub tolerance: f64,
}

impl PieChartSpec {
    /// Creates a pie chart spec with default styling.
    pub fn new(id_base: u64, center: Point, outer_radius: f64) -> Self {
        Self {
            id_base,
            center,
            outer_radius,
            inner_radius: 0.0,
            active_expand: 10.0,
            callout_gap: 12.0,
            label_font_size: 11.0,
            labels: true,
            callout: true,
            stroke: None,
            tolerance: 0.1,
        }
    }

    /// Sets the inner radius, turning the pie into a donut.
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius.max(0.0);
        self
    }

    /// Sets the extra radius applied to the active sector.
    pub fn with_active_expand(mut self, active_expand: f64) -> Self {
        self.active_expand = active_expand.max(0.0);
        self
    }

    /// Sets the callout leader line's radial run.
    pub fn with_callout_gap(mut self, callout_gap: f64) -> Self {
        self.callout_gap = callout_gap.max(0.0);
        self
    }

    /// Sets the inline label font size.
    pub fn with_label_font_size(mut self, label_font_size: f64) -> Self {
        self.label_font_size = label_font_size;
        self
    }

    /// Disables inline percent labels.
    pub fn without_labels(mut self) -> Self {
        self.labels = false;
        self
    }

    /// Disables the active-sector callout.
    pub fn without_callout(mut self) -> Self {
        self.callout = false;
        self
    }

    /// Sets the sector outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the curve flattening tolerance for sector paths.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Generates the full mark set for `dataset` with `active` highlighted.
    ///
    /// A dataset with a non-positive total produces no marks. An `active`
    /// index outside the dataset is treated as no active segment. Records
    /// with zero value occupy no angle and emit neither sector nor label,
    /// but later segments keep their ids.
    pub fn marks(&self, dataset: &Dataset, active: Option<usize>) -> Vec<Mark> {
        if dataset.total() <= 0.0 {
            return Vec::new();
        }
        let active = active.filter(|&i| i < dataset.len());

        let mut out = Vec::new();
        let mut start = -FRAC_PI_2;
        for (i, record) in dataset.records().iter().enumerate() {
            let frac = dataset.fraction(i);
            let end = start + frac * TAU;
            if frac <= 0.0 {
                start = end;
                continue;
            }

            let is_active = active == Some(i);
            let outer = if is_active {
                self.outer_radius + self.active_expand
            } else {
                self.outer_radius
            };
            let fill = if is_active || active.is_none() {
                palette::segment_color(i).into()
            } else {
                palette::dimmed_fill(i, self.center, self.outer_radius)
            };
            let z_index = if is_active {
                z_order::SECTOR_ACTIVE
            } else {
                z_order::SECTOR_FILL
            };

            let mut sector = SectorMarkSpec::new(
                MarkId::from_raw(self.id_base + i as u64),
                self.center,
                self.inner_radius,
                outer,
                start,
                end,
            )
            .with_fill(fill)
            .with_tolerance(self.tolerance)
            .with_z_index(z_index);
            if let Some(stroke) = self.stroke.clone() {
                sector = sector.with_stroke(stroke);
            }
            out.extend(sector.marks());

            let mid = (start + end) * 0.5;
            if self.labels {
                let label_r = self.inner_radius + (outer - self.inner_radius) * 0.5;
                let pos = Point::new(
                    self.center.x + label_r * mid.cos(),
                    self.center.y + label_r * mid.sin(),
                );
                out.push(
                    TextMarkSpec::new(
                        MarkId::from_raw(self.id_base + 1000 + i as u64),
                        pos,
                        percent_label(frac),
                    )
                    .with_font_size(self.label_font_size)
                    .with_fill(peniko::color::palette::css::WHITE)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Middle)
                    .with_z_index(z_order::SECTOR_LABELS)
                    .mark(),
                );
            }

            if self.callout && is_active {
                let callout = CalloutSpec::new(self.id_base + 2000, self.center, outer, mid)
                    .with_record(record.label.clone(), record.value, frac)
                    .with_color(palette::segment_color(i))
                    .with_gap(self.callout_gap);
                out.extend(callout.marks());
            }

            start = end;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::Brush;
    use rondel_core::{MarkDiff, MarkPayload, Scene};
    use rondel_state::Record;

    use super::*;

    fn tens() -> Dataset {
        Dataset::new(vec![
            Record::new(0, "Group A", 10.0),
            Record::new(1, "Group B", 20.0),
            Record::new(2, "Group C", 30.0),
            Record::new(3, "Group D", 40.0),
        ])
        .expect("valid dataset")
    }

    fn spec() -> PieChartSpec {
        PieChartSpec::new(0, Point::new(100.0, 100.0), 50.0)
    }

    #[test]
    fn resting_chart_emits_sector_and_label_per_record() {
        let marks = spec().marks(&tens(), None);
        assert_eq!(marks.len(), 8);

        let labels: Vec<_> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["10%", "20%", "30%", "40%"]);
    }

    #[test]
    fn zero_total_dataset_produces_no_marks() {
        let flat = Dataset::new(vec![
            Record::new(0, "A", 0.0),
            Record::new(1, "B", 0.0),
        ])
        .expect("valid dataset");
        assert!(spec().marks(&flat, None).is_empty());
        assert!(spec().marks(&Dataset::empty(), None).is_empty());
    }

    #[test]
    fn zero_value_record_is_skipped_without_shifting_ids() {
        let gappy = Dataset::new(vec![
            Record::new(0, "A", 10.0),
            Record::new(1, "B", 0.0),
            Record::new(2, "C", 10.0),
        ])
        .expect("valid dataset");
        let marks = spec().marks(&gappy, None);

        let sector_ids: Vec<_> = marks
            .iter()
            .filter(|m| matches!(m.payload, MarkPayload::Path(_)))
            .map(|m| m.id)
            .collect();
        assert_eq!(sector_ids, [MarkId::from_raw(0), MarkId::from_raw(2)]);
    }

    #[test]
    fn active_sector_expands_and_gains_a_callout() {
        let resting = spec().marks(&tens(), None);
        let hovered = spec().marks(&tens(), Some(2));

        // 4 sectors + 4 labels + leader line + 2 callout texts.
        assert_eq!(hovered.len(), resting.len() + 3);

        let bounds = |marks: &[Mark]| {
            marks
                .iter()
                .find(|m| m.id == MarkId::from_raw(2))
                .and_then(|m| m.payload.bounds())
                .expect("sector has bounds")
        };
        assert!(bounds(&hovered).width() > bounds(&resting).width());
    }

    #[test]
    fn inactive_sectors_dim_while_one_is_active() {
        let hovered = spec().marks(&tens(), Some(0));
        let fills: Vec<_> = hovered
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Path(p) if m.id.0 < 1000 => Some(&p.fill),
                _ => None,
            })
            .collect();
        assert!(matches!(fills[0], Brush::Solid(_)));
        assert!(fills[1..].iter().all(|f| matches!(f, Brush::Gradient(_))));
    }

    #[test]
    fn out_of_range_active_is_treated_as_none() {
        let marks = spec().marks(&tens(), Some(9));
        assert_eq!(marks, spec().marks(&tens(), None));
    }

    #[test]
    fn hover_move_diffs_as_sector_updates() {
        let chart = spec();
        let data = tens();
        let mut scene = Scene::new();
        scene.tick(chart.marks(&data, Some(0)));

        let diffs = scene.tick(chart.marks(&data, Some(1)));
        // Sectors 0 and 1 change shape/fill, their labels move, and the
        // callout marks are updated in place (same ids).
        assert!(
            diffs
                .iter()
                .all(|d| !matches!(d, MarkDiff::Enter { .. } | MarkDiff::Exit { .. })),
            "moving hover between segments reuses every mark id"
        );
    }

    #[test]
    fn donut_leaves_the_center_open() {
        let donut = spec().with_inner_radius(20.0);
        let marks = donut.marks(&tens(), None);
        let sector_bounds = marks
            .iter()
            .find(|m| m.id == MarkId::from_raw(0))
            .and_then(|m| m.payload.bounds())
            .expect("sector has bounds");
        // The first sector occupies the top-right tenth; an annular path
        // never reaches the pie center.
        assert!(sector_bounds.x1 <= 100.0 + 50.0 + 1e-9);
        assert!(!sector_bounds.contains(Point::new(100.0, 100.0)));
    }
}
