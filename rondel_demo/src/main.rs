// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard demo for `rondel`.
//!
//! Drives a [`Dashboard`] through a scripted event sequence and snapshots the
//! rendered scene after each step into an HTML report. The scene is ticked
//! incrementally, so each snapshot exercises the diff path rather than a
//! from-scratch rebuild.

mod html;
mod svg;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use rondel_charts::{PieChartSpec, StrokeStyle, SwatchPanelSpec, ToggleCardSpec};
use rondel_core::{Mark, Scene};
use rondel_state::{ChartId, Dashboard, Dataset, Event, Record};

const VIEW: Rect = Rect::new(0.0, 0.0, 680.0, 300.0);

fn main() {
    let master = Dataset::new(vec![
        Record::new(0, "Apple", 10.0),
        Record::new(1, "Banana", 15.0),
        Record::new(2, "Cherry", 20.0),
    ])
    .expect("valid master dataset");
    let raw = Dataset::new(vec![
        Record::new(0, "Group A", 10.0),
        Record::new(1, "Group B", 20.0),
        Record::new(2, "Group C", 30.0),
        Record::new(3, "Group D", 40.0),
    ])
    .expect("valid raw dataset");
    let mut dash = Dashboard::new(master, raw);

    let mut scene = Scene::new();
    let mut svg_scene = svg::SvgScene::default();
    svg_scene.set_view_box(VIEW);

    let mut sections = Vec::new();
    sections.push(html::HtmlSection {
        title: "Resting",
        description: "Both pies at rest: every filter entry selected, no hover, \
                      the toggle card in its initial phase.",
        svg: render(&mut scene, &mut svg_scene, &dash),
    });

    dash.dispatch(Event::FilterToggled(String::from("Banana")));
    sections.push(html::HtmlSection {
        title: "Filtered",
        description: "Banana unchecked: its swatch goes muted, the left pie \
                      redistributes to the remaining records, the right pie is untouched.",
        svg: render(&mut scene, &mut svg_scene, &dash),
    });

    dash.dispatch(Event::PointerEnter {
        chart: ChartId::Filtered,
        index: 1,
    });
    sections.push(html::HtmlSection {
        title: "Hover (filtered pie)",
        description: "Hovering the second segment of the left pie: it expands \
                      with a callout while its neighbor dims.",
        svg: render(&mut scene, &mut svg_scene, &dash),
    });

    dash.dispatch(Event::PointerLeave {
        chart: ChartId::Filtered,
    });
    dash.dispatch(Event::PointerEnter {
        chart: ChartId::Raw,
        index: 2,
    });
    dash.dispatch(Event::PointerLeave { chart: ChartId::Raw });
    sections.push(html::HtmlSection {
        title: "Hover (raw donut, sticky)",
        description: "The left pie cleared its hover on leave; the right donut \
                      keeps its last hovered segment highlighted.",
        svg: render(&mut scene, &mut svg_scene, &dash),
    });

    dash.dispatch(Event::ToggleClicked);
    sections.push(html::HtmlSection {
        title: "Toggled",
        description: "One click on the card: heading and color swap together, \
                      charts unaffected.",
        svg: render(&mut scene, &mut svg_scene, &dash),
    });

    let html = html::render_report("Rondel dashboard demo", &sections);
    std::fs::write("rondel_demo.html", html).expect("write rondel_demo.html");
    println!("wrote rondel_demo.html");
}

fn render(scene: &mut Scene, svg_scene: &mut svg::SvgScene, dash: &Dashboard) -> String {
    let diffs = scene.tick(dashboard_marks(dash));
    svg_scene.apply_diffs(&diffs);
    svg_scene.to_svg_string()
}

/// Recomputes the full mark set for the dashboard's current state.
fn dashboard_marks(dash: &Dashboard) -> Vec<Mark> {
    let mut marks = Vec::new();

    let filtered_pie = PieChartSpec::new(0x1000, Point::new(120.0, 130.0), 70.0)
        .with_stroke(StrokeStyle::solid(css::WHITE, 1.0));
    marks.extend(filtered_pie.marks(dash.filtered(), dash.filtered_hover().active()));

    marks.extend(
        SwatchPanelSpec::new(0x2000, rondel_charts::filter_items(dash.selector()))
            .with_font_size(11.0)
            .marks(250.0, 80.0),
    );

    let raw_donut = PieChartSpec::new(0x3000, Point::new(460.0, 130.0), 70.0)
        .with_inner_radius(30.0)
        .with_stroke(StrokeStyle::solid(css::WHITE, 1.0));
    marks.extend(raw_donut.marks(dash.raw(), dash.raw_hover().active()));

    marks.extend(
        SwatchPanelSpec::new(0x4000, rondel_charts::legend_items(dash.raw()))
            .with_font_size(11.0)
            .marks(590.0, 80.0),
    );

    marks.extend(
        ToggleCardSpec::new(0x5000, Rect::new(250.0, 230.0, 380.0, 270.0)).marks(dash.toggle()),
    );

    marks
}
