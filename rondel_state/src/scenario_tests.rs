// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios across the state model.

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::{ChartId, Dashboard, Dataset, Event, Record};

fn fruit_master() -> Dataset {
    Dataset::new(vec![
        Record::new(0, "Apple", 10.0),
        Record::new(1, "Banana", 15.0),
        Record::new(2, "Cherry", 20.0),
    ])
    .expect("valid master")
}

fn tens_raw() -> Dataset {
    Dataset::new(vec![
        Record::new(0, "Group A", 10.0),
        Record::new(1, "Group B", 20.0),
        Record::new(2, "Group C", 30.0),
        Record::new(3, "Group D", 40.0),
    ])
    .expect("valid raw")
}

#[test]
fn unchecking_banana_leaves_apple_and_cherry_proportions() {
    let mut dash = Dashboard::new(fruit_master(), tens_raw());
    dash.dispatch(Event::FilterToggled(String::from("Banana")));

    let filtered = dash.filtered();
    let labels: Vec<_> = filtered.records().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["Apple", "Cherry"]);

    // 10 / 30 and 20 / 30.
    assert!((filtered.fraction(0) - 1.0 / 3.0).abs() < 1e-12);
    assert!((filtered.fraction(1) - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn hovering_the_third_raw_segment_reads_thirty_percent() {
    let mut dash = Dashboard::new(fruit_master(), tens_raw());
    dash.dispatch(Event::PointerEnter {
        chart: ChartId::Raw,
        index: 2,
    });

    assert_eq!(dash.raw_hover().active(), Some(2));
    assert!((dash.raw().fraction(2) - 0.3).abs() < 1e-12);

    // Raw chart hover is sticky across leave.
    dash.dispatch(Event::PointerLeave { chart: ChartId::Raw });
    assert_eq!(dash.raw_hover().active(), Some(2));
}

#[test]
fn three_toggle_clicks_show_the_alternate_card() {
    let mut dash = Dashboard::new(fruit_master(), tens_raw());
    for _ in 0..3 {
        dash.dispatch(Event::ToggleClicked);
    }
    assert_eq!(dash.toggle().label(), "executers");
}

#[test]
fn event_order_is_respected_per_owner() {
    let mut dash = Dashboard::new(fruit_master(), tens_raw());

    dash.dispatch(Event::PointerEnter {
        chart: ChartId::Filtered,
        index: 0,
    });
    dash.dispatch(Event::PointerEnter {
        chart: ChartId::Filtered,
        index: 1,
    });
    assert_eq!(dash.filtered_hover().active(), Some(1), "last enter wins");

    dash.dispatch(Event::PointerLeave {
        chart: ChartId::Filtered,
    });
    assert_eq!(dash.filtered_hover().active(), None);
}
