// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The root composer.
//!
//! Owns the session's master dataset and wires the filter selector's
//! [`DatasetUpdate`](crate::DatasetUpdate) messages into the filtered
//! chart's input. The raw chart and the toggle card are independent
//! siblings; the composer only routes events to whichever component owns
//! the state they touch, performing no computation of its own.

use crate::dataset::Dataset;
use crate::event::{ChartId, Event};
use crate::filter::FilterSelector;
use crate::hover::{HoverPolicy, HoverState};
use crate::toggle::ToggleState;

/// Root composition of the dashboard's widgets.
///
/// Two chart wirings are deliberately kept separate: the filtered chart's
/// dataset is replaced only when the selector emits an update, while the
/// raw chart holds its dataset directly and never filters.
#[derive(Debug, Clone)]
pub struct Dashboard {
    master: Dataset,
    selector: FilterSelector,
    filtered: Dataset,
    filtered_hover: HoverState,
    raw: Dataset,
    raw_hover: HoverState,
    toggle: ToggleState,
}

impl Dashboard {
    /// Creates a dashboard over a master dataset (filtered chart) and an
    /// independent raw dataset (unfiltered chart).
    ///
    /// The filter starts with every label selected, so the filtered chart
    /// initially displays the whole master dataset. The filtered chart
    /// clears its hover on pointer-leave; the raw chart keeps the last
    /// hovered segment.
    pub fn new(master: Dataset, raw: Dataset) -> Self {
        let selector = FilterSelector::all_selected(&master);
        let filtered = selector.apply(&master);
        Self {
            master,
            selector,
            filtered,
            filtered_hover: HoverState::new(HoverPolicy::ClearOnLeave),
            raw,
            raw_hover: HoverState::new(HoverPolicy::Sticky),
            toggle: ToggleState::new(),
        }
    }

    /// Routes one event to the component owning the state it touches.
    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::FilterToggled(label) => {
                if let Some(update) = self.selector.toggle(&label, &self.master) {
                    self.filtered = update.dataset;
                    self.filtered_hover.clamp(self.filtered.len());
                }
            }
            Event::PointerEnter { chart, index } => match chart {
                ChartId::Filtered => self.filtered_hover.pointer_enter(index, self.filtered.len()),
                ChartId::Raw => self.raw_hover.pointer_enter(index, self.raw.len()),
            },
            Event::PointerLeave { chart } => match chart {
                ChartId::Filtered => self.filtered_hover.pointer_leave(),
                ChartId::Raw => self.raw_hover.pointer_leave(),
            },
            Event::ToggleClicked => self.toggle.click(),
        }
    }

    /// The master dataset (static for the session).
    pub fn master(&self) -> &Dataset {
        &self.master
    }

    /// The filter selector.
    pub fn selector(&self) -> &FilterSelector {
        &self.selector
    }

    /// The dataset currently displayed by the filtered chart.
    pub fn filtered(&self) -> &Dataset {
        &self.filtered
    }

    /// The filtered chart's hover state.
    pub fn filtered_hover(&self) -> &HoverState {
        &self.filtered_hover
    }

    /// The raw chart's dataset.
    pub fn raw(&self) -> &Dataset {
        &self.raw
    }

    /// The raw chart's hover state.
    pub fn raw_hover(&self) -> &HoverState {
        &self.raw_hover
    }

    /// The toggle card state.
    pub fn toggle(&self) -> &ToggleState {
        &self.toggle
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::dataset::Record;

    fn dashboard() -> Dashboard {
        let master = Dataset::new(vec![
            Record::new(0, "Apple", 10.0),
            Record::new(1, "Banana", 15.0),
            Record::new(2, "Cherry", 20.0),
        ])
        .expect("valid master");
        let raw = Dataset::new(vec![
            Record::new(0, "Group A", 10.0),
            Record::new(1, "Group B", 20.0),
            Record::new(2, "Group C", 30.0),
            Record::new(3, "Group D", 40.0),
        ])
        .expect("valid raw");
        Dashboard::new(master, raw)
    }

    #[test]
    fn filter_toggle_replaces_the_filtered_dataset() {
        let mut dash = dashboard();
        dash.dispatch(Event::FilterToggled(String::from("Banana")));

        let labels: Vec<_> = dash.filtered().records().iter().map(|r| &r.label).collect();
        assert_eq!(labels, ["Apple", "Cherry"]);
        assert_eq!(dash.master().len(), 3, "master never changes");
    }

    #[test]
    fn filtering_clamps_a_now_out_of_range_hover() {
        let mut dash = dashboard();
        dash.dispatch(Event::PointerEnter {
            chart: ChartId::Filtered,
            index: 2,
        });
        assert_eq!(dash.filtered_hover().active(), Some(2));

        dash.dispatch(Event::FilterToggled(String::from("Cherry")));
        assert_eq!(dash.filtered().len(), 2);
        assert_eq!(dash.filtered_hover().active(), None);
    }

    #[test]
    fn chart_hover_states_are_independent() {
        let mut dash = dashboard();
        dash.dispatch(Event::PointerEnter {
            chart: ChartId::Raw,
            index: 2,
        });
        dash.dispatch(Event::PointerLeave {
            chart: ChartId::Raw,
        });
        dash.dispatch(Event::PointerLeave {
            chart: ChartId::Filtered,
        });

        // Raw chart is sticky; filtered chart clears.
        assert_eq!(dash.raw_hover().active(), Some(2));
        assert_eq!(dash.filtered_hover().active(), None);
    }

    #[test]
    fn toggle_events_do_not_touch_chart_state() {
        let mut dash = dashboard();
        let filtered_before = dash.filtered().clone();
        dash.dispatch(Event::ToggleClicked);
        assert_eq!(dash.filtered(), &filtered_before);
        assert_eq!(dash.toggle().label(), "executers");
    }
}
