// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percentage label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a fraction as a whole-number percent label, e.g. `0.333` -> `"33%"`.
///
/// Used for the compact labels drawn inside sectors.
pub fn percent_label(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Formats a fraction as a two-decimal percent, e.g. `0.3` -> `"30.00%"`.
///
/// Used for the callout detail next to the active sector.
pub fn percent_detail(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn labels_round_to_whole_percent() {
        assert_eq!(percent_label(1.0 / 3.0), "33%");
        assert_eq!(percent_label(2.0 / 3.0), "67%");
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(1.0), "100%");
    }

    #[test]
    fn detail_keeps_two_decimals() {
        assert_eq!(percent_detail(1.0 / 3.0), "33.33%");
        assert_eq!(percent_detail(0.3), "30.00%");
        assert_eq!(percent_detail(1.0), "100.00%");
    }
}
