// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-date helpers.
//!
//! Entity-facing dates are `YYYY-MM-DD` strings, whose lexicographic order
//! equals chronological order; comparisons throughout the system rely on
//! that. `DD/MM/YY` is the display format used in notification copy.

use time::format_description::FormatItem;
use time::macros::format_description;

const ISO_DATE: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Formats a [`time::Date`] as a `YYYY-MM-DD` string.
#[must_use]
pub fn iso_date(date: time::Date) -> String {
    date.format(ISO_DATE).unwrap_or_default()
}

/// Converts a `YYYY-MM-DD` string to display form `DD/MM/YY`.
///
/// Returns an empty string for empty input and the input unchanged when it
/// does not look like an ISO date.
#[must_use]
pub fn format_date_dd_mm_yy(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = date.split('-').collect();
    let [year, month, day] = parts[..] else {
        return date.to_string();
    };
    let short_year: &str = if year.len() >= 2 {
        &year[year.len() - 2..]
    } else {
        year
    };
    format!("{day}/{month}/{short_year}")
}
