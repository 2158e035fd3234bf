// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{format_date_dd_mm_yy, iso_date};
use time::macros::date;

#[test]
fn test_iso_date_formats_padded() {
    assert_eq!(iso_date(date!(2025 - 01 - 10)), "2025-01-10");
    assert_eq!(iso_date(date!(2025 - 12 - 03)), "2025-12-03");
}

#[test]
fn test_format_date_dd_mm_yy() {
    assert_eq!(format_date_dd_mm_yy("2025-01-10"), "10/01/25");
}

#[test]
fn test_format_date_empty_input() {
    assert_eq!(format_date_dd_mm_yy(""), "");
}

#[test]
fn test_format_date_passes_through_non_iso_input() {
    assert_eq!(format_date_dd_mm_yy("gennaio"), "gennaio");
}
