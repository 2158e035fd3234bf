// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived-hours arithmetic over shift fields.
//!
//! Everything here is a deterministic pure function. Malformed time input
//! yields zero rather than an error: this feeds display code, which must
//! never crash on a bad value.
//!
//! Overnight policy: when the end-of-shift clock time is numerically
//! earlier than the start, the shift crosses midnight and 24 hours are
//! added to the gross duration. This is the single policy for the whole
//! system; night shifts are a first-class part of the domain.

use crate::error::DomainError;
use crate::types::Shift;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parses a `HH:MM` wall-clock time into minutes since midnight.
///
/// # Errors
///
/// Returns an error if the string is not a valid 24-hour `HH:MM` time.
pub(crate) fn parse_time_minutes(value: &str) -> Result<i32, DomainError> {
    let invalid = || DomainError::InvalidTime(value.to_string());

    let (hh, mm) = value.split_once(':').ok_or_else(invalid)?;
    let hours: i32 = hh.parse().map_err(|_| invalid())?;
    let minutes: i32 = mm.parse().map_err(|_| invalid())?;

    if (0..24).contains(&hours) && (0..60).contains(&minutes) {
        Ok(hours * 60 + minutes)
    } else {
        Err(invalid())
    }
}

/// Effective hours for one shift instance.
///
/// Gross duration is `(end - start)` in hours, wrapped forward by 24 hours
/// for overnight shifts; `pause_hours` is subtracted and the result floored
/// at zero. Malformed times or a negative pause yield `0.0`.
///
/// Full precision is retained for aggregation; use [`round2`] for display.
#[must_use]
pub fn effective_hours(start_time: &str, end_time: &str, pause_hours: f64) -> f64 {
    let (Ok(start), Ok(end)) = (
        parse_time_minutes(start_time),
        parse_time_minutes(end_time),
    ) else {
        return 0.0;
    };

    if !pause_hours.is_finite() || pause_hours < 0.0 {
        return 0.0;
    }

    let mut gross_minutes: i32 = end - start;
    if gross_minutes < 0 {
        gross_minutes += MINUTES_PER_DAY;
    }

    let gross: f64 = f64::from(gross_minutes) / 60.0;
    (gross - pause_hours).max(0.0)
}

/// Rounds an hours value to two decimal places for display.
#[must_use]
pub fn round2(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Total operator-hours contributed by a shift: effective hours times the
/// number of operators working it.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn operator_hours(effective_hours: f64, operator_count: usize) -> f64 {
    effective_hours * operator_count as f64
}

/// Counts the occupied slots in a slot array: entries that are non-blank
/// after trimming. An empty string is "slot open", not an operator.
#[must_use]
pub fn occupied_slots(operator_ids: &[String]) -> usize {
    operator_ids.iter().filter(|id| !id.trim().is_empty()).count()
}

/// Sum of per-shift effective hours over a set of shifts.
#[must_use]
pub fn total_effective_hours(shifts: &[Shift]) -> f64 {
    shifts.iter().map(Shift::effective_hours).sum()
}

/// Sum of per-shift operator-hours over a set of shifts, weighting each
/// shift's effective hours by its occupied slot count.
#[must_use]
pub fn total_operator_hours(shifts: &[Shift]) -> f64 {
    shifts
        .iter()
        .map(|shift| operator_hours(shift.effective_hours(), shift.occupied_slots()))
        .sum()
}
