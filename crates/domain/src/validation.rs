// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::hours::parse_time_minutes;
use time::format_description::FormatItem;
use time::macros::format_description;

const ISO_DATE: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Validates a wall-clock `HH:MM` time string.
///
/// # Errors
///
/// Returns an error if the string is not a valid 24-hour time.
pub fn validate_time(value: &str) -> Result<(), DomainError> {
    parse_time_minutes(value).map(|_| ())
}

/// Validates a `YYYY-MM-DD` calendar-date string.
///
/// # Errors
///
/// Returns an error if the string is not a real calendar date.
pub fn validate_date(value: &str) -> Result<(), DomainError> {
    time::Date::parse(value, ISO_DATE)
        .map(|_| ())
        .map_err(|_| DomainError::InvalidDate(value.to_string()))
}

/// Validates the fields of a client record before creation.
///
/// # Errors
///
/// Returns an error if the name or VAT number is empty.
pub fn validate_client_fields(name: &str, vat_number: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Client name must not be empty",
        )));
    }
    if vat_number.trim().is_empty() {
        return Err(DomainError::InvalidVatNumber(String::from(
            "VAT number must not be empty",
        )));
    }
    Ok(())
}

/// Validates the fields of an operator record before creation.
///
/// # Errors
///
/// Returns an error if the name is empty.
pub fn validate_operator_fields(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Operator name must not be empty",
        )));
    }
    Ok(())
}

/// Validates the timing fields of a shift before creation or update.
///
/// Note that `end_time` numerically earlier than `start_time` is valid:
/// it marks an overnight shift.
///
/// # Errors
///
/// Returns an error if the date or either time is malformed, the pause is
/// outside `[0, 24]`, or the required-operators target is zero.
pub fn validate_shift_fields(
    date: &str,
    start_time: &str,
    end_time: &str,
    pause_hours: f64,
    required_operators: u32,
) -> Result<(), DomainError> {
    validate_date(date)?;
    validate_time(start_time)?;
    validate_time(end_time)?;
    if !pause_hours.is_finite() || !(0.0..=24.0).contains(&pause_hours) {
        return Err(DomainError::InvalidPauseHours(pause_hours));
    }
    if required_operators == 0 {
        return Err(DomainError::InvalidRequiredOperators(required_operators));
    }
    Ok(())
}
