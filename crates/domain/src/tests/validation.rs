// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, validate_client_fields, validate_date, validate_operator_fields,
    validate_shift_fields, validate_time,
};

#[test]
fn test_validate_time_accepts_valid_times() {
    assert!(validate_time("00:00").is_ok());
    assert!(validate_time("09:30").is_ok());
    assert!(validate_time("23:59").is_ok());
}

#[test]
fn test_validate_time_rejects_out_of_range() {
    assert!(matches!(
        validate_time("24:00"),
        Err(DomainError::InvalidTime(_))
    ));
    assert!(matches!(
        validate_time("12:60"),
        Err(DomainError::InvalidTime(_))
    ));
}

#[test]
fn test_validate_time_rejects_garbage() {
    assert!(validate_time("").is_err());
    assert!(validate_time("noon").is_err());
    assert!(validate_time("12-30").is_err());
}

#[test]
fn test_validate_date_accepts_valid_dates() {
    assert!(validate_date("2025-01-10").is_ok());
    assert!(validate_date("2024-02-29").is_ok());
}

#[test]
fn test_validate_date_rejects_impossible_dates() {
    assert!(matches!(
        validate_date("2025-02-30"),
        Err(DomainError::InvalidDate(_))
    ));
    assert!(validate_date("10/01/2025").is_err());
}

#[test]
fn test_validate_client_fields_requires_name_and_vat() {
    assert!(validate_client_fields("Alfa Group", "12345678901").is_ok());
    assert!(matches!(
        validate_client_fields("  ", "12345678901"),
        Err(DomainError::InvalidName(_))
    ));
    assert!(matches!(
        validate_client_fields("Alfa Group", ""),
        Err(DomainError::InvalidVatNumber(_))
    ));
}

#[test]
fn test_validate_operator_fields_requires_name() {
    assert!(validate_operator_fields("Mario Rossi").is_ok());
    assert!(matches!(
        validate_operator_fields(""),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_validate_shift_fields_accepts_overnight_shift() {
    let result: Result<(), DomainError> =
        validate_shift_fields("2025-01-10", "20:00", "04:00", 1.0, 2);
    assert!(result.is_ok());
}

#[test]
fn test_validate_shift_fields_rejects_bad_pause() {
    assert!(matches!(
        validate_shift_fields("2025-01-10", "08:00", "16:00", -0.5, 1),
        Err(DomainError::InvalidPauseHours(_))
    ));
    assert!(matches!(
        validate_shift_fields("2025-01-10", "08:00", "16:00", 25.0, 1),
        Err(DomainError::InvalidPauseHours(_))
    ));
}

#[test]
fn test_validate_shift_fields_rejects_zero_target() {
    assert!(matches!(
        validate_shift_fields("2025-01-10", "08:00", "16:00", 0.0, 0),
        Err(DomainError::InvalidRequiredOperators(0))
    ));
}
