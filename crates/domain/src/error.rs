// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// Display code never raises these: derived-hours computation falls back to
/// zero on malformed input. They surface only at the API boundary, where
/// bad input is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A wall-clock time string is not `HH:MM`.
    InvalidTime(String),
    /// A calendar date string is not `YYYY-MM-DD`.
    InvalidDate(String),
    /// Pause hours must be non-negative and at most a full day.
    InvalidPauseHours(f64),
    /// A required name field is empty.
    InvalidName(String),
    /// The VAT number is empty or malformed.
    InvalidVatNumber(String),
    /// The activity type string is not one of the fixed service categories.
    InvalidActivityType(String),
    /// The availability string is not a recognized state.
    InvalidAvailability(String),
    /// The notification kind string is not recognized.
    InvalidNotificationKind(String),
    /// The required-operators target must be at least 1.
    InvalidRequiredOperators(u32),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTime(value) => {
                write!(f, "Invalid time '{value}': expected HH:MM")
            }
            Self::InvalidDate(value) => {
                write!(f, "Invalid date '{value}': expected YYYY-MM-DD")
            }
            Self::InvalidPauseHours(value) => {
                write!(f, "Invalid pause hours {value}: must be between 0 and 24")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidVatNumber(msg) => write!(f, "Invalid VAT number: {msg}"),
            Self::InvalidActivityType(value) => {
                write!(f, "Unknown activity type: '{value}'")
            }
            Self::InvalidAvailability(value) => {
                write!(f, "Unknown availability state: '{value}'")
            }
            Self::InvalidNotificationKind(value) => {
                write!(f, "Unknown notification kind: '{value}'")
            }
            Self::InvalidRequiredOperators(value) => {
                write!(f, "Invalid required operators {value}: must be at least 1")
            }
        }
    }
}

impl std::error::Error for DomainError {}
