// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use presidio_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTime(value) => ApiError::InvalidInput {
            field: String::from("time"),
            message: format!("Invalid time '{value}': expected HH:MM"),
        },
        DomainError::InvalidDate(value) => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Invalid date '{value}': expected YYYY-MM-DD"),
        },
        DomainError::InvalidPauseHours(value) => ApiError::InvalidInput {
            field: String::from("pauseHours"),
            message: format!("Pause hours must be between 0 and 24, got {value}"),
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidVatNumber(msg) => ApiError::InvalidInput {
            field: String::from("vatNumber"),
            message: msg,
        },
        DomainError::InvalidActivityType(value) => ApiError::InvalidInput {
            field: String::from("activityType"),
            message: format!("Unknown activity type: '{value}'"),
        },
        DomainError::InvalidAvailability(value) => ApiError::InvalidInput {
            field: String::from("availability"),
            message: format!("Unknown availability state: '{value}'"),
        },
        DomainError::InvalidNotificationKind(value) => ApiError::InvalidInput {
            field: String::from("type"),
            message: format!("Unknown notification kind: '{value}'"),
        },
        DomainError::InvalidRequiredOperators(value) => ApiError::InvalidInput {
            field: String::from("requiredOperators"),
            message: format!("Required operators must be at least 1, got {value}"),
        },
    }
}

pub(crate) fn not_found(resource_type: &str, id: &str) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message: format!("No record with id '{id}'"),
    }
}
