// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dates;
mod error;
mod hours;
mod rows;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use dates::{format_date_dd_mm_yy, iso_date};
pub use error::DomainError;
pub use hours::{
    effective_hours, occupied_slots, operator_hours, round2, total_effective_hours,
    total_operator_hours,
};
pub use rows::{ShiftRow, flatten_shifts};
pub use types::{
    ACTIVITY_TYPES, ActivityType, Availability, Brand, BrandAddress, Client, ContactPerson, Event,
    Notification, NotificationKind, NotificationPreferences, Operator, PushSubscription, Shift,
    Task,
};
pub use validation::{
    validate_client_fields, validate_date, validate_operator_fields, validate_shift_fields,
    validate_time,
};

/// The sentinel value marking an unassigned slot in a shift's slot array.
///
/// Identifiers are opaque unique strings assigned by the entity store; the
/// empty string is reserved for this sentinel and is never a valid
/// identifier.
pub const OPEN_SLOT: &str = "";
