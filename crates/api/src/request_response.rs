// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests deserialize from the wire format (camelCase keys, Italian
//! display labels for enumerations); responses are the domain records
//! themselves, which already serialize to that format.

use presidio_domain::{ActivityType, Availability, NotificationPreferences, PushSubscription};
use serde::{Deserialize, Serialize};

/// Request to create a new client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    /// Legal name.
    pub name: String,
    /// VAT identifier.
    pub vat_number: String,
}

/// Request to partially update a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    /// New legal name.
    #[serde(default)]
    pub name: Option<String>,
    /// New VAT identifier.
    #[serde(default)]
    pub vat_number: Option<String>,
}

/// Request to add a contact person to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPersonRequest {
    /// Full name.
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
}

/// Request to update a contact person's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactPersonRequest {
    /// New full name.
    #[serde(default)]
    pub name: Option<String>,
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,
    /// New phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Request to create a new brand under a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandRequest {
    /// Brand name.
    pub name: String,
    /// The owning client.
    pub client_id: String,
}

/// Request to rename a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandRequest {
    /// New brand name.
    pub name: String,
}

/// Request to add or rewrite a brand site address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandAddressRequest {
    /// Free-text address.
    pub address: String,
}

/// Request to create a new operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOperatorRequest {
    /// Full name.
    pub name: String,
    /// Role description.
    #[serde(default)]
    pub role: String,
    /// Availability state; defaults to available.
    #[serde(default)]
    pub availability: Availability,
}

/// Request to partially update an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOperatorRequest {
    /// New full name.
    #[serde(default)]
    pub name: Option<String>,
    /// New role.
    #[serde(default)]
    pub role: Option<String>,
    /// New availability state.
    #[serde(default)]
    pub availability: Option<Availability>,
    /// New phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,
    /// New fiscal code.
    #[serde(default)]
    pub fiscal_code: Option<String>,
    /// New photo reference.
    #[serde(default)]
    pub photo: Option<String>,
}

/// Request to create a new event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Event title.
    pub title: String,
    /// The owning client.
    pub client_id: String,
    /// The brand the event is tied to.
    pub brand_id: String,
    /// Resolved site address.
    pub address: String,
    /// Optional activity code.
    #[serde(default)]
    pub activity_code: Option<String>,
    /// Optional start date, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Optional end date, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to partially update an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New resolved site address.
    #[serde(default)]
    pub address: Option<String>,
    /// New activity code.
    #[serde(default)]
    pub activity_code: Option<String>,
    /// New start date.
    #[serde(default)]
    pub start_date: Option<String>,
    /// New end date.
    #[serde(default)]
    pub end_date: Option<String>,
    /// New notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to create a new shift under an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShiftRequest {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Start of shift, `HH:MM`.
    pub start_time: String,
    /// End of shift, `HH:MM`.
    pub end_time: String,
    /// Initial operator slots.
    #[serde(default)]
    pub operator_ids: Vec<String>,
    /// Service category.
    #[serde(default)]
    pub activity_type: Option<ActivityType>,
    /// Team leader; must occupy a slot or is dropped.
    #[serde(default)]
    pub team_leader_id: Option<String>,
    /// Target slot count.
    pub required_operators: u32,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Unpaid pause, in hours.
    #[serde(default)]
    pub pause_hours: Option<f64>,
}

/// Request to append operators to a shift's slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignOperatorsRequest {
    /// Operators to append.
    pub operator_ids: Vec<String>,
}

/// Request to set one slot of a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOperatorSlotRequest {
    /// The slot index to set.
    pub slot_index: usize,
    /// The operator to place, or blank to open the slot.
    #[serde(default)]
    pub operator_id: String,
}

/// Request to swap one operator for another across a shift's slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOperatorRequest {
    /// The operator to remove.
    pub old_operator_id: String,
    /// The operator to place instead.
    pub new_operator_id: String,
}

/// Request to designate a shift's team leader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTeamLeaderRequest {
    /// The operator to designate; blank clears the designation.
    #[serde(default)]
    pub operator_id: String,
}

/// Request to update a shift's start and/or end time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftTimeRequest {
    /// New start time, `HH:MM`.
    #[serde(default)]
    pub start_time: Option<String>,
    /// New end time, `HH:MM`.
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Request to move a shift to another date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftDateRequest {
    /// New date, `YYYY-MM-DD`.
    pub date: String,
}

/// Request to change a shift's service category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftActivityTypeRequest {
    /// New service category; absent clears it.
    #[serde(default)]
    pub activity_type: Option<ActivityType>,
}

/// Request to change a shift's pause hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftPauseRequest {
    /// New unpaid pause, in hours.
    pub pause_hours: f64,
}

/// Request to rewrite a shift's notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftNotesRequest {
    /// New notes.
    pub notes: String,
}

/// Request to create a checklist task on an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task title.
    pub title: String,
}

/// Request to update a checklist task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New completed flag.
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Request to replace an operator's notification preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferencesRequest {
    /// The new preference flags.
    #[serde(flatten)]
    pub preferences: NotificationPreferences,
}

/// Request to register an operator's push subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPushSubscriptionRequest {
    /// The subscription credentials.
    #[serde(flatten)]
    pub subscription: PushSubscription,
}

/// Query parameters for the flattened per-slot roster of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRowsQuery {
    /// Sort column: `date`, `startTime`, `endTime`, `activity`, `operator`,
    /// or `hours`. Defaults to `date`.
    #[serde(default)]
    pub sort: Option<String>,
    /// Sort direction: `asc` or `desc`. Defaults to `asc`.
    #[serde(default)]
    pub direction: Option<String>,
}
