// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::hours;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An operator's availability state.
///
/// Serialized with the legacy Italian labels so snapshots written by the
/// previous system remain readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Availability {
    /// Available for assignment.
    #[default]
    #[serde(rename = "Disponibile")]
    Available,
    /// Currently engaged on another assignment.
    #[serde(rename = "Occupato")]
    Busy,
    /// On leave.
    #[serde(rename = "In ferie")]
    OnLeave,
}

impl Availability {
    /// Returns the legacy label for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Disponibile",
            Self::Busy => "Occupato",
            Self::OnLeave => "In ferie",
        }
    }
}

impl FromStr for Availability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disponibile" => Ok(Self::Available),
            "Occupato" => Ok(Self::Busy),
            "In ferie" => Ok(Self::OnLeave),
            _ => Err(DomainError::InvalidAvailability(s.to_string())),
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed enumeration of service categories a shift may be booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    /// Doorman service.
    #[serde(rename = "doorman")]
    Doorman,
    /// Continuous night and day guard post.
    #[serde(rename = "presidio notturno e diurno")]
    PresidioNotturnoEDiurno,
    /// Night guard post.
    #[serde(rename = "presidio notturno")]
    PresidioNotturno,
    /// Day guard post.
    #[serde(rename = "presidio diurno")]
    PresidioDiurno,
    /// Entrance and exit flow management.
    #[serde(rename = "gestione flussi ingresso e uscite")]
    GestioneFlussi,
    /// Photo/film shooting supervision.
    #[serde(rename = "shooting")]
    Shooting,
    /// Endorsement service.
    #[serde(rename = "endorsement")]
    Endorsement,
    /// Armed guard with vehicle.
    #[serde(rename = "GPG armata con auto")]
    GpgArmataConAuto,
    /// Armed guard without vehicle.
    #[serde(rename = "GPG armata senza auto")]
    GpgArmataSenzaAuto,
}

/// All selectable activity types, in display order.
pub const ACTIVITY_TYPES: [ActivityType; 9] = [
    ActivityType::Doorman,
    ActivityType::PresidioNotturnoEDiurno,
    ActivityType::PresidioNotturno,
    ActivityType::PresidioDiurno,
    ActivityType::GestioneFlussi,
    ActivityType::Shooting,
    ActivityType::Endorsement,
    ActivityType::GpgArmataConAuto,
    ActivityType::GpgArmataSenzaAuto,
];

impl ActivityType {
    /// Returns the display label for this activity type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Doorman => "doorman",
            Self::PresidioNotturnoEDiurno => "presidio notturno e diurno",
            Self::PresidioNotturno => "presidio notturno",
            Self::PresidioDiurno => "presidio diurno",
            Self::GestioneFlussi => "gestione flussi ingresso e uscite",
            Self::Shooting => "shooting",
            Self::Endorsement => "endorsement",
            Self::GpgArmataConAuto => "GPG armata con auto",
            Self::GpgArmataSenzaAuto => "GPG armata senza auto",
        }
    }

    /// Parses an activity type from its display label.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of the fixed categories.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "doorman" => Ok(Self::Doorman),
            "presidio notturno e diurno" => Ok(Self::PresidioNotturnoEDiurno),
            "presidio notturno" => Ok(Self::PresidioNotturno),
            "presidio diurno" => Ok(Self::PresidioDiurno),
            "gestione flussi ingresso e uscite" => Ok(Self::GestioneFlussi),
            "shooting" => Ok(Self::Shooting),
            "endorsement" => Ok(Self::Endorsement),
            "GPG armata con auto" => Ok(Self::GpgArmataConAuto),
            "GPG armata senza auto" => Ok(Self::GpgArmataSenzaAuto),
            _ => Err(DomainError::InvalidActivityType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of an operator-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    /// An operator was assigned to a shift.
    #[serde(rename = "shift_assignment")]
    Assignment,
    /// A shift the operator occupies was modified.
    #[serde(rename = "shift_update")]
    Update,
    /// A shift the operator occupied was cancelled.
    #[serde(rename = "shift_cancellation")]
    Cancellation,
}

impl NotificationKind {
    /// Returns the wire label for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assignment => "shift_assignment",
            Self::Update => "shift_update",
            Self::Cancellation => "shift_cancellation",
        }
    }
}

/// A contact person attached to a client record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPerson {
    /// Opaque unique identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
}

/// A client of the agency (the billable counterparty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Opaque unique identifier.
    pub id: String,
    /// Legal name (ragione sociale).
    pub name: String,
    /// VAT identifier (P.IVA).
    pub vat_number: String,
    /// Ordered list of contact persons.
    #[serde(default)]
    pub contact_persons: Vec<ContactPerson>,
}

/// A selectable site address belonging to a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandAddress {
    /// Opaque unique identifier.
    pub id: String,
    /// Free-text address.
    pub address: String,
}

/// A brand owned by a client. Its addresses are the selectable site
/// locations for events tied to that brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Opaque unique identifier.
    pub id: String,
    /// Brand name.
    pub name: String,
    /// The owning client.
    pub client_id: String,
    /// Selectable site addresses.
    #[serde(default)]
    pub addresses: Vec<BrandAddress>,
}

/// A push-subscription credential pair for an operator's device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushSubscription {
    /// The push-service endpoint URL.
    pub endpoint: String,
    /// The `p256dh` public key.
    pub p256dh: String,
    /// The auth secret.
    pub auth: String,
}

/// Per-operator switches gating each notification kind.
///
/// An absent preference set is treated the same as every switch off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    /// Notify on shift assignment.
    pub shift_assignment: bool,
    /// Notify on shift modification.
    pub shift_updates: bool,
    /// Notify on shift cancellation.
    pub shift_cancellation: bool,
}

/// An in-app notification record belonging to one operator.
///
/// Created only by the dispatcher; mutated only to flip `read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Opaque unique identifier.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Message body (may span multiple lines).
    pub message: String,
    /// The notification kind.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Whether the operator has read this notification.
    pub read: bool,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// The originating shift, when still known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_id: Option<String>,
    /// The originating event, when still known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

/// A security operator (staff member).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    /// Opaque unique identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Free-text role (e.g. "Guardia", "Supervisore").
    pub role: String,
    /// Current availability state.
    #[serde(default)]
    pub availability: Availability,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Italian fiscal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiscal_code: Option<String>,
    /// Photo reference (path or URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// In-app notifications, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<Notification>,
    /// Notification gating switches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_preferences: Option<NotificationPreferences>,
    /// Push-subscription credentials for the operator's device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_subscription: Option<PushSubscription>,
}

/// An engagement at a client site. Owns zero or more shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque unique identifier.
    pub id: String,
    /// Event title.
    pub title: String,
    /// The client this event is for.
    pub client_id: String,
    /// The brand this event is tied to.
    pub brand_id: String,
    /// Resolved site address (may be a custom override).
    pub address: String,
    /// Optional activity code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_code: Option<String>,
    /// Optional start date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Optional end date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Set when the referenced client or brand was deleted. Archived
    /// events are kept for the record but excluded from active listings.
    #[serde(default)]
    pub archived: bool,
}

/// A scheduled shift within an event.
///
/// The slot array length is the authoritative slot count;
/// `required_operators` is a target, not a cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Opaque unique identifier.
    pub id: String,
    /// The owning event.
    pub event_id: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Start of shift, wall-clock `HH:MM`.
    pub start_time: String,
    /// End of shift, wall-clock `HH:MM`. May be numerically earlier than
    /// the start time, meaning the shift crosses midnight.
    pub end_time: String,
    /// Operator slots. The empty string marks an open slot.
    #[serde(default)]
    pub operator_ids: Vec<String>,
    /// Service category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    /// Team leader; always one of the occupied slots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_leader_id: Option<String>,
    /// Target slot count.
    pub required_operators: u32,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Unpaid pause, in hours, subtracted from the gross duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_hours: Option<f64>,
}

impl Shift {
    /// Effective hours for this shift: gross duration (with overnight
    /// wraparound) minus pause hours, floored at zero.
    #[must_use]
    pub fn effective_hours(&self) -> f64 {
        hours::effective_hours(
            &self.start_time,
            &self.end_time,
            self.pause_hours.unwrap_or(0.0),
        )
    }

    /// The number of occupied (non-blank) slots.
    #[must_use]
    pub fn occupied_slots(&self) -> usize {
        hours::occupied_slots(&self.operator_ids)
    }

    /// Whether the given operator occupies a slot in this shift.
    #[must_use]
    pub fn has_operator(&self, operator_id: &str) -> bool {
        !operator_id.trim().is_empty() && self.operator_ids.iter().any(|id| id == operator_id)
    }
}

/// A checklist item attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier.
    pub id: String,
    /// The owning event.
    pub event_id: String,
    /// Task title.
    pub title: String,
    /// Whether the task is done.
    pub completed: bool,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
}
