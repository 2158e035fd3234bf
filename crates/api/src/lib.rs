// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Presidio scheduling system.
//!
//! Plain function handlers over the application context. The HTTP layer
//! deserializes requests into the DTOs here, calls a handler, and maps
//! [`ApiError`] onto response statuses. No handler touches the transport.

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

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use handlers::{
    add_brand_address, add_contact_person, assign_operators, create_brand, create_client,
    create_event, create_operator, create_shift, create_task, delete_brand, delete_client,
    delete_operator, delete_shift, delete_task, get_brand, get_client, get_event,
    get_event_shift_rows, get_event_summary, get_event_totals, get_notification_preferences,
    get_operator, get_shift, get_upcoming_shifts, list_brands, list_clients, list_events,
    list_notifications, list_operators, list_shifts, list_tasks, mark_notification_read,
    remove_brand_address, remove_contact_person, remove_operator, replace_operator,
    set_operator_slot, set_push_subscription, set_team_leader, update_brand, update_brand_address,
    update_client, update_contact_person, update_event, update_notification_preferences,
    update_operator, update_shift_activity_type, update_shift_date, update_shift_notes,
    update_shift_pause_hours, update_shift_time, update_task,
};
pub use request_response::{
    AssignOperatorsRequest, BrandAddressRequest, ContactPersonRequest, CreateBrandRequest,
    CreateClientRequest, CreateEventRequest, CreateOperatorRequest, CreateShiftRequest,
    CreateTaskRequest, ReplaceOperatorRequest, SetOperatorSlotRequest, SetPushSubscriptionRequest,
    SetTeamLeaderRequest, ShiftRowsQuery, UpdateBrandRequest, UpdateClientRequest,
    UpdateContactPersonRequest, UpdateEventRequest, UpdateOperatorRequest,
    UpdatePreferencesRequest, UpdateShiftActivityTypeRequest, UpdateShiftDateRequest,
    UpdateShiftNotesRequest, UpdateShiftPauseRequest, UpdateShiftTimeRequest, UpdateTaskRequest,
};
