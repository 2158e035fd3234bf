// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Reads return `ResourceNotFound` for unknown identifiers. Writes
//! validate input at this boundary, then invoke the store through the
//! application context so change events always reach the dispatcher.

use presidio::{
    AppContext, ClientPatch, EntityStore, EventPatch, EventSummary, NewEvent, NewShift,
    OperatorPatch, ShiftTotals, SortDirection, SortKey, UPCOMING_DISPLAY_LIMIT, event_shift_rows,
    event_summary, shift_totals, upcoming_shifts,
};
use presidio_domain::{
    Brand, BrandAddress, Client, ContactPerson, Event, Notification, NotificationPreferences,
    Operator, Shift, ShiftRow, Task, validate_client_fields, validate_date,
    validate_operator_fields, validate_shift_fields, validate_time,
};
use tracing::debug;

use crate::error::{ApiError, not_found, translate_domain_error};
use crate::request_response::{
    AssignOperatorsRequest, BrandAddressRequest, ContactPersonRequest, CreateBrandRequest,
    CreateClientRequest, CreateEventRequest, CreateOperatorRequest, CreateShiftRequest,
    CreateTaskRequest, ReplaceOperatorRequest, SetOperatorSlotRequest, SetPushSubscriptionRequest,
    SetTeamLeaderRequest, ShiftRowsQuery, UpdateBrandRequest, UpdateClientRequest,
    UpdateContactPersonRequest, UpdateEventRequest, UpdateOperatorRequest,
    UpdatePreferencesRequest, UpdateShiftActivityTypeRequest, UpdateShiftDateRequest,
    UpdateShiftNotesRequest, UpdateShiftPauseRequest, UpdateShiftTimeRequest, UpdateTaskRequest,
};

fn require_non_blank(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("'{field}' must not be blank"),
        });
    }
    Ok(())
}

const CLIENT: &str = "Client";
const BRAND: &str = "Brand";
const OPERATOR: &str = "Operator";
const EVENT: &str = "Event";
const SHIFT: &str = "Shift";
const TASK: &str = "Task";
const NOTIFICATION: &str = "Notification";

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

/// Lists all clients, newest first.
#[must_use]
pub fn list_clients(context: &AppContext) -> Vec<Client> {
    context.store().clients().to_vec()
}

/// Fetches one client.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown identifier.
pub fn get_client(context: &AppContext, id: &str) -> Result<Client, ApiError> {
    context
        .store()
        .client(id)
        .cloned()
        .ok_or_else(|| not_found(CLIENT, id))
}

/// Creates a client.
///
/// # Errors
///
/// Returns `InvalidInput` if the name or VAT number is blank.
pub fn create_client(
    context: &mut AppContext,
    request: CreateClientRequest,
) -> Result<Client, ApiError> {
    validate_client_fields(&request.name, &request.vat_number).map_err(translate_domain_error)?;
    debug!(name = %request.name, "Creating client");
    Ok(context
        .store_mut()
        .create_client(&request.name, &request.vat_number))
}

/// Partially updates a client and returns the updated record.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown identifier, `InvalidInput`
/// for a blank name or VAT number.
pub fn update_client(
    context: &mut AppContext,
    id: &str,
    request: UpdateClientRequest,
) -> Result<Client, ApiError> {
    if context.store().client(id).is_none() {
        return Err(not_found(CLIENT, id));
    }
    validate_client_fields(
        request.name.as_deref().unwrap_or("-"),
        request.vat_number.as_deref().unwrap_or("-"),
    )
    .map_err(translate_domain_error)?;
    context.store_mut().update_client(
        id,
        ClientPatch {
            name: request.name,
            vat_number: request.vat_number,
        },
    );
    get_client(context, id)
}

/// Deletes a client, cascading brand deletion and archiving dependent
/// events. Unknown identifiers are a no-op.
pub fn delete_client(context: &mut AppContext, id: &str) {
    context.store_mut().delete_client(id);
}

/// Adds a contact person to a client.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown client, `InvalidInput` for a
/// blank name.
pub fn add_contact_person(
    context: &mut AppContext,
    client_id: &str,
    request: ContactPersonRequest,
) -> Result<ContactPerson, ApiError> {
    require_non_blank("name", &request.name)?;
    context
        .store_mut()
        .add_contact_person(client_id, &request.name, &request.email, &request.phone)
        .ok_or_else(|| not_found(CLIENT, client_id))
}

/// Updates a contact person's fields and returns the updated client.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown client.
pub fn update_contact_person(
    context: &mut AppContext,
    client_id: &str,
    contact_id: &str,
    request: UpdateContactPersonRequest,
) -> Result<Client, ApiError> {
    if context.store().client(client_id).is_none() {
        return Err(not_found(CLIENT, client_id));
    }
    context.store_mut().update_contact_person(
        client_id,
        contact_id,
        request.name.as_deref(),
        request.email.as_deref(),
        request.phone.as_deref(),
    );
    get_client(context, client_id)
}

/// Removes a contact person from a client.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown client.
pub fn remove_contact_person(
    context: &mut AppContext,
    client_id: &str,
    contact_id: &str,
) -> Result<(), ApiError> {
    if context.store().client(client_id).is_none() {
        return Err(not_found(CLIENT, client_id));
    }
    context
        .store_mut()
        .remove_contact_person(client_id, contact_id);
    Ok(())
}

// ---------------------------------------------------------------------------
// Brands
// ---------------------------------------------------------------------------

/// Lists all brands, or only those of one client.
#[must_use]
pub fn list_brands(context: &AppContext, client_id: Option<&str>) -> Vec<Brand> {
    client_id.map_or_else(
        || context.store().brands().to_vec(),
        |client_id| {
            context
                .store()
                .brands_by_client(client_id)
                .into_iter()
                .cloned()
                .collect()
        },
    )
}

/// Fetches one brand.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown identifier.
pub fn get_brand(context: &AppContext, id: &str) -> Result<Brand, ApiError> {
    context
        .store()
        .brand(id)
        .cloned()
        .ok_or_else(|| not_found(BRAND, id))
}

/// Creates a brand under an existing client.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank name, `ResourceNotFound` for an
/// unknown client.
pub fn create_brand(
    context: &mut AppContext,
    request: CreateBrandRequest,
) -> Result<Brand, ApiError> {
    require_non_blank("name", &request.name)?;
    if context.store().client(&request.client_id).is_none() {
        return Err(not_found(CLIENT, &request.client_id));
    }
    Ok(context
        .store_mut()
        .create_brand(&request.name, &request.client_id))
}

/// Renames a brand and returns the updated record.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown identifier, `InvalidInput`
/// for a blank name.
pub fn update_brand(
    context: &mut AppContext,
    id: &str,
    request: UpdateBrandRequest,
) -> Result<Brand, ApiError> {
    require_non_blank("name", &request.name)?;
    if context.store().brand(id).is_none() {
        return Err(not_found(BRAND, id));
    }
    context.store_mut().update_brand(id, &request.name);
    get_brand(context, id)
}

/// Deletes a brand, archiving dependent events. Unknown identifiers are a
/// no-op.
pub fn delete_brand(context: &mut AppContext, id: &str) {
    context.store_mut().delete_brand(id);
}

/// Adds a site address to a brand.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown brand.
pub fn add_brand_address(
    context: &mut AppContext,
    brand_id: &str,
    request: BrandAddressRequest,
) -> Result<BrandAddress, ApiError> {
    context
        .store_mut()
        .add_brand_address(brand_id, &request.address)
        .ok_or_else(|| not_found(BRAND, brand_id))
}

/// Rewrites one of a brand's site addresses and returns the updated brand.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown brand.
pub fn update_brand_address(
    context: &mut AppContext,
    brand_id: &str,
    address_id: &str,
    request: BrandAddressRequest,
) -> Result<Brand, ApiError> {
    if context.store().brand(brand_id).is_none() {
        return Err(not_found(BRAND, brand_id));
    }
    context
        .store_mut()
        .update_brand_address(brand_id, address_id, &request.address);
    get_brand(context, brand_id)
}

/// Removes a site address from a brand.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown brand.
pub fn remove_brand_address(
    context: &mut AppContext,
    brand_id: &str,
    address_id: &str,
) -> Result<(), ApiError> {
    if context.store().brand(brand_id).is_none() {
        return Err(not_found(BRAND, brand_id));
    }
    context
        .store_mut()
        .remove_brand_address(brand_id, address_id);
    Ok(())
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

/// Lists all operators, newest first.
#[must_use]
pub fn list_operators(context: &AppContext) -> Vec<Operator> {
    context.store().operators().to_vec()
}

/// Fetches one operator.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown identifier.
pub fn get_operator(context: &AppContext, id: &str) -> Result<Operator, ApiError> {
    context
        .store()
        .operator(id)
        .cloned()
        .ok_or_else(|| not_found(OPERATOR, id))
}

/// Creates an operator.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank name.
pub fn create_operator(
    context: &mut AppContext,
    request: CreateOperatorRequest,
) -> Result<Operator, ApiError> {
    validate_operator_fields(&request.name).map_err(translate_domain_error)?;
    debug!(name = %request.name, "Creating operator");
    Ok(context
        .store_mut()
        .create_operator(&request.name, &request.role, request.availability))
}

/// Partially updates an operator and returns the updated record.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown identifier, `InvalidInput`
/// for a blank name.
pub fn update_operator(
    context: &mut AppContext,
    id: &str,
    request: UpdateOperatorRequest,
) -> Result<Operator, ApiError> {
    if context.store().operator(id).is_none() {
        return Err(not_found(OPERATOR, id));
    }
    validate_operator_fields(request.name.as_deref().unwrap_or("-"))
        .map_err(translate_domain_error)?;
    context.store_mut().update_operator(
        id,
        OperatorPatch {
            name: request.name,
            role: request.role,
            availability: request.availability,
            phone: request.phone,
            email: request.email,
            fiscal_code: request.fiscal_code,
            photo: request.photo,
        },
    );
    get_operator(context, id)
}

/// Deletes an operator, opening every slot it occupied. Unknown
/// identifiers are a no-op.
pub fn delete_operator(context: &mut AppContext, id: &str) {
    context.store_mut().delete_operator(id);
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Lists all events, newest first, archived included.
#[must_use]
pub fn list_events(context: &AppContext) -> Vec<Event> {
    context.store().events().to_vec()
}

/// Fetches one event.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown identifier.
pub fn get_event(context: &AppContext, id: &str) -> Result<Event, ApiError> {
    context
        .store()
        .event(id)
        .cloned()
        .ok_or_else(|| not_found(EVENT, id))
}

/// Creates an event under an existing client/brand pair.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank title or malformed dates,
/// `ResourceNotFound` for an unknown client or brand.
pub fn create_event(
    context: &mut AppContext,
    request: CreateEventRequest,
) -> Result<Event, ApiError> {
    require_non_blank("title", &request.title)?;
    if let Some(date) = request.start_date.as_deref() {
        validate_date(date).map_err(translate_domain_error)?;
    }
    if let Some(date) = request.end_date.as_deref() {
        validate_date(date).map_err(translate_domain_error)?;
    }
    if context.store().client(&request.client_id).is_none() {
        return Err(not_found(CLIENT, &request.client_id));
    }
    if context.store().brand(&request.brand_id).is_none() {
        return Err(not_found(BRAND, &request.brand_id));
    }
    debug!(title = %request.title, "Creating event");
    Ok(context.store_mut().create_event(NewEvent {
        title: request.title,
        client_id: request.client_id,
        brand_id: request.brand_id,
        address: request.address,
        activity_code: request.activity_code,
        start_date: request.start_date,
        end_date: request.end_date,
        notes: request.notes,
    }))
}

/// Partially updates an event and returns the updated record.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown identifier, `InvalidInput`
/// for malformed dates.
pub fn update_event(
    context: &mut AppContext,
    id: &str,
    request: UpdateEventRequest,
) -> Result<Event, ApiError> {
    if context.store().event(id).is_none() {
        return Err(not_found(EVENT, id));
    }
    if let Some(date) = request.start_date.as_deref() {
        validate_date(date).map_err(translate_domain_error)?;
    }
    if let Some(date) = request.end_date.as_deref() {
        validate_date(date).map_err(translate_domain_error)?;
    }
    context.store_mut().update_event(
        id,
        EventPatch {
            title: request.title,
            address: request.address,
            activity_code: request.activity_code,
            start_date: request.start_date,
            end_date: request.end_date,
            notes: request.notes,
        },
    );
    get_event(context, id)
}

// ---------------------------------------------------------------------------
// Shifts
// ---------------------------------------------------------------------------

/// Lists an event's shifts.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown event.
pub fn list_shifts(context: &AppContext, event_id: &str) -> Result<Vec<Shift>, ApiError> {
    if context.store().event(event_id).is_none() {
        return Err(not_found(EVENT, event_id));
    }
    Ok(context
        .store()
        .shifts_by_event(event_id)
        .into_iter()
        .cloned()
        .collect())
}

/// Fetches one shift.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown identifier.
pub fn get_shift(context: &AppContext, id: &str) -> Result<Shift, ApiError> {
    context
        .store()
        .shift(id)
        .cloned()
        .ok_or_else(|| not_found(SHIFT, id))
}

/// Creates a shift under an existing event, notifying operators occupying
/// its initial slots.
///
/// # Errors
///
/// Returns `InvalidInput` for malformed timing fields, `ResourceNotFound`
/// for an unknown event.
pub fn create_shift(
    context: &mut AppContext,
    event_id: &str,
    request: CreateShiftRequest,
) -> Result<Shift, ApiError> {
    validate_shift_fields(
        &request.date,
        &request.start_time,
        &request.end_time,
        request.pause_hours.unwrap_or(0.0),
        request.required_operators,
    )
    .map_err(translate_domain_error)?;
    if context.store().event(event_id).is_none() {
        return Err(not_found(EVENT, event_id));
    }
    debug!(event_id = %event_id, date = %request.date, "Creating shift");
    Ok(context.create_shift(NewShift {
        event_id: event_id.to_string(),
        date: request.date,
        start_time: request.start_time,
        end_time: request.end_time,
        operator_ids: request.operator_ids,
        activity_type: request.activity_type,
        team_leader_id: request.team_leader_id,
        required_operators: request.required_operators,
        notes: request.notes,
        pause_hours: request.pause_hours,
    }))
}

/// Deletes a shift, notifying the operators who occupied it. Unknown
/// identifiers are a no-op.
pub fn delete_shift(context: &mut AppContext, id: &str) {
    context.delete_shift(id);
}

/// Appends operators to a shift's slots.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift.
pub fn assign_operators(
    context: &mut AppContext,
    shift_id: &str,
    request: AssignOperatorsRequest,
) -> Result<Shift, ApiError> {
    if context.store().shift(shift_id).is_none() {
        return Err(not_found(SHIFT, shift_id));
    }
    context.assign_operators(shift_id, &request.operator_ids);
    get_shift(context, shift_id)
}

/// Sets one slot of a shift.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift.
pub fn set_operator_slot(
    context: &mut AppContext,
    shift_id: &str,
    request: SetOperatorSlotRequest,
) -> Result<Shift, ApiError> {
    if context.store().shift(shift_id).is_none() {
        return Err(not_found(SHIFT, shift_id));
    }
    context.set_operator_slot(shift_id, request.slot_index, &request.operator_id);
    get_shift(context, shift_id)
}

/// Removes an operator from a shift's slots.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift.
pub fn remove_operator(
    context: &mut AppContext,
    shift_id: &str,
    operator_id: &str,
) -> Result<Shift, ApiError> {
    if context.store().shift(shift_id).is_none() {
        return Err(not_found(SHIFT, shift_id));
    }
    context.remove_operator(shift_id, operator_id);
    get_shift(context, shift_id)
}

/// Swaps one operator for another across a shift's slots.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift.
pub fn replace_operator(
    context: &mut AppContext,
    shift_id: &str,
    request: ReplaceOperatorRequest,
) -> Result<Shift, ApiError> {
    if context.store().shift(shift_id).is_none() {
        return Err(not_found(SHIFT, shift_id));
    }
    context.replace_operator(shift_id, &request.old_operator_id, &request.new_operator_id);
    get_shift(context, shift_id)
}

/// Designates a shift's team leader; a designee not occupying a slot
/// clears the designation instead.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift.
pub fn set_team_leader(
    context: &mut AppContext,
    shift_id: &str,
    request: SetTeamLeaderRequest,
) -> Result<Shift, ApiError> {
    if context.store().shift(shift_id).is_none() {
        return Err(not_found(SHIFT, shift_id));
    }
    context
        .store_mut()
        .set_team_leader(shift_id, &request.operator_id);
    get_shift(context, shift_id)
}

/// Updates a shift's start and/or end time.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift, `InvalidInput` for a
/// malformed time.
pub fn update_shift_time(
    context: &mut AppContext,
    shift_id: &str,
    request: UpdateShiftTimeRequest,
) -> Result<Shift, ApiError> {
    if let Some(start_time) = request.start_time.as_deref() {
        validate_time(start_time).map_err(translate_domain_error)?;
    }
    if let Some(end_time) = request.end_time.as_deref() {
        validate_time(end_time).map_err(translate_domain_error)?;
    }
    if context.store().shift(shift_id).is_none() {
        return Err(not_found(SHIFT, shift_id));
    }
    context.update_shift_time(
        shift_id,
        request.start_time.as_deref(),
        request.end_time.as_deref(),
    );
    get_shift(context, shift_id)
}

/// Moves a shift to another date.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift, `InvalidInput` for a
/// malformed date.
pub fn update_shift_date(
    context: &mut AppContext,
    shift_id: &str,
    request: UpdateShiftDateRequest,
) -> Result<Shift, ApiError> {
    validate_date(&request.date).map_err(translate_domain_error)?;
    if context.store().shift(shift_id).is_none() {
        return Err(not_found(SHIFT, shift_id));
    }
    context.update_shift_date(shift_id, &request.date);
    get_shift(context, shift_id)
}

/// Changes a shift's service category.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift.
pub fn update_shift_activity_type(
    context: &mut AppContext,
    shift_id: &str,
    request: UpdateShiftActivityTypeRequest,
) -> Result<Shift, ApiError> {
    if context.store().shift(shift_id).is_none() {
        return Err(not_found(SHIFT, shift_id));
    }
    context.update_shift_activity_type(shift_id, request.activity_type);
    get_shift(context, shift_id)
}

/// Changes a shift's pause hours.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift, `InvalidInput` for a
/// pause outside `[0, 24]`.
pub fn update_shift_pause_hours(
    context: &mut AppContext,
    shift_id: &str,
    request: UpdateShiftPauseRequest,
) -> Result<Shift, ApiError> {
    if !request.pause_hours.is_finite() || !(0.0..=24.0).contains(&request.pause_hours) {
        return Err(translate_domain_error(
            presidio_domain::DomainError::InvalidPauseHours(request.pause_hours),
        ));
    }
    if context.store().shift(shift_id).is_none() {
        return Err(not_found(SHIFT, shift_id));
    }
    context.update_shift_pause_hours(shift_id, request.pause_hours);
    get_shift(context, shift_id)
}

/// Rewrites a shift's notes. Notes changes do not notify operators.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift.
pub fn update_shift_notes(
    context: &mut AppContext,
    shift_id: &str,
    request: UpdateShiftNotesRequest,
) -> Result<Shift, ApiError> {
    if context.store().shift(shift_id).is_none() {
        return Err(not_found(SHIFT, shift_id));
    }
    context.store_mut().update_shift_notes(shift_id, &request.notes);
    get_shift(context, shift_id)
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Lists an event's checklist tasks, newest first.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown event.
pub fn list_tasks(context: &AppContext, event_id: &str) -> Result<Vec<Task>, ApiError> {
    if context.store().event(event_id).is_none() {
        return Err(not_found(EVENT, event_id));
    }
    Ok(context
        .store()
        .tasks_by_event(event_id)
        .into_iter()
        .cloned()
        .collect())
}

/// Creates a checklist task on an event.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown event, `InvalidInput` for a
/// blank title.
pub fn create_task(
    context: &mut AppContext,
    event_id: &str,
    request: CreateTaskRequest,
) -> Result<Task, ApiError> {
    require_non_blank("title", &request.title)?;
    if context.store().event(event_id).is_none() {
        return Err(not_found(EVENT, event_id));
    }
    Ok(context.store_mut().create_task(event_id, &request.title))
}

/// Updates a checklist task's title and/or completed flag.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown task.
pub fn update_task(
    context: &mut AppContext,
    id: &str,
    request: UpdateTaskRequest,
) -> Result<Task, ApiError> {
    if context.store().task(id).is_none() {
        return Err(not_found(TASK, id));
    }
    context
        .store_mut()
        .update_task(id, request.title.as_deref(), request.completed);
    context
        .store()
        .task(id)
        .cloned()
        .ok_or_else(|| not_found(TASK, id))
}

/// Deletes a checklist task. Unknown identifiers are a no-op.
pub fn delete_task(context: &mut AppContext, id: &str) {
    context.store_mut().delete_task(id);
}

// ---------------------------------------------------------------------------
// Notifications & preferences
// ---------------------------------------------------------------------------

/// An operator's notification records, oldest first.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown operator.
pub fn list_notifications(
    context: &AppContext,
    operator_id: &str,
) -> Result<Vec<Notification>, ApiError> {
    if context.store().operator(operator_id).is_none() {
        return Err(not_found(OPERATOR, operator_id));
    }
    Ok(context.store().operator_notifications(operator_id).to_vec())
}

/// Flips one notification's read flag to true.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown operator or notification.
pub fn mark_notification_read(
    context: &mut AppContext,
    operator_id: &str,
    notification_id: &str,
) -> Result<(), ApiError> {
    if context.store().operator(operator_id).is_none() {
        return Err(not_found(OPERATOR, operator_id));
    }
    if !context
        .store()
        .operator_notifications(operator_id)
        .iter()
        .any(|notification| notification.id == notification_id)
    {
        return Err(not_found(NOTIFICATION, notification_id));
    }
    context
        .store_mut()
        .mark_notification_read(operator_id, notification_id);
    Ok(())
}

/// An operator's notification preferences; defaults (all off) when none
/// were ever stored.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown operator.
pub fn get_notification_preferences(
    context: &AppContext,
    operator_id: &str,
) -> Result<NotificationPreferences, ApiError> {
    if context.store().operator(operator_id).is_none() {
        return Err(not_found(OPERATOR, operator_id));
    }
    Ok(context
        .store()
        .notification_preferences(operator_id)
        .unwrap_or_default())
}

/// Replaces an operator's notification preferences.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown operator.
pub fn update_notification_preferences(
    context: &mut AppContext,
    operator_id: &str,
    request: UpdatePreferencesRequest,
) -> Result<NotificationPreferences, ApiError> {
    if context.store().operator(operator_id).is_none() {
        return Err(not_found(OPERATOR, operator_id));
    }
    context
        .store_mut()
        .update_notification_preferences(operator_id, request.preferences);
    Ok(request.preferences)
}

/// Registers an operator's push-subscription credentials.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown operator.
pub fn set_push_subscription(
    context: &mut AppContext,
    operator_id: &str,
    request: SetPushSubscriptionRequest,
) -> Result<(), ApiError> {
    if context.store().operator(operator_id).is_none() {
        return Err(not_found(OPERATOR, operator_id));
    }
    context
        .store_mut()
        .set_push_subscription(operator_id, request.subscription);
    Ok(())
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

fn parse_sort_key(value: Option<&str>) -> Result<SortKey, ApiError> {
    match value.unwrap_or("date") {
        "date" => Ok(SortKey::Date),
        "startTime" => Ok(SortKey::StartTime),
        "endTime" => Ok(SortKey::EndTime),
        "activity" => Ok(SortKey::Activity),
        "operator" => Ok(SortKey::Operator),
        "hours" => Ok(SortKey::Hours),
        other => Err(ApiError::InvalidInput {
            field: String::from("sort"),
            message: format!("Unknown sort key '{other}'"),
        }),
    }
}

fn parse_sort_direction(value: Option<&str>) -> Result<SortDirection, ApiError> {
    match value.unwrap_or("asc") {
        "asc" => Ok(SortDirection::Ascending),
        "desc" => Ok(SortDirection::Descending),
        other => Err(ApiError::InvalidInput {
            field: String::from("direction"),
            message: format!("Unknown sort direction '{other}'"),
        }),
    }
}

/// The flattened per-slot roster of an event, sorted per the query.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown event, `InvalidInput` for an
/// unknown sort key or direction.
pub fn get_event_shift_rows(
    context: &AppContext,
    event_id: &str,
    query: &ShiftRowsQuery,
) -> Result<Vec<ShiftRow>, ApiError> {
    if context.store().event(event_id).is_none() {
        return Err(not_found(EVENT, event_id));
    }
    let key: SortKey = parse_sort_key(query.sort.as_deref())?;
    let direction: SortDirection = parse_sort_direction(query.direction.as_deref())?;
    Ok(event_shift_rows(context.store(), event_id, key, direction))
}

/// An event joined with client/brand names, staffing totals, and task
/// counts.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown event.
pub fn get_event_summary(context: &AppContext, event_id: &str) -> Result<EventSummary, ApiError> {
    event_summary(context.store(), event_id).ok_or_else(|| not_found(EVENT, event_id))
}

/// Staffing totals over an event's shifts.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown event.
pub fn get_event_totals(context: &AppContext, event_id: &str) -> Result<ShiftTotals, ApiError> {
    let store: &EntityStore = context.store();
    if store.event(event_id).is_none() {
        return Err(not_found(EVENT, event_id));
    }
    let shifts: Vec<Shift> = store
        .shifts_by_event(event_id)
        .into_iter()
        .cloned()
        .collect();
    Ok(shift_totals(&shifts))
}

/// An operator's next shifts, today or later, capped for dashboard
/// display.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown operator.
pub fn get_upcoming_shifts(
    context: &AppContext,
    operator_id: &str,
) -> Result<Vec<Shift>, ApiError> {
    if context.store().operator(operator_id).is_none() {
        return Err(not_found(OPERATOR, operator_id));
    }
    Ok(upcoming_shifts(
        context.store(),
        operator_id,
        UPCOMING_DISPLAY_LIMIT,
    ))
}
