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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use presidio::{AppContext, EventSummary, LoggingPushTransport, ShiftTotals, StoreSnapshot, SystemClock};
use presidio_api::{
    ApiError, AssignOperatorsRequest, BrandAddressRequest, ContactPersonRequest,
    CreateBrandRequest, CreateClientRequest, CreateEventRequest, CreateOperatorRequest,
    CreateShiftRequest, CreateTaskRequest, ReplaceOperatorRequest, SetOperatorSlotRequest,
    SetPushSubscriptionRequest, SetTeamLeaderRequest, ShiftRowsQuery, UpdateBrandRequest,
    UpdateClientRequest, UpdateContactPersonRequest, UpdateEventRequest, UpdateOperatorRequest,
    UpdatePreferencesRequest, UpdateShiftActivityTypeRequest, UpdateShiftDateRequest,
    UpdateShiftNotesRequest, UpdateShiftPauseRequest, UpdateShiftTimeRequest, UpdateTaskRequest,
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
use presidio_domain::{
    Brand, BrandAddress, Client, ContactPerson, Event, Notification, NotificationPreferences,
    Operator, Shift, ShiftRow, Task,
};
use presidio_persistence::{Persistence, PersistenceError};

/// Presidio Server - HTTP server for the Presidio scheduling system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The in-memory entity store and the snapshot persistence layer are each
/// wrapped in a Mutex to allow safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The application context holding the entity store and dispatcher.
    context: Arc<Mutex<AppContext>>,
    /// The persistence layer for collection snapshots.
    persistence: Arc<Mutex<Persistence>>,
}

/// Query parameters for the brand list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrandListQuery {
    /// Restrict the listing to one client's brands.
    client_id: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Writes the current store snapshot through the persistence layer.
///
/// A flush failure is logged but never fails the request that triggered
/// it; the in-memory store remains authoritative.
async fn flush_snapshot(app_state: &AppState, context: &AppContext) {
    let snapshot: StoreSnapshot = context.store().snapshot();
    let mut persistence = app_state.persistence.lock().await;
    if let Err(err) = persistence.save_snapshot(&snapshot) {
        error!("Failed to persist snapshot: {err}");
    }
}

// ---------------------------------------------------------------------------
// Client handlers
// ---------------------------------------------------------------------------

/// Handler for GET `/clients`.
async fn handle_list_clients(AxumState(app_state): AxumState<AppState>) -> Json<Vec<Client>> {
    let context = app_state.context.lock().await;
    Json(list_clients(&context))
}

/// Handler for POST `/clients`.
async fn handle_create_client(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateClientRequest>,
) -> Result<Json<Client>, HttpError> {
    info!(name = %req.name, "Handling create_client request");
    let mut context = app_state.context.lock().await;
    let client: Client = create_client(&mut context, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(client))
}

/// Handler for GET `/clients/{id}`.
async fn handle_get_client(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Client>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(get_client(&context, &id)?))
}

/// Handler for PUT `/clients/{id}`.
async fn handle_update_client(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateClientRequest>,
) -> Result<Json<Client>, HttpError> {
    let mut context = app_state.context.lock().await;
    let client: Client = update_client(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(client))
}

/// Handler for DELETE `/clients/{id}`.
async fn handle_delete_client(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    info!(client_id = %id, "Handling delete_client request");
    let mut context = app_state.context.lock().await;
    delete_client(&mut context, &id);
    flush_snapshot(&app_state, &context).await;
    StatusCode::NO_CONTENT
}

/// Handler for POST `/clients/{id}/contacts`.
async fn handle_add_contact_person(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ContactPersonRequest>,
) -> Result<Json<ContactPerson>, HttpError> {
    let mut context = app_state.context.lock().await;
    let contact: ContactPerson = add_contact_person(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(contact))
}

/// Handler for PUT `/clients/{id}/contacts/{contact_id}`.
async fn handle_update_contact_person(
    AxumState(app_state): AxumState<AppState>,
    Path((id, contact_id)): Path<(String, String)>,
    Json(req): Json<UpdateContactPersonRequest>,
) -> Result<Json<Client>, HttpError> {
    let mut context = app_state.context.lock().await;
    let client: Client = update_contact_person(&mut context, &id, &contact_id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(client))
}

/// Handler for DELETE `/clients/{id}/contacts/{contact_id}`.
async fn handle_remove_contact_person(
    AxumState(app_state): AxumState<AppState>,
    Path((id, contact_id)): Path<(String, String)>,
) -> Result<StatusCode, HttpError> {
    let mut context = app_state.context.lock().await;
    remove_contact_person(&mut context, &id, &contact_id)?;
    flush_snapshot(&app_state, &context).await;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Brand handlers
// ---------------------------------------------------------------------------

/// Handler for GET `/brands`.
async fn handle_list_brands(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<BrandListQuery>,
) -> Json<Vec<Brand>> {
    let context = app_state.context.lock().await;
    Json(list_brands(&context, query.client_id.as_deref()))
}

/// Handler for POST `/brands`.
async fn handle_create_brand(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBrandRequest>,
) -> Result<Json<Brand>, HttpError> {
    info!(name = %req.name, client_id = %req.client_id, "Handling create_brand request");
    let mut context = app_state.context.lock().await;
    let brand: Brand = create_brand(&mut context, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(brand))
}

/// Handler for GET `/brands/{id}`.
async fn handle_get_brand(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Brand>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(get_brand(&context, &id)?))
}

/// Handler for PUT `/brands/{id}`.
async fn handle_update_brand(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateBrandRequest>,
) -> Result<Json<Brand>, HttpError> {
    let mut context = app_state.context.lock().await;
    let brand: Brand = update_brand(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(brand))
}

/// Handler for DELETE `/brands/{id}`.
async fn handle_delete_brand(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    info!(brand_id = %id, "Handling delete_brand request");
    let mut context = app_state.context.lock().await;
    delete_brand(&mut context, &id);
    flush_snapshot(&app_state, &context).await;
    StatusCode::NO_CONTENT
}

/// Handler for POST `/brands/{id}/addresses`.
async fn handle_add_brand_address(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<BrandAddressRequest>,
) -> Result<Json<BrandAddress>, HttpError> {
    let mut context = app_state.context.lock().await;
    let address: BrandAddress = add_brand_address(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(address))
}

/// Handler for PUT `/brands/{id}/addresses/{address_id}`.
async fn handle_update_brand_address(
    AxumState(app_state): AxumState<AppState>,
    Path((id, address_id)): Path<(String, String)>,
    Json(req): Json<BrandAddressRequest>,
) -> Result<Json<Brand>, HttpError> {
    let mut context = app_state.context.lock().await;
    let brand: Brand = update_brand_address(&mut context, &id, &address_id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(brand))
}

/// Handler for DELETE `/brands/{id}/addresses/{address_id}`.
async fn handle_remove_brand_address(
    AxumState(app_state): AxumState<AppState>,
    Path((id, address_id)): Path<(String, String)>,
) -> Result<StatusCode, HttpError> {
    let mut context = app_state.context.lock().await;
    remove_brand_address(&mut context, &id, &address_id)?;
    flush_snapshot(&app_state, &context).await;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Operator handlers
// ---------------------------------------------------------------------------

/// Handler for GET `/operators`.
async fn handle_list_operators(AxumState(app_state): AxumState<AppState>) -> Json<Vec<Operator>> {
    let context = app_state.context.lock().await;
    Json(list_operators(&context))
}

/// Handler for POST `/operators`.
async fn handle_create_operator(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateOperatorRequest>,
) -> Result<Json<Operator>, HttpError> {
    info!(name = %req.name, "Handling create_operator request");
    let mut context = app_state.context.lock().await;
    let operator: Operator = create_operator(&mut context, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(operator))
}

/// Handler for GET `/operators/{id}`.
async fn handle_get_operator(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Operator>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(get_operator(&context, &id)?))
}

/// Handler for PUT `/operators/{id}`.
async fn handle_update_operator(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateOperatorRequest>,
) -> Result<Json<Operator>, HttpError> {
    let mut context = app_state.context.lock().await;
    let operator: Operator = update_operator(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(operator))
}

/// Handler for DELETE `/operators/{id}`.
async fn handle_delete_operator(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    info!(operator_id = %id, "Handling delete_operator request");
    let mut context = app_state.context.lock().await;
    delete_operator(&mut context, &id);
    flush_snapshot(&app_state, &context).await;
    StatusCode::NO_CONTENT
}

/// Handler for GET `/operators/{id}/notifications`.
async fn handle_list_notifications(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Notification>>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(list_notifications(&context, &id)?))
}

/// Handler for POST `/operators/{id}/notifications/{notification_id}/read`.
async fn handle_mark_notification_read(
    AxumState(app_state): AxumState<AppState>,
    Path((id, notification_id)): Path<(String, String)>,
) -> Result<StatusCode, HttpError> {
    let mut context = app_state.context.lock().await;
    mark_notification_read(&mut context, &id, &notification_id)?;
    flush_snapshot(&app_state, &context).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/operators/{id}/preferences`.
async fn handle_get_notification_preferences(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NotificationPreferences>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(get_notification_preferences(&context, &id)?))
}

/// Handler for PUT `/operators/{id}/preferences`.
async fn handle_update_notification_preferences(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePreferencesRequest>,
) -> Result<Json<NotificationPreferences>, HttpError> {
    let mut context = app_state.context.lock().await;
    let preferences: NotificationPreferences =
        update_notification_preferences(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(preferences))
}

/// Handler for POST `/operators/{id}/push-subscription`.
async fn handle_set_push_subscription(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SetPushSubscriptionRequest>,
) -> Result<StatusCode, HttpError> {
    info!(operator_id = %id, "Handling set_push_subscription request");
    let mut context = app_state.context.lock().await;
    set_push_subscription(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/operators/{id}/upcoming-shifts`.
async fn handle_get_upcoming_shifts(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Shift>>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(get_upcoming_shifts(&context, &id)?))
}

// ---------------------------------------------------------------------------
// Event handlers
// ---------------------------------------------------------------------------

/// Handler for GET `/events`.
async fn handle_list_events(AxumState(app_state): AxumState<AppState>) -> Json<Vec<Event>> {
    let context = app_state.context.lock().await;
    Json(list_events(&context))
}

/// Handler for POST `/events`.
async fn handle_create_event(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Json<Event>, HttpError> {
    info!(title = %req.title, "Handling create_event request");
    let mut context = app_state.context.lock().await;
    let event: Event = create_event(&mut context, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(event))
}

/// Handler for GET `/events/{id}`.
async fn handle_get_event(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(get_event(&context, &id)?))
}

/// Handler for PUT `/events/{id}`.
async fn handle_update_event(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<Event>, HttpError> {
    let mut context = app_state.context.lock().await;
    let event: Event = update_event(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(event))
}

/// Handler for GET `/events/{id}/shifts`.
async fn handle_list_shifts(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Shift>>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(list_shifts(&context, &id)?))
}

/// Handler for POST `/events/{id}/shifts`.
async fn handle_create_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateShiftRequest>,
) -> Result<Json<Shift>, HttpError> {
    info!(event_id = %id, date = %req.date, "Handling create_shift request");
    let mut context = app_state.context.lock().await;
    let shift: Shift = create_shift(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(shift))
}

/// Handler for GET `/events/{id}/shift-rows`.
async fn handle_get_event_shift_rows(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ShiftRowsQuery>,
) -> Result<Json<Vec<ShiftRow>>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(get_event_shift_rows(&context, &id, &query)?))
}

/// Handler for GET `/events/{id}/summary`.
async fn handle_get_event_summary(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventSummary>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(get_event_summary(&context, &id)?))
}

/// Handler for GET `/events/{id}/totals`.
async fn handle_get_event_totals(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShiftTotals>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(get_event_totals(&context, &id)?))
}

/// Handler for GET `/events/{id}/tasks`.
async fn handle_list_tasks(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Task>>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(list_tasks(&context, &id)?))
}

/// Handler for POST `/events/{id}/tasks`.
async fn handle_create_task(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<Task>, HttpError> {
    let mut context = app_state.context.lock().await;
    let task: Task = create_task(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(task))
}

// ---------------------------------------------------------------------------
// Task handlers
// ---------------------------------------------------------------------------

/// Handler for PUT `/tasks/{id}`.
async fn handle_update_task(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, HttpError> {
    let mut context = app_state.context.lock().await;
    let task: Task = update_task(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(task))
}

/// Handler for DELETE `/tasks/{id}`.
async fn handle_delete_task(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    let mut context = app_state.context.lock().await;
    delete_task(&mut context, &id);
    flush_snapshot(&app_state, &context).await;
    StatusCode::NO_CONTENT
}

// ---------------------------------------------------------------------------
// Shift handlers
// ---------------------------------------------------------------------------

/// Handler for GET `/shifts/{id}`.
async fn handle_get_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Shift>, HttpError> {
    let context = app_state.context.lock().await;
    Ok(Json(get_shift(&context, &id)?))
}

/// Handler for DELETE `/shifts/{id}`.
async fn handle_delete_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    info!(shift_id = %id, "Handling delete_shift request");
    let mut context = app_state.context.lock().await;
    delete_shift(&mut context, &id);
    flush_snapshot(&app_state, &context).await;
    StatusCode::NO_CONTENT
}

/// Handler for POST `/shifts/{id}/operators`.
async fn handle_assign_operators(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AssignOperatorsRequest>,
) -> Result<Json<Shift>, HttpError> {
    info!(shift_id = %id, count = req.operator_ids.len(), "Handling assign_operators request");
    let mut context = app_state.context.lock().await;
    let shift: Shift = assign_operators(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(shift))
}

/// Handler for DELETE `/shifts/{id}/operators/{operator_id}`.
async fn handle_remove_operator(
    AxumState(app_state): AxumState<AppState>,
    Path((id, operator_id)): Path<(String, String)>,
) -> Result<Json<Shift>, HttpError> {
    info!(shift_id = %id, operator_id = %operator_id, "Handling remove_operator request");
    let mut context = app_state.context.lock().await;
    let shift: Shift = remove_operator(&mut context, &id, &operator_id)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(shift))
}

/// Handler for PUT `/shifts/{id}/slot`.
async fn handle_set_operator_slot(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SetOperatorSlotRequest>,
) -> Result<Json<Shift>, HttpError> {
    info!(shift_id = %id, slot_index = req.slot_index, "Handling set_operator_slot request");
    let mut context = app_state.context.lock().await;
    let shift: Shift = set_operator_slot(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(shift))
}

/// Handler for POST `/shifts/{id}/replace-operator`.
async fn handle_replace_operator(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ReplaceOperatorRequest>,
) -> Result<Json<Shift>, HttpError> {
    let mut context = app_state.context.lock().await;
    let shift: Shift = replace_operator(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(shift))
}

/// Handler for PUT `/shifts/{id}/team-leader`.
async fn handle_set_team_leader(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SetTeamLeaderRequest>,
) -> Result<Json<Shift>, HttpError> {
    let mut context = app_state.context.lock().await;
    let shift: Shift = set_team_leader(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(shift))
}

/// Handler for PUT `/shifts/{id}/time`.
async fn handle_update_shift_time(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateShiftTimeRequest>,
) -> Result<Json<Shift>, HttpError> {
    let mut context = app_state.context.lock().await;
    let shift: Shift = update_shift_time(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(shift))
}

/// Handler for PUT `/shifts/{id}/date`.
async fn handle_update_shift_date(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateShiftDateRequest>,
) -> Result<Json<Shift>, HttpError> {
    let mut context = app_state.context.lock().await;
    let shift: Shift = update_shift_date(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(shift))
}

/// Handler for PUT `/shifts/{id}/activity-type`.
async fn handle_update_shift_activity_type(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateShiftActivityTypeRequest>,
) -> Result<Json<Shift>, HttpError> {
    let mut context = app_state.context.lock().await;
    let shift: Shift = update_shift_activity_type(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(shift))
}

/// Handler for PUT `/shifts/{id}/pause`.
async fn handle_update_shift_pause_hours(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateShiftPauseRequest>,
) -> Result<Json<Shift>, HttpError> {
    let mut context = app_state.context.lock().await;
    let shift: Shift = update_shift_pause_hours(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(shift))
}

/// Handler for PUT `/shifts/{id}/notes`.
async fn handle_update_shift_notes(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateShiftNotesRequest>,
) -> Result<Json<Shift>, HttpError> {
    let mut context = app_state.context.lock().await;
    let shift: Shift = update_shift_notes(&mut context, &id, req)?;
    flush_snapshot(&app_state, &context).await;
    Ok(Json(shift))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/clients", get(handle_list_clients))
        .route("/clients", post(handle_create_client))
        .route("/clients/{id}", get(handle_get_client))
        .route("/clients/{id}", put(handle_update_client))
        .route("/clients/{id}", delete(handle_delete_client))
        .route("/clients/{id}/contacts", post(handle_add_contact_person))
        .route(
            "/clients/{id}/contacts/{contact_id}",
            put(handle_update_contact_person),
        )
        .route(
            "/clients/{id}/contacts/{contact_id}",
            delete(handle_remove_contact_person),
        )
        .route("/brands", get(handle_list_brands))
        .route("/brands", post(handle_create_brand))
        .route("/brands/{id}", get(handle_get_brand))
        .route("/brands/{id}", put(handle_update_brand))
        .route("/brands/{id}", delete(handle_delete_brand))
        .route("/brands/{id}/addresses", post(handle_add_brand_address))
        .route(
            "/brands/{id}/addresses/{address_id}",
            put(handle_update_brand_address),
        )
        .route(
            "/brands/{id}/addresses/{address_id}",
            delete(handle_remove_brand_address),
        )
        .route("/operators", get(handle_list_operators))
        .route("/operators", post(handle_create_operator))
        .route("/operators/{id}", get(handle_get_operator))
        .route("/operators/{id}", put(handle_update_operator))
        .route("/operators/{id}", delete(handle_delete_operator))
        .route(
            "/operators/{id}/notifications",
            get(handle_list_notifications),
        )
        .route(
            "/operators/{id}/notifications/{notification_id}/read",
            post(handle_mark_notification_read),
        )
        .route(
            "/operators/{id}/preferences",
            get(handle_get_notification_preferences),
        )
        .route(
            "/operators/{id}/preferences",
            put(handle_update_notification_preferences),
        )
        .route(
            "/operators/{id}/push-subscription",
            post(handle_set_push_subscription),
        )
        .route(
            "/operators/{id}/upcoming-shifts",
            get(handle_get_upcoming_shifts),
        )
        .route("/events", get(handle_list_events))
        .route("/events", post(handle_create_event))
        .route("/events/{id}", get(handle_get_event))
        .route("/events/{id}", put(handle_update_event))
        .route("/events/{id}/shifts", get(handle_list_shifts))
        .route("/events/{id}/shifts", post(handle_create_shift))
        .route("/events/{id}/shift-rows", get(handle_get_event_shift_rows))
        .route("/events/{id}/summary", get(handle_get_event_summary))
        .route("/events/{id}/totals", get(handle_get_event_totals))
        .route("/events/{id}/tasks", get(handle_list_tasks))
        .route("/events/{id}/tasks", post(handle_create_task))
        .route("/tasks/{id}", put(handle_update_task))
        .route("/tasks/{id}", delete(handle_delete_task))
        .route("/shifts/{id}", get(handle_get_shift))
        .route("/shifts/{id}", delete(handle_delete_shift))
        .route("/shifts/{id}/operators", post(handle_assign_operators))
        .route(
            "/shifts/{id}/operators/{operator_id}",
            delete(handle_remove_operator),
        )
        .route("/shifts/{id}/slot", put(handle_set_operator_slot))
        .route(
            "/shifts/{id}/replace-operator",
            post(handle_replace_operator),
        )
        .route("/shifts/{id}/team-leader", put(handle_set_team_leader))
        .route("/shifts/{id}/time", put(handle_update_shift_time))
        .route("/shifts/{id}/date", put(handle_update_shift_date))
        .route(
            "/shifts/{id}/activity-type",
            put(handle_update_shift_activity_type),
        )
        .route("/shifts/{id}/pause", put(handle_update_shift_pause_hours))
        .route("/shifts/{id}/notes", put(handle_update_shift_notes))
        .with_state(app_state)
}

/// Restores the entity store from the last persisted snapshot and wraps
/// everything into shared application state.
fn build_app_state(mut persistence: Persistence) -> Result<AppState, PersistenceError> {
    let snapshot: StoreSnapshot = persistence.load_snapshot()?;
    let mut context: AppContext =
        AppContext::new(Arc::new(SystemClock), Arc::new(LoggingPushTransport));
    context.store_mut().restore(snapshot);
    Ok(AppState {
        context: Arc::new(Mutex::new(context)),
        persistence: Arc::new(Mutex::new(persistence)),
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Presidio Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = build_app_state(persistence)?;

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        build_app_state(persistence).expect("Failed to build app state")
    }

    fn json_request(method: &str, uri: &str, body: &impl serde::Serialize) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    /// Helper to seed a client, brand and event over HTTP.
    async fn seed_event(app: &Router) -> (Client, Brand, Event) {
        let client_req: CreateClientRequest = CreateClientRequest {
            name: String::from("Alfa"),
            vat_number: String::from("12345678901"),
        };
        let response = app
            .clone()
            .oneshot(json_request("POST", "/clients", &client_req))
            .await
            .unwrap();
        let client: Client = body_json(response).await;

        let brand_req: CreateBrandRequest = CreateBrandRequest {
            name: String::from("BrandX"),
            client_id: client.id.clone(),
        };
        let response = app
            .clone()
            .oneshot(json_request("POST", "/brands", &brand_req))
            .await
            .unwrap();
        let brand: Brand = body_json(response).await;

        let event_req: CreateEventRequest = CreateEventRequest {
            title: String::from("Evento Alfa"),
            client_id: client.id.clone(),
            brand_id: brand.id.clone(),
            address: String::from("Via Roma 1"),
            activity_code: None,
            start_date: Some(String::from("2025-01-10")),
            end_date: None,
            notes: None,
        };
        let response = app
            .clone()
            .oneshot(json_request("POST", "/events", &event_req))
            .await
            .unwrap();
        let event: Event = body_json(response).await;

        (client, brand, event)
    }

    fn overnight_shift_request() -> CreateShiftRequest {
        CreateShiftRequest {
            date: String::from("2025-01-10"),
            start_time: String::from("20:00"),
            end_time: String::from("04:00"),
            operator_ids: vec![String::new(), String::new()],
            activity_type: None,
            team_leader_id: None,
            required_operators: 2,
            notes: None,
            pause_hours: Some(1.0),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_client() {
        let app: Router = build_router(create_test_app_state());

        let req: CreateClientRequest = CreateClientRequest {
            name: String::from("Alfa"),
            vat_number: String::from("12345678901"),
        };
        let response = app
            .clone()
            .oneshot(json_request("POST", "/clients", &req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let created: Client = body_json(response).await;

        let response = app
            .oneshot(get_request(&format!("/clients/{}", created.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let fetched: Client = body_json(response).await;
        assert_eq!(fetched.name, "Alfa");
        assert_eq!(fetched.vat_number, "12345678901");
    }

    #[tokio::test]
    async fn test_get_unknown_client_returns_404() {
        let app: Router = build_router(create_test_app_state());

        let response = app.oneshot(get_request("/clients/missing")).await.unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
        let error: ErrorResponse = body_json(response).await;
        assert!(error.error);
        assert!(error.message.contains("Client"));
    }

    #[tokio::test]
    async fn test_create_client_with_blank_name_returns_400() {
        let app: Router = build_router(create_test_app_state());

        let req: CreateClientRequest = CreateClientRequest {
            name: String::from("   "),
            vat_number: String::from("12345678901"),
        };
        let response = app
            .oneshot(json_request("POST", "/clients", &req))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_shift_lifecycle_over_http() {
        let app: Router = build_router(create_test_app_state());
        let (_, _, event) = seed_event(&app).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/events/{}/shifts", event.id),
                &overnight_shift_request(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let shift: Shift = body_json(response).await;
        assert_eq!(shift.operator_ids.len(), 2);

        let slot_req: SetOperatorSlotRequest = SetOperatorSlotRequest {
            slot_index: 0,
            operator_id: String::from("o1"),
        };
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/shifts/{}/slot", shift.id),
                &slot_req,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let updated: Shift = body_json(response).await;
        assert_eq!(updated.operator_ids[0], "o1");

        let response = app
            .clone()
            .oneshot(get_request(&format!("/events/{}/totals", event.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let totals: ShiftTotals = body_json(response).await;
        assert!((totals.effective_hours - 7.0).abs() < f64::EPSILON);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/shifts/{}", shift.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_shift_rows_with_unknown_sort_returns_400() {
        let app: Router = build_router(create_test_app_state());
        let (_, _, event) = seed_event(&app).await;

        let response = app
            .oneshot(get_request(&format!(
                "/events/{}/shift-rows?sort=colour",
                event.id
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_client_cascades_to_brand() {
        let app: Router = build_router(create_test_app_state());
        let (client, brand, _) = seed_event(&app).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/clients/{}", client.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NO_CONTENT);

        let response = app
            .oneshot(get_request(&format!("/brands/{}", brand.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_preferences_round_trip_over_http() {
        let app: Router = build_router(create_test_app_state());

        let operator_req: CreateOperatorRequest = CreateOperatorRequest {
            name: String::from("Luca Bianchi"),
            role: String::from("GPG"),
            availability: presidio_domain::Availability::default(),
        };
        let response = app
            .clone()
            .oneshot(json_request("POST", "/operators", &operator_req))
            .await
            .unwrap();
        let operator: Operator = body_json(response).await;

        let preferences: NotificationPreferences = NotificationPreferences {
            shift_assignment: true,
            shift_updates: false,
            shift_cancellation: true,
        };
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/operators/{}/preferences", operator.id),
                &preferences,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = app
            .oneshot(get_request(&format!(
                "/operators/{}/preferences",
                operator.id
            )))
            .await
            .unwrap();
        let stored: NotificationPreferences = body_json(response).await;
        assert!(stored.shift_assignment);
        assert!(!stored.shift_updates);
        assert!(stored.shift_cancellation);
    }

    #[tokio::test]
    async fn test_snapshot_survives_restart() {
        let db_path: std::path::PathBuf = std::env::temp_dir().join(format!(
            "presidio_server_test_{}.db",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&db_path);

        let persistence: Persistence =
            Persistence::new_with_file(&db_path).expect("Failed to create file persistence");
        let app: Router = build_router(build_app_state(persistence).unwrap());
        let (client, _, _) = seed_event(&app).await;
        drop(app);

        let persistence: Persistence =
            Persistence::new_with_file(&db_path).expect("Failed to reopen file persistence");
        let app: Router = build_router(build_app_state(persistence).unwrap());

        let response = app
            .oneshot(get_request(&format!("/clients/{}", client.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let fetched: Client = body_json(response).await;
        assert_eq!(fetched.name, "Alfa");

        let _ = std::fs::remove_file(&db_path);
    }
}
