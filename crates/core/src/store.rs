// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The single source of truth for all entity collections.
//!
//! All mutations are synchronous and atomic with respect to the in-memory
//! representation. Operations on unknown identifiers are silent no-ops:
//! callers are expected to have obtained identifiers from a prior
//! successful query. Assignment-affecting mutators return the
//! [`ChangeEvent`]s they produced.

use crate::clock::Clock;
use crate::event::ChangeEvent;
use presidio_domain::{
    ActivityType, Availability, Brand, BrandAddress, Client, ContactPerson, Event, Notification,
    NotificationKind, NotificationPreferences, OPEN_SLOT, Operator, PushSubscription, Shift, Task,
    format_date_dd_mm_yy,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::format_description::well_known::Iso8601;

/// Per-operator notification retention cap. Appending beyond the cap drops
/// the oldest records so the list cannot grow without bound.
pub const MAX_NOTIFICATIONS_PER_OPERATOR: usize = 50;

const ID_LENGTH: usize = 8;

/// Generates a fresh opaque identifier: 8 base-36 characters drawn from a
/// random 64-bit value. Collision-resistant for this domain's data volumes,
/// with no cryptographic claim.
fn generate_id() -> String {
    let mut value: u64 = rand::random::<u64>();
    let mut id: String = String::with_capacity(ID_LENGTH);
    for _ in 0..ID_LENGTH {
        let digit: u32 = u32::try_from(value % 36).unwrap_or(0);
        id.push(char::from_digit(digit, 36).unwrap_or('0'));
        value /= 36;
    }
    id
}

/// Partial update for a client record. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    /// New legal name.
    pub name: Option<String>,
    /// New VAT identifier.
    pub vat_number: Option<String>,
}

/// Partial update for an operator record. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorPatch {
    /// New full name.
    pub name: Option<String>,
    /// New role.
    pub role: Option<String>,
    /// New availability state.
    pub availability: Option<Availability>,
    /// New phone number.
    pub phone: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New fiscal code.
    pub fiscal_code: Option<String>,
    /// New photo reference.
    pub photo: Option<String>,
}

/// Partial update for an event record. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    /// New title.
    pub title: Option<String>,
    /// New resolved site address.
    pub address: Option<String>,
    /// New activity code.
    pub activity_code: Option<String>,
    /// New start date, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// New end date, `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// New notes.
    pub notes: Option<String>,
}

/// Fields for creating an event.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    /// Event title.
    pub title: String,
    /// The client this event is for.
    pub client_id: String,
    /// The brand this event is tied to.
    pub brand_id: String,
    /// Resolved site address (may be a custom override).
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

/// Fields for creating a shift.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShift {
    /// The owning event.
    pub event_id: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Start of shift, `HH:MM`.
    pub start_time: String,
    /// End of shift, `HH:MM`.
    pub end_time: String,
    /// Initial operator slots; defaults to no slots.
    #[serde(default)]
    pub operator_ids: Vec<String>,
    /// Service category.
    #[serde(default)]
    pub activity_type: Option<ActivityType>,
    /// Team leader; coerced to `None` unless it occupies a slot.
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

/// A serializable snapshot of every collection, used by the persistence
/// layer. The snapshot is a convenience cache, not the system of record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    /// All clients.
    #[serde(default)]
    pub clients: Vec<Client>,
    /// All brands.
    #[serde(default)]
    pub brands: Vec<Brand>,
    /// All operators.
    #[serde(default)]
    pub operators: Vec<Operator>,
    /// All events.
    #[serde(default)]
    pub events: Vec<Event>,
    /// All shifts.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// All tasks.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// The persisted mapping of all domain entities, with CRUD operations,
/// relationship-scoped queries, and slot-mutation primitives.
///
/// Constructed once at application start and passed by reference; there is
/// no ambient global instance.
#[derive(Debug)]
pub struct EntityStore {
    clients: Vec<Client>,
    brands: Vec<Brand>,
    operators: Vec<Operator>,
    events: Vec<Event>,
    shifts: Vec<Shift>,
    tasks: Vec<Task>,
    clock: Arc<dyn Clock>,
    revision: u64,
}

impl EntityStore {
    /// Creates an empty store with the given clock.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clients: Vec::new(),
            brands: Vec::new(),
            operators: Vec::new(),
            events: Vec::new(),
            shifts: Vec::new(),
            tasks: Vec::new(),
            clock,
            revision: 0,
        }
    }

    /// Monotonically increasing mutation counter. Callers flushing the
    /// store to durable storage compare revisions to know when to write.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Today's date from the injected clock, as a `YYYY-MM-DD` string.
    #[must_use]
    pub fn today_iso(&self) -> String {
        presidio_domain::iso_date(self.clock.today())
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    fn timestamp(&self) -> String {
        self.clock
            .now()
            .format(&Iso8601::DEFAULT)
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Snapshot
    // ------------------------------------------------------------------

    /// Clones every collection into a serializable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            clients: self.clients.clone(),
            brands: self.brands.clone(),
            operators: self.operators.clone(),
            events: self.events.clone(),
            shifts: self.shifts.clone(),
            tasks: self.tasks.clone(),
        }
    }

    /// Replaces every collection with the snapshot's contents.
    pub fn restore(&mut self, snapshot: StoreSnapshot) {
        self.clients = snapshot.clients;
        self.brands = snapshot.brands;
        self.operators = snapshot.operators;
        self.events = snapshot.events;
        self.shifts = snapshot.shifts;
        self.tasks = snapshot.tasks;
        self.bump();
    }

    // ------------------------------------------------------------------
    // Clients
    // ------------------------------------------------------------------

    /// All clients, newest first.
    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Looks up a client by identifier.
    #[must_use]
    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    /// Creates a client, prepending it to the collection.
    pub fn create_client(&mut self, name: &str, vat_number: &str) -> Client {
        let client: Client = Client {
            id: generate_id(),
            name: name.to_string(),
            vat_number: vat_number.to_string(),
            contact_persons: Vec::new(),
        };
        self.clients.insert(0, client.clone());
        self.bump();
        client
    }

    /// Merges partial fields into the matching client. No-op for an
    /// unknown identifier.
    pub fn update_client(&mut self, id: &str, patch: ClientPatch) {
        if let Some(client) = self.clients.iter_mut().find(|client| client.id == id) {
            if let Some(name) = patch.name {
                client.name = name;
            }
            if let Some(vat_number) = patch.vat_number {
                client.vat_number = vat_number;
            }
            self.bump();
        }
    }

    /// Deletes a client, cascading deletion of its brands. Events that
    /// referenced the client or one of its brands are not deleted; they
    /// are marked archived so no dangling active reference survives.
    pub fn delete_client(&mut self, id: &str) {
        let existed: bool = self.clients.iter().any(|client| client.id == id);
        if !existed {
            return;
        }
        self.clients.retain(|client| client.id != id);

        let removed_brands: Vec<String> = self
            .brands
            .iter()
            .filter(|brand| brand.client_id == id)
            .map(|brand| brand.id.clone())
            .collect();
        self.brands.retain(|brand| brand.client_id != id);

        for event in &mut self.events {
            if event.client_id == id || removed_brands.contains(&event.brand_id) {
                event.archived = true;
            }
        }
        self.bump();
    }

    /// Appends a contact person to a client. No-op for an unknown client.
    pub fn add_contact_person(
        &mut self,
        client_id: &str,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Option<ContactPerson> {
        let client: &mut Client = self
            .clients
            .iter_mut()
            .find(|client| client.id == client_id)?;
        let contact: ContactPerson = ContactPerson {
            id: generate_id(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        };
        client.contact_persons.push(contact.clone());
        self.bump();
        Some(contact)
    }

    /// Updates a contact person's fields in place.
    pub fn update_contact_person(
        &mut self,
        client_id: &str,
        contact_id: &str,
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) {
        let Some(client) = self
            .clients
            .iter_mut()
            .find(|client| client.id == client_id)
        else {
            return;
        };
        if let Some(contact) = client
            .contact_persons
            .iter_mut()
            .find(|contact| contact.id == contact_id)
        {
            if let Some(name) = name {
                contact.name = name.to_string();
            }
            if let Some(email) = email {
                contact.email = email.to_string();
            }
            if let Some(phone) = phone {
                contact.phone = phone.to_string();
            }
            self.bump();
        }
    }

    /// Removes a contact person from a client.
    pub fn remove_contact_person(&mut self, client_id: &str, contact_id: &str) {
        if let Some(client) = self
            .clients
            .iter_mut()
            .find(|client| client.id == client_id)
        {
            client.contact_persons.retain(|contact| contact.id != contact_id);
            self.bump();
        }
    }

    // ------------------------------------------------------------------
    // Brands
    // ------------------------------------------------------------------

    /// All brands.
    #[must_use]
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// Looks up a brand by identifier.
    #[must_use]
    pub fn brand(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|brand| brand.id == id)
    }

    /// All brands owned by the given client.
    #[must_use]
    pub fn brands_by_client(&self, client_id: &str) -> Vec<&Brand> {
        self.brands
            .iter()
            .filter(|brand| brand.client_id == client_id)
            .collect()
    }

    /// Creates a brand under a client, prepending it to the collection.
    pub fn create_brand(&mut self, name: &str, client_id: &str) -> Brand {
        let brand: Brand = Brand {
            id: generate_id(),
            name: name.to_string(),
            client_id: client_id.to_string(),
            addresses: Vec::new(),
        };
        self.brands.insert(0, brand.clone());
        self.bump();
        brand
    }

    /// Renames a brand. No-op for an unknown identifier.
    pub fn update_brand(&mut self, id: &str, name: &str) {
        if let Some(brand) = self.brands.iter_mut().find(|brand| brand.id == id) {
            brand.name = name.to_string();
            self.bump();
        }
    }

    /// Deletes a brand. Events tied to it are marked archived.
    pub fn delete_brand(&mut self, id: &str) {
        let existed: bool = self.brands.iter().any(|brand| brand.id == id);
        if !existed {
            return;
        }
        self.brands.retain(|brand| brand.id != id);
        for event in &mut self.events {
            if event.brand_id == id {
                event.archived = true;
            }
        }
        self.bump();
    }

    /// Appends a site address to a brand.
    pub fn add_brand_address(&mut self, brand_id: &str, address: &str) -> Option<BrandAddress> {
        let brand: &mut Brand = self.brands.iter_mut().find(|brand| brand.id == brand_id)?;
        let brand_address: BrandAddress = BrandAddress {
            id: generate_id(),
            address: address.to_string(),
        };
        brand.addresses.push(brand_address.clone());
        self.bump();
        Some(brand_address)
    }

    /// Rewrites one of a brand's site addresses.
    pub fn update_brand_address(&mut self, brand_id: &str, address_id: &str, address: &str) {
        let Some(brand) = self.brands.iter_mut().find(|brand| brand.id == brand_id) else {
            return;
        };
        if let Some(entry) = brand.addresses.iter_mut().find(|entry| entry.id == address_id) {
            entry.address = address.to_string();
            self.bump();
        }
    }

    /// Removes a site address from a brand.
    pub fn remove_brand_address(&mut self, brand_id: &str, address_id: &str) {
        if let Some(brand) = self.brands.iter_mut().find(|brand| brand.id == brand_id) {
            brand.addresses.retain(|entry| entry.id != address_id);
            self.bump();
        }
    }

    // ------------------------------------------------------------------
    // Operators
    // ------------------------------------------------------------------

    /// All operators.
    #[must_use]
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Looks up an operator by identifier.
    #[must_use]
    pub fn operator(&self, id: &str) -> Option<&Operator> {
        self.operators.iter().find(|operator| operator.id == id)
    }

    /// Creates an operator, prepending it to the collection.
    pub fn create_operator(
        &mut self,
        name: &str,
        role: &str,
        availability: Availability,
    ) -> Operator {
        let operator: Operator = Operator {
            id: generate_id(),
            name: name.to_string(),
            role: role.to_string(),
            availability,
            phone: None,
            email: None,
            fiscal_code: None,
            photo: None,
            notifications: Vec::new(),
            notification_preferences: None,
            push_subscription: None,
        };
        self.operators.insert(0, operator.clone());
        self.bump();
        operator
    }

    /// Merges partial fields into the matching operator.
    pub fn update_operator(&mut self, id: &str, patch: OperatorPatch) {
        if let Some(operator) = self.operators.iter_mut().find(|operator| operator.id == id) {
            if let Some(name) = patch.name {
                operator.name = name;
            }
            if let Some(role) = patch.role {
                operator.role = role;
            }
            if let Some(availability) = patch.availability {
                operator.availability = availability;
            }
            if let Some(phone) = patch.phone {
                operator.phone = Some(phone);
            }
            if let Some(email) = patch.email {
                operator.email = Some(email);
            }
            if let Some(fiscal_code) = patch.fiscal_code {
                operator.fiscal_code = Some(fiscal_code);
            }
            if let Some(photo) = patch.photo {
                operator.photo = Some(photo);
            }
            self.bump();
        }
    }

    /// Deletes an operator and opens every slot it occupied, clearing any
    /// matching team-leader designation. Slots stay open rather than
    /// shrinking so staffing gaps remain visible.
    pub fn delete_operator(&mut self, id: &str) {
        let existed: bool = self.operators.iter().any(|operator| operator.id == id);
        if !existed {
            return;
        }
        self.operators.retain(|operator| operator.id != id);
        for shift in &mut self.shifts {
            for slot in &mut shift.operator_ids {
                if slot == id {
                    slot.clear();
                }
            }
            if shift.team_leader_id.as_deref() == Some(id) {
                shift.team_leader_id = None;
            }
        }
        self.bump();
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// All events, archived included.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// All events whose client/brand chain is still intact.
    #[must_use]
    pub fn active_events(&self) -> Vec<&Event> {
        self.events.iter().filter(|event| !event.archived).collect()
    }

    /// Looks up an event by identifier.
    #[must_use]
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Creates an event, prepending it to the collection.
    pub fn create_event(&mut self, new_event: NewEvent) -> Event {
        let event: Event = Event {
            id: generate_id(),
            title: new_event.title,
            client_id: new_event.client_id,
            brand_id: new_event.brand_id,
            address: new_event.address,
            activity_code: new_event.activity_code,
            start_date: new_event.start_date,
            end_date: new_event.end_date,
            notes: new_event.notes,
            archived: false,
        };
        self.events.insert(0, event.clone());
        self.bump();
        event
    }

    /// Merges partial fields into the matching event.
    pub fn update_event(&mut self, id: &str, patch: EventPatch) {
        if let Some(event) = self.events.iter_mut().find(|event| event.id == id) {
            if let Some(title) = patch.title {
                event.title = title;
            }
            if let Some(address) = patch.address {
                event.address = address;
            }
            if let Some(activity_code) = patch.activity_code {
                event.activity_code = Some(activity_code);
            }
            if let Some(start_date) = patch.start_date {
                event.start_date = Some(start_date);
            }
            if let Some(end_date) = patch.end_date {
                event.end_date = Some(end_date);
            }
            if let Some(notes) = patch.notes {
                event.notes = Some(notes);
            }
            self.bump();
        }
    }

    /// Rewrites an event's resolved site address.
    pub fn update_event_address(&mut self, id: &str, address: &str) {
        if let Some(event) = self.events.iter_mut().find(|event| event.id == id) {
            event.address = address.to_string();
            self.bump();
        }
    }

    /// Rewrites an event's activity code.
    pub fn update_event_activity_code(&mut self, id: &str, activity_code: &str) {
        if let Some(event) = self.events.iter_mut().find(|event| event.id == id) {
            event.activity_code = Some(activity_code.to_string());
            self.bump();
        }
    }

    // ------------------------------------------------------------------
    // Shifts
    // ------------------------------------------------------------------

    /// All shifts.
    #[must_use]
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Looks up a shift by identifier.
    #[must_use]
    pub fn shift(&self, id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|shift| shift.id == id)
    }

    /// All shifts belonging to the given event, in unspecified order;
    /// callers sort.
    #[must_use]
    pub fn shifts_by_event(&self, event_id: &str) -> Vec<&Shift> {
        self.shifts
            .iter()
            .filter(|shift| shift.event_id == event_id)
            .collect()
    }

    fn shift_mut(&mut self, shift_id: &str) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|shift| shift.id == shift_id)
    }

    fn occupied_ids(shift: &Shift) -> Vec<String> {
        shift
            .operator_ids
            .iter()
            .filter(|id| !id.trim().is_empty())
            .cloned()
            .collect()
    }

    /// Creates a shift, prepending it to the collection. A team leader not
    /// occupying a slot is coerced to none. Returns the created shift and
    /// an assignment event per pre-occupied slot.
    pub fn create_shift(&mut self, new_shift: NewShift) -> (Shift, Vec<ChangeEvent>) {
        let team_leader_id: Option<String> = new_shift.team_leader_id.filter(|leader| {
            !leader.trim().is_empty() && new_shift.operator_ids.iter().any(|id| id == leader)
        });
        let shift: Shift = Shift {
            id: generate_id(),
            event_id: new_shift.event_id,
            date: new_shift.date,
            start_time: new_shift.start_time,
            end_time: new_shift.end_time,
            operator_ids: new_shift.operator_ids,
            activity_type: new_shift.activity_type,
            team_leader_id,
            required_operators: new_shift.required_operators,
            notes: new_shift.notes,
            pause_hours: new_shift.pause_hours,
        };
        let events: Vec<ChangeEvent> = Self::occupied_ids(&shift)
            .into_iter()
            .map(|operator_id| ChangeEvent::OperatorAssigned {
                shift_id: shift.id.clone(),
                operator_id,
            })
            .collect();
        self.shifts.insert(0, shift.clone());
        self.bump();
        (shift, events)
    }

    /// Deletes a shift outright. The emitted event carries the occupied
    /// operators and the owning event's title as they were at deletion
    /// time. Distinct from removing the last operator of a shift: the
    /// caller inspects remaining slots and decides which operation to
    /// invoke.
    pub fn delete_shift(&mut self, shift_id: &str) -> Vec<ChangeEvent> {
        let Some(shift) = self.shift(shift_id) else {
            return Vec::new();
        };
        let operator_ids: Vec<String> = Self::occupied_ids(shift);
        let event_title: Option<String> = self
            .event(&shift.event_id)
            .map(|event| event.title.clone());

        self.shifts.retain(|shift| shift.id != shift_id);
        self.bump();
        vec![ChangeEvent::ShiftDeleted {
            shift_id: shift_id.to_string(),
            event_title,
            operator_ids,
        }]
    }

    /// Appends operators to a shift's slots, skipping blanks and operators
    /// already present. The slot array grows; it never shrinks here.
    pub fn assign_operators(&mut self, shift_id: &str, operator_ids: &[String]) -> Vec<ChangeEvent> {
        let Some(shift) = self.shift_mut(shift_id) else {
            return Vec::new();
        };
        let mut events: Vec<ChangeEvent> = Vec::new();
        for operator_id in operator_ids {
            if operator_id.trim().is_empty() || shift.operator_ids.contains(operator_id) {
                continue;
            }
            shift.operator_ids.push(operator_id.clone());
            events.push(ChangeEvent::OperatorAssigned {
                shift_id: shift_id.to_string(),
                operator_id: operator_id.clone(),
            });
        }
        if !events.is_empty() {
            self.bump();
        }
        events
    }

    /// Sets one slot of a shift, growing the slot array with open-slot
    /// padding when `slot_index` exceeds the current length. The array
    /// never shrinks. Idempotent: re-setting the same occupant changes
    /// nothing and emits nothing.
    pub fn set_operator_slot(
        &mut self,
        shift_id: &str,
        slot_index: usize,
        operator_id: &str,
    ) -> Vec<ChangeEvent> {
        let Some(shift) = self.shift_mut(shift_id) else {
            return Vec::new();
        };
        while shift.operator_ids.len() <= slot_index {
            shift.operator_ids.push(OPEN_SLOT.to_string());
        }
        let previous: String = shift.operator_ids[slot_index].clone();
        if previous == operator_id {
            return Vec::new();
        }
        shift.operator_ids[slot_index] = operator_id.to_string();

        // A displaced occupant may still hold another slot; only a full
        // departure clears the team-leader designation.
        if !previous.trim().is_empty()
            && shift.team_leader_id.as_deref() == Some(previous.as_str())
            && !shift.operator_ids.iter().any(|id| id == &previous)
        {
            shift.team_leader_id = None;
        }

        let mut events: Vec<ChangeEvent> = Vec::new();
        if !previous.trim().is_empty() {
            events.push(ChangeEvent::OperatorRemoved {
                shift_id: shift_id.to_string(),
                operator_id: previous,
            });
        }
        if !operator_id.trim().is_empty() {
            events.push(ChangeEvent::OperatorAssigned {
                shift_id: shift_id.to_string(),
                operator_id: operator_id.to_string(),
            });
        }
        self.bump();
        events
    }

    /// Filters an operator out of a shift's slots (the array shrinks) and
    /// clears the team-leader designation when it pointed at the removed
    /// operator.
    pub fn remove_operator(&mut self, shift_id: &str, operator_id: &str) -> Vec<ChangeEvent> {
        let Some(shift) = self.shift_mut(shift_id) else {
            return Vec::new();
        };
        let before: usize = shift.operator_ids.len();
        shift.operator_ids.retain(|id| id != operator_id);
        if shift.operator_ids.len() == before {
            return Vec::new();
        }
        if shift.team_leader_id.as_deref() == Some(operator_id) {
            shift.team_leader_id = None;
        }
        self.bump();
        vec![ChangeEvent::OperatorRemoved {
            shift_id: shift_id.to_string(),
            operator_id: operator_id.to_string(),
        }]
    }

    /// Swaps one operator for another in place, migrating the team-leader
    /// designation with it.
    pub fn replace_operator(
        &mut self,
        shift_id: &str,
        old_operator_id: &str,
        new_operator_id: &str,
    ) -> Vec<ChangeEvent> {
        let Some(shift) = self.shift_mut(shift_id) else {
            return Vec::new();
        };
        let mut changed: bool = false;
        for slot in &mut shift.operator_ids {
            if slot == old_operator_id {
                *slot = new_operator_id.to_string();
                changed = true;
            }
        }
        if !changed {
            return Vec::new();
        }
        if shift.team_leader_id.as_deref() == Some(old_operator_id) {
            shift.team_leader_id = Some(new_operator_id.to_string());
        }
        self.bump();
        vec![ChangeEvent::OperatorReplaced {
            shift_id: shift_id.to_string(),
            old_operator_id: old_operator_id.to_string(),
            new_operator_id: new_operator_id.to_string(),
        }]
    }

    /// Sets the team leader. The designation is accepted only when the
    /// operator currently occupies a slot; anything else (including the
    /// empty string) clears it. Favors availability over strictness.
    pub fn set_team_leader(&mut self, shift_id: &str, operator_id: &str) {
        if let Some(shift) = self.shift_mut(shift_id) {
            if !operator_id.trim().is_empty() && shift.operator_ids.iter().any(|id| id == operator_id)
            {
                shift.team_leader_id = Some(operator_id.to_string());
            } else {
                shift.team_leader_id = None;
            }
            self.bump();
        }
    }

    /// Rewrites a shift's notes. Notes changes do not notify operators.
    pub fn update_shift_notes(&mut self, shift_id: &str, notes: &str) {
        if let Some(shift) = self.shift_mut(shift_id) {
            shift.notes = Some(notes.to_string());
            self.bump();
        }
    }

    /// Updates a shift's start and/or end time.
    pub fn update_shift_time(
        &mut self,
        shift_id: &str,
        start_time: Option<&str>,
        end_time: Option<&str>,
    ) -> Vec<ChangeEvent> {
        let Some(shift) = self.shift_mut(shift_id) else {
            return Vec::new();
        };
        if start_time.is_none() && end_time.is_none() {
            return Vec::new();
        }
        if let Some(start_time) = start_time {
            shift.start_time = start_time.to_string();
        }
        if let Some(end_time) = end_time {
            shift.end_time = end_time.to_string();
        }
        let change: String = format!("orario {}-{}", shift.start_time, shift.end_time);
        let events: Vec<ChangeEvent> = vec![ChangeEvent::ShiftUpdated {
            shift_id: shift_id.to_string(),
            operator_ids: Self::occupied_ids(shift),
            change,
        }];
        self.bump();
        events
    }

    /// Moves a shift to another date.
    pub fn update_shift_date(&mut self, shift_id: &str, date: &str) -> Vec<ChangeEvent> {
        let Some(shift) = self.shift_mut(shift_id) else {
            return Vec::new();
        };
        shift.date = date.to_string();
        let change: String = format!("data {}", format_date_dd_mm_yy(date));
        let events: Vec<ChangeEvent> = vec![ChangeEvent::ShiftUpdated {
            shift_id: shift_id.to_string(),
            operator_ids: Self::occupied_ids(shift),
            change,
        }];
        self.bump();
        events
    }

    /// Changes a shift's service category.
    pub fn update_shift_activity_type(
        &mut self,
        shift_id: &str,
        activity_type: Option<ActivityType>,
    ) -> Vec<ChangeEvent> {
        let Some(shift) = self.shift_mut(shift_id) else {
            return Vec::new();
        };
        shift.activity_type = activity_type;
        let change: String = format!(
            "attività {}",
            activity_type.map_or("non specificata", |activity| activity.as_str())
        );
        let events: Vec<ChangeEvent> = vec![ChangeEvent::ShiftUpdated {
            shift_id: shift_id.to_string(),
            operator_ids: Self::occupied_ids(shift),
            change,
        }];
        self.bump();
        events
    }

    /// Changes a shift's pause hours.
    pub fn update_shift_pause_hours(&mut self, shift_id: &str, pause_hours: f64) -> Vec<ChangeEvent> {
        let Some(shift) = self.shift_mut(shift_id) else {
            return Vec::new();
        };
        shift.pause_hours = Some(pause_hours);
        let change: String = format!("ore di pausa {pause_hours}");
        let events: Vec<ChangeEvent> = vec![ChangeEvent::ShiftUpdated {
            shift_id: shift_id.to_string(),
            operator_ids: Self::occupied_ids(shift),
            change,
        }];
        self.bump();
        events
    }

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    /// Creates a checklist task on an event.
    pub fn create_task(&mut self, event_id: &str, title: &str) -> Task {
        let task: Task = Task {
            id: generate_id(),
            event_id: event_id.to_string(),
            title: title.to_string(),
            completed: false,
            created_at: self.timestamp(),
        };
        self.tasks.insert(0, task.clone());
        self.bump();
        task
    }

    /// Updates a task's title and/or completed flag.
    pub fn update_task(&mut self, id: &str, title: Option<&str>, completed: Option<bool>) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            if let Some(title) = title {
                task.title = title.to_string();
            }
            if let Some(completed) = completed {
                task.completed = completed;
            }
            self.bump();
        }
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Deletes a task. Unknown identifiers are a silent no-op.
    pub fn delete_task(&mut self, id: &str) {
        let existed: bool = self.tasks.iter().any(|task| task.id == id);
        if !existed {
            return;
        }
        self.tasks.retain(|task| task.id != id);
        self.bump();
    }

    /// Tasks for an event, newest first.
    #[must_use]
    pub fn tasks_by_event(&self, event_id: &str) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| task.event_id == event_id)
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tasks
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    /// Appends a notification record to an operator, unread, timestamped
    /// from the injected clock. The per-operator list is capped at
    /// [`MAX_NOTIFICATIONS_PER_OPERATOR`]; the oldest records are dropped.
    ///
    /// Returns `None` for an unknown operator.
    pub fn add_notification(
        &mut self,
        operator_id: &str,
        title: &str,
        message: &str,
        kind: NotificationKind,
        shift_id: Option<&str>,
        event_id: Option<&str>,
    ) -> Option<Notification> {
        let created_at: String = self.timestamp();
        let operator: &mut Operator = self
            .operators
            .iter_mut()
            .find(|operator| operator.id == operator_id)?;
        let notification: Notification = Notification {
            id: generate_id(),
            title: title.to_string(),
            message: message.to_string(),
            kind,
            read: false,
            created_at,
            shift_id: shift_id.map(String::from),
            event_id: event_id.map(String::from),
        };
        operator.notifications.push(notification.clone());
        if operator.notifications.len() > MAX_NOTIFICATIONS_PER_OPERATOR {
            let overflow: usize = operator.notifications.len() - MAX_NOTIFICATIONS_PER_OPERATOR;
            operator.notifications.drain(..overflow);
        }
        self.bump();
        Some(notification)
    }

    /// An operator's notifications, oldest first. Empty for an unknown
    /// operator.
    #[must_use]
    pub fn operator_notifications(&self, operator_id: &str) -> &[Notification] {
        self.operator(operator_id)
            .map_or(&[], |operator| operator.notifications.as_slice())
    }

    /// Flips a notification's read flag to true. The read flag is the only
    /// mutable field of a notification record.
    pub fn mark_notification_read(&mut self, operator_id: &str, notification_id: &str) {
        let Some(operator) = self
            .operators
            .iter_mut()
            .find(|operator| operator.id == operator_id)
        else {
            return;
        };
        if let Some(notification) = operator
            .notifications
            .iter_mut()
            .find(|notification| notification.id == notification_id)
        {
            notification.read = true;
            self.bump();
        }
    }

    /// An operator's notification preferences, if any were ever stored.
    #[must_use]
    pub fn notification_preferences(&self, operator_id: &str) -> Option<NotificationPreferences> {
        self.operator(operator_id)
            .and_then(|operator| operator.notification_preferences)
    }

    /// Replaces an operator's notification preferences.
    pub fn update_notification_preferences(
        &mut self,
        operator_id: &str,
        preferences: NotificationPreferences,
    ) {
        if let Some(operator) = self
            .operators
            .iter_mut()
            .find(|operator| operator.id == operator_id)
        {
            operator.notification_preferences = Some(preferences);
            self.bump();
        }
    }

    /// Stores an operator's push-subscription credentials.
    pub fn set_push_subscription(&mut self, operator_id: &str, subscription: PushSubscription) {
        if let Some(operator) = self
            .operators
            .iter_mut()
            .find(|operator| operator.id == operator_id)
        {
            operator.push_subscription = Some(subscription);
            self.bump();
        }
    }

    /// An operator's push subscription, if one is registered.
    #[must_use]
    pub fn push_subscription(&self, operator_id: &str) -> Option<&PushSubscription> {
        self.operator(operator_id)
            .and_then(|operator| operator.push_subscription.as_ref())
    }
}
