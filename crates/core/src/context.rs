// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::Clock;
use crate::dispatcher::NotificationDispatcher;
use crate::event::ChangeEvent;
use crate::push::PushTransport;
use crate::store::{EntityStore, NewShift};
use presidio_domain::{ActivityType, Shift};
use std::sync::Arc;

/// The store and the notification dispatcher, wired together.
///
/// Shift mutations go through the methods here so the change events each
/// mutation returns are always forwarded to the dispatcher. Mutations that
/// never notify (clients, brands, operators, events, tasks) are reached
/// through [`AppContext::store_mut`] directly.
#[derive(Debug)]
pub struct AppContext {
    store: EntityStore,
    dispatcher: NotificationDispatcher,
}

impl AppContext {
    /// Creates a context over an empty store.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, push: Arc<dyn PushTransport>) -> Self {
        Self {
            store: EntityStore::new(clock),
            dispatcher: NotificationDispatcher::new(push),
        }
    }

    /// Read access to the store.
    #[must_use]
    pub const fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Write access to the store, for mutations that never notify.
    pub const fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    fn forward(&mut self, events: Vec<ChangeEvent>) {
        if !events.is_empty() {
            self.dispatcher.dispatch(&mut self.store, &events);
        }
    }

    /// Creates a shift and notifies operators occupying its initial slots.
    pub fn create_shift(&mut self, new_shift: NewShift) -> Shift {
        let (shift, events) = self.store.create_shift(new_shift);
        self.forward(events);
        shift
    }

    /// Deletes a shift and notifies the operators who occupied it.
    pub fn delete_shift(&mut self, shift_id: &str) {
        let events: Vec<ChangeEvent> = self.store.delete_shift(shift_id);
        self.forward(events);
    }

    /// Appends operators to a shift and notifies each newly assigned one.
    pub fn assign_operators(&mut self, shift_id: &str, operator_ids: &[String]) {
        let events: Vec<ChangeEvent> = self.store.assign_operators(shift_id, operator_ids);
        self.forward(events);
    }

    /// Sets one slot and notifies the displaced and assigned operators.
    pub fn set_operator_slot(&mut self, shift_id: &str, slot_index: usize, operator_id: &str) {
        let events: Vec<ChangeEvent> =
            self.store.set_operator_slot(shift_id, slot_index, operator_id);
        self.forward(events);
    }

    /// Removes an operator from a shift and notifies them.
    pub fn remove_operator(&mut self, shift_id: &str, operator_id: &str) {
        let events: Vec<ChangeEvent> = self.store.remove_operator(shift_id, operator_id);
        self.forward(events);
    }

    /// Swaps one operator for another and notifies both.
    pub fn replace_operator(&mut self, shift_id: &str, old_operator_id: &str, new_operator_id: &str) {
        let events: Vec<ChangeEvent> =
            self.store
                .replace_operator(shift_id, old_operator_id, new_operator_id);
        self.forward(events);
    }

    /// Updates a shift's times and notifies its occupants.
    pub fn update_shift_time(
        &mut self,
        shift_id: &str,
        start_time: Option<&str>,
        end_time: Option<&str>,
    ) {
        let events: Vec<ChangeEvent> = self.store.update_shift_time(shift_id, start_time, end_time);
        self.forward(events);
    }

    /// Moves a shift to another date and notifies its occupants.
    pub fn update_shift_date(&mut self, shift_id: &str, date: &str) {
        let events: Vec<ChangeEvent> = self.store.update_shift_date(shift_id, date);
        self.forward(events);
    }

    /// Changes a shift's service category and notifies its occupants.
    pub fn update_shift_activity_type(&mut self, shift_id: &str, activity_type: Option<ActivityType>) {
        let events: Vec<ChangeEvent> = self.store.update_shift_activity_type(shift_id, activity_type);
        self.forward(events);
    }

    /// Changes a shift's pause hours and notifies its occupants.
    pub fn update_shift_pause_hours(&mut self, shift_id: &str, pause_hours: f64) {
        let events: Vec<ChangeEvent> = self.store.update_shift_pause_hours(shift_id, pause_hours);
        self.forward(events);
    }
}
