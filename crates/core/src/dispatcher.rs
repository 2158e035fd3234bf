// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turns store change events into per-operator notifications.
//!
//! Every notification passes the same gate: the operator must exist and
//! must have stored preferences with the matching category enabled. A
//! missing preferences record suppresses everything. After the in-app
//! record is stored, delivery to a registered push subscription is
//! attempted best-effort; a transport failure is logged and never
//! propagated.

use crate::event::ChangeEvent;
use crate::push::PushTransport;
use crate::store::EntityStore;
use presidio_domain::{NotificationKind, format_date_dd_mm_yy};
use std::sync::Arc;
use tracing::warn;

const UNKNOWN_CLIENT: &str = "Cliente sconosciuto";
const UNKNOWN_BRAND: &str = "Brand sconosciuto";
const UNSPECIFIED_ACTIVITY: &str = "Attività non specificata";

/// Context resolved from a shift's client/brand chain, used to fill the
/// notification templates.
struct ShiftDetails {
    event_id: String,
    client_brand_name: String,
    full_location: String,
    date_formatted: String,
    time_range: String,
    activity_type: String,
    required_operators: u32,
}

fn resolve_details(store: &EntityStore, shift_id: &str) -> Option<ShiftDetails> {
    let shift = store.shift(shift_id)?;
    let event = store.event(&shift.event_id)?;
    let client_name: &str = store
        .client(&event.client_id)
        .map_or(UNKNOWN_CLIENT, |client| client.name.as_str());
    let brand_name: &str = store
        .brand(&event.brand_id)
        .map_or(UNKNOWN_BRAND, |brand| brand.name.as_str());
    Some(ShiftDetails {
        event_id: event.id.clone(),
        client_brand_name: format!("{client_name} - {brand_name}"),
        full_location: format!("{brand_name} - {}", event.address),
        date_formatted: format_date_dd_mm_yy(&shift.date),
        time_range: format!("{}-{}", shift.start_time, shift.end_time),
        activity_type: shift
            .activity_type
            .map_or_else(|| UNSPECIFIED_ACTIVITY.to_string(), |activity| {
                activity.as_str().to_string()
            }),
        required_operators: shift.required_operators,
    })
}

/// Routes [`ChangeEvent`]s to notification records and push delivery.
pub struct NotificationDispatcher {
    push: Arc<dyn PushTransport>,
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher").finish_non_exhaustive()
    }
}

impl NotificationDispatcher {
    /// Creates a dispatcher delivering through the given transport.
    #[must_use]
    pub fn new(push: Arc<dyn PushTransport>) -> Self {
        Self { push }
    }

    /// Processes a batch of change events in order.
    pub fn dispatch(&self, store: &mut EntityStore, events: &[ChangeEvent]) {
        for event in events {
            match event {
                ChangeEvent::OperatorAssigned {
                    shift_id,
                    operator_id,
                } => self.notify_assignment(store, operator_id, shift_id),
                ChangeEvent::OperatorRemoved {
                    shift_id,
                    operator_id,
                } => self.notify_cancellation(store, operator_id, shift_id, None),
                ChangeEvent::OperatorReplaced {
                    shift_id,
                    old_operator_id,
                    new_operator_id,
                } => {
                    self.notify_cancellation(store, old_operator_id, shift_id, None);
                    self.notify_assignment(store, new_operator_id, shift_id);
                }
                ChangeEvent::ShiftUpdated {
                    shift_id,
                    operator_ids,
                    change,
                } => {
                    for operator_id in operator_ids {
                        self.notify_update(store, operator_id, shift_id, change);
                    }
                }
                ChangeEvent::ShiftDeleted {
                    shift_id,
                    event_title,
                    operator_ids,
                } => {
                    for operator_id in operator_ids {
                        self.notify_cancellation(
                            store,
                            operator_id,
                            shift_id,
                            event_title.as_deref(),
                        );
                    }
                }
            }
        }
    }

    fn wants(store: &EntityStore, operator_id: &str, kind: NotificationKind) -> bool {
        if store.operator(operator_id).is_none() {
            return false;
        }
        store
            .notification_preferences(operator_id)
            .is_some_and(|preferences| match kind {
                NotificationKind::Assignment => preferences.shift_assignment,
                NotificationKind::Update => preferences.shift_updates,
                NotificationKind::Cancellation => preferences.shift_cancellation,
            })
    }

    fn notify_assignment(&self, store: &mut EntityStore, operator_id: &str, shift_id: &str) {
        if !Self::wants(store, operator_id, NotificationKind::Assignment) {
            return;
        }
        let Some(details) = resolve_details(store, shift_id) else {
            return;
        };
        let title: &str = "Nuovo turno assegnato";
        let message: String = format!(
            "Nuovo turno per {}\n📍 {}\n📅 {} | {}\n🎯 {}\n👥 {} operatori richiesti",
            details.client_brand_name,
            details.full_location,
            details.date_formatted,
            details.time_range,
            details.activity_type,
            details.required_operators
        );
        store.add_notification(
            operator_id,
            title,
            &message,
            NotificationKind::Assignment,
            Some(shift_id),
            Some(&details.event_id),
        );
        self.try_push(
            store,
            operator_id,
            title,
            &message,
            Some(&format!("/events/{}", details.event_id)),
        );
    }

    fn notify_update(
        &self,
        store: &mut EntityStore,
        operator_id: &str,
        shift_id: &str,
        changes: &str,
    ) {
        if !Self::wants(store, operator_id, NotificationKind::Update) {
            return;
        }
        let Some(details) = resolve_details(store, shift_id) else {
            return;
        };
        let title: &str = "Turno modificato";
        let message: String = format!(
            "Turno modificato per {}\n📍 {}\n📅 {} | {}\n🔄 Modifiche: {changes}",
            details.client_brand_name,
            details.full_location,
            details.date_formatted,
            details.time_range
        );
        store.add_notification(
            operator_id,
            title,
            &message,
            NotificationKind::Update,
            Some(shift_id),
            Some(&details.event_id),
        );
        self.try_push(
            store,
            operator_id,
            title,
            &message,
            Some(&format!("/events/{}", details.event_id)),
        );
    }

    fn notify_cancellation(
        &self,
        store: &mut EntityStore,
        operator_id: &str,
        shift_id: &str,
        event_title: Option<&str>,
    ) {
        if !Self::wants(store, operator_id, NotificationKind::Cancellation) {
            return;
        }
        let title: &str = "Turno cancellato";
        if let Some(details) = resolve_details(store, shift_id) {
            let message: String = format!(
                "Turno cancellato per {}\n📍 {}\n📅 {} | {}\n❌ Il turno è stato annullato",
                details.client_brand_name,
                details.full_location,
                details.date_formatted,
                details.time_range
            );
            store.add_notification(
                operator_id,
                title,
                &message,
                NotificationKind::Cancellation,
                Some(shift_id),
                Some(&details.event_id),
            );
            self.try_push(store, operator_id, title, &message, None);
            return;
        }

        // The shift is already gone; fall back to the title captured in
        // the change event.
        let message: String = event_title.map_or_else(
            || "Un turno è stato cancellato".to_string(),
            |event_title| format!("Il turno \"{event_title}\" è stato cancellato"),
        );
        store.add_notification(
            operator_id,
            title,
            &message,
            NotificationKind::Cancellation,
            None,
            None,
        );
        self.try_push(store, operator_id, title, &message, None);
    }

    fn try_push(
        &self,
        store: &EntityStore,
        operator_id: &str,
        title: &str,
        message: &str,
        data: Option<&str>,
    ) {
        let Some(subscription) = store.push_subscription(operator_id) else {
            return;
        };
        if let Err(error) = self.push.send(subscription, title, message, data) {
            warn!(operator_id = %operator_id, error = %error, "Push delivery failed");
        }
    }
}
