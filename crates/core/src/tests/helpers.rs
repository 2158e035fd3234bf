// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AppContext, EntityStore, FixedClock, NewEvent, NewShift, PushError, PushTransport,
};
use presidio_domain::{NotificationPreferences, PushSubscription, Shift};
use std::sync::{Arc, Mutex};
use time::macros::date;

pub fn create_test_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::at_date(date!(2025 - 01 - 10)))
}

pub fn create_test_store() -> EntityStore {
    EntityStore::new(create_test_clock())
}

pub fn create_test_context() -> AppContext {
    AppContext::new(create_test_clock(), Arc::new(RecordingPushTransport::default()))
}

/// A transport that records every delivery attempt.
#[derive(Debug, Default)]
pub struct RecordingPushTransport {
    pub sent: Mutex<Vec<(String, String, Option<String>)>>,
}

impl PushTransport for RecordingPushTransport {
    fn send(
        &self,
        _subscription: &PushSubscription,
        title: &str,
        body: &str,
        data: Option<&str>,
    ) -> Result<(), PushError> {
        self.sent.lock().map_or((), |mut sent| {
            sent.push((title.to_string(), body.to_string(), data.map(String::from)));
        });
        Ok(())
    }
}

pub fn all_preferences_enabled() -> NotificationPreferences {
    NotificationPreferences {
        shift_assignment: true,
        shift_updates: true,
        shift_cancellation: true,
    }
}

pub fn create_test_subscription() -> PushSubscription {
    PushSubscription {
        endpoint: String::from("https://push.example/device-1"),
        p256dh: String::from("p256dh-key"),
        auth: String::from("auth-secret"),
    }
}

/// Seeds client "Alfa", brand "BrandX", and an event at "Via Roma 1".
/// Returns (client_id, brand_id, event_id).
pub fn seed_event(store: &mut EntityStore) -> (String, String, String) {
    let client = store.create_client("Alfa", "12345678901");
    let brand = store.create_brand("BrandX", &client.id);
    let event = store.create_event(NewEvent {
        title: String::from("Evento Alfa"),
        client_id: client.id.clone(),
        brand_id: brand.id.clone(),
        address: String::from("Via Roma 1"),
        activity_code: None,
        start_date: Some(String::from("2025-01-10")),
        end_date: None,
        notes: None,
    });
    (client.id, brand.id, event.id)
}

/// An overnight shift on the given event, 20:00 to 04:00 with one pause
/// hour and two required slots.
pub fn overnight_shift(event_id: &str, operator_ids: Vec<String>) -> NewShift {
    NewShift {
        event_id: event_id.to_string(),
        date: String::from("2025-01-10"),
        start_time: String::from("20:00"),
        end_time: String::from("04:00"),
        operator_ids,
        activity_type: None,
        team_leader_id: None,
        required_operators: 2,
        notes: None,
        pause_hours: Some(1.0),
    }
}

pub fn seed_shift(store: &mut EntityStore, event_id: &str, operator_ids: Vec<String>) -> Shift {
    let (shift, _events) = store.create_shift(overnight_shift(event_id, operator_ids));
    shift
}
