// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    RecordingPushTransport, all_preferences_enabled, create_test_clock, create_test_subscription,
    overnight_shift, seed_event,
};
use crate::{AppContext, NewShift};
use presidio_domain::{Availability, NotificationKind, NotificationPreferences};
use std::sync::Arc;

fn context_with_push() -> (AppContext, Arc<RecordingPushTransport>) {
    let push: Arc<RecordingPushTransport> = Arc::new(RecordingPushTransport::default());
    let context: AppContext = AppContext::new(create_test_clock(), push.clone());
    (context, push)
}

fn seed_operator(context: &mut AppContext, preferences: Option<NotificationPreferences>) -> String {
    let operator = context
        .store_mut()
        .create_operator("Luca Bianchi", "GPG", Availability::Available);
    if let Some(preferences) = preferences {
        context
            .store_mut()
            .update_notification_preferences(&operator.id, preferences);
    }
    operator.id
}

#[test]
fn test_assignment_notification_contains_details() {
    let (mut context, _push) = context_with_push();
    let (_, _, event_id) = seed_event(context.store_mut());
    let operator_id: String = seed_operator(&mut context, Some(all_preferences_enabled()));

    let shift = context.create_shift(overnight_shift(&event_id, vec![operator_id.clone()]));

    let notifications = context.store().operator_notifications(&operator_id);
    assert_eq!(notifications.len(), 1);
    let notification = &notifications[0];
    assert_eq!(notification.title, "Nuovo turno assegnato");
    assert_eq!(notification.kind, NotificationKind::Assignment);
    assert!(notification.message.contains("Alfa - BrandX"));
    assert!(notification.message.contains("BrandX - Via Roma 1"));
    assert!(notification.message.contains("10/01/25"));
    assert!(notification.message.contains("20:00-04:00"));
    assert!(notification.message.contains("Attività non specificata"));
    assert!(notification.message.contains("2 operatori richiesti"));
    assert_eq!(notification.shift_id.as_deref(), Some(shift.id.as_str()));
    assert_eq!(notification.event_id.as_deref(), Some(event_id.as_str()));
    assert!(!notification.read);
}

#[test]
fn test_missing_preferences_suppress_notification() {
    let (mut context, _push) = context_with_push();
    let (_, _, event_id) = seed_event(context.store_mut());
    let operator_id: String = seed_operator(&mut context, None);

    context.create_shift(overnight_shift(&event_id, vec![operator_id.clone()]));

    assert!(context.store().operator_notifications(&operator_id).is_empty());
}

#[test]
fn test_disabled_category_suppresses_notification() {
    let (mut context, _push) = context_with_push();
    let (_, _, event_id) = seed_event(context.store_mut());
    let operator_id: String = seed_operator(
        &mut context,
        Some(NotificationPreferences {
            shift_assignment: false,
            shift_updates: true,
            shift_cancellation: true,
        }),
    );

    context.create_shift(overnight_shift(&event_id, vec![operator_id.clone()]));

    assert!(context.store().operator_notifications(&operator_id).is_empty());
}

#[test]
fn test_unknown_operator_in_slot_is_ignored() {
    let (mut context, _push) = context_with_push();
    let (_, _, event_id) = seed_event(context.store_mut());

    // Slots may reference operators that were never registered; nothing to
    // notify, nothing to fail.
    context.create_shift(overnight_shift(&event_id, vec![String::from("ghost")]));
}

#[test]
fn test_update_notification_lists_changes() {
    let (mut context, _push) = context_with_push();
    let (_, _, event_id) = seed_event(context.store_mut());
    let operator_id: String = seed_operator(&mut context, Some(all_preferences_enabled()));
    let shift = context.create_shift(overnight_shift(&event_id, vec![operator_id.clone()]));

    context.update_shift_time(&shift.id, Some("21:00"), Some("05:00"));

    let notifications = context.store().operator_notifications(&operator_id);
    assert_eq!(notifications.len(), 2);
    let update = &notifications[1];
    assert_eq!(update.title, "Turno modificato");
    assert_eq!(update.kind, NotificationKind::Update);
    assert!(update.message.contains("🔄 Modifiche: orario 21:00-05:00"));
    assert!(update.message.contains("Alfa - BrandX"));
}

#[test]
fn test_cancellation_fallback_uses_event_title() {
    let (mut context, _push) = context_with_push();
    let (_, _, event_id) = seed_event(context.store_mut());
    let operator_id: String = seed_operator(&mut context, Some(all_preferences_enabled()));
    let shift = context.create_shift(overnight_shift(&event_id, vec![operator_id.clone()]));

    context.delete_shift(&shift.id);

    let notifications = context.store().operator_notifications(&operator_id);
    let cancellation = &notifications[1];
    assert_eq!(cancellation.title, "Turno cancellato");
    assert_eq!(cancellation.kind, NotificationKind::Cancellation);
    assert_eq!(
        cancellation.message,
        "Il turno \"Evento Alfa\" è stato cancellato"
    );
    assert!(cancellation.shift_id.is_none());
}

#[test]
fn test_removal_sends_cancellation_with_details() {
    let (mut context, _push) = context_with_push();
    let (_, _, event_id) = seed_event(context.store_mut());
    let operator_id: String = seed_operator(&mut context, Some(all_preferences_enabled()));
    let shift = context.create_shift(overnight_shift(&event_id, vec![operator_id.clone()]));

    context.remove_operator(&shift.id, &operator_id);

    let notifications = context.store().operator_notifications(&operator_id);
    let cancellation = &notifications[1];
    assert_eq!(cancellation.title, "Turno cancellato");
    assert!(cancellation.message.contains("❌ Il turno è stato annullato"));
    assert!(cancellation.message.contains("Alfa - BrandX"));
}

#[test]
fn test_replace_notifies_both_operators() {
    let (mut context, _push) = context_with_push();
    let (_, _, event_id) = seed_event(context.store_mut());
    let old_id: String = seed_operator(&mut context, Some(all_preferences_enabled()));
    let new_id: String = seed_operator(&mut context, Some(all_preferences_enabled()));
    let shift = context.create_shift(overnight_shift(&event_id, vec![old_id.clone()]));

    context.replace_operator(&shift.id, &old_id, &new_id);

    let old_notifications = context.store().operator_notifications(&old_id);
    assert_eq!(old_notifications[1].kind, NotificationKind::Cancellation);
    let new_notifications = context.store().operator_notifications(&new_id);
    assert_eq!(new_notifications.len(), 1);
    assert_eq!(new_notifications[0].kind, NotificationKind::Assignment);
}

#[test]
fn test_push_sent_only_with_subscription() {
    let (mut context, push) = context_with_push();
    let (_, _, event_id) = seed_event(context.store_mut());
    let operator_id: String = seed_operator(&mut context, Some(all_preferences_enabled()));

    context.create_shift(overnight_shift(&event_id, vec![operator_id.clone()]));
    assert!(push.sent.lock().unwrap().is_empty());

    context
        .store_mut()
        .set_push_subscription(&operator_id, create_test_subscription());
    let shift = context.create_shift(overnight_shift(&event_id, vec![operator_id.clone()]));

    let sent = push.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "Nuovo turno assegnato");
    assert!(shift.has_operator(&operator_id));
}

#[test]
fn test_push_data_links_event() {
    let (mut context, push) = context_with_push();
    let (_, _, event_id) = seed_event(context.store_mut());
    let operator_id: String = seed_operator(&mut context, Some(all_preferences_enabled()));
    context
        .store_mut()
        .set_push_subscription(&operator_id, create_test_subscription());

    context.create_shift(overnight_shift(&event_id, vec![operator_id]));

    let sent = push.sent.lock().unwrap();
    assert_eq!(sent[0].2.as_deref(), Some(format!("/events/{event_id}").as_str()));
}
