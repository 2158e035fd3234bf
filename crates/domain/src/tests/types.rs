// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ACTIVITY_TYPES, ActivityType, Availability, DomainError, NotificationKind, Shift};
use std::str::FromStr;

#[test]
fn test_availability_round_trips_legacy_labels() {
    for state in [
        Availability::Available,
        Availability::Busy,
        Availability::OnLeave,
    ] {
        let parsed: Availability = Availability::from_str(state.as_str()).unwrap();
        assert_eq!(parsed, state);
    }
}

#[test]
fn test_availability_rejects_unknown_label() {
    let result: Result<Availability, DomainError> = Availability::from_str("Assente");
    assert!(matches!(result, Err(DomainError::InvalidAvailability(_))));
}

#[test]
fn test_availability_serde_uses_legacy_labels() {
    let json: String = serde_json::to_string(&Availability::OnLeave).unwrap();
    assert_eq!(json, "\"In ferie\"");
}

#[test]
fn test_activity_type_parse_round_trips_all_labels() {
    for activity in ACTIVITY_TYPES {
        let parsed: ActivityType = ActivityType::parse(activity.as_str()).unwrap();
        assert_eq!(parsed, activity);
    }
}

#[test]
fn test_activity_type_rejects_unknown_label() {
    let result: Result<ActivityType, DomainError> = ActivityType::parse("piantonamento");
    assert!(matches!(result, Err(DomainError::InvalidActivityType(_))));
}

#[test]
fn test_notification_kind_wire_labels() {
    assert_eq!(NotificationKind::Assignment.as_str(), "shift_assignment");
    assert_eq!(NotificationKind::Update.as_str(), "shift_update");
    assert_eq!(NotificationKind::Cancellation.as_str(), "shift_cancellation");
}

#[test]
fn test_shift_has_operator_never_matches_open_slot() {
    let shift: Shift = Shift {
        id: String::from("s1"),
        event_id: String::from("e1"),
        date: String::from("2025-01-10"),
        start_time: String::from("08:00"),
        end_time: String::from("16:00"),
        operator_ids: vec![String::from("o1"), String::new()],
        activity_type: None,
        team_leader_id: None,
        required_operators: 2,
        notes: None,
        pause_hours: None,
    };

    assert!(shift.has_operator("o1"));
    assert!(!shift.has_operator("o2"));
    // The blank sentinel is "slot open", not an operator.
    assert!(!shift.has_operator(""));
}

#[test]
fn test_shift_serde_camel_case_wire_format() {
    let shift: Shift = Shift {
        id: String::from("s1"),
        event_id: String::from("e1"),
        date: String::from("2025-01-10"),
        start_time: String::from("20:00"),
        end_time: String::from("04:00"),
        operator_ids: vec![String::from("o1")],
        activity_type: Some(ActivityType::Doorman),
        team_leader_id: None,
        required_operators: 1,
        notes: None,
        pause_hours: Some(0.5),
    };

    let json: serde_json::Value = serde_json::to_value(&shift).unwrap();
    assert_eq!(json["eventId"], "e1");
    assert_eq!(json["startTime"], "20:00");
    assert_eq!(json["operatorIds"][0], "o1");
    assert_eq!(json["activityType"], "doorman");
    assert_eq!(json["requiredOperators"], 1);
    assert!(json.get("teamLeaderId").is_none());
}
