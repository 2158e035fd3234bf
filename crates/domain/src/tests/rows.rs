// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{ActivityType, Shift};
use crate::{ShiftRow, flatten_shifts};

fn create_test_shift(id: &str, operator_ids: Vec<&str>, team_leader: Option<&str>) -> Shift {
    Shift {
        id: id.to_string(),
        event_id: String::from("e1"),
        date: String::from("2025-01-10"),
        start_time: String::from("20:00"),
        end_time: String::from("04:00"),
        operator_ids: operator_ids.into_iter().map(String::from).collect(),
        activity_type: Some(ActivityType::PresidioNotturno),
        team_leader_id: team_leader.map(String::from),
        required_operators: 2,
        notes: None,
        pause_hours: Some(1.0),
    }
}

#[test]
fn test_flatten_produces_one_row_per_slot() {
    let shifts: Vec<Shift> = vec![create_test_shift("s1", vec!["o1", "", "o2"], None)];
    let rows: Vec<ShiftRow> = flatten_shifts(&shifts);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].slot_index, 0);
    assert_eq!(rows[1].slot_index, 1);
    assert_eq!(rows[2].slot_index, 2);
}

#[test]
fn test_flatten_marks_assignment_state() {
    let shifts: Vec<Shift> = vec![create_test_shift("s1", vec!["o1", ""], None)];
    let rows: Vec<ShiftRow> = flatten_shifts(&shifts);

    assert!(rows[0].is_assigned);
    assert_eq!(rows[0].operator_id, "o1");
    assert!(!rows[1].is_assigned);
    assert_eq!(rows[1].operator_id, "");
}

#[test]
fn test_flatten_carries_shared_shift_fields() {
    let shifts: Vec<Shift> = vec![create_test_shift("s1", vec!["o1"], None)];
    let rows: Vec<ShiftRow> = flatten_shifts(&shifts);

    assert_eq!(rows[0].shift_id, "s1");
    assert_eq!(rows[0].date, "2025-01-10");
    assert_eq!(rows[0].start_time, "20:00");
    assert_eq!(rows[0].end_time, "04:00");
    assert_eq!(rows[0].activity_type, Some(ActivityType::PresidioNotturno));
    assert!((rows[0].pause_hours - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_flatten_marks_team_leader_row_only() {
    let shifts: Vec<Shift> = vec![create_test_shift("s1", vec!["o1", "o2"], Some("o2"))];
    let rows: Vec<ShiftRow> = flatten_shifts(&shifts);

    assert!(!rows[0].is_team_leader);
    assert!(rows[1].is_team_leader);
}

#[test]
fn test_flatten_preserves_shift_then_slot_order() {
    let shifts: Vec<Shift> = vec![
        create_test_shift("s1", vec!["o1", "o2"], None),
        create_test_shift("s2", vec!["o3"], None),
    ];
    let rows: Vec<ShiftRow> = flatten_shifts(&shifts);

    let shift_ids: Vec<&str> = rows.iter().map(|row| row.shift_id.as_str()).collect();
    assert_eq!(shift_ids, vec!["s1", "s1", "s2"]);
}

#[test]
fn test_row_effective_hours_matches_shift_arithmetic() {
    let shifts: Vec<Shift> = vec![create_test_shift("s1", vec!["o1"], None)];
    let rows: Vec<ShiftRow> = flatten_shifts(&shifts);

    // 20:00-04:00 with one pause hour: 7 effective hours.
    assert!((rows[0].effective_hours() - 7.0).abs() < f64::EPSILON);
}

#[test]
fn test_flatten_empty_input() {
    let rows: Vec<ShiftRow> = flatten_shifts(&[]);
    assert!(rows.is_empty());
}
