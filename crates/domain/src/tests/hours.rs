// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Shift;
use crate::{
    effective_hours, occupied_slots, operator_hours, round2, total_effective_hours,
    total_operator_hours,
};

fn create_test_shift(start: &str, end: &str, pause: f64, operator_ids: Vec<&str>) -> Shift {
    Shift {
        id: String::from("s1"),
        event_id: String::from("e1"),
        date: String::from("2025-01-10"),
        start_time: start.to_string(),
        end_time: end.to_string(),
        operator_ids: operator_ids.into_iter().map(String::from).collect(),
        activity_type: None,
        team_leader_id: None,
        required_operators: 2,
        notes: None,
        pause_hours: Some(pause),
    }
}

#[test]
fn test_effective_hours_same_day_exact() {
    let hours: f64 = effective_hours("09:00", "17:00", 0.0);
    assert!((hours - 8.0).abs() < f64::EPSILON);
}

#[test]
fn test_effective_hours_half_hour_precision() {
    let hours: f64 = effective_hours("09:15", "17:45", 0.0);
    assert!((hours - 8.5).abs() < f64::EPSILON);
}

#[test]
fn test_effective_hours_overnight_wraps_forward() {
    let hours: f64 = effective_hours("22:00", "02:00", 0.0);
    assert!((hours - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_effective_hours_overnight_with_pause() {
    // 20:00-04:00 is 8 gross hours across midnight; 1 pause hour leaves 7.
    let hours: f64 = effective_hours("20:00", "04:00", 1.0);
    assert!((hours - 7.0).abs() < f64::EPSILON);
}

#[test]
fn test_effective_hours_pause_floors_at_zero() {
    let hours: f64 = effective_hours("09:00", "10:00", 5.0);
    assert!(hours.abs() < f64::EPSILON);
}

#[test]
fn test_effective_hours_pause_monotonicity() {
    let pauses: [f64; 5] = [0.0, 0.5, 1.0, 2.0, 10.0];
    let mut previous: f64 = f64::MAX;
    for pause in pauses {
        let hours: f64 = effective_hours("08:00", "18:00", pause);
        assert!(hours <= previous, "pause {pause} broke monotonicity");
        assert!(hours >= 0.0);
        previous = hours;
    }
}

#[test]
fn test_effective_hours_zero_length_shift() {
    let hours: f64 = effective_hours("08:00", "08:00", 0.0);
    assert!(hours.abs() < f64::EPSILON);
}

#[test]
fn test_effective_hours_malformed_start_returns_zero() {
    let hours: f64 = effective_hours("ab:cd", "17:00", 0.0);
    assert!(hours.abs() < f64::EPSILON);
}

#[test]
fn test_effective_hours_malformed_end_returns_zero() {
    let hours: f64 = effective_hours("09:00", "25:61", 0.0);
    assert!(hours.abs() < f64::EPSILON);
}

#[test]
fn test_effective_hours_missing_separator_returns_zero() {
    let hours: f64 = effective_hours("0900", "1700", 0.0);
    assert!(hours.abs() < f64::EPSILON);
}

#[test]
fn test_effective_hours_negative_pause_returns_zero() {
    let hours: f64 = effective_hours("09:00", "17:00", -1.0);
    assert!(hours.abs() < f64::EPSILON);
}

#[test]
fn test_round2_rounds_for_display() {
    assert!((round2(7.004_999) - 7.0).abs() < f64::EPSILON);
    assert!((round2(6.666_666) - 6.67).abs() < f64::EPSILON);
}

#[test]
fn test_operator_hours_multiplies_by_count() {
    let hours: f64 = operator_hours(7.5, 3);
    assert!((hours - 22.5).abs() < f64::EPSILON);
}

#[test]
fn test_occupied_slots_ignores_blank_sentinels() {
    let slots: Vec<String> = vec![
        String::from("o1"),
        String::new(),
        String::from("  "),
        String::from("o2"),
    ];
    assert_eq!(occupied_slots(&slots), 2);
}

#[test]
fn test_total_effective_hours_sums_shifts() {
    let shifts: Vec<Shift> = vec![
        create_test_shift("09:00", "17:00", 0.0, vec!["o1"]),
        create_test_shift("22:00", "02:00", 1.0, vec!["o2"]),
    ];
    let total: f64 = total_effective_hours(&shifts);
    assert!((total - 11.0).abs() < f64::EPSILON);
}

#[test]
fn test_total_operator_hours_weights_by_occupied_slots() {
    // 8h with two operators plus 3h with one operator, open slots ignored.
    let shifts: Vec<Shift> = vec![
        create_test_shift("09:00", "17:00", 0.0, vec!["o1", "o2", ""]),
        create_test_shift("10:00", "13:00", 0.0, vec!["o3"]),
    ];
    let total: f64 = total_operator_hours(&shifts);
    assert!((total - 19.0).abs() < f64::EPSILON);
}
