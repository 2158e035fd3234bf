// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Persistence, PersistenceError};
use presidio::StoreSnapshot;
use presidio_domain::{Availability, Client, Operator, Shift};

fn sample_snapshot() -> StoreSnapshot {
    StoreSnapshot {
        clients: vec![Client {
            id: String::from("c1"),
            name: String::from("Alfa"),
            vat_number: String::from("12345678901"),
            contact_persons: Vec::new(),
        }],
        brands: Vec::new(),
        operators: vec![Operator {
            id: String::from("o1"),
            name: String::from("Luca Bianchi"),
            role: String::from("GPG"),
            availability: Availability::Available,
            phone: None,
            email: None,
            fiscal_code: None,
            photo: None,
            notifications: Vec::new(),
            notification_preferences: None,
            push_subscription: None,
        }],
        events: Vec::new(),
        shifts: vec![Shift {
            id: String::from("s1"),
            event_id: String::from("e1"),
            date: String::from("2025-01-10"),
            start_time: String::from("20:00"),
            end_time: String::from("04:00"),
            operator_ids: vec![String::from("o1"), String::new()],
            activity_type: None,
            team_leader_id: Some(String::from("o1")),
            required_operators: 2,
            notes: None,
            pause_hours: Some(1.0),
        }],
        tasks: Vec::new(),
    }
}

#[test]
fn test_fresh_database_loads_empty_snapshot() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let snapshot: StoreSnapshot = persistence.load_snapshot().unwrap();

    assert_eq!(snapshot, StoreSnapshot::default());
}

#[test]
fn test_save_and_load_round_trip() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let snapshot: StoreSnapshot = sample_snapshot();

    persistence.save_snapshot(&snapshot).unwrap();
    let loaded: StoreSnapshot = persistence.load_snapshot().unwrap();

    assert_eq!(loaded, snapshot);
}

#[test]
fn test_save_replaces_previous_payload() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.save_snapshot(&sample_snapshot()).unwrap();

    let mut updated: StoreSnapshot = sample_snapshot();
    updated.clients[0].name = String::from("Alfa Srl");
    updated.shifts.clear();
    persistence.save_snapshot(&updated).unwrap();

    let loaded: StoreSnapshot = persistence.load_snapshot().unwrap();
    assert_eq!(loaded.clients[0].name, "Alfa Srl");
    assert!(loaded.shifts.is_empty());
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first: Persistence = Persistence::new_in_memory().unwrap();
    let mut second: Persistence = Persistence::new_in_memory().unwrap();

    first.save_snapshot(&sample_snapshot()).unwrap();

    let loaded: Result<StoreSnapshot, PersistenceError> = second.load_snapshot();
    assert_eq!(loaded.unwrap(), StoreSnapshot::default());
}

#[test]
fn test_file_database_persists_across_connections() {
    let dir = std::env::temp_dir().join(format!("presidio-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("snapshot.db");

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence.save_snapshot(&sample_snapshot()).unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    let loaded: StoreSnapshot = reopened.load_snapshot().unwrap();
    assert_eq!(loaded, sample_snapshot());

    std::fs::remove_dir_all(&dir).ok();
}
