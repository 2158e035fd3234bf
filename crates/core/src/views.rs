// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived read models.
//!
//! Every function here recomputes from the store's current collections on
//! each call. Nothing is cached; a view can never go stale relative to the
//! collections it reads.

use crate::store::EntityStore;
use presidio_domain::{
    Shift, ShiftRow, flatten_shifts, total_effective_hours, total_operator_hours,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Maximum rows returned by [`upcoming_shifts`].
pub const UPCOMING_DISPLAY_LIMIT: usize = 5;

const UNKNOWN_OPERATOR: &str = "Operatore sconosciuto";

/// Column to sort the per-slot roster by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Shift calendar date.
    Date,
    /// Shift start time.
    StartTime,
    /// Shift end time.
    EndTime,
    /// Service category label.
    Activity,
    /// Assigned operator's name, surname first; open slots sort last.
    Operator,
    /// Pause-adjusted shift hours.
    Hours,
}

/// Sort direction for the per-slot roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Ascending,
    /// Descending.
    Descending,
}

/// Aggregate staffing figures over a set of shifts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTotals {
    /// Number of shifts.
    pub shift_count: usize,
    /// Slots currently occupied, over all shifts.
    pub occupied_slots: usize,
    /// Slots requested, over all shifts.
    pub required_slots: u64,
    /// Sum of pause-adjusted shift durations.
    pub effective_hours: f64,
    /// Sum of per-shift effective hours weighted by occupied slots.
    pub operator_hours: f64,
}

/// An event joined with its client/brand names and staffing totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    /// The event's identifier.
    pub event_id: String,
    /// The event's title.
    pub title: String,
    /// Owning client's name, or a placeholder when unresolvable.
    pub client_name: String,
    /// Owning brand's name, or a placeholder when unresolvable.
    pub brand_name: String,
    /// Resolved site address.
    pub address: String,
    /// Staffing totals over the event's shifts.
    pub totals: ShiftTotals,
    /// Checklist tasks on the event.
    pub task_count: usize,
    /// Checklist tasks already completed.
    pub completed_task_count: usize,
}

/// Computes staffing totals over the given shifts.
#[must_use]
pub fn shift_totals(shifts: &[Shift]) -> ShiftTotals {
    ShiftTotals {
        shift_count: shifts.len(),
        occupied_slots: shifts.iter().map(Shift::occupied_slots).sum(),
        required_slots: shifts
            .iter()
            .map(|shift| u64::from(shift.required_operators))
            .sum(),
        effective_hours: total_effective_hours(shifts),
        operator_hours: total_operator_hours(shifts),
    }
}

/// Resolves an operator's display name, falling back to a placeholder for
/// an unknown identifier.
#[must_use]
pub fn operator_display_name(store: &EntityStore, operator_id: &str) -> String {
    store
        .operator(operator_id)
        .map_or_else(|| UNKNOWN_OPERATOR.to_string(), |operator| operator.name.clone())
}

/// Surname-first sort label: "Luca Bianchi" sorts as "Bianchi Luca".
/// Open slots get a label past every real name so they trail the roster.
fn row_operator_sort_name(store: &EntityStore, row: &ShiftRow) -> String {
    if !row.is_assigned {
        return "\u{10FFFF}".to_string();
    }
    let name: String = operator_display_name(store, &row.operator_id);
    let mut parts: Vec<&str> = name.split_whitespace().collect();
    match parts.pop() {
        Some(surname) if !parts.is_empty() => format!("{surname} {}", parts.join(" ")),
        _ => name,
    }
}

/// Flattens an event's shifts into one row per slot, sorted by the given
/// key. Ties keep the stable shift-then-slot order of the underlying
/// collection.
#[must_use]
pub fn event_shift_rows(
    store: &EntityStore,
    event_id: &str,
    key: SortKey,
    direction: SortDirection,
) -> Vec<ShiftRow> {
    let shifts: Vec<Shift> = store
        .shifts_by_event(event_id)
        .into_iter()
        .cloned()
        .collect();
    let mut rows: Vec<ShiftRow> = flatten_shifts(&shifts);
    rows.sort_by(|a, b| {
        let ordering: Ordering = match key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::StartTime => a.start_time.cmp(&b.start_time),
            SortKey::EndTime => a.end_time.cmp(&b.end_time),
            SortKey::Activity => a
                .activity_type
                .map_or("", |activity| activity.as_str())
                .cmp(b.activity_type.map_or("", |activity| activity.as_str())),
            SortKey::Operator => {
                row_operator_sort_name(store, a).cmp(&row_operator_sort_name(store, b))
            }
            SortKey::Hours => a
                .effective_hours()
                .partial_cmp(&b.effective_hours())
                .unwrap_or(Ordering::Equal),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    rows
}

/// Joins an event with its client/brand names, staffing totals, and task
/// counts. `None` for an unknown event.
#[must_use]
pub fn event_summary(store: &EntityStore, event_id: &str) -> Option<EventSummary> {
    let event = store.event(event_id)?;
    let client_name: String = store.client(&event.client_id).map_or_else(
        || "Cliente sconosciuto".to_string(),
        |client| client.name.clone(),
    );
    let brand_name: String = store.brand(&event.brand_id).map_or_else(
        || "Brand sconosciuto".to_string(),
        |brand| brand.name.clone(),
    );
    let shifts: Vec<Shift> = store
        .shifts_by_event(event_id)
        .into_iter()
        .cloned()
        .collect();
    let tasks = store.tasks_by_event(event_id);
    Some(EventSummary {
        event_id: event.id.clone(),
        title: event.title.clone(),
        client_name,
        brand_name,
        address: event.address.clone(),
        totals: shift_totals(&shifts),
        task_count: tasks.len(),
        completed_task_count: tasks.iter().filter(|task| task.completed).count(),
    })
}

/// The operator's next shifts: shifts the operator occupies whose date is
/// today or later, ascending by date then start time, capped at `limit`
/// ([`UPCOMING_DISPLAY_LIMIT`] in the dashboard).
#[must_use]
pub fn upcoming_shifts(store: &EntityStore, operator_id: &str, limit: usize) -> Vec<Shift> {
    let today: String = store.today_iso();
    let mut shifts: Vec<Shift> = store
        .shifts()
        .iter()
        .filter(|shift| shift.has_operator(operator_id) && shift.date >= today)
        .cloned()
        .collect();
    shifts.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
    shifts.truncate(limit);
    shifts
}
