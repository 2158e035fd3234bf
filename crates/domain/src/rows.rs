// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::hours;
use crate::types::{ActivityType, Shift};
use serde::{Deserialize, Serialize};

/// One display row of a shift table: a single operator slot, carrying the
/// shift's shared fields.
///
/// A shift with N slots flattens to N rows, one per slot index, in slot
/// order. Each occupied row represents one operator's assignment and
/// contributes its own effective hours to running totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRow {
    /// The shift this row belongs to.
    pub shift_id: String,
    /// The owning event.
    pub event_id: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Start of shift, `HH:MM`.
    pub start_time: String,
    /// End of shift, `HH:MM`.
    pub end_time: String,
    /// Service category.
    pub activity_type: Option<ActivityType>,
    /// Pause hours applied to this shift.
    pub pause_hours: f64,
    /// This row's slot index within the shift.
    pub slot_index: usize,
    /// The occupant of this slot; blank when the slot is open.
    pub operator_id: String,
    /// Whether the slot is occupied (non-blank after trimming).
    pub is_assigned: bool,
    /// Whether the occupant is the shift's team leader.
    pub is_team_leader: bool,
}

impl ShiftRow {
    /// Effective hours for this row's shift.
    #[must_use]
    pub fn effective_hours(&self) -> f64 {
        hours::effective_hours(&self.start_time, &self.end_time, self.pause_hours)
    }
}

/// Expands each shift into one row per operator slot, preserving shift
/// order and slot order. This is the flatten order used as the stable
/// tie-break when rows are later sorted.
#[must_use]
pub fn flatten_shifts(shifts: &[Shift]) -> Vec<ShiftRow> {
    let mut rows: Vec<ShiftRow> = Vec::new();
    for shift in shifts {
        for (slot_index, operator_id) in shift.operator_ids.iter().enumerate() {
            let is_assigned: bool = !operator_id.trim().is_empty();
            rows.push(ShiftRow {
                shift_id: shift.id.clone(),
                event_id: shift.event_id.clone(),
                date: shift.date.clone(),
                start_time: shift.start_time.clone(),
                end_time: shift.end_time.clone(),
                activity_type: shift.activity_type,
                pause_hours: shift.pause_hours.unwrap_or(0.0),
                slot_index,
                operator_id: operator_id.clone(),
                is_assigned,
                is_team_leader: is_assigned
                    && shift.team_leader_id.as_deref() == Some(operator_id.as_str()),
            });
        }
    }
    rows
}
