// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A domain event describing an assignment-affecting store mutation.
///
/// Mutators return the events they produced instead of calling the
/// notification layer themselves; the application context forwards them to
/// the dispatcher. This keeps the coupling between slot mutation and
/// notification structural rather than caller-remembered.
///
/// Events that touch a whole shift carry the occupied operator IDs as they
/// were at mutation time, so the dispatcher does not depend on the shift
/// still existing (deletion) or still holding the same operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// An operator was placed into a slot.
    OperatorAssigned {
        /// The shift whose slot was filled.
        shift_id: String,
        /// The operator now occupying the slot.
        operator_id: String,
    },
    /// An operator was removed from a shift (slot cleared or shrunk away).
    OperatorRemoved {
        /// The shift the operator was removed from.
        shift_id: String,
        /// The operator no longer occupying a slot.
        operator_id: String,
    },
    /// One operator was swapped for another in place.
    OperatorReplaced {
        /// The shift whose slot changed hands.
        shift_id: String,
        /// The previous occupant.
        old_operator_id: String,
        /// The new occupant.
        new_operator_id: String,
    },
    /// A shift's shared fields changed (date, time, activity, pause).
    ShiftUpdated {
        /// The modified shift.
        shift_id: String,
        /// Operators occupying slots when the change was made.
        operator_ids: Vec<String>,
        /// Human-readable description of what changed.
        change: String,
    },
    /// A shift was deleted outright.
    ShiftDeleted {
        /// The deleted shift's identifier.
        shift_id: String,
        /// The owning event's title, when it could still be resolved.
        event_title: Option<String>,
        /// Operators who occupied slots at deletion time.
        operator_ids: Vec<String>,
    },
}
