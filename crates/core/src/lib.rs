// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Core of the Presidio scheduling system.
//!
//! The [`EntityStore`] is the single source of truth for all entity
//! collections. Assignment-affecting mutators return the [`ChangeEvent`]s
//! they produced; the [`AppContext`] forwards them to the
//! [`NotificationDispatcher`], which appends per-operator notification
//! records back into the store and attempts best-effort push delivery.
//! Derived views recompute from current collections on every call and are
//! never cached.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod context;
mod dispatcher;
mod event;
mod push;
mod store;
mod views;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use context::AppContext;
pub use dispatcher::NotificationDispatcher;
pub use event::ChangeEvent;
pub use push::{LoggingPushTransport, PushError, PushTransport};
pub use store::{
    ClientPatch, EntityStore, EventPatch, MAX_NOTIFICATIONS_PER_OPERATOR, NewEvent, NewShift,
    OperatorPatch, StoreSnapshot,
};
pub use views::{
    EventSummary, ShiftTotals, SortDirection, SortKey, UPCOMING_DISPLAY_LIMIT, event_shift_rows,
    event_summary, operator_display_name, shift_totals, upcoming_shifts,
};
