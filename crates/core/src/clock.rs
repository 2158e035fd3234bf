// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, OffsetDateTime};

/// An injectable source of the current date and time.
///
/// The store and the derived views never reach for a hidden global clock;
/// tests pin time with [`FixedClock`].
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// The current calendar date.
    fn today(&self) -> Date;

    /// The current instant.
    fn now(&self) -> OffsetDateTime;
}

/// The real wall clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: OffsetDateTime,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    #[must_use]
    pub const fn new(now: OffsetDateTime) -> Self {
        Self { now }
    }

    /// Creates a clock pinned to midnight UTC on the given date.
    #[must_use]
    pub const fn at_date(date: Date) -> Self {
        Self {
            now: date.midnight().assume_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.now.date()
    }

    fn now(&self) -> OffsetDateTime {
        self.now
    }
}
