//! # Temporal Seam — Injected Calendar Dates
//!
//! Project lifecycle derivation depends on "today", and the dates involved
//! are calendar dates with no time component. Reading the system clock
//! directly inside domain logic would make every derivation untestable, so
//! "today" flows in through the [`Clock`] trait instead.
//!
//! Production code uses [`SystemClock`]; tests pin a [`FixedClock`] so the
//! same snapshot always derives the same status.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// The current date, in the server's local calendar.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
