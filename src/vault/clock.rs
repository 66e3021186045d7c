//! Where "today" comes from.
//!
//! Record dates are calendar dates with no time component.  The store
//! asks its `Clock` for today's date so date-dependent behavior
//! (`lastUpdated`, the stale-password count) can be pinned in tests.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Days, NaiveDate, Utc};

/// A source of the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The real UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A manually driven date.  Clones share the same date, so a test can
/// keep one handle and advance the store's clock from outside.
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Rc<Cell<NaiveDate>>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Rc::new(Cell::new(date)),
        }
    }

    pub fn advance_days(&self, days: u64) {
        let current = self.date.get();
        self.date
            .set(current.checked_add_days(Days::new(days)).unwrap_or(current));
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_clones_share_date() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let handle = clock.clone();
        handle.advance_days(5);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
    }
}
