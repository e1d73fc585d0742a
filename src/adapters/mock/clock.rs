use crate::ports::clock::Clock as ClockTrait;
use chrono::{Duration, NaiveDate};
use std::sync::Mutex;

/// Mock implementation of Clock
///
/// Returns a fixed date that tests can move forward explicitly.
#[derive(Debug)]
pub struct Clock {
    today: Mutex<NaiveDate>,
}

impl Clock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    /// Set the date returned by `today()`
    pub fn set(&self, today: NaiveDate) {
        *self.today.lock().unwrap() = today;
    }

    /// Move the clock forward by the given number of days
    pub fn advance_days(&self, days: i64) {
        let mut today = self.today.lock().unwrap();
        *today += Duration::days(days);
    }
}

impl ClockTrait for Clock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap()
    }
}
