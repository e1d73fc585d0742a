use chrono::{NaiveDate, Utc};

use crate::ports::clock::Clock as ClockTrait;

/// 壁時計による実装（UTCの日付）
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockTrait for Clock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
