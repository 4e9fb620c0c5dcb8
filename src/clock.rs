use chrono::{Local, NaiveDate};

/// Source of "today" for the month overview. Lets rendering be driven by a
/// fixed date in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
