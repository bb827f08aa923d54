use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of "now" for timestamps and of "today" for expiry math.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar date in the user's timezone.
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
