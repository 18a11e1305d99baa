use crate::application::ports::time::Clock;
use chrono::{DateTime, Duration, Timelike, Utc};

/// Wall clock at the precision PostgreSQL stores (microseconds).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        ceil_to_micros(Utc::now())
    }
}

/// Rounds up so a stored timestamp is never earlier than the instant it was taken.
pub fn ceil_to_micros(at: DateTime<Utc>) -> DateTime<Utc> {
    let sub_micro = at.nanosecond() % 1_000;
    if sub_micro == 0 {
        at
    } else {
        at + Duration::nanoseconds(i64::from(1_000 - sub_micro))
    }
}
