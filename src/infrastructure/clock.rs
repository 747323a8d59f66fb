use crate::domain::ports::{Clock, ClockBox};
use chrono::{Local, NaiveDateTime};

/// Reads the machine's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant, for reruns and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// The clock used when a component is built without one.
pub fn default_clock() -> ClockBox {
    Box::new(SystemClock)
}
