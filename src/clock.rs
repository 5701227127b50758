//! Sources of the current time.
//!
//! Anything that needs to know what time it is takes a [`Clock`] rather
//! than asking the operating system directly, so that the same code can be
//! run against a frozen moment.

use tracing::trace;

use crate::cal::datetime::{LocalDate, LocalDateTime};
use crate::instant::Instant;
use crate::system::sys_time;


/// Something that can say what the time is now.
pub trait Clock {

    /// The current instant.
    fn now(&self) -> Instant;

    /// The current date and time of day, without a time zone.
    fn local_now(&self) -> LocalDateTime {
        LocalDateTime::from_instant(self.now())
    }

    /// The current date.
    fn today(&self) -> LocalDate {
        self.local_now().date()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}


/// The operating system’s wall clock, read as UTC with millisecond
/// precision.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        let (seconds, milliseconds) = unsafe { sys_time() };
        trace!(seconds, milliseconds, "read system clock");
        Instant::at_ms(seconds, milliseconds)
    }
}


/// A clock that is stopped at one instant.
///
/// ```
/// use datecmp::{Clock, FixedClock, LocalDateTime, LocalDate, LocalTime, Month};
///
/// let then = LocalDateTime::new(LocalDate::ymd(2020, Month::July, 20).unwrap(), LocalTime::hm(9, 30).unwrap());
/// let clock = FixedClock::at(then);
///
/// assert_eq!(clock.local_now(), then);
/// assert_eq!(clock.today(), LocalDate::ymd(2020, Month::July, 20).unwrap());
/// ```
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct FixedClock {
    instant: Instant,
}

impl FixedClock {

    /// A clock stopped at the given instant.
    pub fn new(instant: Instant) -> Self {
        Self { instant }
    }

    /// A clock stopped at the given local date-time.
    pub fn at(datetime: LocalDateTime) -> Self {
        Self::new(datetime.to_instant())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.instant
    }
}
