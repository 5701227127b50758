//! The older style of date handling: one combined date-and-clock-time
//! value counted in milliseconds, and a mutable calendar wrapped around it.
//!
//! These exist alongside `LocalDate` and `LocalDateTime` because a lot of
//! date code is still written against them. Both are ordered exactly as
//! the instants they hold.

use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::compare::Chronology;
use crate::cal::datetime::{Error, LocalDate, LocalTime, LocalDateTime, Month, Weekday};
use crate::cal::unit::Unit;
use crate::clock::Clock;
use crate::instant::Instant;


/// A **timestamp** is a date and a time of day, stored as the number of
/// milliseconds since **midnight, 1st January, 1970**, without a time
/// zone.
///
/// ```
/// use datecmp::{Chronology, LocalDate, Month};
/// use datecmp::legacy::Timestamp;
///
/// let first  = Timestamp::from_date(LocalDate::ymd(2020, Month::July, 20).unwrap()).unwrap();
/// let second = Timestamp::from_date(LocalDate::ymd(2020, Month::July, 21).unwrap()).unwrap();
///
/// assert!(first.is_before(&second));
/// assert_eq!(second.millis() - first.millis(), 86_400_000);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Timestamp {
    millis: i64,
}

impl Timestamp {

    /// A timestamp the given number of milliseconds after the epoch.
    pub fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// The timestamp for a local date-time. Date-times whose milliseconds
    /// since the epoch don’t fit are `OutOfRange`.
    pub fn from_local(datetime: LocalDateTime) -> Result<Self, Error> {
        Self::from_instant(datetime.to_instant())
    }

    /// The timestamp for midnight at the start of a date.
    pub fn from_date(date: LocalDate) -> Result<Self, Error> {
        Self::from_local(LocalDateTime::new(date, LocalTime::midnight()))
    }

    /// The timestamp for the clock’s current time.
    pub fn now<C: Clock + ?Sized>(clock: &C) -> Result<Self, Error> {
        Self::from_instant(clock.now())
    }

    fn from_instant(instant: Instant) -> Result<Self, Error> {
        instant.epoch_millis()
               .map(Self::from_millis)
               .ok_or(Error::OutOfRange)
    }

    /// The number of milliseconds since the epoch.
    pub fn millis(&self) -> i64 {
        self.millis
    }

    /// This timestamp as a local date-time.
    pub fn to_local(&self) -> LocalDateTime {
        LocalDateTime::from_instant(Instant::at_millis(self.millis))
    }
}

impl Chronology for Timestamp {}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Timestamp({}ms, {})", self.millis, self.to_local())
    }
}

impl TryFrom<LocalDateTime> for Timestamp {
    type Error = Error;

    fn try_from(datetime: LocalDateTime) -> Result<Self, Self::Error> {
        Self::from_local(datetime)
    }
}

impl From<Timestamp> for LocalDateTime {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.to_local()
    }
}


/// A **calendar** holds one timestamp, and can be pointed at another or
/// moved along by calendar units.
///
/// Calendars compare by the timestamp they hold, so wrapping two
/// timestamps in calendars never changes which comes first.
///
/// ```
/// use datecmp::{Chronology, FixedClock, Instant, LocalDate, Month};
/// use datecmp::legacy::{Calendar, Timestamp};
///
/// let clock = FixedClock::new(Instant::at_epoch());
/// let mut first = Calendar::new(&clock).unwrap();
/// let mut second = Calendar::new(&clock).unwrap();
/// assert!(first.is_equal(&second));
///
/// first.set_time(Timestamp::from_date(LocalDate::ymd(2020, Month::July, 20).unwrap()).unwrap());
/// second.set_time(Timestamp::from_date(LocalDate::ymd(2020, Month::July, 21).unwrap()).unwrap());
/// assert!(first.is_before(&second));
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Calendar {
    time: Timestamp,
}

impl Calendar {

    /// A calendar set to the clock’s current time.
    pub fn new<C: Clock + ?Sized>(clock: &C) -> Result<Self, Error> {
        Ok(Self { time: Timestamp::now(clock)? })
    }

    /// A calendar set to the given timestamp.
    pub fn at(time: Timestamp) -> Self {
        Self { time }
    }

    /// Points this calendar at another timestamp.
    pub fn set_time(&mut self, time: Timestamp) {
        self.time = time;
    }

    /// The timestamp this calendar currently holds.
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// Moves this calendar by an amount of some unit, in either direction.
    /// A move that fails leaves the calendar where it was.
    pub fn add(&mut self, amount: i64, unit: Unit) -> Result<(), Error> {
        let moved = self.time.to_local().plus(amount, unit)?;
        self.time = Timestamp::from_local(moved)?;
        Ok(())
    }
}

impl Chronology for Calendar {}

impl DatePiece for Calendar {
    fn year(&self) -> i64 { self.time.to_local().year() }
    fn month(&self) -> Month { self.time.to_local().month() }
    fn day(&self) -> i8 { self.time.to_local().day() }
    fn yearday(&self) -> i16 { self.time.to_local().yearday() }
    fn weekday(&self) -> Weekday { self.time.to_local().weekday() }
}

impl TimePiece for Calendar {
    fn hour(&self) -> i8 { self.time.to_local().hour() }
    fn minute(&self) -> i8 { self.time.to_local().minute() }
    fn second(&self) -> i8 { self.time.to_local().second() }
    fn millisecond(&self) -> i16 { self.time.to_local().millisecond() }
}
