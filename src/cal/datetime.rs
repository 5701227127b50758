//! Dates, times, datetimes, months, and weekdays.

use std::cmp::{min, Ordering};
use std::fmt;
use std::ops::{Add, Sub};

use thiserror::Error;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::compare::Chronology;
use crate::cal::unit::Unit;
use crate::duration::Duration;
use crate::instant::Instant;
use crate::util::RangeExt;

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use datecmp::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// assert_eq!(Year(2020).is_leap_year(), true);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.0.rem_euclid(4) == 0
            && (self.0.rem_euclid(100) != 0 || self.0.rem_euclid(400) == 0)
    }

    /// The number of days in this year: 366 for leap years, 365 otherwise.
    pub fn day_count(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }
}


/// The earliest year a date can have.
///
/// Every date between this and `MAX_YEAR` is a whole number of
/// milliseconds from the epoch that fits in an `i64`.
pub(crate) const MIN_YEAR: i64 = -100_000_000;

/// The latest year a date can have.
pub(crate) const MAX_YEAR: i64 = 100_000_000;

/// Number of days in a 400-year Gregorian cycle.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. Leap seconds are ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;

/// Number of days between **1st March, year 0** and **1st January, 1970**.
///
/// Counting years from March puts the leap day at the very end of each
/// year, so month lengths follow a fixed 153-day pattern and only the
/// length of the final month changes.
const DAYS_FROM_MARCH_0000: i64 = 719_468;

static MONTHS: [Month; 12] = [
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

static WEEKDAYS: [Weekday; 7] = [
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];


/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
#[derive(Eq, Clone, Copy)]
pub struct LocalDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    millisecond: i16,
}

/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
///
/// Values are ordered by their date first, then their time.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use datecmp::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::ymd(2020, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 2020);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        YMD { year, month, day }
            .to_days_since_epoch()
            .map(Self::from_days_since_epoch)
    }

    /// Creates a new local date instance from the given year and day-of-year
    /// values, where the 1st of January is day 1.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use datecmp::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2015, 0x100).unwrap();
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    ///
    /// // on leap years, the same day-of-year falls a day earlier
    /// let date = LocalDate::yd(2016, 0x100).unwrap();
    /// assert_eq!(date.day(), 12);
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        if year.is_within(MIN_YEAR .. MAX_YEAR + 1)
        && yearday.is_within(1 .. Year(year).day_count() as i64 + 1)
        {
            let jan_1 = YMD { year, month: January, day: 1 };
            Ok(Self::from_days_since_epoch(jan_1.days_unchecked() + yearday - 1))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Creates a new local date instance from the given ISO-8601 year,
    /// week-of-year, and weekday values.
    ///
    /// Week 1 is the week that contains the 4th of January, so the year
    /// of the resulting date can differ from the one given:
    ///
    /// ```rust
    /// use datecmp::{LocalDate, Weekday, Month, DatePiece};
    ///
    /// let date = LocalDate::ywd(2015, 37, Weekday::Friday).unwrap();
    /// assert_eq!((date.year(), date.month(), date.day()), (2015, Month::September, 11));
    ///
    /// let date = LocalDate::ywd(2009, 1, Weekday::Monday).unwrap();
    /// assert_eq!((date.year(), date.month(), date.day()), (2008, Month::December, 29));
    ///
    /// let date = LocalDate::ywd(2009, 53, Weekday::Sunday).unwrap();
    /// assert_eq!((date.year(), date.month(), date.day()), (2010, Month::January, 3));
    ///
    /// // 2021 only has 52 weeks
    /// assert!(LocalDate::ywd(2021, 53, Weekday::Monday).is_err());
    /// ```
    pub fn ywd(year: i64, week: i64, weekday: Weekday) -> Result<Self, Error> {
        if !year.is_within(MIN_YEAR .. MAX_YEAR + 1) {
            return Err(Error::OutOfRange);
        }

        let first_monday = week_1_monday(year);
        let weeks_in_year = (week_1_monday(year + 1) - first_monday) / 7;
        if !week.is_within(1 .. weeks_in_year + 1) {
            return Err(Error::OutOfRange);
        }

        let days = first_monday + (week - 1) * 7 + (weekday.days_from_monday_as_one() as i64 - 1);
        Self::checked_from_days_since_epoch(days)
    }

    /// Computes a `LocalDate` (year, month, day, weekday, and yearday)
    /// from the number of days since **1st January, 1970**.
    pub(crate) fn from_days_since_epoch(days: i64) -> Self {
        let shifted = days + DAYS_FROM_MARCH_0000;
        let era = shifted.div_euclid(DAYS_IN_400Y);
        let day_of_era = shifted - era * DAYS_IN_400Y;

        // Remove the leap days, which sit at the end of every fourth year
        // except the last year of each century but the fourth.
        let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);

        let month_from_march = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
        let month_index = (month_from_march + 2) % 12;

        let year = year_of_era + era * 400 + if month_index < 2 { 1 } else { 0 };
        let month = MONTHS[month_index as usize];
        let leap_day = if Year(year).is_leap_year() && month >= March { 1 } else { 0 };

        Self {
            ymd:     YMD { year, month, day: day as i8 },
            yearday: month.days_before_start() + leap_day + day as i16,
            weekday: days_to_weekday(days),
        }
    }

    /// The number of days between **1st January, 1970** and this date.
    pub(crate) fn days_since_epoch(&self) -> i64 {
        self.ymd.days_unchecked()
    }

    /// Like `from_days_since_epoch`, but fails for dates outside
    /// `MIN_YEAR` to `MAX_YEAR`.
    pub(crate) fn checked_from_days_since_epoch(days: i64) -> Result<Self, Error> {
        if days.checked_add(DAYS_FROM_MARCH_0000).is_none() {
            return Err(Error::OutOfRange);
        }

        let date = Self::from_days_since_epoch(days);
        if date.ymd.year.is_within(MIN_YEAR .. MAX_YEAR + 1) {
            Ok(date)
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Moves this date by a number of days, in either direction.
    pub(crate) fn shift_days(self, days: i64) -> Result<Self, Error> {
        let days = self.days_since_epoch().checked_add(days).ok_or(Error::OutOfRange)?;
        Self::checked_from_days_since_epoch(days)
    }

    /// Moves this date by a number of months, in either direction. The
    /// day is clamped to the last day of the target month.
    pub(crate) fn shift_months(self, months: i64) -> Result<Self, Error> {
        let total = (self.ymd.year * 12 + self.ymd.month.months_from_january() as i64)
                        .checked_add(months)
                        .ok_or(Error::OutOfRange)?;

        let year = total.div_euclid(12);
        if !year.is_within(MIN_YEAR .. MAX_YEAR + 1) {
            return Err(Error::OutOfRange);
        }

        let month = MONTHS[total.rem_euclid(12) as usize];
        let day = min(self.ymd.day, month.days_in_month(Year(year).is_leap_year()));

        Ok(Self::from_days_since_epoch(YMD { year, month, day }.days_unchecked()))
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({})", self)
    }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}

impl Chronology for LocalDate {}


impl LocalTime {

    /// Computes the hour, minute, and second from the number of seconds
    /// that have elapsed since midnight, keeping the given millisecond.
    pub fn from_seconds_and_milliseconds_since_midnight(seconds: i64, millisecond_of_second: i16) -> Self {
        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
            millisecond: millisecond_of_second,
        }
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, millisecond: 0 }
    }

    /// Creates a new time with the given hour and minute. The second and
    /// millisecond fields are set to 0.
    pub fn hm(hour: i8, minute: i8) -> Result<Self, Error> {
        Self::hms_ms(hour, minute, 0, 0)
    }

    /// Creates a new time with the given hour, minute, and second. The
    /// millisecond field is set to 0.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_ms(hour, minute, second, 0)
    }

    /// Creates a new time with the given hour, minute, second, and
    /// millisecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms_ms(hour: i8, minute: i8, second: i8, millisecond: i16) -> Result<Self, Error> {
        if hour.is_within(0..24)   && minute.is_within(0..60)
        && second.is_within(0..60) && millisecond.is_within(0..1000)
        {
            Ok(Self { hour, minute, second, millisecond })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Calculate the number of seconds since midnight this time is at,
    /// ignoring milliseconds.
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn millisecond(&self) -> i16 { self.millisecond }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({})", self)
    }
}

impl Chronology for LocalTime {}


impl LocalDateTime {

    /// Computes a complete date-time based on the values in the given
    /// Instant parameter.
    pub fn from_instant(instant: Instant) -> Self {
        Self::at_ms(instant.seconds(), instant.milliseconds())
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, setting the
    /// number of milliseconds to 0.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        Self::at_ms(seconds_since_1970_epoch, 0)
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, and the
    /// millisecond within that second.
    pub fn at_ms(seconds_since_1970_epoch: i64, millisecond_of_second: i16) -> Self {
        let days = seconds_since_1970_epoch.div_euclid(SECONDS_IN_DAY);
        let secs = seconds_since_1970_epoch.rem_euclid(SECONDS_IN_DAY);

        Self {
            date: LocalDate::from_days_since_epoch(days),
            time: LocalTime::from_seconds_and_milliseconds_since_midnight(secs, millisecond_of_second),
        }
    }

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// Returns the date portion of this date-time stamp, discarding the
    /// time of day.
    ///
    /// ```
    /// use datecmp::{Chronology, LocalDate, LocalDateTime, LocalTime, Month};
    ///
    /// let day = LocalDate::ymd(2020, Month::July, 20).unwrap();
    /// let morning = LocalDateTime::new(day, LocalTime::hms(8, 0, 0).unwrap());
    /// let evening = LocalDateTime::new(day, LocalTime::hms(21, 30, 0).unwrap());
    ///
    /// assert!(morning.is_before(&evening));
    /// assert!(morning.date().is_equal(&evening.date()));
    /// ```
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Like `from_instant`, but fails for instants whose date falls
    /// outside `MIN_YEAR` to `MAX_YEAR`.
    pub(crate) fn checked_from_instant(instant: Instant) -> Result<Self, Error> {
        let datetime = Self::from_instant(instant);
        if datetime.date.ymd.year.is_within(MIN_YEAR .. MAX_YEAR + 1) {
            Ok(datetime)
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    pub fn to_instant(&self) -> Instant {
        let seconds = self.date.days_since_epoch() * SECONDS_IN_DAY + self.time.to_seconds();
        Instant::at_ms(seconds, self.time.millisecond)
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.ymd.year }
    fn month(&self) -> Month { self.date.ymd.month }
    fn day(&self) -> i8 { self.date.ymd.day }
    fn yearday(&self) -> i16 { self.date.yearday }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn millisecond(&self) -> i16 { self.time.millisecond }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({})", self)
    }
}

impl Chronology for LocalDateTime {}

impl Add<Duration> for LocalDateTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        Self::from_instant(self.to_instant() + duration)
    }
}

impl Sub<Duration> for LocalDateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        Self::from_instant(self.to_instant() - duration)
    }
}


/// A **YMD** is an implementation detail of `LocalDate`.
///
/// Unlike `LocalDate`, nothing stops a `YMD` from holding the 74th of
/// March, so it is not exposed outside this module.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970, if this is a real date.
    fn to_days_since_epoch(&self) -> Result<i64, Error> {
        if self.is_valid() {
            Ok(self.days_unchecked())
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Whether the year is within bounds, and the day is in the range
    /// allowed by the month.
    fn is_valid(&self) -> bool {
        let last_day = self.month.days_in_month(Year(self.year).is_leap_year());
        self.year.is_within(MIN_YEAR .. MAX_YEAR + 1)
            && self.day.is_within(1 .. last_day + 1)
    }

    fn days_unchecked(&self) -> i64 {
        let month = self.month as i64;
        let year = if month <= 2 { self.year - 1 } else { self.year };

        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        let month_from_march = (month + 9) % 12;
        let day_of_year = (153 * month_from_march + 2) / 5 + self.day as i64 - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

        era * DAYS_IN_400Y + day_of_era - DAYS_FROM_MARCH_0000
    }
}

/// The days since the epoch of the Monday that starts ISO week 1 of the
/// given year, which is the week containing the 4th of January.
fn week_1_monday(year: i64) -> i64 {
    let jan_4 = YMD { year, month: January, day: 4 }.days_unchecked();
    jan_4 - (days_to_weekday(jan_4).days_from_monday_as_one() as i64 - 1)
}

/// Computes the weekday, given the number of days since 1st January,
/// 1970, which was a Thursday.
fn days_to_weekday(days: i64) -> Weekday {
    WEEKDAYS[(days + 4).rem_euclid(7) as usize]
}


#[derive(PartialEq, Eq, Debug, Copy, Clone, Error)]
pub enum Error {

    /// A field was outside the range its calendar allows.
    #[error("datetime field out of range")]
    OutOfRange,

    /// A date was asked to move by a unit smaller than a day.
    #[error("a date cannot be moved by {0}")]
    UnsupportedUnit(Unit),
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use datecmp::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if month.is_within(1..13) {
            Ok(MONTHS[month as usize - 1])
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    ///
    /// ```rust
    /// use datecmp::Month;
    /// assert_eq!(Month::from_zero(5), Ok(Month::June));
    /// assert!(Month::from_zero(12).is_err());
    /// ```
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        if month.is_within(0..12) {
            Ok(MONTHS[month as usize])
        }
        else {
            Err(Error::OutOfRange)
        }
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// No Ord instance: there is no agreement on whether the week starts on
// Sunday or Monday, and LocalDate ordering ignores the weekday anyway.

impl Weekday {
    fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use datecmp::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        if weekday.is_within(0..7) {
            Ok(WEEKDAYS[weekday as usize])
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Return the weekday based on a number, with Monday as Day 1 and
    /// Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        match weekday {
            7 => Ok(Sunday),
            _ if weekday.is_within(1..7) => Self::from_zero(weekday),
            _ => Err(Error::OutOfRange),
        }
    }
}
