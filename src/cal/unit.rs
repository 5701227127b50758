//! Moving dates and date-times by an amount of some unit.

use std::fmt;

use crate::cal::datetime::{Error, LocalDate, LocalDateTime};
use crate::duration::Duration;


/// A unit of time that dates and date-times can be moved by.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Unit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl Unit {

    /// Whether this unit is at least a day long, and so can move a
    /// `LocalDate` without needing a time of day.
    pub fn is_date_based(self) -> bool {
        self >= Unit::Days
    }

    /// The number of seconds in one of this unit, for the units shorter
    /// than a day. Milliseconds are handled on their own.
    fn seconds(self) -> Option<i64> {
        match self {
            Unit::Seconds => Some(1),
            Unit::Minutes => Some(60),
            Unit::Hours   => Some(3600),
            _             => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Unit::Milliseconds => "milliseconds",
            Unit::Seconds      => "seconds",
            Unit::Minutes      => "minutes",
            Unit::Hours        => "hours",
            Unit::Days         => "days",
            Unit::Weeks        => "weeks",
            Unit::Months       => "months",
            Unit::Years        => "years",
        };

        f.write_str(name)
    }
}


impl LocalDate {

    /// Returns the date that is `amount` units after this one. Moving by
    /// months or years keeps the day of the month where possible, and
    /// otherwise uses the last day of the target month.
    ///
    /// Units shorter than a day are rejected.
    ///
    /// ### Examples
    ///
    /// ```
    /// use datecmp::{LocalDate, Month, Unit};
    ///
    /// let date = LocalDate::ymd(2020, Month::January, 31).unwrap();
    /// assert_eq!(date.plus(1, Unit::Days).unwrap(), LocalDate::ymd(2020, Month::February, 1).unwrap());
    /// assert_eq!(date.plus(1, Unit::Months).unwrap(), LocalDate::ymd(2020, Month::February, 29).unwrap());
    /// assert!(date.plus(100, Unit::Milliseconds).is_err());
    /// ```
    ///
    /// Moving past the years a date can hold is an `OutOfRange` error.
    pub fn plus(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        match unit {
            Unit::Days   => self.shift_days(amount),
            Unit::Weeks  => self.shift_days(amount.checked_mul(7).ok_or(Error::OutOfRange)?),
            Unit::Months => self.shift_months(amount),
            Unit::Years  => self.shift_months(amount.checked_mul(12).ok_or(Error::OutOfRange)?),
            _            => Err(Error::UnsupportedUnit(unit)),
        }
    }

    /// Returns the date that is `amount` units before this one.
    pub fn minus(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        self.plus(amount.checked_neg().ok_or(Error::OutOfRange)?, unit)
    }
}


impl LocalDateTime {

    /// Returns the date-time that is `amount` units after this one.
    ///
    /// Units up to an hour move the exact instant, carrying into the next
    /// day when needed; longer units move the date and keep the time of
    /// day.
    ///
    /// ### Examples
    ///
    /// ```
    /// use datecmp::{LocalDate, LocalDateTime, LocalTime, Month, Unit};
    ///
    /// let date = LocalDate::ymd(2020, Month::July, 20).unwrap();
    /// let then = LocalDateTime::new(date, LocalTime::hms_ms(23, 59, 59, 950).unwrap());
    /// let later = then.plus(100, Unit::Milliseconds).unwrap();
    ///
    /// assert_eq!(later.date(), LocalDate::ymd(2020, Month::July, 21).unwrap());
    /// assert_eq!(later.time(), LocalTime::hms_ms(0, 0, 0, 50).unwrap());
    /// ```
    ///
    /// Moving past the years a date can hold is an `OutOfRange` error.
    pub fn plus(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        if unit.is_date_based() {
            let date = self.date().plus(amount, unit)?;
            return Ok(Self::new(date, self.time()));
        }

        let duration = match unit.seconds() {
            Some(seconds) => Duration::of(amount.checked_mul(seconds).ok_or(Error::OutOfRange)?),
            None          => Duration::of_millis(amount),
        };

        let instant = self.to_instant().checked_add(duration).ok_or(Error::OutOfRange)?;
        Self::checked_from_instant(instant)
    }

    /// Returns the date-time that is `amount` units before this one.
    pub fn minus(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        self.plus(amount.checked_neg().ok_or(Error::OutOfRange)?, unit)
    }
}


#[cfg(test)]
mod test {
    use super::Unit;
    use crate::cal::datetime::{Error, LocalDate, LocalDateTime, LocalTime, Month};

    fn date(year: i64, month: Month, day: i8) -> LocalDate {
        LocalDate::ymd(year, month, day).unwrap()
    }

    #[test]
    fn date_units() {
        assert!(!Unit::Hours.is_date_based());
        assert!(Unit::Days.is_date_based());
        assert!(Unit::Years.is_date_based());
    }

    #[test]
    fn next_day_across_a_year() {
        assert_eq!(date(2020, Month::December, 31).plus(1, Unit::Days), Ok(date(2021, Month::January, 1)));
    }

    #[test]
    fn previous_week() {
        assert_eq!(date(2020, Month::July, 3).minus(1, Unit::Weeks), Ok(date(2020, Month::June, 26)));
    }

    #[test]
    fn leap_day_plus_a_year() {
        assert_eq!(date(2020, Month::February, 29).plus(1, Unit::Years), Ok(date(2021, Month::February, 28)));
        assert_eq!(date(2020, Month::February, 29).plus(4, Unit::Years), Ok(date(2024, Month::February, 29)));
    }

    #[test]
    fn dates_reject_time_units() {
        for unit in [Unit::Milliseconds, Unit::Seconds, Unit::Minutes, Unit::Hours].iter() {
            assert_eq!(date(2020, Month::July, 20).plus(1, *unit), Err(Error::UnsupportedUnit(*unit)));
        }
    }

    #[test]
    fn hours_carry_into_the_next_day() {
        let then = LocalDateTime::new(date(2020, Month::July, 20), LocalTime::hm(22, 0).unwrap());
        let later = then.plus(3, Unit::Hours).unwrap();

        assert_eq!(later.date(), date(2020, Month::July, 21));
        assert_eq!(later.time(), LocalTime::hm(1, 0).unwrap());
    }

    #[test]
    fn months_keep_the_time() {
        let then = LocalDateTime::new(date(2020, Month::March, 31), LocalTime::hms(8, 15, 0).unwrap());
        let earlier = then.minus(1, Unit::Months).unwrap();

        assert_eq!(earlier.date(), date(2020, Month::February, 29));
        assert_eq!(earlier.time(), LocalTime::hms(8, 15, 0).unwrap());
    }

    #[test]
    fn negative_milliseconds_borrow() {
        let then = LocalDateTime::new(date(2020, Month::July, 20), LocalTime::midnight());
        let earlier = then.minus(100, Unit::Milliseconds).unwrap();

        assert_eq!(earlier.date(), date(2020, Month::July, 19));
        assert_eq!(earlier.time(), LocalTime::hms_ms(23, 59, 59, 900).unwrap());
    }

    #[test]
    fn dates_too_far_away() {
        let today = date(2020, Month::July, 20);
        assert_eq!(today.plus(i64::MAX / 2, Unit::Weeks), Err(Error::OutOfRange));
        assert_eq!(today.plus(i64::MAX, Unit::Days), Err(Error::OutOfRange));
        assert_eq!(today.plus(i64::MAX / 6, Unit::Years), Err(Error::OutOfRange));
        assert_eq!(today.minus(i64::MIN, Unit::Days), Err(Error::OutOfRange));
        assert_eq!(today.minus(200_000_000, Unit::Years), Err(Error::OutOfRange));
    }

    #[test]
    fn date_times_too_far_away() {
        let now = LocalDateTime::new(date(2020, Month::July, 20), LocalTime::hm(10, 0).unwrap());
        assert_eq!(now.plus(i64::MAX, Unit::Milliseconds), Err(Error::OutOfRange));
        assert_eq!(now.plus(i64::MAX, Unit::Seconds), Err(Error::OutOfRange));
        assert_eq!(now.plus(i64::MAX / 60, Unit::Hours), Err(Error::OutOfRange));
        assert_eq!(now.minus(i64::MAX, Unit::Weeks), Err(Error::OutOfRange));
        assert_eq!(now.minus(i64::MIN, Unit::Minutes), Err(Error::OutOfRange));
    }

    #[test]
    fn unit_names() {
        assert_eq!(Unit::Milliseconds.to_string(), "milliseconds");
        assert_eq!(Error::UnsupportedUnit(Unit::Hours).to_string(), "a date cannot be moved by hours");
    }
}
