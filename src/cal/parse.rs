//! ISO-8601 parsing for dates, times, and date-times.

use std::str::FromStr;

use thiserror::Error;

use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Error as DateTimeError};


impl FromStr for LocalDate {
    type Err = Error;

    /// ```
    /// use datecmp::{LocalDate, Month};
    ///
    /// let date: LocalDate = "2020-07-20".parse().unwrap();
    /// assert_eq!(date, LocalDate::ymd(2020, Month::July, 20).unwrap());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::date(input).map_err(Error::Parse)?;
        fields_to_date(fields).map_err(Error::Date)
    }
}

impl FromStr for LocalTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::time(input).map_err(Error::Parse)?;
        fields_to_time(fields).map_err(Error::Date)
    }
}

impl FromStr for LocalDateTime {
    type Err = Error;

    /// Any offset in the text is read but dropped: the result is the local
    /// date and time as written.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::datetime(input).map_err(Error::Parse)?;

        let date = fields_to_date(fields.date).map_err(Error::Date)?;
        let time = fields_to_time(fields.time).map_err(Error::Date)?;
        Ok(Self::new(date, time))
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<LocalDate, DateTimeError> {
    match fields {
        iso8601::Date::YMD { year, month, day } => {
            let month = Month::from_one(narrow(month)?)?;
            LocalDate::ymd(year as i64, month, narrow(day)?)
        },
        iso8601::Date::Week { year, ww, d } => {
            let weekday = Weekday::from_one(narrow(d)?)?;
            LocalDate::ywd(year as i64, ww as i64, weekday)
        },
        iso8601::Date::Ordinal { year, ddd } => {
            LocalDate::yd(year as i64, ddd as i64)
        },
    }
}

fn fields_to_time(fields: iso8601::Time) -> Result<LocalTime, DateTimeError> {
    LocalTime::hms_ms(
        narrow(fields.hour)?,
        narrow(fields.minute)?,
        narrow(fields.second)?,
        i16::try_from(fields.millisecond).map_err(|_| DateTimeError::OutOfRange)?,
    )
}

fn narrow(field: u32) -> Result<i8, DateTimeError> {
    i8::try_from(field).map_err(|_| DateTimeError::OutOfRange)
}


/// Why some ISO-8601 text could not be read.
#[derive(PartialEq, Eq, Debug, Clone, Error)]
pub enum Error {

    /// The text was ISO-8601, but named a date or time that doesn’t exist.
    #[error("parsing resulted in an invalid date: {0}")]
    Date(#[source] DateTimeError),

    /// The text wasn’t ISO-8601 at all.
    #[error("parse error: {0}")]
    Parse(String),
}
