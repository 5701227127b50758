#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Comparing dates, times, and date-times.
//!
//! The calendar types here are zone-less and proleptic Gregorian, with
//! millisecond precision. Every comparable value implements
//! [`Chronology`], which gives it a three-way comparator alongside the
//! `is_before`, `is_after`, and `is_equal` predicates.
//!
//! # Examples
//!
//! ```
//! use datecmp::{Chronology, DatePattern, LocalDate, Month, Unit};
//!
//! let pattern = DatePattern::compile("dd-MM-yyyy").unwrap();
//! let first = pattern.parse_date("20-07-2020").unwrap();
//! let second = first.plus(1, Unit::Days).unwrap();
//!
//! assert!(first.is_before(&second));
//! assert!(first.compare_to(&second) < 0);
//! assert_eq!(second, LocalDate::ymd(2020, Month::July, 21).unwrap());
//! assert_eq!(pattern.format_date(&second), "21-07-2020");
//! ```

mod cal;
pub use cal::{DatePiece, TimePiece};
pub use cal::compare::Chronology;
pub use cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Year, Error as DateError};
pub use cal::fmt::pattern::{DatePattern, Field as PatternField, PatternError, ParseError};
pub use cal::unit::Unit;

#[cfg(feature="parse")]
pub use cal::parse::Error as IsoError;

mod clock;
pub use clock::{Clock, SystemClock, FixedClock};

pub mod demo;

mod duration;
pub use duration::Duration;

mod error;
pub use error::Error;

mod instant;
pub use instant::Instant;

pub mod legacy;

mod system;
mod util;
