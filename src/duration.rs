//! Lengths of time on the timeline.

use std::ops::{Add, Sub, Mul};


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with millisecond precision.
///
/// The millisecond part is always kept between 0 and 999, so negative
/// durations borrow from the seconds: minus 100 milliseconds is stored
/// as minus one second plus 900 milliseconds.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Copy)]
pub struct Duration {
    seconds: i64,
    milliseconds: i16,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0, milliseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds, milliseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds and
    /// milliseconds long. Milliseconds past 999 carry into the seconds.
    pub fn of_ms(seconds: i64, milliseconds: i16) -> Self {
        Self::of(seconds) + Self::of_millis(milliseconds as i64)
    }

    /// Create a new duration from a total number of milliseconds.
    ///
    /// ```
    /// use datecmp::Duration;
    ///
    /// assert_eq!(Duration::of_millis(1_250).lengths(), (1, 250));
    /// assert_eq!(Duration::of_millis(-100).lengths(), (-1, 900));
    /// ```
    pub fn of_millis(milliseconds: i64) -> Self {
        Self {
            seconds:      milliseconds.div_euclid(1000),
            milliseconds: milliseconds.rem_euclid(1000) as i16,
        }
    }

    /// Return the seconds and milliseconds portions of the duration as
    /// a 2-element tuple.
    pub fn lengths(&self) -> (i64, i16) {
        (self.seconds, self.milliseconds)
    }

    // Returning both parts together makes it clear that the millisecond
    // value is only the leftover, not the total length in milliseconds.

    /// The total length of this duration in milliseconds. This is wider
    /// than the seconds field, so it holds every duration.
    pub fn total_millis(&self) -> i128 {
        self.seconds as i128 * 1000 + self.milliseconds as i128
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let ms = self.milliseconds + rhs.milliseconds;
        Self {
            seconds:      self.seconds + rhs.seconds + (ms / 1000) as i64,
            milliseconds: ms % 1000,
        }
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let ms = self.milliseconds - rhs.milliseconds;
        Self {
            seconds:      self.seconds - rhs.seconds + ms.div_euclid(1000) as i64,
            milliseconds: ms.rem_euclid(1000),
        }
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        let ms = self.milliseconds as i64 * amount;
        Self {
            seconds:      self.seconds * amount + ms.div_euclid(1000),
            milliseconds: ms.rem_euclid(1000) as i16,
        }
    }
}
