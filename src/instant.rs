//! Exact points on a timeline.

use std::fmt;
use std::ops::{Add, Sub};

use crate::cal::compare::Chronology;
use crate::duration::Duration;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with millisecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds, and a
/// 16-bit integer of milliseconds, which is always between 0 and 999.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    milliseconds: i16,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero milliseconds.
    pub fn at(seconds: i64) -> Self {
        Self::at_ms(seconds, 0)
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, along with the number of milliseconds so far this
    /// second. Milliseconds outside 0 to 999 carry into the seconds.
    pub fn at_ms(seconds: i64, milliseconds: i16) -> Self {
        Self::at_epoch() + Duration::of_ms(seconds, milliseconds)
    }

    /// Creates a new Instant from a number of milliseconds since the
    /// Unix epoch.
    pub fn at_millis(milliseconds: i64) -> Self {
        Self::at_epoch() + Duration::of_millis(milliseconds)
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self { seconds: 0, milliseconds: 0 }
    }

    /// Returns the number of seconds at this instant
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of milliseconds at this instant
    pub fn milliseconds(&self) -> i16 {
        self.milliseconds
    }

    /// Returns the total number of milliseconds since the Unix epoch, or
    /// `None` for instants too far away for that to fit in an `i64`.
    pub fn epoch_millis(&self) -> Option<i64> {
        self.seconds.checked_mul(1000)?.checked_add(self.milliseconds as i64)
    }

    /// Moves this instant by a duration, returning `None` if the seconds
    /// would overflow.
    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        let (seconds, milliseconds) = duration.lengths();
        let ms = self.milliseconds + milliseconds;

        Some(Self {
            seconds:      self.seconds.checked_add(seconds)?.checked_add((ms / 1000) as i64)?,
            milliseconds: ms % 1000,
        })
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}ms)", self.seconds, self.milliseconds)
    }
}

impl Chronology for Instant {}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        let (seconds, milliseconds) = duration.lengths();
        let ms = self.milliseconds + milliseconds;

        Self {
            seconds:      self.seconds + seconds + (ms / 1000) as i64,
            milliseconds: ms % 1000,
        }
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        self + (Duration::zero() - duration)
    }
}


#[cfg(test)]
mod test {
    use super::Instant;
    use crate::duration::Duration;

    #[test]
    fn carries_milliseconds() {
        assert_eq!(Instant::at_ms(10, 950) + Duration::of_millis(100), Instant::at_ms(11, 50));
    }

    #[test]
    fn borrows_milliseconds() {
        assert_eq!(Instant::at_ms(10, 50) - Duration::of_millis(100), Instant::at_ms(9, 950));
    }

    #[test]
    fn before_the_epoch() {
        let instant = Instant::at_millis(-1);
        assert_eq!((instant.seconds(), instant.milliseconds()), (-1, 999));
        assert_eq!(instant.epoch_millis(), Some(-1));
    }

    #[test]
    fn too_far_for_milliseconds() {
        assert_eq!(Instant::at(i64::MAX / 1000).epoch_millis(), Some(i64::MAX / 1000 * 1000));
        assert_eq!(Instant::at(i64::MAX / 1000 + 1).epoch_millis(), None);
        assert_eq!(Instant::at(i64::MIN).epoch_millis(), None);
    }

    #[test]
    fn checked_add() {
        assert_eq!(Instant::at_ms(10, 950).checked_add(Duration::of_millis(100)), Some(Instant::at_ms(11, 50)));
        assert_eq!(Instant::at(i64::MAX).checked_add(Duration::of(1)), None);
        assert_eq!(Instant::at_ms(i64::MAX, 900).checked_add(Duration::of_millis(100)), None);
    }
}
