//! Three-way comparisons and the before/after/equal predicates.

use std::cmp::Ordering;


/// A value that sits somewhere on a timeline, and can therefore be
/// compared with other values of the same kind.
///
/// Every method is derived from `Ord`, so for any two values exactly one
/// of `is_before`, `is_equal`, and `is_after` holds, and it always agrees
/// with the sign of `compare_to`.
///
/// ### Examples
///
/// ```
/// use datecmp::{Chronology, LocalDate, Month};
///
/// let moon_landing = LocalDate::ymd(1969, Month::July, 20).unwrap();
/// let next_day     = LocalDate::ymd(1969, Month::July, 21).unwrap();
///
/// assert!(moon_landing.is_before(&next_day));
/// assert!(!moon_landing.is_after(&next_day));
/// assert!(!moon_landing.is_equal(&next_day));
/// assert_eq!(moon_landing.compare_to(&next_day), -1);
/// ```
pub trait Chronology: Ord {

    /// Returns whether this value comes strictly before the other.
    fn is_before(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Returns whether this value comes strictly after the other.
    fn is_after(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Returns whether both values are at the same point.
    fn is_equal(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }

    /// The three-way comparator: negative if this value comes first, zero
    /// if both are the same, positive if this value comes last.
    fn compare_to(&self, other: &Self) -> i32 {
        self.cmp(other) as i32
    }
}
