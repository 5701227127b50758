//! Five ways of comparing two dates, each printing what it finds.
//!
//! The first three parse two fixed dates into legacy timestamps and compare
//! them with a three-way comparator, with named predicates, and through
//! calendars. The last two start from the clock’s current time: one
//! compares today with a later date, the other compares two instants on
//! the same day and then only their dates.
//!
//! Every demonstration writes plain lines to the given output, in Spanish.

use std::io::Write;

use tracing::{debug, info_span};

use crate::cal::compare::Chronology;
use crate::cal::fmt::pattern::DatePattern;
use crate::cal::unit::Unit;
use crate::clock::Clock;
use crate::error::Error;
use crate::legacy::{Calendar, Timestamp};


/// What the demonstrations compare.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Settings {

    /// The first date, written in `pattern`.
    pub first: String,

    /// The second date, written in `pattern`.
    pub second: String,

    /// The pattern both dates are written in.
    pub pattern: String,

    /// How many days after today the date-only comparison looks.
    pub day_step: i64,

    /// How many milliseconds after now the date-time comparison looks.
    pub instant_step_ms: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first:           "20-07-2020".into(),
            second:          "21-07-2020".into(),
            pattern:         "dd-MM-yyyy".into(),
            day_step:        1,
            instant_step_ms: 100,
        }
    }
}


/// The signature every demonstration shares.
pub type Demonstration = fn(&Settings, &dyn Clock, &mut dyn Write) -> Result<(), Error>;

/// Every demonstration, in the order they run.
pub static DEMONSTRATIONS: [(&str, Demonstration); 5] = [
    ("comparator",       compare_with_comparator),
    ("predicates",       compare_with_predicates),
    ("calendar",         compare_with_calendar),
    ("local dates",      compare_local_dates),
    ("local date-times", compare_local_date_times),
];

/// Runs every demonstration in order, stopping at the first one that
/// fails.
///
/// ```
/// use datecmp::{FixedClock, LocalDate, LocalDateTime, LocalTime, Month};
/// use datecmp::demo::{run_all, Settings};
///
/// let now = LocalDateTime::new(LocalDate::ymd(2020, Month::July, 20).unwrap(), LocalTime::hm(10, 0).unwrap());
/// let clock = FixedClock::at(now);
/// let mut out = Vec::new();
/// run_all(&Settings::default(), &clock, &mut out).unwrap();
///
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.starts_with("Fecha 1 : 20-07-2020\n"));
/// assert!(out.contains("2020-07-20 es menor que 2020-07-21\n"));
/// ```
pub fn run_all(settings: &Settings, clock: &dyn Clock, out: &mut dyn Write) -> Result<(), Error> {
    for (name, demonstration) in DEMONSTRATIONS.iter() {
        let _span = info_span!("demonstration", name).entered();
        debug!("starting");
        demonstration(settings, clock, out)?;
    }

    out.flush()?;
    Ok(())
}


/// Parses both configured dates, printing them back in the same pattern.
fn parse_and_echo(settings: &Settings, out: &mut dyn Write) -> Result<(Timestamp, Timestamp), Error> {
    let pattern = DatePattern::compile(&settings.pattern)?;
    let date1 = Timestamp::from_local(pattern.parse_date_time(&settings.first)?)?;
    let date2 = Timestamp::from_local(pattern.parse_date_time(&settings.second)?)?;

    writeln!(out, "Fecha 1 : {}", pattern.format(&date1.to_local()))?;
    writeln!(out, "Fecha 2 : {}", pattern.format(&date2.to_local()))?;

    Ok((date1, date2))
}

/// Prints one line for each of after, before, and equal that holds.
fn print_predicates<T: Chronology>(first: &T, second: &T, out: &mut dyn Write) -> Result<(), Error> {
    if first.is_after(second) {
        writeln!(out, "Fecha 1 es posterior a Fecha 2")?;
    }

    if first.is_before(second) {
        writeln!(out, "Fecha 1 es anterior a Fecha 2")?;
    }

    if first.is_equal(second) {
        writeln!(out, "Fecha 1 es igual a Fecha 2")?;
    }

    Ok(())
}


/// Compares the two dates with the three-way comparator: positive means
/// the first is later, negative means it is earlier, zero means they are
/// the same.
pub fn compare_with_comparator(settings: &Settings, _clock: &dyn Clock, out: &mut dyn Write) -> Result<(), Error> {
    let (date1, date2) = parse_and_echo(settings, out)?;

    let diff = date1.compare_to(&date2);
    debug!(diff, "compared timestamps");

    if diff > 0 {
        writeln!(out, "Fecha 1 es posterior a Fecha 2")?;
    }
    else if diff < 0 {
        writeln!(out, "Fecha 1 es anterior a Fecha 2")?;
    }
    else {
        writeln!(out, "Fecha 1 es igual a Fecha 2")?;
    }

    Ok(())
}

/// Compares the two dates with the after, before, and equal predicates,
/// each checked on its own.
pub fn compare_with_predicates(settings: &Settings, _clock: &dyn Clock, out: &mut dyn Write) -> Result<(), Error> {
    let (date1, date2) = parse_and_echo(settings, out)?;
    print_predicates(&date1, &date2, out)
}

/// Compares the two dates after wrapping each one in a calendar.
pub fn compare_with_calendar(settings: &Settings, clock: &dyn Clock, out: &mut dyn Write) -> Result<(), Error> {
    let (date1, date2) = parse_and_echo(settings, out)?;

    let mut cal1 = Calendar::new(clock)?;
    let mut cal2 = Calendar::new(clock)?;
    cal1.set_time(date1);
    cal2.set_time(date2);

    print_predicates(&cal1, &cal2, out)
}

/// Compares today with a later date, printing each predicate and then a
/// sentence from the three-way comparator.
pub fn compare_local_dates(settings: &Settings, clock: &dyn Clock, out: &mut dyn Write) -> Result<(), Error> {
    let today = clock.today();
    let another_day = today.plus(settings.day_step, Unit::Days)?;
    debug!(%today, %another_day, "comparing dates");

    writeln!(out, "{}", today.is_equal(&another_day))?;
    writeln!(out, "{}", today.is_after(&another_day))?;
    writeln!(out, "{}", today.is_before(&another_day))?;

    let diff = today.compare_to(&another_day);
    if diff > 0 {
        writeln!(out, "{} es mayor que {}", today, another_day)?;
    }
    else if diff < 0 {
        writeln!(out, "{} es menor que {}", today, another_day)?;
    }
    else {
        writeln!(out, "{} es igual que {}", today, another_day)?;
    }

    Ok(())
}

/// Compares the current instant with one a few milliseconds later, first
/// in full and then by their dates alone.
pub fn compare_local_date_times(settings: &Settings, clock: &dyn Clock, out: &mut dyn Write) -> Result<(), Error> {
    let instance = clock.local_now();
    let another_instance = instance.plus(settings.instant_step_ms, Unit::Milliseconds)?;
    debug!(%instance, %another_instance, "comparing date-times");

    writeln!(out, "{}", instance.is_equal(&another_instance))?;
    writeln!(out, "{}", instance.is_after(&another_instance))?;
    writeln!(out, "{}", instance.is_before(&another_instance))?;

    writeln!(out, "{}", instance.date().is_equal(&another_instance.date()))?;

    Ok(())
}
