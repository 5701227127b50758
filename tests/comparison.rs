use datecmp::{Chronology, DatePattern, Instant, LocalDate, LocalDateTime, LocalTime, Month, Unit};
use datecmp::legacy::{Calendar, Timestamp};


fn stamp(text: &str) -> Timestamp {
    let pattern = DatePattern::compile("dd-MM-yyyy").unwrap();
    Timestamp::from_local(pattern.parse_date_time(text).unwrap()).unwrap()
}

/// Checks that exactly one predicate holds, and that it matches the
/// comparator’s sign.
fn check_trichotomy<T: Chronology>(a: &T, b: &T) {
    let held = [a.is_before(b), a.is_equal(b), a.is_after(b)];
    assert_eq!(held.iter().filter(|h| **h).count(), 1);

    let sign = a.compare_to(b).signum();
    assert_eq!(held, [sign < 0, sign == 0, sign > 0]);
}


mod timestamps {
    use super::*;

    #[test]
    fn earlier() {
        let (first, second) = (stamp("20-07-2020"), stamp("21-07-2020"));
        assert!(first.compare_to(&second) < 0);
        assert!(first.is_before(&second));
        assert!(!first.is_after(&second));
        assert!(!first.is_equal(&second));
    }

    #[test]
    fn later() {
        let (first, second) = (stamp("22-07-2020"), stamp("21-07-2020"));
        assert!(first.compare_to(&second) > 0);
        assert!(first.is_after(&second));
    }

    #[test]
    fn same_day() {
        let (first, second) = (stamp("20-07-2020"), stamp("20-07-2020"));
        assert_eq!(first.compare_to(&second), 0);
        assert!(first.is_equal(&second));
    }

    #[test]
    fn years_apart() {
        check_trichotomy(&stamp("01-01-1900"), &stamp("31-12-2099"));
        check_trichotomy(&stamp("31-12-2099"), &stamp("01-01-1900"));
    }
}


mod calendars {
    use super::*;

    #[test]
    fn agree_with_their_timestamps() {
        let stamps = [stamp("19-07-2020"), stamp("20-07-2020"), stamp("21-07-2020")];

        for a in stamps.iter() {
            for b in stamps.iter() {
                let (cal_a, cal_b) = (Calendar::at(*a), Calendar::at(*b));
                assert_eq!(cal_a.compare_to(&cal_b).signum(), a.compare_to(b).signum());
                check_trichotomy(&cal_a, &cal_b);
            }
        }
    }

    #[test]
    fn moved_by_a_day() {
        let mut calendar = Calendar::at(stamp("20-07-2020"));
        calendar.add(1, Unit::Days).unwrap();
        assert!(calendar.time().is_equal(&stamp("21-07-2020")));
    }
}


mod local_values {
    use super::*;

    #[test]
    fn today_and_tomorrow() {
        let today = LocalDate::ymd(2020, Month::July, 20).unwrap();
        let tomorrow = today.plus(1, Unit::Days).unwrap();

        assert!(!today.is_equal(&tomorrow));
        assert!(!today.is_after(&tomorrow));
        assert!(today.is_before(&tomorrow));
        assert!(today.compare_to(&tomorrow) < 0);
    }

    #[test]
    fn a_hundred_milliseconds_apart() {
        let date = LocalDate::ymd(2020, Month::July, 20).unwrap();
        let now = LocalDateTime::new(date, LocalTime::hms(10, 0, 0).unwrap());
        let soon = now.plus(100, Unit::Milliseconds).unwrap();

        assert!(now.is_before(&soon));
        assert!(now.date().is_equal(&soon.date()));
    }

    #[test]
    fn times_of_day() {
        check_trichotomy(&LocalTime::hm(9, 30).unwrap(), &LocalTime::hms_ms(9, 30, 0, 1).unwrap());
        check_trichotomy(&LocalTime::midnight(), &LocalTime::midnight());
    }

    #[test]
    fn instants() {
        check_trichotomy(&Instant::at_millis(-1), &Instant::at_epoch());
        assert_eq!(Instant::at_ms(5, 0).compare_to(&Instant::at(5)), 0);
    }
}
