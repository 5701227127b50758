use datecmp::{DateError, Duration, Instant, LocalDate, LocalDateTime, LocalTime, Month, Unit};


fn date(year: i64, month: Month, day: i8) -> LocalDate {
    LocalDate::ymd(year, month, day).unwrap()
}

fn datetime(year: i64, month: Month, day: i8, hour: i8, minute: i8, second: i8, millisecond: i16) -> LocalDateTime {
    LocalDateTime::new(date(year, month, day), LocalTime::hms_ms(hour, minute, second, millisecond).unwrap())
}


mod dates {
    use super::*;

    #[test]
    fn next_day() {
        assert_eq!(date(2020, Month::July, 20).plus(1, Unit::Days), Ok(date(2020, Month::July, 21)));
    }

    #[test]
    fn into_next_year() {
        assert_eq!(date(2020, Month::December, 31).plus(1, Unit::Days), Ok(date(2021, Month::January, 1)));
    }

    #[test]
    fn across_a_leap_day() {
        assert_eq!(date(2020, Month::February, 28).plus(2, Unit::Days), Ok(date(2020, Month::March, 1)));
        assert_eq!(date(2021, Month::February, 28).plus(2, Unit::Days), Ok(date(2021, Month::March, 2)));
    }

    #[test]
    fn weeks() {
        assert_eq!(date(2020, Month::July, 20).plus(2, Unit::Weeks), Ok(date(2020, Month::August, 3)));
        assert_eq!(date(2020, Month::July, 20).minus(3, Unit::Weeks), Ok(date(2020, Month::June, 29)));
    }

    #[test]
    fn end_of_month_clamps() {
        assert_eq!(date(2021, Month::January, 31).plus(1, Unit::Months), Ok(date(2021, Month::February, 28)));
        assert_eq!(date(2020, Month::March, 31).minus(1, Unit::Months), Ok(date(2020, Month::February, 29)));
    }

    #[test]
    fn leap_day_plus_a_year() {
        assert_eq!(date(2020, Month::February, 29).plus(1, Unit::Years), Ok(date(2021, Month::February, 28)));
        assert_eq!(date(2020, Month::February, 29).plus(4, Unit::Years), Ok(date(2024, Month::February, 29)));
    }

    #[test]
    fn too_far() {
        assert_eq!(date(2020, Month::July, 20).plus(i64::MAX / 2, Unit::Weeks), Err(DateError::OutOfRange));
        assert_eq!(date(2020, Month::July, 20).plus(i64::MAX, Unit::Days), Err(DateError::OutOfRange));
        assert_eq!(date(2020, Month::July, 20).minus(i64::MAX, Unit::Months), Err(DateError::OutOfRange));
    }

    #[test]
    fn no_hours_on_a_date() {
        assert_eq!(date(2020, Month::July, 20).plus(5, Unit::Hours), Err(DateError::UnsupportedUnit(Unit::Hours)));
        assert_eq!(date(2020, Month::July, 20).minus(1, Unit::Milliseconds), Err(DateError::UnsupportedUnit(Unit::Milliseconds)));
    }
}


mod datetimes {
    use super::*;

    #[test]
    fn a_hundred_milliseconds() {
        let then = datetime(2020, Month::July, 20, 10, 0, 0, 950);
        assert_eq!(then.plus(100, Unit::Milliseconds), Ok(datetime(2020, Month::July, 20, 10, 0, 1, 50)));
    }

    #[test]
    fn just_before_midnight() {
        let then = datetime(2020, Month::July, 20, 23, 59, 59, 950);
        let later = then.plus(100, Unit::Milliseconds).unwrap();
        assert_eq!(later, datetime(2020, Month::July, 21, 0, 0, 0, 50));
        assert_ne!(then.date(), later.date());
    }

    #[test]
    fn months_keep_the_time() {
        let then = datetime(2020, Month::January, 31, 8, 15, 0, 0);
        assert_eq!(then.plus(1, Unit::Months), Ok(datetime(2020, Month::February, 29, 8, 15, 0, 0)));
    }

    #[test]
    fn minus_undoes_plus() {
        let then = datetime(2020, Month::July, 20, 10, 0, 0, 0);
        for unit in [Unit::Milliseconds, Unit::Seconds, Unit::Minutes, Unit::Hours, Unit::Days, Unit::Weeks].iter() {
            assert_eq!(then.plus(1234, *unit).and_then(|later| later.minus(1234, *unit)), Ok(then));
        }
    }

    #[test]
    fn too_far() {
        let then = datetime(2020, Month::July, 20, 10, 0, 0, 0);
        assert_eq!(then.plus(i64::MAX, Unit::Milliseconds), Err(DateError::OutOfRange));
        assert_eq!(then.minus(i64::MAX, Unit::Hours), Err(DateError::OutOfRange));
        assert_eq!(then.plus(i64::MAX / 3, Unit::Years), Err(DateError::OutOfRange));
    }

    #[test]
    fn with_durations() {
        let then = datetime(2020, Month::July, 20, 10, 0, 0, 0);
        assert_eq!(then + Duration::of(90), datetime(2020, Month::July, 20, 10, 1, 30, 0));
        assert_eq!(then - Duration::of_millis(1), datetime(2020, Month::July, 20, 9, 59, 59, 999));
    }
}


mod instants {
    use super::*;

    #[test]
    fn carry_milliseconds() {
        let instant = Instant::at_ms(10, 900) + Duration::of_ms(0, 200);
        assert_eq!((instant.seconds(), instant.milliseconds()), (11, 100));
    }

    #[test]
    fn borrow_milliseconds() {
        let instant = Instant::at_ms(10, 100) - Duration::of_ms(0, 200);
        assert_eq!((instant.seconds(), instant.milliseconds()), (9, 900));
    }

    #[test]
    fn before_the_epoch() {
        let instant = Instant::at_millis(-1);
        assert_eq!((instant.seconds(), instant.milliseconds()), (-1, 999));
        assert_eq!(instant.epoch_millis(), Some(-1));
    }

    #[test]
    fn duration_lengths() {
        assert_eq!(Duration::of_millis(-1500).lengths(), (-2, 500));
        assert_eq!((Duration::of(3) * 4).total_millis(), 12_000);
        assert_eq!(Duration::of(3) - Duration::of(3), Duration::zero());
    }
}
