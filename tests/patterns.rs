use datecmp::{DatePattern, LocalDate, LocalDateTime, LocalTime, Month, ParseError, PatternError};


#[test]
fn day_month_year() {
    let pattern = DatePattern::compile("dd-MM-yyyy").unwrap();
    let date = pattern.parse_date("20-07-2020").unwrap();

    assert_eq!(date, LocalDate::ymd(2020, Month::July, 20).unwrap());
    assert_eq!(pattern.format_date(&date), "20-07-2020");
}

#[test]
fn times_and_quotes() {
    let pattern = DatePattern::compile("yyyy-MM-dd'T'HH:mm:ss.SSS").unwrap();
    let then = LocalDateTime::new(LocalDate::ymd(2020, Month::July, 20).unwrap(),
                                  LocalTime::hms_ms(9, 5, 3, 40).unwrap());

    assert_eq!(pattern.format(&then), "2020-07-20T09:05:03.040");
    assert_eq!(pattern.parse_date_time("2020-07-20T09:05:03.040").unwrap(), then);
}

#[test]
fn fields_with_no_separator() {
    let pattern = DatePattern::compile("yyyyMMdd").unwrap();
    assert_eq!(pattern.parse_date("20200720").unwrap(), LocalDate::ymd(2020, Month::July, 20).unwrap());
}

#[test]
fn unpadded_input() {
    let pattern = DatePattern::compile("dd-MM-yyyy").unwrap();
    assert_eq!(pattern.parse_date("5-7-2020").unwrap(), LocalDate::ymd(2020, Month::July, 5).unwrap());
}

#[test]
fn wrong_separator() {
    let pattern = DatePattern::compile("dd-MM-yyyy").unwrap();
    let error = pattern.parse_date("2020/20/07").unwrap_err();

    assert_eq!(error.offset(), Some(4));
    assert!(matches!(error, ParseError::Mismatch { .. }));
    assert_eq!(error.to_string(), r#"unparseable date "2020/20/07": expected "-" at offset 4"#);
}

#[test]
fn impossible_date() {
    let pattern = DatePattern::compile("dd-MM-yyyy").unwrap();
    let error = pattern.parse_date("31-02-2020").unwrap_err();
    assert_eq!(error, ParseError::InvalidDate { input: "31-02-2020".into() });
    assert_eq!(error.offset(), None);
}

#[test]
fn year_past_the_last_one() {
    let pattern = DatePattern::compile("dd-MM-yyyy").unwrap();
    assert!(matches!(pattern.parse_date_time("01-01-999999999"), Err(ParseError::InvalidDate { .. })));
}

#[test]
fn leftovers() {
    let pattern = DatePattern::compile("dd-MM-yyyy").unwrap();
    assert!(matches!(pattern.parse_date("20-07-2020!"), Err(ParseError::TrailingInput { pos: 10, .. })));
    assert!(matches!(pattern.parse_date("20-07-"), Err(ParseError::ExpectedDigits { pos: 6, .. })));
}

#[test]
fn bad_patterns() {
    assert_eq!(DatePattern::compile("dd-MM-aaaa").unwrap_err(), PatternError::UnknownLetter { c: 'a', pos: 6 });
    assert_eq!(DatePattern::compile("dd 'at").unwrap_err(), PatternError::UnterminatedQuote { open_pos: 3 });
}
