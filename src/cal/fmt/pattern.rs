//! Letter patterns such as `dd-MM-yyyy`, for formatting dates and times
//! as text and for parsing them back.
//!
//! Each run of one letter is a numeric field, zero-padded to the length
//! of the run:
//!
//! | Letter | Field                  |
//! |--------|------------------------|
//! | `y`    | year (`yy`: two digits) |
//! | `M`    | month, 1 to 12         |
//! | `d`    | day of the month       |
//! | `H`    | hour of the day, 0 to 23 |
//! | `m`    | minute                 |
//! | `s`    | second                 |
//! | `S`    | millisecond            |
//!
//! Text between single quotes is copied as it is, and `''` stands for a
//! single quote. Any other letter is an error; anything else is literal.

use std::str::CharIndices;

use pad::{PadStr, Alignment};
use thiserror::Error;
use tracing::debug;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month};


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Year(Width),
    Month(Width),
    Day(Width),

    Hour(Width),
    Minute(Width),
    Second(Width),
    Millisecond(Width),
}

pub type Width = usize;
pub type Pos = usize;

impl<'a> Field<'a> {
    fn is_numeric(&self) -> bool {
        !matches!(*self, Field::Literal(_))
    }

    fn format<T>(&self, when: &T, buf: &mut String) where T: DatePiece + TimePiece {
        match *self {
            Field::Literal(s)      => buf.push_str(s),
            Field::Year(2)         => buf.push_str(&pad_number(when.year_of_century(), 2)),
            Field::Year(w)         => buf.push_str(&pad_number(when.year(), w)),
            Field::Month(w)        => buf.push_str(&pad_number(when.month() as i64, w)),
            Field::Day(w)          => buf.push_str(&pad_number(when.day() as i64, w)),
            Field::Hour(w)         => buf.push_str(&pad_number(when.hour() as i64, w)),
            Field::Minute(w)       => buf.push_str(&pad_number(when.minute() as i64, w)),
            Field::Second(w)       => buf.push_str(&pad_number(when.second() as i64, w)),
            Field::Millisecond(w)  => buf.push_str(&pad_number(when.millisecond() as i64, w)),
        }
    }
}

fn pad_number(number: i64, width: Width) -> String {
    let digits = number.unsigned_abs().to_string().pad(width, '0', Alignment::Right, false);
    if number < 0 { format!("-{}", digits) } else { digits }
}


/// A compiled date pattern.
///
/// ```
/// use datecmp::{DatePattern, LocalDate, Month};
///
/// let pattern = DatePattern::compile("dd-MM-yyyy").unwrap();
/// let date = pattern.parse_date("20-07-2020").unwrap();
///
/// assert_eq!(date, LocalDate::ymd(2020, Month::July, 20).unwrap());
/// assert_eq!(pattern.format_date(&date), "20-07-2020");
/// assert!(pattern.parse_date("2020/20/07").is_err());
/// ```
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DatePattern<'a> {
    pub fields: Vec<Field<'a>>,
}

impl<'a> DatePattern<'a> {

    /// Compiles a pattern string into its fields.
    pub fn compile(input: &'a str) -> Result<DatePattern<'a>, PatternError> {
        let mut parser = PatternParser::new(input);
        parser.parse_pattern_string()?;

        Ok(DatePattern { fields: parser.fields })
    }

    /// Formats any value that has both date and time fields.
    pub fn format<T>(&self, when: &T) -> String where T: DatePiece + TimePiece {
        let mut buf = String::new();

        for field in &self.fields {
            field.format(when, &mut buf);
        }

        buf
    }

    /// Formats a date, with any time fields rendered as midnight.
    pub fn format_date(&self, date: &LocalDate) -> String {
        self.format(&LocalDateTime::new(*date, LocalTime::midnight()))
    }

    /// Parses text that follows this pattern into a date-time. Fields the
    /// pattern leaves out default to the 1st of January 1970 at midnight.
    ///
    /// A numeric field takes exactly as many digits as its letter run when
    /// it is immediately followed by another numeric field, and any number
    /// of digits (at least one) otherwise.
    pub fn parse_date_time(&self, input: &str) -> Result<LocalDateTime, ParseError> {
        let result = self.parse_fields(input);
        if let Err(ref e) = result {
            debug!(input, error = %e, "failed to parse date");
        }
        result
    }

    /// Parses text that follows this pattern into a date, ignoring any
    /// time fields.
    pub fn parse_date(&self, input: &str) -> Result<LocalDate, ParseError> {
        self.parse_date_time(input).map(|datetime| datetime.date())
    }

    fn parse_fields(&self, input: &str) -> Result<LocalDateTime, ParseError> {
        let mut values = ParsedValues::default();
        let mut pos = 0;

        for (index, field) in self.fields.iter().enumerate() {
            if let Field::Literal(text) = *field {
                if !input[pos..].starts_with(text) {
                    return Err(ParseError::Mismatch { input: input.into(), expected: text.into(), pos });
                }

                pos += text.len();
                continue;
            }

            let followed_by_number = self.fields.get(index + 1).map_or(false, Field::is_numeric);
            let width = field_width(field);
            let (least, most) = if followed_by_number { (width, width) } else { (1, 9) };

            let digits = input[pos..].bytes()
                                     .take(most)
                                     .take_while(u8::is_ascii_digit)
                                     .count();

            if digits < least {
                return Err(ParseError::ExpectedDigits { input: input.into(), pos });
            }

            let number = input[pos .. pos + digits].parse::<i64>()
                             .map_err(|_| ParseError::ExpectedDigits { input: input.into(), pos })?;

            values.set(field, number, digits);
            pos += digits;
        }

        if pos != input.len() {
            return Err(ParseError::TrailingInput { input: input.into(), pos });
        }

        values.build().ok_or_else(|| ParseError::InvalidDate { input: input.into() })
    }
}

fn field_width(field: &Field<'_>) -> Width {
    match *field {
        Field::Literal(s)  => s.len(),
        Field::Year(w)     | Field::Month(w)  | Field::Day(w)
        | Field::Hour(w)   | Field::Minute(w) | Field::Second(w)
        | Field::Millisecond(w) => w,
    }
}


/// The raw numbers read while parsing, before they are checked.
struct ParsedValues {
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    millisecond: i64,
}

impl Default for ParsedValues {
    fn default() -> Self {
        Self { year: 1970, month: 1, day: 1, hour: 0, minute: 0, second: 0, millisecond: 0 }
    }
}

impl ParsedValues {
    fn set(&mut self, field: &Field<'_>, number: i64, digits: usize) {
        match *field {
            Field::Year(2) if digits == 2 => self.year = 2000 + number,
            Field::Year(_)         => self.year = number,
            Field::Month(_)        => self.month = number,
            Field::Day(_)          => self.day = number,
            Field::Hour(_)         => self.hour = number,
            Field::Minute(_)       => self.minute = number,
            Field::Second(_)       => self.second = number,
            Field::Millisecond(_)  => self.millisecond = number,
            Field::Literal(_)      => {},
        }
    }

    fn build(&self) -> Option<LocalDateTime> {
        let month = Month::from_one(i8::try_from(self.month).ok()?).ok()?;
        let date = LocalDate::ymd(self.year, month, i8::try_from(self.day).ok()?).ok()?;
        let time = LocalTime::hms_ms(
            i8::try_from(self.hour).ok()?,
            i8::try_from(self.minute).ok()?,
            i8::try_from(self.second).ok()?,
            i16::try_from(self.millisecond).ok()?,
        ).ok()?;

        Some(LocalDateTime::new(date, time))
    }
}


/// A problem with the pattern string itself.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Error)]
pub enum PatternError {
    #[error("unknown pattern letter {c:?} at offset {pos}")]
    UnknownLetter { c: char, pos: Pos },

    #[error("quote at offset {open_pos} is never closed")]
    UnterminatedQuote { open_pos: Pos },
}

/// Text that does not follow the pattern it was parsed with.
#[derive(PartialEq, Eq, Clone, Debug, Error)]
pub enum ParseError {
    #[error("unparseable date {input:?}: expected {expected:?} at offset {pos}")]
    Mismatch { input: String, expected: String, pos: Pos },

    #[error("unparseable date {input:?}: expected digits at offset {pos}")]
    ExpectedDigits { input: String, pos: Pos },

    #[error("unparseable date {input:?}: unexpected text at offset {pos}")]
    TrailingInput { input: String, pos: Pos },

    #[error("unparseable date {input:?}: no such date or time")]
    InvalidDate { input: String },
}

impl ParseError {

    /// The byte offset where parsing stopped, when there is one.
    pub fn offset(&self) -> Option<Pos> {
        match *self {
            ParseError::Mismatch { pos, .. }
            | ParseError::ExpectedDigits { pos, .. }
            | ParseError::TrailingInput { pos, .. } => Some(pos),
            ParseError::InvalidDate { .. } => None,
        }
    }
}


struct PatternParser<'a> {
    iter:   CharIndices<'a>,
    fields: Vec<Field<'a>>,
    input:  &'a str,
    anchor: Option<Pos>,
    peekee: Option<Option<(Pos, char)>>,
}

impl<'a> PatternParser<'a> {
    fn new(input: &'a str) -> PatternParser<'a> {
        PatternParser {
            iter:   input.char_indices(),
            fields: Vec::new(),
            input,
            anchor: None,
            peekee: None,
        }
    }

    fn next(&mut self) -> Option<(Pos, char)> {
        match self.peekee.take() {
            Some(p) => p,
            None    => self.iter.next(),
        }
    }

    fn peek(&mut self) -> Option<(Pos, char)> {
        match self.peekee {
            Some(thing) => thing,
            None => {
                let thing = self.iter.next();
                self.peekee = Some(thing);
                thing
            }
        }
    }

    fn push_literal(&mut self, from: Pos, to: Pos) {
        let input = self.input;
        self.fields.push(Field::Literal(&input[from .. to]));
    }

    // Consecutive literal characters are kept as one slice of the pattern
    // string, starting at the anchor.
    fn collect_up_to_anchor(&mut self, position: Option<Pos>) {
        if let Some(pos) = self.anchor.take() {
            let end = position.unwrap_or(self.input.len());
            self.push_literal(pos, end);
        }
    }

    fn parse_pattern_string(&mut self) -> Result<(), PatternError> {
        loop {
            match self.next() {
                Some((pos, '\'')) => {
                    self.collect_up_to_anchor(Some(pos));
                    self.parse_quoted(pos)?;
                },
                Some((pos, c)) if c.is_ascii_alphabetic() => {
                    self.collect_up_to_anchor(Some(pos));

                    let field = self.parse_letters(pos, c)?;
                    self.fields.push(field);
                },
                Some((pos, _)) => {
                    if self.anchor.is_none() {
                        self.anchor = Some(pos);
                    }
                },
                None => break,
            }
        }

        self.collect_up_to_anchor(None);
        Ok(())
    }

    fn parse_letters(&mut self, pos: Pos, letter: char) -> Result<Field<'a>, PatternError> {
        let mut width = 1;
        while let Some((_, c)) = self.peek() {
            if c != letter {
                break;
            }

            let _ = self.next();
            width += 1;
        }

        Ok(match letter {
            'y' => Field::Year(width),
            'M' => Field::Month(width),
            'd' => Field::Day(width),
            'H' => Field::Hour(width),
            'm' => Field::Minute(width),
            's' => Field::Second(width),
            'S' => Field::Millisecond(width),
            c   => return Err(PatternError::UnknownLetter { c, pos }),
        })
    }

    // Quoted text can't be one slice when it contains an escaped quote, so
    // each escaped quote becomes its own one-character literal.
    fn parse_quoted(&mut self, open_pos: Pos) -> Result<(), PatternError> {
        if let Some((pos, '\'')) = self.peek() {
            let _ = self.next();
            self.push_literal(pos, pos + 1);
            return Ok(());
        }

        let mut start = open_pos + 1;
        loop {
            match self.next() {
                Some((pos, '\'')) => {
                    if pos > start {
                        self.push_literal(start, pos);
                    }

                    match self.peek() {
                        Some((quote, '\'')) => {
                            let _ = self.next();
                            self.push_literal(quote, quote + 1);
                            start = quote + 1;
                        },
                        _ => return Ok(()),
                    }
                },
                Some(_) => {},
                None => return Err(PatternError::UnterminatedQuote { open_pos }),
            }
        }
    }
}
