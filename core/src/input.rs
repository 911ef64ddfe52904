use chrono::NaiveDate;
use std::path::Path;

use crate::error::ParseError;
use crate::model::day_record::DayRecord;

pub const LOCATION_SEPARATOR: char = '>';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat `A>B` as a day split between `A` and `B`. When off the whole
    /// field is one location name.
    pub split_locations: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            split_locations: true,
        }
    }
}

/// Half-open range of days `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d < end)
    }

    pub fn len(&self) -> usize {
        (self.end - self.start).num_days().max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub span: DateSpan,
    pub locations: Vec<String>,
}

impl ParsedLine {
    /// One record per day of the span, all sharing the same locations.
    pub fn into_records(self, year: i32) -> Vec<DayRecord> {
        self.span
            .days()
            .map(|date| DayRecord::new(date, year, self.locations.clone()))
            .collect()
    }
}

/// Parse one `<date>\t<location>` line. Blank lines and `#` comments
/// yield `Ok(None)`.
pub fn parse_line(
    year: i32,
    line: &str,
    options: ParseOptions,
) -> Result<Option<ParsedLine>, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return Ok(None);
    }

    let (date_field, location_field) = split_fields(line)?;
    let span = parse_date_field(year, date_field)?;
    let locations = parse_location_field(location_field, options.split_locations)?;

    Ok(Some(ParsedLine { span, locations }))
}

fn split_fields(line: &str) -> Result<(&str, &str), ParseError> {
    if line.contains('\t') {
        let fields: Vec<&str> = line.split('\t').collect();
        return match fields.as_slice() {
            [date, location] => Ok((*date, *location)),
            _ => Err(ParseError::BadFieldCount(line.to_string())),
        };
    }
    // Older files separate the fields with plain spaces.
    line.trim()
        .split_once(char::is_whitespace)
        .ok_or_else(|| ParseError::BadFieldCount(line.to_string()))
}

/// `MMDD` or inclusive `MMDD-MMDD`, both inside `year`.
pub fn parse_date_field(year: i32, field: &str) -> Result<DateSpan, ParseError> {
    let field = field.trim();
    let (start, last) = match field.split_once('-') {
        Some((from, to)) => (parse_mmdd(year, from, field)?, parse_mmdd(year, to, field)?),
        None => {
            let day = parse_mmdd(year, field, field)?;
            (day, day)
        }
    };

    if last < start {
        return Err(ParseError::ReversedRange(field.to_string()));
    }
    let end = last
        .succ_opt()
        .ok_or_else(|| ParseError::BadDateField(field.to_string()))?;

    Ok(DateSpan { start, end })
}

fn parse_mmdd(year: i32, token: &str, field: &str) -> Result<NaiveDate, ParseError> {
    let token = token.trim();
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::BadDateField(field.to_string()));
    }
    let month: u32 = token[..2]
        .parse()
        .map_err(|_| ParseError::BadDateField(field.to_string()))?;
    let day: u32 = token[2..]
        .parse()
        .map_err(|_| ParseError::BadDateField(field.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::BadDate { year, month, day })
}

pub fn parse_location_field(field: &str, split: bool) -> Result<Vec<String>, ParseError> {
    let names: Vec<String> = if split {
        field
            .split(LOCATION_SEPARATOR)
            .map(|s| s.trim().to_string())
            .collect()
    } else {
        vec![field.trim().to_string()]
    };

    if names.iter().any(|n| n.is_empty()) {
        return Err(ParseError::MissingLocation(field.to_string()));
    }
    Ok(names)
}

/// The year encoded in the last four characters of the file stem,
/// e.g. `data/trip2024.txt` -> 2024.
pub fn year_from_file_name(path: &Path) -> Result<i32, ParseError> {
    let bad = || ParseError::BadFileName(path.to_path_buf());
    let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(bad)?;
    if stem.len() < 4 || !stem.is_char_boundary(stem.len() - 4) {
        return Err(bad());
    }
    let digits = &stem[stem.len() - 4..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    digits.parse().map_err(|_| bad())
}
