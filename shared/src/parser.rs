//! CSV ingestion for the air quality dataset
//!
//! The dataset is a plain comma-separated file whose first non-blank line is
//! the header. Fields are split on every comma (quotes do not protect
//! embedded commas), quote characters are stripped, and each value is read
//! with lenient prefix-number semantics so that `"12abc"` yields `12` and
//! `"N/A"` yields `0`.

use csv::{ReaderBuilder, StringRecord, Terminator};
use thiserror::Error;

use crate::models::{AirQualityRecord, LATITUDE, LONGITUDE};
use crate::validation::is_valid_coordinate;

/// Errors produced while ingesting CSV text
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("CSV input is empty or has no data rows")]
    EmptyOrInvalidInput,
}

/// Parse CSV text into records.
///
/// Rows whose `lat` or `lng` is missing, unparseable, non-finite or exactly
/// zero are dropped. Every other field that does not parse becomes `0`.
pub fn parse(text: &str) -> Result<Vec<AirQualityRecord>, ParseError> {
    // Lines end at `\n` only; a trailing `\r` is removed by field trimming
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(text.as_bytes());

    // Valid UTF-8 split on ASCII bytes with ragged rows allowed cannot fail
    let lines: Vec<StringRecord> = reader
        .records()
        .flatten()
        .filter(|line| !is_blank(line))
        .collect();

    if lines.len() < 2 {
        return Err(ParseError::EmptyOrInvalidInput);
    }

    let headers: Vec<String> = lines[0].iter().map(clean_field).collect();

    Ok(lines[1..]
        .iter()
        .map(|line| build_record(&headers, line))
        .filter(has_valid_coordinates)
        .collect())
}

/// Read a number the way a browser's `parseFloat` does: skip leading
/// whitespace, then take the longest prefix that forms a decimal literal.
///
/// Returns `None` when no digits are found. `Infinity` (optionally signed) is
/// recognized; hex, `NaN` and thousands separators are not.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Numeric value of a non-coordinate field; anything unparseable is `0`
fn coerce_field(raw: &str) -> f64 {
    parse_float_prefix(raw)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

fn clean_field(raw: &str) -> String {
    raw.replace('"', "").trim().to_string()
}

fn is_blank(line: &StringRecord) -> bool {
    line.iter().all(|field| field.trim().is_empty()) && line.len() <= 1
}

fn build_record(headers: &[String], line: &StringRecord) -> AirQualityRecord {
    let mut record = AirQualityRecord::new();
    for (index, header) in headers.iter().enumerate() {
        let value = line
            .get(index)
            .map(|raw| coerce_field(&clean_field(raw)))
            .unwrap_or(0.0);
        record.set(header.clone(), value);
    }
    record
}

fn has_valid_coordinates(record: &AirQualityRecord) -> bool {
    let lat = record.get(LATITUDE);
    let lng = record.get(LONGITUDE);
    matches!(
        (lat, lng),
        (Some(lat), Some(lng)) if is_valid_coordinate(lat) && is_valid_coordinate(lng)
    )
}
