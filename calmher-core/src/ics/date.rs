//! Conversions between ICS date values and `YYYY-MM-DDTHH:MM` strings.
//!
//! Neither direction carries timezone identity: TZID parameters and the
//! UTC designator are dropped on read, and a literal `Z` is appended on
//! write.

/// Convert an ICS DTSTART/DTEND value into `YYYY-MM-DDTHH:MM`.
///
/// Accepts `YYYYMMDD` (all-day, becomes midnight) and
/// `YYYYMMDDTHHMMSS[Z]`. Anything before the last `:` (a leftover
/// `TZID=...:` prefix) is discarded. Unrecognized shapes are formatted
/// from whatever sits at the fixed offsets.
pub fn format_ics_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let value = trimmed.rsplit(':').next().unwrap_or(trimmed).trim();

    let year = chars_between(value, 0, 4);
    let month = chars_between(value, 4, 6);
    let day = chars_between(value, 6, 8);

    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{year}-{month}-{day}T00:00");
    }

    let hour = or_midnight(chars_between(value, 9, 11));
    let minute = or_midnight(chars_between(value, 11, 13));

    format!("{year}-{month}-{day}T{hour}:{minute}")
}

/// Convert `YYYY-MM-DDTHH:MM` into an ICS UTC value by stripping `-`/`:`
/// and appending `Z`. The input shape is not validated.
pub fn to_ics_datetime(iso: &str) -> String {
    let mut value: String = iso.chars().filter(|c| !matches!(c, '-' | ':')).collect();
    value.push('Z');
    value
}

/// Character-based substring that clamps to the end of the input.
fn chars_between(value: &str, start: usize, end: usize) -> String {
    value.chars().skip(start).take(end - start).collect()
}

fn or_midnight(part: String) -> String {
    if part.is_empty() { "00".to_string() } else { part }
}
