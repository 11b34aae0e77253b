//! ICS file generation.

use chrono::{DateTime, Utc};

use super::date::to_ics_datetime;
use crate::constants::{DEFAULT_CALENDAR_NAME, PRODID, UID_DOMAIN};
use crate::event::Event;

/// Maximum content line length in octets before folding (RFC 5545 §3.1).
const MAX_LINE_OCTETS: usize = 75;

/// Fixed UTC timezone block written after the calendar headers.
const UTC_TIMEZONE: [&str; 8] = [
    "BEGIN:VTIMEZONE",
    "TZID:UTC",
    "BEGIN:STANDARD",
    "DTSTART:19700101T000000Z",
    "TZOFFSETFROM:+0000",
    "TZOFFSETTO:+0000",
    "TZNAME:UTC",
    "END:STANDARD",
];

/// Generate a complete calendar for `events`, stamped with the current time.
///
/// `calendar_name` defaults to "Wellness Schedule".
pub fn generate_ics(events: &[Event], calendar_name: Option<&str>) -> String {
    generate_ics_at(events, calendar_name, Utc::now())
}

/// Generate a complete calendar with an explicit clock for UID and DTSTAMP.
///
/// Start and end values are not validated: `-` and `:` are stripped and a
/// `Z` is appended, so the naive local time is written as if it were UTC.
pub fn generate_ics_at(
    events: &[Event],
    calendar_name: Option<&str>,
    now: DateTime<Utc>,
) -> String {
    let calendar_name = calendar_name.unwrap_or(DEFAULT_CALENDAR_NAME);
    let dtstamp = now.format("%Y%m%dT%H%M%SZ").to_string();
    let millis = now.timestamp_millis();

    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".into(),
        "VERSION:2.0".into(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".into(),
        "METHOD:PUBLISH".into(),
        format!("X-WR-CALNAME:{}", escape_line_breaks(calendar_name)),
        "X-WR-TIMEZONE:UTC".into(),
    ];
    lines.extend(UTC_TIMEZONE.iter().map(|l| l.to_string()));
    lines.push("END:VTIMEZONE".into());

    for (index, event) in events.iter().enumerate() {
        lines.push("BEGIN:VEVENT".into());
        lines.push(format!("UID:wellness-{index}-{millis}@{UID_DOMAIN}"));
        lines.push(format!("DTSTAMP:{dtstamp}"));
        lines.push(format!("DTSTART:{}", to_ics_datetime(&event.start)));
        lines.push(format!("DTEND:{}", to_ics_datetime(&event.end)));
        lines.push(format!("SUMMARY:{}", escape_line_breaks(&event.title)));
        lines.push(format!(
            "DESCRIPTION:{}",
            escape_line_breaks(event.export_description())
        ));
        lines.push("STATUS:CONFIRMED".into());
        lines.push("SEQUENCE:0".into());
        lines.push("END:VEVENT".into());
    }

    lines.push("END:VCALENDAR".into());

    let mut output = String::new();
    for line in &lines {
        output.push_str(&fold_line(line));
        output.push_str("\r\n");
    }
    output
}

/// Raw line breaks would end the property early; write them as `\n`.
fn escape_line_breaks(value: &str) -> String {
    value
        .replace("\r\n", "\\n")
        .replace(['\r', '\n'], "\\n")
}

/// Fold a content line at 75 octets with CRLF + space, never inside a
/// UTF-8 sequence.
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();
        if current_len + char_len > MAX_LINE_OCTETS {
            result.push_str("\r\n ");
            // The leading space counts toward the continuation line
            current_len = 1;
        }
        result.push(c);
        current_len += char_len;
    }

    result
}
