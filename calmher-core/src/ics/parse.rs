//! ICS parsing as an explicit line-oriented state machine.
//!
//! The scanner walks the text once. Outside a VEVENT everything is ignored
//! (VCALENDAR headers, VTIMEZONE blocks, stray lines). Inside a VEVENT it
//! keeps one pending property, extends it with folded continuation lines,
//! and flushes it into the event being built when the next property starts.

use std::borrow::Cow;

use tracing::{debug, trace};

use super::date::format_ics_date;
use crate::event::Event;

const BEGIN_VEVENT: &str = "BEGIN:VEVENT";
const END_VEVENT: &str = "END:VEVENT";

/// Parse ICS content into events, in the order they appear.
///
/// Never fails: VEVENT blocks missing SUMMARY, DTSTART or DTEND are dropped,
/// and text with no VEVENT blocks yields an empty list.
pub fn parse_ics(content: &str) -> Vec<Event> {
    let mut events = Vec::new();
    let mut state = ScanState::Outside;

    for raw_line in content.split('\n') {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        // Whitespace-only lines are folds of trailing whitespace, not blanks
        if line.is_empty() {
            continue;
        }

        state = match state {
            ScanState::Outside if is_marker(line, BEGIN_VEVENT) => {
                ScanState::InEvent(EventBuilder::default())
            }
            ScanState::Outside => ScanState::Outside,
            ScanState::InEvent(builder) if is_marker(line, END_VEVENT) => {
                if let Some(event) = builder.finish() {
                    events.push(event);
                }
                ScanState::Outside
            }
            ScanState::InEvent(mut builder) => {
                builder.feed(line);
                ScanState::InEvent(builder)
            }
        };
    }

    if let ScanState::InEvent(_) = state {
        debug!("Discarding VEVENT without END:VEVENT");
    }

    events
}

enum ScanState {
    Outside,
    InEvent(EventBuilder),
}

/// A property whose value may still grow through folded lines.
struct PendingProperty {
    name: String,
    value: String,
}

#[derive(Default)]
struct EventBuilder {
    event: Event,
    pending: Option<PendingProperty>,
    /// Depth of sub-components (VALARM, ...) nested in the VEVENT
    nested: usize,
}

impl EventBuilder {
    fn feed(&mut self, line: &str) {
        // RFC 5545 §3.1: a leading SPACE or HTAB continues the previous line;
        // drop that single character and insert nothing.
        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            if let Some(pending) = self.pending.as_mut() {
                pending.value.push_str(continuation);
            }
            return;
        }

        self.flush();

        let Some((name, value)) = line.split_once(':') else {
            trace!(line, "Ignoring line without ':'");
            return;
        };

        let base = base_name(name);
        if base.eq_ignore_ascii_case("BEGIN") {
            // A stray BEGIN:VEVENT is not a sub-component; the span still
            // closes at the first END:VEVENT.
            if !value.trim().eq_ignore_ascii_case("VEVENT") {
                self.nested += 1;
            }
        } else if base.eq_ignore_ascii_case("END") {
            self.nested = self.nested.saturating_sub(1);
        } else if self.nested == 0 {
            self.pending = Some(PendingProperty {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    fn flush(&mut self) {
        if let Some(property) = self.pending.take() {
            apply_property(&mut self.event, &property.name, &property.value);
        }
    }

    fn finish(mut self) -> Option<Event> {
        self.flush();

        if self.event.has_required_fields() {
            Some(self.event)
        } else {
            debug!(
                title = %self.event.title,
                start = %self.event.start,
                end = %self.event.end,
                "Dropping VEVENT missing SUMMARY, DTSTART or DTEND"
            );
            None
        }
    }
}

/// Store a finished property on the event. Unknown properties are ignored.
fn apply_property(event: &mut Event, name: &str, value: &str) {
    match base_name(name).to_ascii_uppercase().as_str() {
        "SUMMARY" => event.title = unescape_newlines(&percent_decode(value)),
        "DTSTART" => event.start = format_ics_date(value),
        "DTEND" => event.end = format_ics_date(value),
        "DESCRIPTION" => event.description = Some(unescape_newlines(&percent_decode(value))),
        "LOCATION" => event.location = Some(percent_decode(value).into_owned()),
        _ => trace!(property = name, "Ignoring property"),
    }
}

/// Property name without its `;PARAM=...` suffix.
fn base_name(name: &str) -> &str {
    name.split(';').next().unwrap_or(name).trim()
}

fn is_marker(line: &str, marker: &str) -> bool {
    line.trim_end().eq_ignore_ascii_case(marker)
}

/// Percent-decode a value, keeping it verbatim when the result is not UTF-8.
fn percent_decode(value: &str) -> Cow<'_, str> {
    urlencoding::decode(value).unwrap_or(Cow::Borrowed(value))
}

/// Replace `\n` (and `\N`) escape sequences with a single space.
fn unescape_newlines(value: &str) -> String {
    value.replace("\\n", " ").replace("\\N", " ")
}
