//! ICS file generation and parsing.
//!
//! Converts between iCalendar text (an RFC 5545 subset) and the flat
//! `Event` model. Both directions are pure functions over in-memory text.

mod date;
mod generate;
mod parse;

pub use date::{format_ics_date, to_ics_datetime};
pub use generate::{generate_ics, generate_ics_at};
pub use parse::parse_ics;
