//! ICS file generation and parsing.
//!
//! Calendars are written as plain RFC 5545 text, one all-day VEVENT per
//! celebration.

mod generate;
mod parse;

pub use generate::{ICS_MIME_TYPE, calendar_filename, generate_calendar};
pub use parse::parse_calendar;
