//! ICS file parsing using the icalendar crate's parser.

use chrono::NaiveDate;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::error::{CelebrationError, CelebrationResult};
use crate::event::CelebrationEvent;

/// Read the celebrations back out of an .ics payload, in file order.
pub fn parse_calendar(content: &str) -> CelebrationResult<Vec<CelebrationEvent>> {
    // Generated payloads end without a line break after END:VCALENDAR
    let mut content = content.to_string();
    if !content.ends_with('\n') {
        content.push_str("\r\n");
    }

    let unfolded = unfold(&content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| CelebrationError::IcsParse(e.to_string()))?;

    calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(parse_event)
        .collect()
}

fn parse_event(vevent: &Component) -> CelebrationResult<CelebrationEvent> {
    let start = vevent
        .find_prop("DTSTART")
        .ok_or_else(|| CelebrationError::IcsParse("VEVENT without DTSTART".into()))?;
    let start = DatePerhapsTime::try_from(start)
        .map_err(|_| CelebrationError::IcsParse(format!("Invalid DTSTART '{}'", start.val)))?;

    let summary = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .ok_or_else(|| CelebrationError::IcsParse("VEVENT without SUMMARY".into()))?;
    let description = vevent
        .find_prop("DESCRIPTION")
        .map(|p| p.val.to_string())
        .unwrap_or_default();

    Ok(CelebrationEvent {
        date: to_date(start),
        summary,
        description,
    })
}

fn to_date(dpt: DatePerhapsTime) -> NaiveDate {
    match dpt {
        DatePerhapsTime::Date(d) => d,
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => dt.date_naive(),
            CalendarDateTime::Floating(naive) => naive.date(),
            CalendarDateTime::WithTimezone { date_time, .. } => date_time.date(),
        },
    }
}
