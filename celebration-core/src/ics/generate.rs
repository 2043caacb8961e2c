//! ICS file generation.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rand::Rng;

use crate::event::CelebrationEvent;

/// Content type for the downloadable calendar file.
pub const ICS_MIME_TYPE: &str = "text/calendar";

const PRODID: &str = "-//DailyCelebrationCalendar//EN";
const UID_DOMAIN: &str = "celebrationcalendar.app";
const UID_TOKEN_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate the full .ics payload for a year of celebrations.
///
/// `stamp` becomes every event's DTSTAMP. Summary and description are written
/// as-is, without RFC 5545 escaping or line folding.
pub fn generate_calendar<R: Rng + ?Sized>(
    events: &[CelebrationEvent],
    owner_name: &str,
    stamp: DateTime<Utc>,
    rng: &mut R,
) -> String {
    let dtstamp = stamp.format("%Y%m%dT%H%M%SZ").to_string();

    let mut ics = String::new();
    push_line(&mut ics, "BEGIN:VCALENDAR");
    push_line(&mut ics, "VERSION:2.0");
    push_line(&mut ics, &format!("PRODID:{PRODID}"));
    push_line(
        &mut ics,
        &format!("X-WR-CALNAME:{owner_name}'s Daily Celebration Calendar"),
    );

    for event in events {
        let date = event.date.format("%Y%m%d").to_string();

        push_line(&mut ics, "BEGIN:VEVENT");
        push_line(&mut ics, &format!("UID:{}", event_uid(event.date, rng)));
        push_line(&mut ics, &format!("DTSTAMP:{dtstamp}"));
        // All-day: start and end carry the same date
        push_line(&mut ics, &format!("DTSTART;VALUE=DATE:{date}"));
        push_line(&mut ics, &format!("DTEND;VALUE=DATE:{date}"));
        push_line(&mut ics, &format!("SUMMARY:{}", event.summary));
        push_line(&mut ics, &format!("DESCRIPTION:{}", event.description));
        push_line(&mut ics, "END:VEVENT");
    }

    ics.push_str("END:VCALENDAR");
    ics
}

/// File name the calendar is offered under, e.g. `Ava_celebration_calendar.ics`
pub fn calendar_filename(owner_name: &str) -> String {
    format!("{owner_name}_celebration_calendar.ics")
}

fn push_line(ics: &mut String, line: &str) {
    ics.push_str(line);
    ics.push_str("\r\n");
}

/// `{epoch millis of the date}-{random base-36 token}@celebrationcalendar.app`
fn event_uid<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> String {
    let millis = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    let token: String = (0..UID_TOKEN_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("{millis}-{token}@{UID_DOMAIN}")
}
