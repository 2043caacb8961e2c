//! Birthday arithmetic for special dates.
//!
//! Offsets move the month only and keep the birthday's day-of-month. A day
//! that does not exist in the target month (the 31st in a 30-day month, Feb 29
//! in a common year) never matches, so that special date is skipped.

use chrono::{Datelike, NaiveDate};

use crate::event::CelebrationIdea;
use crate::template::{DateTemplate, birthday_idea};

/// The kind of special date a day falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialDate {
    Birthday,
    HalfBirthday,
    QuarterBirthday,
}

impl SpecialDate {
    pub fn idea(self, name: &str) -> CelebrationIdea {
        match self {
            SpecialDate::Birthday => birthday_idea(name),
            SpecialDate::HalfBirthday => DateTemplate::HalfBirthday.idea(),
            SpecialDate::QuarterBirthday => DateTemplate::QuarterBirthday.idea(),
        }
    }
}

/// Month/day anchors derived from a birthday. Months are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialDates {
    day: u32,
    birthday_month: u32,
    half_month: u32,
    quarter_months: [u32; 2],
}

impl SpecialDates {
    pub fn from_birthday(birthday: NaiveDate) -> Self {
        let month = birthday.month0();
        SpecialDates {
            day: birthday.day(),
            birthday_month: month,
            half_month: (month + 6) % 12,
            quarter_months: [(month + 3) % 12, (month + 9) % 12],
        }
    }

    /// The special date `date` falls on, if any.
    ///
    /// Precedence is birthday, then half-birthday, then quarter-birthday.
    pub fn match_date(&self, date: NaiveDate) -> Option<SpecialDate> {
        if date.day() != self.day {
            return None;
        }

        let month = date.month0();
        if month == self.birthday_month {
            Some(SpecialDate::Birthday)
        } else if month == self.half_month {
            Some(SpecialDate::HalfBirthday)
        } else if self.quarter_months.contains(&month) {
            Some(SpecialDate::QuarterBirthday)
        } else {
            None
        }
    }
}
