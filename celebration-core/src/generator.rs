//! Day-by-day celebration generation for a whole year.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use tracing::{debug, warn};

use crate::error::{CelebrationError, CelebrationResult};
use crate::event::{CelebrationEvent, CelebrationIdea};
use crate::profile::Profile;
use crate::special_date::SpecialDates;
use crate::template::FieldTemplate;

/// One slot of the rotation pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolEntry {
    Field(FieldTemplate),
    /// Stand-in used when the profile provides nothing to rotate through.
    Default,
}

/// Field templates eligible for the day-by-day rotation, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPool {
    entries: Vec<PoolEntry>,
}

impl RotationPool {
    /// Keep every field template the profile can fill in.
    ///
    /// Each candidate is evaluated once; templates that fail or produce an
    /// empty description are left out. With the presence check above, the
    /// failure branch only guards templates added later. Never returns an
    /// empty pool.
    pub fn build<R: Rng + ?Sized>(profile: &Profile, rng: &mut R) -> Self {
        let mut entries: Vec<PoolEntry> = FieldTemplate::ALL
            .into_iter()
            .filter(|template| template.applies_to(profile))
            .filter(|template| match template.evaluate(profile, rng) {
                Ok(idea) => !idea.description.is_empty(),
                Err(e) => {
                    debug!(template = ?template, error = %e, "excluding template from rotation");
                    false
                }
            })
            .map(PoolEntry::Field)
            .collect();

        if entries.is_empty() {
            debug!("no usable profile fields, rotating the default template");
            entries.push(PoolEntry::Default);
        }

        RotationPool { entries }
    }

    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry used on the given zero-based day of the year.
    pub fn select(&self, day_of_year: u32) -> PoolEntry {
        self.entries[day_of_year as usize % self.entries.len()]
    }

    /// A pool entry whose template fails at evaluation time falls back to
    /// the generic idea for the day.
    fn idea_for<R: Rng + ?Sized>(
        &self,
        profile: &Profile,
        day_of_year: u32,
        rng: &mut R,
    ) -> CelebrationIdea {
        match self.select(day_of_year) {
            PoolEntry::Field(template) => template
                .evaluate(profile, rng)
                .unwrap_or_else(|_| CelebrationIdea::generic(day_of_year)),
            PoolEntry::Default => CelebrationIdea::generic(day_of_year),
        }
    }
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// Generate one celebration for every day of `year`, Jan 1 through Dec 31.
///
/// Birthday-derived dates take precedence over the rotation. A missing or
/// malformed birthday simply means no special dates.
pub fn generate_events<R: Rng + ?Sized>(
    profile: &Profile,
    year: i32,
    rng: &mut R,
) -> CelebrationResult<Vec<CelebrationEvent>> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CelebrationError::InvalidYear(year))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(CelebrationError::InvalidYear(year))?;

    let special = special_dates(profile);
    let pool = RotationPool::build(profile, rng);
    debug!(year, pool_size = pool.len(), "generating celebration events");

    let events = start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| {
            let idea = match special.and_then(|s| s.match_date(date)) {
                Some(kind) => kind.idea(&profile.name),
                None => pool.idea_for(profile, date.ordinal0(), rng),
            };
            idea.on(date)
        })
        .collect();

    Ok(events)
}

fn special_dates(profile: &Profile) -> Option<SpecialDates> {
    if !profile.has_birthday() {
        return None;
    }

    match profile.birthday_date() {
        Some(birthday) => Some(SpecialDates::from_birthday(birthday)),
        None => {
            warn!(birthday = %profile.birthday, "ignoring unparseable birthday");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ava() -> Profile {
        Profile {
            name: "Ava".to_string(),
            birthday: String::new(),
            height: "170".to_string(),
            weight: "60".to_string(),
            favorite_color: "blue".to_string(),
            favorite_food: "pasta".to_string(),
            hobbies: "chess".to_string(),
            achievements: String::new(),
            dreams: String::new(),
            personality: "kind".to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event_on(events: &[CelebrationEvent], on: NaiveDate) -> &CelebrationEvent {
        events.iter().find(|e| e.date == on).unwrap()
    }

    #[test]
    fn test_one_event_per_day_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        for year in [2023, 2024, 2100, 2000] {
            let events = generate_events(&ava(), year, &mut rng).unwrap();
            assert_eq!(events.len() as u32, days_in_year(year), "year {}", year);
            assert_eq!(events.first().unwrap().date, date(year, 1, 1));
            assert_eq!(events.last().unwrap().date, date(year, 12, 31));
            for pair in events.windows(2) {
                assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
            }
        }
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2026), 365);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn test_out_of_range_year_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_events(&ava(), i32::MAX, &mut rng).unwrap_err();
        assert!(matches!(err, CelebrationError::InvalidYear(_)));
    }

    #[test]
    fn test_pool_skips_empty_fields() {
        let mut rng = StdRng::seed_from_u64(9);
        let pool = RotationPool::build(&ava(), &mut rng);

        assert_eq!(
            pool.entries(),
            &[
                PoolEntry::Field(FieldTemplate::Height),
                PoolEntry::Field(FieldTemplate::Weight),
                PoolEntry::Field(FieldTemplate::Color),
                PoolEntry::Field(FieldTemplate::Food),
                PoolEntry::Field(FieldTemplate::Hobby),
                PoolEntry::Field(FieldTemplate::Personality),
                PoolEntry::Field(FieldTemplate::Name),
            ]
        );
        assert_eq!(pool.select(0), PoolEntry::Field(FieldTemplate::Height));
        assert_eq!(pool.select(7), PoolEntry::Field(FieldTemplate::Height));
        assert_eq!(pool.select(13), PoolEntry::Field(FieldTemplate::Name));
    }

    #[test]
    fn test_rotation_follows_day_of_year() {
        let mut rng = StdRng::seed_from_u64(5);
        let events = generate_events(&ava(), 2026, &mut rng).unwrap();

        assert_eq!(events[0].summary, "Your Height Appreciation Day");
        assert_eq!(events[1].summary, "Body Strength Day");
        assert_eq!(events[2].summary, "blue Appreciation Day");
        assert_eq!(events[3].summary, "pasta Festival Day");
        assert_eq!(events[4].summary, "chess Celebration Day");
        assert_eq!(events[5].summary, "kind Appreciation Day");
        assert_eq!(events[6].summary, "Your Name Day");
        assert_eq!(events[7].summary, "Your Height Appreciation Day");
        assert!(events.iter().all(|e| !e.description.contains("undefined")));
    }

    #[test]
    fn test_identical_pools_give_identical_categories() {
        let other = Profile {
            name: "Ben".to_string(),
            height: "180".to_string(),
            weight: "80".to_string(),
            favorite_color: "green".to_string(),
            favorite_food: "soup".to_string(),
            hobbies: "golf, tennis".to_string(),
            personality: "calm, brave".to_string(),
            ..Default::default()
        };

        let mut rng = StdRng::seed_from_u64(11);
        let a = RotationPool::build(&ava(), &mut rng);
        let b = RotationPool::build(&other, &mut rng);
        assert_eq!(a, b);

        for day in 0..366 {
            assert_eq!(a.select(day), b.select(day));
        }
    }

    #[test]
    fn test_failing_template_falls_back_to_generic_idea() {
        let pool = RotationPool {
            entries: vec![PoolEntry::Field(FieldTemplate::Dream)],
        };
        let mut rng = StdRng::seed_from_u64(12);

        let idea = pool.idea_for(&ava(), 41, &mut rng);
        assert_eq!(idea, CelebrationIdea::generic(41));
        assert_eq!(
            idea.description,
            "Today is day 42 of the year, and it's special because you're in it!"
        );
    }

    #[test]
    fn test_empty_profile_uses_generic_fallback() {
        let mut rng = StdRng::seed_from_u64(2);
        let events = generate_events(&Profile::default(), 2026, &mut rng).unwrap();

        assert_eq!(events.len(), 365);
        assert!(events.iter().all(|e| e.summary == "Your Special Day"));
        assert_eq!(
            events[0].description,
            "Today is day 1 of the year, and it's special because you're in it!"
        );
        assert_eq!(
            events[364].description,
            "Today is day 365 of the year, and it's special because you're in it!"
        );
    }

    #[test]
    fn test_no_birthday_means_no_special_dates() {
        let mut rng = StdRng::seed_from_u64(3);
        let events = generate_events(&ava(), 2026, &mut rng).unwrap();

        assert!(events.iter().all(|e| {
            !e.summary.contains("Birthday") && e.summary != "Quarter Birthday Milestone"
        }));
    }

    #[test]
    fn test_birthday_dates_override_rotation() {
        let profile = Profile {
            birthday: "2000-03-15".to_string(),
            ..ava()
        };
        let mut rng = StdRng::seed_from_u64(4);
        let events = generate_events(&profile, 2026, &mut rng).unwrap();

        assert_eq!(
            event_on(&events, date(2026, 3, 15)).summary,
            "Ava's Birthday Celebration"
        );
        assert_eq!(event_on(&events, date(2026, 9, 15)).summary, "Your Half-Birthday");
        assert_eq!(
            event_on(&events, date(2026, 6, 15)).summary,
            "Quarter Birthday Milestone"
        );
        assert_eq!(
            event_on(&events, date(2026, 12, 15)).summary,
            "Quarter Birthday Milestone"
        );

        let special_count = events
            .iter()
            .filter(|e| e.summary.contains("Birthday"))
            .count();
        assert_eq!(special_count, 4);
    }

    #[test]
    fn test_rotation_index_is_not_shifted_by_special_dates() {
        let profile = Profile {
            birthday: "2000-01-01".to_string(),
            ..ava()
        };
        let mut rng = StdRng::seed_from_u64(4);
        let events = generate_events(&profile, 2026, &mut rng).unwrap();

        assert_eq!(events[0].summary, "Ava's Birthday Celebration");
        assert_eq!(events[1].summary, "Body Strength Day");
    }

    #[test]
    fn test_malformed_birthday_is_ignored() {
        let profile = Profile {
            birthday: "not a date".to_string(),
            ..ava()
        };
        let mut rng = StdRng::seed_from_u64(6);
        let events = generate_events(&profile, 2026, &mut rng).unwrap();

        assert_eq!(events.len(), 365);
        assert!(!events.iter().any(|e| e.summary.contains("Birthday")));
    }

    #[test]
    fn test_leap_day_birthday_only_matches_in_leap_years() {
        let profile = Profile {
            birthday: "2004-02-29".to_string(),
            ..ava()
        };
        let mut rng = StdRng::seed_from_u64(8);

        let leap = generate_events(&profile, 2028, &mut rng).unwrap();
        assert_eq!(
            event_on(&leap, date(2028, 2, 29)).summary,
            "Ava's Birthday Celebration"
        );

        let common = generate_events(&profile, 2026, &mut rng).unwrap();
        assert!(
            !common
                .iter()
                .any(|e| e.summary == "Ava's Birthday Celebration")
        );
    }
}
