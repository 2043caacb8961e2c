//! The closed catalog of celebration templates.
//!
//! Field templates turn one profile attribute into an idea and make up the
//! rotation pool. Date templates are tied to birthday arithmetic and are only
//! used on their special dates.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{CelebrationError, CelebrationResult};
use crate::event::CelebrationIdea;
use crate::profile::Profile;

/// A template driven by a single profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTemplate {
    Height,
    Weight,
    Color,
    Food,
    Hobby,
    Achievement,
    Dream,
    Personality,
    Name,
}

impl FieldTemplate {
    /// Catalog order, which is also the rotation order.
    pub const ALL: [FieldTemplate; 9] = [
        FieldTemplate::Height,
        FieldTemplate::Weight,
        FieldTemplate::Color,
        FieldTemplate::Food,
        FieldTemplate::Hobby,
        FieldTemplate::Achievement,
        FieldTemplate::Dream,
        FieldTemplate::Personality,
        FieldTemplate::Name,
    ];

    /// Name of the profile field this template reads.
    pub fn field_name(self) -> &'static str {
        match self {
            FieldTemplate::Height => "height",
            FieldTemplate::Weight => "weight",
            FieldTemplate::Color => "favorite_color",
            FieldTemplate::Food => "favorite_food",
            FieldTemplate::Hobby => "hobbies",
            FieldTemplate::Achievement => "achievements",
            FieldTemplate::Dream => "dreams",
            FieldTemplate::Personality => "personality",
            FieldTemplate::Name => "name",
        }
    }

    /// Whether the field is a comma-delimited list (one item is picked per use).
    pub fn is_list(self) -> bool {
        matches!(
            self,
            FieldTemplate::Hobby
                | FieldTemplate::Achievement
                | FieldTemplate::Dream
                | FieldTemplate::Personality
        )
    }

    fn source(self, profile: &Profile) -> &str {
        match self {
            FieldTemplate::Height => &profile.height,
            FieldTemplate::Weight => &profile.weight,
            FieldTemplate::Color => &profile.favorite_color,
            FieldTemplate::Food => &profile.favorite_food,
            FieldTemplate::Hobby => &profile.hobbies,
            FieldTemplate::Achievement => &profile.achievements,
            FieldTemplate::Dream => &profile.dreams,
            FieldTemplate::Personality => &profile.personality,
            FieldTemplate::Name => &profile.name,
        }
    }

    /// Whether the profile provides the field this template needs.
    pub fn applies_to(self, profile: &Profile) -> bool {
        !self.source(profile).is_empty()
    }

    /// Build an idea from the profile.
    ///
    /// List templates draw a fresh random item on every call, so repeated
    /// calls can give different ideas of the same kind.
    pub fn evaluate<R: Rng + ?Sized>(
        self,
        profile: &Profile,
        rng: &mut R,
    ) -> CelebrationResult<CelebrationIdea> {
        let raw = self.source(profile);
        if raw.is_empty() {
            return Err(CelebrationError::MissingField(self.field_name()));
        }

        let value = if self.is_list() {
            pick_item(raw, rng).ok_or(CelebrationError::MissingField(self.field_name()))?
        } else {
            raw
        };

        Ok(self.render(value))
    }

    fn render(self, value: &str) -> CelebrationIdea {
        match self {
            FieldTemplate::Height => CelebrationIdea::new(
                "Your Height Appreciation Day",
                format!(
                    "Today we celebrate that you are {value}cm tall! Your unique height gives you a special perspective on the world."
                ),
            ),
            FieldTemplate::Weight => CelebrationIdea::new(
                "Body Strength Day",
                format!(
                    "Celebrate your body's strength today! At {value}kg, your body carries you through all of life's adventures."
                ),
            ),
            FieldTemplate::Color => CelebrationIdea::new(
                format!("{value} Appreciation Day"),
                format!(
                    "Today is all about your favorite color: {value}! Wear it, eat foods of this color, or just appreciate it around you."
                ),
            ),
            FieldTemplate::Food => CelebrationIdea::new(
                format!("{value} Festival Day"),
                format!(
                    "Today's the perfect day to enjoy your favorite food: {value}! Take time to savor what you love."
                ),
            ),
            FieldTemplate::Hobby => CelebrationIdea::new(
                format!("{value} Celebration Day"),
                format!(
                    "Today is dedicated to your love of {value}. Take time to enjoy this hobby you're passionate about!"
                ),
            ),
            FieldTemplate::Achievement => CelebrationIdea::new(
                "Achievement Celebration Day",
                format!(
                    "Today we honor your accomplishment: {value}. Be proud of how far you've come!"
                ),
            ),
            FieldTemplate::Dream => CelebrationIdea::new(
                "Dream Visualization Day",
                format!(
                    "Today, focus on your dream of {value}. Visualize it, plan for it, take a step toward it!"
                ),
            ),
            FieldTemplate::Personality => CelebrationIdea::new(
                format!("{value} Appreciation Day"),
                format!("Today, celebrate your {value} trait! This quality makes you uniquely you."),
            ),
            FieldTemplate::Name => CelebrationIdea::new(
                "Your Name Day",
                format!(
                    "Today we celebrate the uniqueness of your name: {value}! Your name carries your identity and story."
                ),
            ),
        }
    }
}

/// A template anchored to an offset from the birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTemplate {
    HalfBirthday,
    QuarterBirthday,
    PersonalNewYear,
}

impl DateTemplate {
    pub fn idea(self) -> CelebrationIdea {
        match self {
            DateTemplate::HalfBirthday => CelebrationIdea::new(
                "Your Half-Birthday",
                "Halfway to your next birthday! A perfect excuse to celebrate you again.",
            ),
            DateTemplate::QuarterBirthday => CelebrationIdea::new(
                "Quarter Birthday Milestone",
                "Another quarter around the sun since your birthday! A small milestone worth celebrating.",
            ),
            DateTemplate::PersonalNewYear => CelebrationIdea::new(
                "Your Personal New Year",
                "This day marks exactly one year since your last birthday! Time to reflect on your personal growth.",
            ),
        }
    }
}

/// The birthday itself, personalized with the owner's name.
pub fn birthday_idea(name: &str) -> CelebrationIdea {
    CelebrationIdea::new(
        format!("{name}'s Birthday Celebration"),
        "Today is your special day! The world is celebrating YOU today.",
    )
}

/// Pick one trimmed item from a comma-delimited list.
fn pick_item<'a, R: Rng + ?Sized>(list: &'a str, rng: &mut R) -> Option<&'a str> {
    let items: Vec<&str> = list.split(',').map(str::trim).collect();
    items.choose(rng).copied()
}
