//! Core types for daily celebration calendars.
//!
//! This crate turns a [`Profile`] into a year of all-day celebration events
//! and serializes them as an iCalendar payload:
//! - `generator` for the day-by-day event sequence
//! - `ics` for reading and writing the calendar file
//! - `preview` for the random sample shown before download

pub mod config;
pub mod error;
pub mod event;
pub mod generator;
pub mod ics;
pub mod preview;
pub mod profile;
pub mod special_date;
pub mod template;

pub use event::{CelebrationEvent, CelebrationIdea};
pub use generator::generate_events;
pub use profile::Profile;
