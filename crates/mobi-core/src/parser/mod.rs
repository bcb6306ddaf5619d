//! HTML parsers for the MobiDziennik lesson plan
//!
//! This module contains the pieces that turn the lesson plan page into a
//! `Schedule`:
//! - `schedule`: Walk the page's lesson tiles
//! - `tooltip`: Parse a tile's tooltip into lesson fields
//! - `weekday`: Classify a tile's day from its horizontal offset
//! - `slot`: Map a lesson's start time to its slot number

pub mod schedule;
pub mod slot;
pub mod tooltip;
pub mod weekday;

// Re-export main parsing functions
pub use schedule::{extract_left, parse_schedule, ExtractOptions};
pub use slot::{resolve_slot, LESSON_SLOTS};
pub use tooltip::{normalize_title, parse_lesson_title, Tooltip};
pub use weekday::classify_weekday;
