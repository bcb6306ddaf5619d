//! Single-day view of the lesson plan
//!
//! Picks one day out of the weekly schedule relative to a given date:
//! today, tomorrow or the day after tomorrow.

use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::error::MobiError;
use crate::types::{Lesson, Schedule, Weekday};

/// Message reported instead of lessons on Saturday and Sunday
pub const WEEKEND_MESSAGE: &str = "No classes on weekends";

/// Day to show, relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOffset {
    Today,
    Tomorrow,
    DayAfterTomorrow,
}

impl DayOffset {
    /// Number of days after today
    pub fn days(self) -> u64 {
        match self {
            DayOffset::Today => 0,
            DayOffset::Tomorrow => 1,
            DayOffset::DayAfterTomorrow => 2,
        }
    }

    /// Calendar date this offset points at, counted from `today`
    pub fn target_date(self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(self.days()))
            .unwrap_or(today)
    }
}

impl FromStr for DayOffset {
    type Err = MobiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(DayOffset::Today),
            "tomorrow" => Ok(DayOffset::Tomorrow),
            "dayaftertomorrow" => Ok(DayOffset::DayAfterTomorrow),
            _ => Err(MobiError::InvalidDay(s.to_string())),
        }
    }
}

/// Lessons of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    /// Date in `YYYY-MM-DD` format
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    /// School day, absent on weekends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<Weekday>,
    /// Explanation when there are no lessons by definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Lessons of the day, sorted by slot
    pub schedule: Vec<Lesson>,
}

impl DayView {
    /// View of a school day taken from the weekly schedule
    pub fn for_weekday(date: NaiveDate, weekday: Weekday, schedule: &Schedule) -> Self {
        Self {
            date,
            weekday: Some(weekday),
            message: None,
            schedule: schedule.day(weekday).to_vec(),
        }
    }

    /// Empty view for a Saturday or Sunday
    pub fn weekend(date: NaiveDate) -> Self {
        Self {
            date,
            weekday: None,
            message: Some(WEEKEND_MESSAGE.to_string()),
            schedule: Vec::new(),
        }
    }
}

/// School day falling on `date`, `None` on weekends
pub fn school_day(date: NaiveDate) -> Option<Weekday> {
    Weekday::from_chrono(date.weekday())
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }
}
