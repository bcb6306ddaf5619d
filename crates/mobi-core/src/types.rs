//! Data types for the MobiDziennik scraper
//!
//! This module contains all the core data structures used throughout the library.
//! Labels are serialized in Polish, exactly as the portal shows them.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// School day a lesson tile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "poniedziałek")]
    Monday,
    #[serde(rename = "wtorek")]
    Tuesday,
    #[serde(rename = "środa")]
    Wednesday,
    #[serde(rename = "czwartek")]
    Thursday,
    #[serde(rename = "piątek")]
    Friday,
}

impl Weekday {
    /// All school days in timetable order
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Polish name used as the JSON key
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "poniedziałek",
            Weekday::Tuesday => "wtorek",
            Weekday::Wednesday => "środa",
            Weekday::Thursday => "czwartek",
            Weekday::Friday => "piątek",
        }
    }

    /// Map a calendar weekday onto a school day, `None` for the weekend
    pub fn from_chrono(day: chrono::Weekday) -> Option<Self> {
        match day {
            chrono::Weekday::Mon => Some(Weekday::Monday),
            chrono::Weekday::Tue => Some(Weekday::Tuesday),
            chrono::Weekday::Wed => Some(Weekday::Wednesday),
            chrono::Weekday::Thu => Some(Weekday::Thursday),
            chrono::Weekday::Fri => Some(Weekday::Friday),
            chrono::Weekday::Sat | chrono::Weekday::Sun => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a lesson takes place as planned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonStatus {
    /// Lesson will take place (odbędzie się)
    #[serde(rename = "Odbędzie się")]
    Scheduled,
    /// Lesson is cancelled (odwołana)
    #[serde(rename = "Odwołana")]
    Cancelled,
    /// Substitute teacher or room change (zastępstwo lub zmiana sali)
    #[serde(rename = "Zastępstwo lub zmiana sali")]
    Substitution,
}

/// One scheduled class on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson slot (1-15), 0 when the start time is not a known slot
    pub id: u8,
    /// Time range as shown by the portal, e.g. "09:05 - 09:50"
    pub time: String,
    /// Subject name
    pub subject: String,
    /// Teacher name, None for cancelled lessons
    pub teacher: Option<String>,
    /// Room, None for cancelled lessons
    pub location: Option<String>,
    /// Lesson status
    pub status: LessonStatus,
    /// Day of the week
    pub weekday: Weekday,
}

/// Weekly lesson plan grouped by school day
///
/// Every weekday is always present, possibly with no lessons. Serializes as a
/// JSON object keyed Monday to Friday in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    days: [Vec<Lesson>; 5],
}

impl Schedule {
    /// Create a schedule with no lessons
    pub fn new() -> Self {
        Self::default()
    }

    /// Lessons on the given day
    pub fn day(&self, weekday: Weekday) -> &[Lesson] {
        &self.days[weekday.index()]
    }

    /// Append a lesson to the bucket of its own weekday
    pub fn push(&mut self, lesson: Lesson) {
        self.days[lesson.weekday.index()].push(lesson);
    }

    /// Sort every day by lesson slot, keeping page order for equal slots
    pub fn sort_by_slot(&mut self) {
        for lessons in &mut self.days {
            lessons.sort_by_key(|lesson| lesson.id);
        }
    }

    /// Iterate over `(weekday, lessons)` pairs from Monday to Friday
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Lesson])> {
        Weekday::ALL
            .into_iter()
            .map(move |weekday| (weekday, self.day(weekday)))
    }

    /// Total number of lessons in the week
    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// Whether the week has no lessons at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Schedule {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Weekday::ALL.len()))?;
        for (weekday, lessons) in self.iter() {
            map.serialize_entry(weekday.name(), lessons)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: u8, weekday: Weekday) -> Lesson {
        Lesson {
            id,
            time: "08:10 - 08:55".to_string(),
            subject: "Historia".to_string(),
            teacher: Some("Anna Nowak".to_string()),
            location: Some("sala 3".to_string()),
            status: LessonStatus::Scheduled,
            weekday,
        }
    }

    #[test]
    fn test_weekday_serialization() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, "\"środa\"");

        let json = serde_json::to_string(&Weekday::Friday).unwrap();
        assert_eq!(json, "\"piątek\"");
    }

    #[test]
    fn test_weekday_name_matches_serde() {
        for weekday in Weekday::ALL {
            let json = serde_json::to_string(&weekday).unwrap();
            assert_eq!(json, format!("\"{}\"", weekday.name()));
        }
    }

    #[test]
    fn test_weekday_from_chrono_weekend() {
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Mon), Some(Weekday::Monday));
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Fri), Some(Weekday::Friday));
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Sat), None);
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Sun), None);
    }

    #[test]
    fn test_lesson_status_serialization() {
        let json = serde_json::to_string(&LessonStatus::Cancelled).unwrap();
        assert_eq!(json, "\"Odwołana\"");

        let json = serde_json::to_string(&LessonStatus::Substitution).unwrap();
        assert_eq!(json, "\"Zastępstwo lub zmiana sali\"");
    }

    #[test]
    fn test_lesson_serialization_nulls() {
        let mut cancelled = lesson(5, Weekday::Wednesday);
        cancelled.teacher = None;
        cancelled.location = None;
        cancelled.status = LessonStatus::Cancelled;

        let json = serde_json::to_string(&cancelled).unwrap();
        assert_eq!(
            json,
            r#"{"id":5,"time":"08:10 - 08:55","subject":"Historia","teacher":null,"location":null,"status":"Odwołana","weekday":"środa"}"#
        );
    }

    #[test]
    fn test_empty_schedule_has_all_days() {
        let json = serde_json::to_string(&Schedule::new()).unwrap();
        assert_eq!(
            json,
            r#"{"poniedziałek":[],"wtorek":[],"środa":[],"czwartek":[],"piątek":[]}"#
        );
    }

    #[test]
    fn test_schedule_push_and_sort() {
        let mut schedule = Schedule::new();
        schedule.push(lesson(8, Weekday::Friday));
        schedule.push(lesson(2, Weekday::Friday));
        schedule.push(lesson(1, Weekday::Monday));
        schedule.sort_by_slot();

        let ids: Vec<u8> = schedule.day(Weekday::Friday).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 8]);
        assert_eq!(schedule.day(Weekday::Monday).len(), 1);
        assert!(schedule.day(Weekday::Tuesday).is_empty());
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn test_schedule_sort_keeps_duplicates_in_order() {
        let mut schedule = Schedule::new();
        let mut first = lesson(3, Weekday::Tuesday);
        first.subject = "Pierwsza".to_string();
        let mut second = lesson(3, Weekday::Tuesday);
        second.subject = "Druga".to_string();
        schedule.push(first);
        schedule.push(second);
        schedule.sort_by_slot();

        let subjects: Vec<&str> = schedule
            .day(Weekday::Tuesday)
            .iter()
            .map(|l| l.subject.as_str())
            .collect();
        assert_eq!(subjects, vec!["Pierwsza", "Druga"]);
    }
}
