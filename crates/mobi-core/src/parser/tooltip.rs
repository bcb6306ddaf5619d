//! Lesson tooltip parser
//!
//! Every tile on the lesson plan carries its details in the `title`
//! attribute, with fields separated by literal `<br />` markers:
//!
//! ```text
//! 09:05 - 09:50<br />Matematyka<br />Jan Kowalski (sala 12)
//! ```
//!
//! The markers are matched as plain text; the attribute is never decoded
//! or stripped of tags before matching.

use std::sync::OnceLock;

use regex_lite::Regex;

use crate::error::{MobiError, Result};
use crate::types::LessonStatus;

use super::slot::resolve_slot;

/// Lesson fields encoded in a tile's tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Lesson slot resolved from `time`
    pub id: u8,
    /// Time range, e.g. "09:05 - 09:50"
    pub time: String,
    /// Subject name
    pub subject: String,
    /// Teacher name, None for cancelled lessons
    pub teacher: Option<String>,
    /// Room, None for cancelled lessons
    pub location: Option<String>,
    /// Lesson status
    pub status: LessonStatus,
}

fn cancelled_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{2}:\d{2} - \d{2}:\d{2})<br />(.*?)<br />")
            .expect("regex should be valid")
    })
}

fn lesson_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{2}:\d{2} - \d{2}:\d{2})<br />(.*?)<br />(.*?)\((.*?)\)")
            .expect("regex should be valid")
    })
}

/// Normalize tooltip text: drop line breaks, collapse whitespace runs, trim.
///
/// # Examples
/// ```
/// use mobi_core::parser::normalize_title;
///
/// assert_eq!(normalize_title("  08:10 -\r\n 08:55 \t x "), "08:10 - 08:55 x");
/// ```
pub fn normalize_title(title: &str) -> String {
    title
        .replace(['\r', '\n'], "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a tile's tooltip into lesson fields.
///
/// Cancelled lessons only carry time and subject; everything else also
/// carries the teacher and, in parentheses, the room. Captured fields are
/// trimmed.
///
/// # Errors
/// `MobiError::ParseError` if the tooltip matches neither layout or the
/// subject comes out empty.
///
/// # Examples
/// ```
/// use mobi_core::parser::parse_lesson_title;
///
/// let tooltip = parse_lesson_title("09:05 - 09:50<br />Matematyka<br />Jan Kowalski (sala 12)").unwrap();
/// assert_eq!(tooltip.id, 3);
/// assert_eq!(tooltip.teacher.as_deref(), Some("Jan Kowalski"));
/// ```
pub fn parse_lesson_title(title: &str) -> Result<Tooltip> {
    let normalized = normalize_title(title);

    let tooltip = match_layout(&normalized).ok_or_else(|| {
        MobiError::ParseError(format!("Unable to parse lesson title: {}", normalized))
    })?;

    if tooltip.subject.is_empty() {
        return Err(MobiError::ParseError(format!(
            "Missing subject in lesson title: {}",
            normalized
        )));
    }

    Ok(tooltip)
}

fn match_layout(normalized: &str) -> Option<Tooltip> {
    let lowered = normalized.to_lowercase();

    if lowered.contains("odwołana") {
        if let Some(caps) = cancelled_pattern().captures(normalized) {
            let time = caps[1].to_string();
            return Some(Tooltip {
                id: resolve_slot(&time),
                subject: caps[2].trim().to_string(),
                time,
                teacher: None,
                location: None,
                status: LessonStatus::Cancelled,
            });
        }
    }

    let caps = lesson_pattern().captures(normalized)?;
    let status = if lowered.contains("zastępstwo") {
        LessonStatus::Substitution
    } else {
        LessonStatus::Scheduled
    };
    let time = caps[1].to_string();
    Some(Tooltip {
        id: resolve_slot(&time),
        subject: caps[2].trim().to_string(),
        teacher: Some(caps[3].trim().to_string()),
        location: Some(caps[4].trim().to_string()),
        time,
        status,
    })
}
