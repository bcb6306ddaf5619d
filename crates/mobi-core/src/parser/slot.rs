//! Lesson slot resolver
//!
//! Maps the start time of a lesson onto the portal's fixed daily periods.

/// Start time of every lesson period with its slot number, in period order.
pub const LESSON_SLOTS: [(&str, u8); 15] = [
    ("07:20", 1),
    ("08:10", 2),
    ("09:05", 3),
    ("10:00", 4),
    ("11:00", 5),
    ("11:55", 6),
    ("13:00", 7),
    ("14:05", 8),
    ("15:00", 9),
    ("15:55", 10),
    ("16:45", 11),
    ("17:35", 12),
    ("18:25", 13),
    ("19:15", 14),
    ("20:05", 15),
];

/// Resolve the slot number for a lesson time range.
///
/// Returns the first slot whose start time appears anywhere in `time`,
/// or `0` when none does.
///
/// # Examples
/// ```
/// use mobi_core::parser::resolve_slot;
///
/// assert_eq!(resolve_slot("09:05 - 09:50"), 3);
/// assert_eq!(resolve_slot("06:00 - 06:45"), 0);
/// ```
pub fn resolve_slot(time: &str) -> u8 {
    LESSON_SLOTS
        .iter()
        .find(|(start, _)| time.contains(start))
        .map(|&(_, id)| id)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_slot_every_period() {
        for (start, id) in LESSON_SLOTS {
            let time = format!("{} - 23:59", start);
            assert_eq!(resolve_slot(&time), id, "start {}", start);
        }
    }

    #[test]
    fn test_resolve_slot_unknown() {
        assert_eq!(resolve_slot("06:00 - 06:45"), 0);
        assert_eq!(resolve_slot("12:00 - 12:45"), 0);
        assert_eq!(resolve_slot(""), 0);
    }

    #[test]
    fn test_resolve_slot_matches_end_time_too() {
        // The lookup is a substring test, so a known start in the end half counts.
        assert_eq!(resolve_slot("06:00 - 07:20"), 1);
    }

    proptest! {
        #[test]
        fn prop_slot_ids_stay_in_range(h in 0u8..24, m in 0u8..60) {
            let time = format!("{:02}:{:02} - {:02}:{:02}", h, m, h, m);
            let id = resolve_slot(&time);
            prop_assert!(id <= 15);
            let known = LESSON_SLOTS.iter().any(|(start, _)| *start == format!("{:02}:{:02}", h, m));
            prop_assert_eq!(id != 0, known);
        }
    }
}
