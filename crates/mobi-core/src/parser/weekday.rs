//! Weekday classifier
//!
//! The lesson plan lays out days as vertical columns, so a tile's day is
//! derived from its horizontal CSS offset.

use crate::error::{MobiError, Result};
use crate::types::Weekday;

/// Upper bound (inclusive) of each day's column, as a `left:` percentage.
const COLUMN_BOUNDS: [(f64, Weekday); 5] = [
    (0.5, Weekday::Monday),
    (20.5, Weekday::Tuesday),
    (40.5, Weekday::Wednesday),
    (60.5, Weekday::Thursday),
    (80.5, Weekday::Friday),
];

/// Classify a tile's weekday from its `left:` percentage, e.g. `"20.5%"`.
///
/// Anything right of the last column is treated as Friday.
///
/// # Errors
/// `MobiError::ParseError` if the value is not a number.
///
/// # Examples
/// ```
/// use mobi_core::parser::classify_weekday;
/// use mobi_core::Weekday;
///
/// assert_eq!(classify_weekday("20.5%").unwrap(), Weekday::Tuesday);
/// assert_eq!(classify_weekday("99%").unwrap(), Weekday::Friday);
/// ```
pub fn classify_weekday(left: &str) -> Result<Weekday> {
    let percent: f64 = left
        .trim()
        .trim_end_matches('%')
        .trim()
        .parse()
        .map_err(|_| MobiError::ParseError(format!("Invalid tile position: {}", left)))?;

    let weekday = COLUMN_BOUNDS
        .iter()
        .find(|(bound, _)| percent <= *bound)
        .map(|&(_, weekday)| weekday)
        .unwrap_or(Weekday::Friday);

    Ok(weekday)
}
