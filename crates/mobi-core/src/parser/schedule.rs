//! Lesson plan page parser
//!
//! Walks the tiles of the weekly lesson plan and groups the lessons they
//! describe by weekday.

use scraper::{ElementRef, Html, Selector};

use crate::error::{MobiError, Result};
use crate::types::{Lesson, Schedule};

use super::tooltip::parse_lesson_title;
use super::weekday::classify_weekday;

/// Options controlling how strictly tiles are interpreted
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Drop tiles that cannot be parsed instead of failing the whole page
    /// (default: false)
    pub skip_unparseable: bool,
}

/// Parse the weekly lesson plan from the lesson plan page HTML.
///
/// # Arguments
/// * `html` - Raw HTML content of the lesson plan page
/// * `options` - Extraction options
///
/// # Returns
/// * `Ok(Schedule)` with every weekday present, lessons sorted by slot
/// * `Err(MobiError::ParseError)` if the schedule container is missing or a
///   tile cannot be parsed (unless `skip_unparseable` is set)
pub fn parse_schedule(html: &str, options: &ExtractOptions) -> Result<Schedule> {
    let document = Html::parse_document(html);

    let container_selector = selector("div.plansc_cnt")?;
    let tile_selector = selector("div.plansc_cnt_w")?;

    let container = document
        .select(&container_selector)
        .next()
        .ok_or_else(|| MobiError::ParseError("Unable to find schedule content".to_string()))?;

    let mut schedule = Schedule::new();

    for tile in container.select(&tile_selector) {
        match parse_tile(&tile) {
            Ok(Some(lesson)) => schedule.push(lesson),
            Ok(None) => continue,
            Err(e) if options.skip_unparseable => {
                log::warn!("Skipping lesson tile: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    schedule.sort_by_slot();
    Ok(schedule)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| MobiError::ParseError(format!("Invalid selector: {:?}", e)))
}

/// Parse one `plansc_cnt_w` tile.
///
/// Returns `Ok(None)` for layout filler: tiles without an inner block or
/// without a horizontal offset.
fn parse_tile(tile: &ElementRef) -> Result<Option<Lesson>> {
    let Some(block) = first_child_block(tile) else {
        return Ok(None);
    };

    let Some(left) = block.value().attr("style").and_then(extract_left) else {
        return Ok(None);
    };

    let title = block.value().attr("title").unwrap_or_default();
    let tooltip = parse_lesson_title(title)?;
    let weekday = classify_weekday(left)?;

    Ok(Some(Lesson {
        id: tooltip.id,
        time: tooltip.time,
        subject: tooltip.subject,
        teacher: tooltip.teacher,
        location: tooltip.location,
        status: tooltip.status,
        weekday,
    }))
}

/// First `div` directly inside the tile.
fn first_child_block<'a>(tile: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    tile.children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "div")
}

/// Extract the value of the `left:` declaration from an inline style.
///
/// # Examples
/// ```
/// use mobi_core::parser::extract_left;
///
/// assert_eq!(extract_left("top:10%; left: 20.5%; width:19%"), Some("20.5%"));
/// assert_eq!(extract_left("top:10%"), None);
/// ```
pub fn extract_left(style: &str) -> Option<&str> {
    style
        .split(';')
        .map(str::trim)
        .find_map(|declaration| declaration.strip_prefix("left:"))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
