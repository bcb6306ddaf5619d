//! MobiDziennik Scraper Core Library
//!
//! This crate provides the core scraping functionality for the
//! MobiDziennik school portal.
//!
//! # Features
//! - Log in with a student's credentials and keep the session
//! - Fetch the weekly lesson plan and group lessons by weekday
//! - Parse lesson tooltips into status, teacher and room
//! - Pick a single day out of the week

pub mod client;
pub mod day;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, Fetcher, MobiClient};
pub use day::{DayOffset, DayView};
pub use error::{MobiError, Result};
pub use parser::ExtractOptions;
pub use crate::scraper::{get_schedule, get_schedule_with_options, MobiScraper};
pub use types::{Lesson, LessonStatus, Schedule, Weekday};
