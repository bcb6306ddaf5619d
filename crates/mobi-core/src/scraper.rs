//! Main MobiDziennik scraper API
//!
//! This module provides the high-level API for scraping the lesson plan.
//! It combines the authenticated client with the parsers.

use crate::client::{ClientConfig, Fetcher, MobiClient};
use crate::error::Result;
use crate::parser::{parse_schedule, ExtractOptions};
use crate::types::Schedule;

/// Path of the weekly lesson plan, relative to the portal base URL
pub const SCHEDULE_PATH: &str = "/planlekcji?typ=podstawowy";

/// Fetch and parse the weekly lesson plan with default options.
///
/// # Errors
/// - `MobiError::TransportError` if the page cannot be fetched
/// - `MobiError::ParseError` if the page cannot be parsed
pub async fn get_schedule<F: Fetcher>(fetcher: &F) -> Result<Schedule> {
    get_schedule_with_options(fetcher, &ExtractOptions::default()).await
}

/// Fetch and parse the weekly lesson plan.
///
/// # Arguments
/// * `fetcher` - Authenticated page source
/// * `options` - Extraction options
pub async fn get_schedule_with_options<F: Fetcher>(
    fetcher: &F,
    options: &ExtractOptions,
) -> Result<Schedule> {
    log::info!("Fetching lesson plan");
    let html = fetcher.get(SCHEDULE_PATH).await?;

    let schedule = parse_schedule(&html, options)?;
    for (weekday, lessons) in schedule.iter() {
        log::debug!("{}: {} lessons", weekday, lessons.len());
    }

    Ok(schedule)
}

/// Main scraper API for MobiDziennik
///
/// # Example
/// ```no_run
/// use mobi_core::MobiScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = MobiScraper::login("jan.kowalski", "haslo").await?;
///     let schedule = scraper.schedule().await?;
///     println!("{}", serde_json::to_string(&schedule)?);
///     Ok(())
/// }
/// ```
pub struct MobiScraper<F = MobiClient> {
    fetcher: F,
    options: ExtractOptions,
}

impl MobiScraper<MobiClient> {
    /// Log in with default configuration.
    ///
    /// # Errors
    /// - `MobiError::TransportError` - Network error or non-2xx response
    /// - `MobiError::AuthError` - The portal rejected the credentials
    pub async fn login(username: &str, password: &str) -> Result<Self> {
        Self::login_with_config(username, password, ClientConfig::default()).await
    }

    /// Log in with a custom client configuration.
    pub async fn login_with_config(
        username: &str,
        password: &str,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = MobiClient::authenticate_with_config(username, password, config).await?;
        Ok(Self::with_fetcher(client))
    }
}

impl<F: Fetcher> MobiScraper<F> {
    /// Create a scraper over an existing page source.
    ///
    /// This is useful for testing or for replaying saved pages.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            fetcher,
            options: ExtractOptions::default(),
        }
    }

    /// Replace the extraction options.
    pub fn options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Fetch the weekly lesson plan.
    ///
    /// # Returns
    /// * `Ok(Schedule)` with every weekday present
    /// * `Err(MobiError)` if fetching or parsing fails
    pub async fn schedule(&self) -> Result<Schedule> {
        get_schedule_with_options(&self.fetcher, &self.options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MobiError;
    use crate::types::Weekday;
    use std::sync::Mutex;

    /// Serves one fixed page and remembers requested paths
    struct SavedPage {
        html: String,
        requested: Mutex<Vec<String>>,
    }

    impl SavedPage {
        fn new(html: &str) -> Self {
            Self {
                html: html.to_string(),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    impl Fetcher for SavedPage {
        async fn get(&self, path: &str) -> Result<String> {
            self.requested.lock().unwrap().push(path.to_string());
            Ok(self.html.clone())
        }
    }

    const PAGE: &str = r#"<div class="plansc_cnt">
        <div class="plansc_cnt_w"><div style="left:0.5%" title="09:05 - 09:50<br />Matematyka<br />Jan Kowalski (sala 12)"></div></div>
        <div class="plansc_cnt_w"><div style="left:20.5%" title="brak"></div></div>
    </div>"#;

    #[tokio::test]
    async fn test_get_schedule_requests_lesson_plan() {
        let page = SavedPage::new(r#"<div class="plansc_cnt"></div>"#);
        let schedule = get_schedule(&page).await.unwrap();

        assert!(schedule.is_empty());
        assert_eq!(*page.requested.lock().unwrap(), vec![SCHEDULE_PATH.to_string()]);
    }

    #[tokio::test]
    async fn test_scraper_fails_on_bad_tile() {
        let scraper = MobiScraper::with_fetcher(SavedPage::new(PAGE));
        let result = scraper.schedule().await;
        assert!(matches!(result, Err(MobiError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_scraper_lenient_options() {
        let scraper = MobiScraper::with_fetcher(SavedPage::new(PAGE)).options(ExtractOptions {
            skip_unparseable: true,
        });
        let schedule = scraper.schedule().await.unwrap();
        assert_eq!(schedule.day(Weekday::Monday).len(), 1);
        assert_eq!(schedule.len(), 1);
    }

    #[tokio::test]
    async fn test_scraper_missing_container() {
        let scraper = MobiScraper::with_fetcher(SavedPage::new("<html></html>"));
        match scraper.schedule().await {
            Err(MobiError::ParseError(msg)) => assert_eq!(msg, "Unable to find schedule content"),
            _ => panic!("Expected ParseError"),
        }
    }
}
