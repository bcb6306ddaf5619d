//! Authenticated HTTP client for MobiDziennik
//!
//! This module logs into the portal with a form POST and keeps the session
//! cookies, so every later GET is made as the logged-in user.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};

use crate::error::{MobiError, Result};

/// Base URL of the school's MobiDziennik instance
pub const MOBI_BASE_URL: &str = "https://zslpoznan.mobidziennik.pl/dziennik";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header for Polish content
const DEFAULT_ACCEPT_LANGUAGE: &str = "pl-PL,pl;q=0.9,en;q=0.8";

/// Banner the portal shows when the login form is rejected
const INVALID_CREDENTIALS_BANNER: &str = "Podano niepoprawny login i/lub hasło";

/// Configuration for the MobiDziennik HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Portal base URL, the login form is posted here (default: `MOBI_BASE_URL`)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: MOBI_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Source of portal pages
///
/// Implemented by `MobiClient` for the live portal; anything else that can
/// hand out page bodies (e.g. saved pages in tests) can stand in for it.
pub trait Fetcher {
    /// Fetch the body of the page at `path`, relative to the portal base URL
    ///
    /// # Errors
    /// `MobiError::TransportError` on network failure or non-2xx status
    fn get(&self, path: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Logged-in session with MobiDziennik
///
/// The underlying client keeps a cookie store, so the session established
/// by `authenticate` is carried by every `get`.
#[derive(Debug)]
pub struct MobiClient {
    /// Underlying HTTP client holding the session cookies
    client: reqwest::Client,
    /// Portal base URL without trailing slash
    base_url: String,
}

impl MobiClient {
    /// Log in with default configuration
    ///
    /// # Errors
    /// - `MobiError::TransportError` - Network error or non-2xx response
    /// - `MobiError::AuthError` - The portal rejected the credentials
    pub async fn authenticate(username: &str, password: &str) -> Result<Self> {
        Self::authenticate_with_config(username, password, ClientConfig::default()).await
    }

    /// Log in with custom configuration
    ///
    /// # Arguments
    /// * `username` - Portal login
    /// * `password` - Portal password
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// - `MobiError::TransportError` - Network error or non-2xx response
    /// - `MobiError::AuthError` - The portal rejected the credentials
    pub async fn authenticate_with_config(
        username: &str,
        password: &str,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = build_http_client(&config)?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        log::info!("Logging in to {} as {}", base_url, username);

        let response = client
            .post(&base_url)
            .form(&[("login", username), ("haslo", password)])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        if body.contains(INVALID_CREDENTIALS_BANNER) {
            log::warn!("Login rejected for {}", username);
            return Err(MobiError::AuthError("Invalid credentials".to_string()));
        }

        log::debug!("Logged in as {}", username);
        Ok(Self { client, base_url })
    }

    /// Portal base URL this session is bound to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Fetcher for MobiClient {
    async fn get(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
    );

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    Ok(client)
}
