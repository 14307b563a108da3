//! HTTP client for the Steam owned-games API
//!
//! [`SteamClient`] implements the read-through fetch: consult the cache,
//! fall back to a single best-effort GET, write the raw body back on a
//! miss, then decode and sort. Any transport or decode failure degrades
//! to an empty library — a broken upstream must not break the page.

use crate::cache::{MemoryCache, ResponseCache, STEAM_CACHE_KEY};
use crate::config::SteamConfig;
use crate::error::Result;
use crate::models::GameLibrary;
use crate::render;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Path of the owned-games endpoint on the Steam Web API
pub const OWNED_GAMES_ENDPOINT: &str = "/IPlayerService/GetOwnedGames/v1/";

/// Client for fetching and rendering the owned-games library
///
/// # Example
///
/// ```no_run
/// use steamshelf::{SteamClient, SteamConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut config = SteamConfig::default();
///     config.steam_id = "76561198000000000".to_string();
///     config.api_key = "XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX".to_string();
///
///     let client = SteamClient::new(config)?;
///     let html = client.render_page(1).await;
///     println!("{}", html);
///     Ok(())
/// }
/// ```
pub struct SteamClient {
    http: Client,
    config: SteamConfig,
    cache: Option<Arc<dyn ResponseCache>>,
}

impl SteamClient {
    /// Create a client from a configuration, with the default in-memory
    /// cache when caching is enabled
    pub fn new(config: SteamConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> SteamClientBuilder {
        SteamClientBuilder::default()
    }

    /// The immutable configuration this client was built with
    pub fn config(&self) -> &SteamConfig {
        &self.config
    }

    /// Whether a response cache is consulted before fetching
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    fn owned_games_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}{}",
            self.config.api.base_url.trim_end_matches('/'),
            OWNED_GAMES_ENDPOINT
        ))?;
        url.query_pairs_mut()
            .append_pair("key", &self.config.api_key)
            .append_pair("steamid", &self.config.steam_id)
            .append_pair("include_appinfo", "1")
            .append_pair("include_played_free_games", "1")
            .append_pair("include_free_games", "1");
        Ok(url)
    }

    /// Fetch the full owned-games library, sorted by last-played time.
    ///
    /// This never fails: transport errors, non-success statuses, and
    /// undecodable bodies all degrade to an empty library, so the
    /// renderer always has a valid input.
    pub async fn fetch_library(&self) -> GameLibrary {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.get(STEAM_CACHE_KEY).await {
                debug!("Owned games for {} served from cache", self.config.steam_id);
                return GameLibrary::from_response_body(&body);
            }
            match self.fetch_body().await {
                Some(body) => {
                    cache.put(STEAM_CACHE_KEY, body.clone()).await;
                    GameLibrary::from_response_body(&body)
                }
                None => GameLibrary::empty(),
            }
        } else {
            match self.fetch_body().await {
                Some(body) => GameLibrary::from_response_body(&body),
                None => GameLibrary::empty(),
            }
        }
    }

    /// Render one page of the library as an HTML fragment.
    ///
    /// Performs one fetch per call; page numbers below 1 are clamped and
    /// pages past the end render zero items.
    pub async fn render_page(&self, page: usize) -> String {
        let library = self.fetch_library().await;
        render::render_page(&library, page, &self.config)
    }

    /// Single best-effort GET with no retry. Failed responses are not
    /// written to the cache, so the next render refetches.
    async fn fetch_body(&self) -> Option<String> {
        let url = match self.owned_games_url() {
            Ok(url) => url,
            Err(e) => {
                warn!("Invalid owned-games URL: {}", e);
                return None;
            }
        };

        debug!("Fetching owned games for {}", self.config.steam_id);

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Owned-games request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("Steam API returned error status: {}", response.status());
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Failed to read owned-games response body: {}", e);
                None
            }
        }
    }
}

/// Builder for configuring a [`SteamClient`]
pub struct SteamClientBuilder {
    config: SteamConfig,
    client: Option<Client>,
    cache: Option<Arc<dyn ResponseCache>>,
}

impl Default for SteamClientBuilder {
    fn default() -> Self {
        Self {
            config: SteamConfig::default(),
            client: None,
            cache: None,
        }
    }
}

impl SteamClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full configuration block
    pub fn config(mut self, config: SteamConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the API base URL (useful for tests)
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.config.api.base_url = url.into();
        self
    }

    /// Set a custom `reqwest::Client`, e.g. to share a connection pool
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Inject a custom cache backend. Only used when the configuration
    /// has caching enabled.
    pub fn cache(mut self, cache: Arc<dyn ResponseCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<SteamClient> {
        let http = match self.client {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.config.api.timeout())
                .user_agent(&self.config.api.user_agent)
                .build()?,
        };

        let cache = if self.config.cache.enabled {
            Some(self.cache.unwrap_or_else(|| {
                Arc::new(MemoryCache::from_config(&self.config.cache)) as Arc<dyn ResponseCache>
            }))
        } else {
            None
        };

        Ok(SteamClient {
            http,
            config: self.config,
            cache,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SteamConfig {
        let mut config = SteamConfig::default();
        config.steam_id = "76561198000000000".to_string();
        config.api_key = "TESTKEY".to_string();
        config
    }

    #[test]
    fn test_owned_games_url() {
        let client = SteamClient::new(test_config()).unwrap();
        let url = client.owned_games_url().unwrap();

        assert_eq!(url.host_str(), Some("api.steampowered.com"));
        assert_eq!(url.path(), OWNED_GAMES_ENDPOINT);

        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(query.contains(&("key".to_string(), "TESTKEY".to_string())));
        assert!(query.contains(&("steamid".to_string(), "76561198000000000".to_string())));
        assert!(query.contains(&("include_appinfo".to_string(), "1".to_string())));
        assert!(query.contains(&("include_played_free_games".to_string(), "1".to_string())));
        assert!(query.contains(&("include_free_games".to_string(), "1".to_string())));
    }

    #[test]
    fn test_cache_enabled_by_default() {
        let client = SteamClient::new(test_config()).unwrap();
        assert!(client.cache_enabled());
    }

    #[test]
    fn test_cache_disabled_by_config() {
        let mut config = test_config();
        config.cache.enabled = false;
        let client = SteamClient::new(config).unwrap();
        assert!(!client.cache_enabled());
    }
}
