//! Configuration structures for the owned-games widget.
//!
//! We expose strongly typed structs with per-field defaults so the rest of
//! the crate can depend on a stable configuration shape irrespective of how
//! the data is loaded (embedded defaults, YAML file, tests, etc.). The
//! configuration is immutable after construction and passed by reference
//! into the client.

use crate::providers::{CoverCdn, StoreFront};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level configuration block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteamConfig {
    /// 64-bit Steam ID of the library owner
    #[serde(default)]
    pub steam_id: String,
    /// Steam Web API key
    #[serde(default)]
    pub api_key: String,
    /// CDN mirror for cover images
    #[serde(default)]
    pub cover_cdn: CoverCdn,
    /// Storefront used for the per-game link
    #[serde(default)]
    pub store: StoreFront,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub labels: Labels,
    /// Offset from UTC applied to last-played timestamps, in minutes
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// Path of the listing endpoint, used for the "load more" link target
    #[serde(default = "SteamConfig::default_endpoint_path")]
    pub endpoint_path: String,
}

impl SteamConfig {
    fn default_endpoint_path() -> String {
        "/steam".to_string()
    }

    /// Parse a configuration from a YAML document.
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Timezone offset for rendering last-played dates. Out-of-range
    /// offsets fall back to UTC.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap())
    }
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            steam_id: String::new(),
            api_key: String::new(),
            cover_cdn: CoverCdn::default(),
            store: StoreFront::default(),
            cache: CacheConfig::default(),
            api: ApiConfig::default(),
            labels: Labels::default(),
            utc_offset_minutes: 0,
            endpoint_path: Self::default_endpoint_path(),
        }
    }
}

/// Response cache parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether the read-through cache is consulted at all
    #[serde(default = "CacheConfig::default_enabled")]
    pub enabled: bool,
    /// Lifetime of a cached response body, in seconds
    #[serde(default = "CacheConfig::default_ttl")]
    pub ttl_seconds: u64,
    /// Maximum number of cached entries
    #[serde(default = "CacheConfig::default_max_capacity")]
    pub max_capacity: u64,
}

impl CacheConfig {
    const fn default_enabled() -> bool {
        true
    }

    const fn default_ttl() -> u64 {
        3600
    }

    const fn default_max_capacity() -> u64 {
        16
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            ttl_seconds: Self::default_ttl(),
            max_capacity: Self::default_max_capacity(),
        }
    }
}

/// Remote API tuning (base URL, timeouts, UA).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "ApiConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ApiConfig::default_timeout")]
    pub timeout_seconds: u64,
    #[serde(default = "ApiConfig::default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    fn default_base_url() -> String {
        "https://api.steampowered.com".to_string()
    }

    const fn default_timeout() -> u64 {
        30
    }

    fn default_user_agent() -> String {
        "steamshelf/0.1.0".to_string()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_seconds: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
        }
    }
}

/// Localized UI strings.
///
/// The widget is embedded in sites with their own localization layer, so
/// every user-visible string is injected rather than hardcoded. Defaults
/// are the English strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "Labels::default_not_played")]
    pub not_played: String,
    #[serde(default = "Labels::default_minute")]
    pub minute: String,
    #[serde(default = "Labels::default_hour")]
    pub hour: String,
    #[serde(default = "Labels::default_playtime")]
    pub playtime: String,
    #[serde(default = "Labels::default_last_played")]
    pub last_played: String,
    #[serde(default = "Labels::default_load_more")]
    pub load_more: String,
}

impl Labels {
    fn default_not_played() -> String {
        "Not Played Yet".to_string()
    }

    fn default_minute() -> String {
        "minute".to_string()
    }

    fn default_hour() -> String {
        "hour".to_string()
    }

    fn default_playtime() -> String {
        "Playtime".to_string()
    }

    fn default_last_played() -> String {
        "Last Played".to_string()
    }

    fn default_load_more() -> String {
        "Load more".to_string()
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            not_played: Self::default_not_played(),
            minute: Self::default_minute(),
            hour: Self::default_hour(),
            playtime: Self::default_playtime(),
            last_played: Self::default_last_played(),
            load_more: Self::default_load_more(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SteamConfig::default();
        assert!(config.cache.enabled);
        assert_eq!(config.cache.ttl_seconds, 3600);
        assert_eq!(config.api.base_url, "https://api.steampowered.com");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert_eq!(config.endpoint_path, "/steam");
        assert_eq!(config.cover_cdn, CoverCdn::SteamAkamai);
        assert_eq!(config.store, StoreFront::Steam);
        assert_eq!(config.labels.not_played, "Not Played Yet");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = SteamConfig::from_yaml(
            r#"
steam_id: "76561198000000000"
api_key: "SECRET"
cover_cdn: steamfastly
cache:
  ttl_seconds: 120
"#,
        )
        .unwrap();

        assert_eq!(config.steam_id, "76561198000000000");
        assert_eq!(config.cover_cdn, CoverCdn::SteamFastly);
        assert_eq!(config.cache.ttl_seconds, 120);
        // Untouched blocks keep their defaults
        assert!(config.cache.enabled);
        assert_eq!(config.store, StoreFront::Steam);
        assert_eq!(config.endpoint_path, "/steam");
    }

    #[test]
    fn test_unknown_provider_rejected_at_parse_time() {
        let result = SteamConfig::from_yaml("cover_cdn: steamwhatever\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_utc_offset() {
        let mut config = SteamConfig::default();
        assert_eq!(config.utc_offset().local_minus_utc(), 0);
        config.utc_offset_minutes = 480; // UTC+8
        assert_eq!(config.utc_offset().local_minus_utc(), 8 * 3600);
        config.utc_offset_minutes = i32::MAX; // out of range, falls back to UTC
        assert_eq!(config.utc_offset().local_minus_utc(), 0);
    }
}
