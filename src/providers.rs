//! CDN and storefront provider selection
//!
//! Cover images and store links are served from a small set of known
//! providers. Both are modeled as enums with fixed URL tables, so an
//! unrecognized provider name is rejected when the configuration is
//! parsed instead of silently producing an empty base URL.

use crate::error::SteamError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CDN mirror used for game cover images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoverCdn {
    /// Steam China mirror (queniuam)
    SteamChina,
    /// Akamai edge (global default)
    #[default]
    SteamAkamai,
    /// Fastly edge
    SteamFastly,
    /// Cloudflare edge
    SteamCloudflare,
}

impl CoverCdn {
    /// Base URL of the shared asset host for this CDN
    pub fn base_url(self) -> &'static str {
        match self {
            Self::SteamChina => "https://shared.cdn.steamchina.queniuam.com",
            Self::SteamAkamai => "https://shared.akamai.steamstatic.com",
            Self::SteamFastly => "https://shared.fastly.steamstatic.com",
            Self::SteamCloudflare => "https://shared.cloudflare.steamstatic.com",
        }
    }

    /// Full header image URL for a given app
    pub fn cover_url(self, appid: u64) -> String {
        format!(
            "{}/store_item_assets/steam/apps/{}/header.jpg",
            self.base_url(),
            appid
        )
    }

    /// Configuration name of this CDN
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SteamChina => "steamchina",
            Self::SteamAkamai => "steamakamai",
            Self::SteamFastly => "steamfastly",
            Self::SteamCloudflare => "steamcloudflare",
        }
    }
}

impl fmt::Display for CoverCdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverCdn {
    type Err = SteamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steamchina" => Ok(Self::SteamChina),
            "steamakamai" => Ok(Self::SteamAkamai),
            "steamfastly" => Ok(Self::SteamFastly),
            "steamcloudflare" => Ok(Self::SteamCloudflare),
            other => Err(SteamError::UnknownProvider(other.to_string())),
        }
    }
}

/// Storefront used for the per-game link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreFront {
    /// store.steampowered.com
    #[default]
    Steam,
    /// xiaoheihe.cn game pages
    Xiaoheihe,
    /// steamdb.info app pages
    SteamDb,
}

impl StoreFront {
    /// Store page URL for a given app
    pub fn store_url(self, appid: u64) -> String {
        match self {
            Self::Steam => format!("https://store.steampowered.com/app/{}", appid),
            Self::Xiaoheihe => {
                format!("https://www.xiaoheihe.cn/app/topic/game/pc/{}", appid)
            }
            Self::SteamDb => format!("https://steamdb.info/app/{}", appid),
        }
    }

    /// Configuration name of this storefront
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Steam => "steam",
            Self::Xiaoheihe => "xiaoheihe",
            Self::SteamDb => "steamdb",
        }
    }
}

impl fmt::Display for StoreFront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreFront {
    type Err = SteamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steam" => Ok(Self::Steam),
            "xiaoheihe" => Ok(Self::Xiaoheihe),
            "steamdb" => Ok(Self::SteamDb),
            other => Err(SteamError::UnknownProvider(other.to_string())),
        }
    }
}
