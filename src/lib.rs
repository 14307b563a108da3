//! # steamshelf - Steam owned-games widget
//!
//! `steamshelf` renders a paginated "owned games" listing from the Steam
//! Web API. It fetches the configured account's library once, caches the
//! raw response body with a TTL, sorts the games by last-played time, and
//! renders one page at a time as an HTML fragment with cover image, store
//! link, playtime and last-played date per game.
//!
//! ## Quick Start
//!
//! ```no_run
//! use steamshelf::{SteamClient, SteamConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SteamConfig::from_yaml(
//!         r#"
//! steam_id: "76561198000000000"
//! api_key: "XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX"
//! cover_cdn: steamfastly
//! store: steamdb
//! "#,
//!     )?;
//!
//!     let client = SteamClient::new(config)?;
//!     let html = client.render_page(1).await;
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```
//!
//! ## Degrade-to-empty policy
//!
//! Fetching never fails: transport errors, upstream error statuses and
//! undecodable bodies all degrade to an empty library, so the widget
//! renders an empty (but valid) fragment instead of breaking the page.
//! Only client construction and configuration parsing return errors.
//!
//! ## Caching
//!
//! With caching enabled (the default) the raw response body is kept under
//! a fixed key for the configured TTL. A page render performs at most one
//! cache lookup and at most one outbound HTTP call. The backend is the
//! [`ResponseCache`] trait; [`MemoryCache`] is the built-in TTL store and
//! tests can inject a stub.
//!
//! ## HTTP endpoint (feature `server`, on by default)
//!
//! [`create_router`] exposes `GET {endpoint_path}?page=N` returning the
//! rendered fragment as `text/html`; the embedded "load more" control
//! points back at the same endpoint with `page` incremented.
//!
//! ## Modules
//!
//! - [`client`]: read-through fetcher and builder
//! - [`models`]: owned-game models and the sorted [`GameLibrary`]
//! - [`render`]: pagination and HTML formatting rules
//! - [`cache`]: response cache trait and in-memory TTL backend
//! - [`config`]: immutable configuration with YAML loading
//! - [`providers`]: cover CDN and storefront URL tables
//! - [`error`]: error types and result alias

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod render;

#[cfg(feature = "server")]
pub mod api_rest;

pub use cache::{MemoryCache, ResponseCache, STEAM_CACHE_KEY};
pub use client::{SteamClient, SteamClientBuilder, OWNED_GAMES_ENDPOINT};
pub use config::{ApiConfig, CacheConfig, Labels, SteamConfig};
pub use error::{Result, SteamError};
pub use models::{GameLibrary, OwnedGame, GAMES_PER_PAGE};
pub use providers::{CoverCdn, StoreFront};

#[cfg(feature = "server")]
pub use api_rest::{create_router, SteamState};
