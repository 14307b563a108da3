//! HTTP endpoint exposing the rendered owned-games listing
//!
//! One route: `GET {endpoint_path}?page=N` returns the HTML fragment for
//! that page. The handler never errors — the degrade-to-empty policy of
//! the fetcher means the worst case is an empty fragment.

use crate::client::SteamClient;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Shared state for the listing endpoint
#[derive(Clone)]
pub struct SteamState {
    pub client: Arc<SteamClient>,
}

impl SteamState {
    pub fn new(client: SteamClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

/// Page selection, 1-based. Defaults to the first page.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

/// Create the Axum router serving the listing at the configured
/// endpoint path (the same path the "load more" control points at)
pub fn create_router(state: SteamState) -> Router {
    let path = state.client.config().endpoint_path.clone();
    Router::new()
        .route(&path, get(get_steam_items))
        .with_state(state)
}

async fn get_steam_items(
    State(state): State<SteamState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let page = params.page.max(1);
    Html(state.client.render_page(page).await)
}
