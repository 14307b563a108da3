//! Data models for Steam owned-games API responses

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of games shown per rendered page
pub const GAMES_PER_PAGE: usize = 20;

/// One game owned by the configured account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedGame {
    /// Steam application ID
    pub appid: u64,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Cumulative playtime in minutes
    #[serde(default)]
    pub playtime_forever: u32,
    /// Last-played timestamp in epoch seconds (0 = never/unknown)
    #[serde(default)]
    pub rtime_last_played: u64,
}

/// Envelope of the `GetOwnedGames` response: `{"response": {"games": [...]}}`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct OwnedGamesEnvelope {
    #[serde(default)]
    pub response: OwnedGamesResponse,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OwnedGamesResponse {
    #[serde(default)]
    pub games: Vec<OwnedGame>,
}

/// The full owned-games collection, sorted by last-played time.
///
/// The library is always fully materialized before pagination; `page`
/// only slices the already-sorted sequence. The sort is stable and
/// strictly non-increasing by `rtime_last_played`, so games that were
/// never played (timestamp 0) sort last in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameLibrary {
    games: Vec<OwnedGame>,
}

impl GameLibrary {
    /// An empty library, the degraded result of any failed fetch
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a library from unordered games, applying the canonical sort
    pub fn from_games(mut games: Vec<OwnedGame>) -> Self {
        games.sort_by(|a, b| b.rtime_last_played.cmp(&a.rtime_last_played));
        Self { games }
    }

    /// Decode a raw response body. A body that fails to parse, or parses
    /// without the `response.games` array, yields an empty library rather
    /// than an error.
    pub(crate) fn from_response_body(body: &str) -> Self {
        match serde_json::from_str::<OwnedGamesEnvelope>(body) {
            Ok(envelope) => Self::from_games(envelope.response.games),
            Err(e) => {
                warn!("Failed to decode owned-games response: {}", e);
                Self::empty()
            }
        }
    }

    /// Number of games in the library
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// All games in sorted order
    pub fn games(&self) -> &[OwnedGame] {
        &self.games
    }

    /// Total number of pages at [`GAMES_PER_PAGE`] games per page
    pub fn total_pages(&self) -> usize {
        self.games.len().div_ceil(GAMES_PER_PAGE)
    }

    /// The window of games for a 1-based page number. Pages beyond the
    /// end yield an empty slice, not an error.
    pub fn page(&self, page: usize) -> &[OwnedGame] {
        let offset = page.saturating_sub(1).saturating_mul(GAMES_PER_PAGE);
        if offset >= self.games.len() {
            return &[];
        }
        let end = (offset + GAMES_PER_PAGE).min(self.games.len());
        &self.games[offset..end]
    }

    /// Whether a "load more" control should follow the given page
    pub fn has_next_page(&self, page: usize) -> bool {
        page < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(appid: u64, last_played: u64) -> OwnedGame {
        OwnedGame {
            appid,
            name: format!("Game {}", appid),
            playtime_forever: 10,
            rtime_last_played: last_played,
        }
    }

    #[test]
    fn test_sort_descending_by_last_played() {
        let library = GameLibrary::from_games(vec![game(1, 50), game(2, 300), game(3, 100)]);
        let ids: Vec<u64> = library.games().iter().map(|g| g.appid).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let library =
            GameLibrary::from_games(vec![game(1, 0), game(2, 0), game(3, 7), game(4, 0)]);
        let ids: Vec<u64> = library.games().iter().map(|g| g.appid).collect();
        // Never-played games keep arrival order behind the played one
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_optional_fields_default_to_zero() {
        let body = r#"{"response":{"games":[{"appid":620,"name":"Portal 2"}]}}"#;
        let library = GameLibrary::from_response_body(body);
        assert_eq!(library.len(), 1);
        assert_eq!(library.games()[0].playtime_forever, 0);
        assert_eq!(library.games()[0].rtime_last_played, 0);
    }

    #[test]
    fn test_missing_games_path_yields_empty_library() {
        assert!(GameLibrary::from_response_body(r#"{"response":{}}"#).is_empty());
        assert!(GameLibrary::from_response_body(r#"{}"#).is_empty());
    }

    #[test]
    fn test_malformed_body_yields_empty_library() {
        assert!(GameLibrary::from_response_body("<html>Bad Gateway</html>").is_empty());
        assert!(GameLibrary::from_response_body(r#"{"response":{"games":42}}"#).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(GameLibrary::empty().total_pages(), 0);
        let games: Vec<OwnedGame> = (0..20).map(|i| game(i, i)).collect();
        assert_eq!(GameLibrary::from_games(games).total_pages(), 1);
        let games: Vec<OwnedGame> = (0..41).map(|i| game(i, i)).collect();
        assert_eq!(GameLibrary::from_games(games).total_pages(), 3);
    }

    #[test]
    fn test_page_windows() {
        let games: Vec<OwnedGame> = (0..45).map(|i| game(i, 1000 - i)).collect();
        let library = GameLibrary::from_games(games);

        assert_eq!(library.page(1).len(), 20);
        assert_eq!(library.page(2).len(), 20);
        assert_eq!(library.page(3).len(), 5);
        assert!(library.page(4).is_empty());
        assert!(library.page(100).is_empty());

        // Windows are contiguous over the sorted order
        assert_eq!(library.page(1)[0].appid, 0);
        assert_eq!(library.page(2)[0].appid, 20);
        assert_eq!(library.page(3)[4].appid, 44);

        assert!(library.has_next_page(1));
        assert!(library.has_next_page(2));
        assert!(!library.has_next_page(3));
        assert!(!library.has_next_page(4));
    }

    #[test]
    fn test_empty_library_has_no_next_page() {
        assert!(!GameLibrary::empty().has_next_page(1));
    }
}
