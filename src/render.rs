//! Page renderer for the owned-games widget
//!
//! Slices one page out of the sorted library and assembles the HTML
//! fragment: one `steam-card` anchor per game plus, when further pages
//! exist, a `template-pagination` block whose link targets the next page.
//! Every interpolated value is escaped for its context (text, attribute
//! or URL) before embedding.

use crate::config::{Labels, SteamConfig};
use crate::models::{GameLibrary, OwnedGame};
use chrono::{DateTime, FixedOffset};
use htmlescape::encode_minimal;

/// Escape a value for a double-quoted attribute. `encode_minimal` covers
/// `&`, `<` and `>` but leaves quotes alone, which is not enough inside
/// an attribute value.
fn encode_attr(s: &str) -> String {
    encode_minimal(s).replace('"', "&quot;")
}

/// Human-readable playtime.
///
/// 0 minutes is the "not played yet" label; below one hour the literal
/// minute count is shown; from one hour on, hours are rounded to one
/// decimal place with a trailing `.0` (or trailing zero) stripped, so
/// 90 → "1.5 hour" and 120 → "2 hour".
pub fn format_playtime(minutes: u32, labels: &Labels) -> String {
    if minutes == 0 {
        return labels.not_played.clone();
    }
    if minutes < 60 {
        return format!("{} {}", minutes, labels.minute);
    }
    let hours = format!("{:.1}", f64::from(minutes) / 60.0);
    let hours = hours.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", hours, labels.hour)
}

/// Last-played date as `YYYY-MM-DD HH:MM:SS` in the configured timezone.
///
/// A zero (never played) or out-of-range timestamp renders as the empty
/// string, which omits the field from the item fragment.
pub fn format_last_played(timestamp: u64, offset: FixedOffset) -> String {
    if timestamp == 0 {
        return String::new();
    }
    match i64::try_from(timestamp).ok().and_then(|t| DateTime::from_timestamp(t, 0)) {
        Some(utc) => utc
            .with_timezone(&offset)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => String::new(),
    }
}

/// Render one page of the library.
///
/// Page numbers below 1 are clamped to 1. A page past the end yields a
/// fragment with zero items, and an empty library yields an empty
/// fragment with no "load more" control.
pub fn render_page(library: &GameLibrary, page: usize, config: &SteamConfig) -> String {
    let page = page.max(1);

    let mut html = String::new();
    for game in library.page(page) {
        html.push_str(&render_game(game, config));
    }

    if library.has_next_page(page) {
        let next_url = format!("{}?page={}", config.endpoint_path, page + 1);
        html.push_str(&format!(
            "<div id=\"template-pagination\">\
             <a class=\"pagination-next\" data-href=\"{}\">\
             <i class=\"fa-solid fa-guitar\"></i> {}</a></div>",
            encode_attr(&next_url),
            encode_minimal(&config.labels.load_more)
        ));
    }

    html
}

/// One `steam-card` item fragment. The last-played line is only emitted
/// for games with recorded playtime.
fn render_game(game: &OwnedGame, config: &SteamConfig) -> String {
    let labels = &config.labels;
    let playtime = format_playtime(game.playtime_forever, labels);
    let last_played = if game.playtime_forever > 0 {
        format_last_played(game.rtime_last_played, config.utc_offset())
    } else {
        String::new()
    };

    let store_url = encode_attr(&config.store.store_url(game.appid));
    let cover_url = encode_attr(&config.cover_cdn.cover_url(game.appid));
    let name_attr = encode_attr(&game.name);
    let name_text = encode_minimal(&game.name);

    let mut html = format!(
        "<a class=\"steam-card\" href=\"{store_url}\" target=\"_blank\" rel=\"nofollow\">\
         <img src=\"{cover_url}\" alt=\"{name_attr}\" loading=\"lazy\">\
         <div class=\"steam-info\">\
         <div class=\"steam-title\" title=\"{name_attr}\">{name_text}</div>\
         <div class=\"steam-desc\">{}: {}</div>",
        encode_minimal(&labels.playtime),
        encode_minimal(&playtime),
    );
    if !last_played.is_empty() {
        html.push_str(&format!(
            "<div class=\"steam-desc\">{}: {}</div>",
            encode_minimal(&labels.last_played),
            last_played
        ));
    }
    html.push_str("</div></a>");
    html
}
