pub mod daily;
pub mod daily_redirect;
pub mod game;
pub mod home;
pub mod not_found;
pub mod play;
pub mod privacy;

use crate::router::Route;
use h5arcade_core::{GameRecord, attribution_params, query_pairs};
use yew_router::prelude::Navigator;

/// First value of a named query parameter.
pub(crate) fn query_param(query: &str, name: &str) -> Option<String> {
    query_pairs(query)
        .into_iter()
        .find(|(param, _)| param == name)
        .map(|(_, value)| value)
}

/// Current list page from the query string; anything unusable means page 1.
pub(crate) fn current_page(query: &str) -> usize {
    query_param(query, "page")
        .and_then(|value| value.parse().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Route to the internal player for `game`, forwarding the page's
/// attribution parameters alongside the embed URL.
pub(crate) fn open_play(navigator: &Navigator, current_query: &str, game: &GameRecord) {
    let mut query: Vec<(String, String)> = vec![("url".to_owned(), game.url.clone())];
    query.extend(attribution_params(current_query));
    if navigator.push_with_query(&Route::Play, &query).is_err() {
        navigator.push(&Route::Play);
    }
}

#[cfg(test)]
mod tests {
    use super::{current_page, query_param};

    #[test]
    fn query_param_returns_the_first_occurrence() {
        assert_eq!(query_param("?id=7&id=9", "id").as_deref(), Some("7"));
        assert_eq!(query_param("a=1", "id"), None);
    }

    #[test]
    fn current_page_defaults_to_one() {
        assert_eq!(current_page(""), 1);
        assert_eq!(current_page("?page=3"), 3);
        assert_eq!(current_page("?page=0"), 1);
        assert_eq!(current_page("?page=-2"), 1);
        assert_eq!(current_page("?page=abc"), 1);
    }
}
