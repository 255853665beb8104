//! Attribution-preserving launch URLs.
//!
//! Visitors arrive from ad-network landings with attribution parameters on
//! the query string (`utm_*`, click ids, and the like). Navigating from an
//! internal page to a game target must carry those parameters along so the
//! downstream host can attribute revenue, while the parameters that only
//! drive our own navigation must never leak to the target.

use std::collections::HashSet;
use url::Url;
use url::form_urlencoded;

/// Query parameters that drive internal navigation and are never forwarded:
/// `page` paginates the list, `id` selects a catalogue entry, `url` is the
/// player's own embed parameter.
pub const INTERNAL_PARAMS: [&str; 3] = ["page", "id", "url"];

/// Decode a query string (with or without the leading `?`) into its pairs,
/// in source order, nothing filtered.
#[must_use]
pub fn query_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}

/// The parameters worth forwarding from a query string: internal names are
/// dropped, and a repeated name keeps its last value.
#[must_use]
pub fn attribution_params(query: &str) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();
    for (name, value) in query_pairs(query) {
        if INTERNAL_PARAMS.contains(&name.as_str()) {
            continue;
        }
        match params.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => params.push((name, value)),
        }
    }
    params
}

/// Compute the final URL for launching `target_url` from a page whose query
/// string is `current_query`.
///
/// Forwarded parameters overwrite same-name parameters already on the
/// target; everything else on the target survives untouched. When nothing
/// is worth forwarding, or the target is not a parseable absolute URL, the
/// target comes back unchanged.
#[must_use]
pub fn launch_url(current_query: &str, target_url: &str) -> String {
    let forwarded = attribution_params(current_query);
    if forwarded.is_empty() {
        return target_url.to_owned();
    }
    let Ok(mut target) = Url::parse(target_url) else {
        return target_url.to_owned();
    };

    let overridden: HashSet<&str> = forwarded.iter().map(|(name, _)| name.as_str()).collect();
    let mut merged: Vec<(String, String)> = Vec::new();
    let mut replaced: HashSet<String> = HashSet::new();
    for (name, value) in target.query_pairs() {
        if overridden.contains(name.as_ref()) {
            // First occurrence takes the forwarded value; later duplicates drop.
            if replaced.insert(name.to_string()) {
                let value = forwarded
                    .iter()
                    .find(|(forwarded_name, _)| *forwarded_name == name)
                    .map(|(_, forwarded_value)| forwarded_value.clone())
                    .unwrap_or_else(|| value.into_owned());
                merged.push((name.into_owned(), value));
            }
        } else {
            merged.push((name.into_owned(), value.into_owned()));
        }
    }
    for (name, value) in forwarded {
        if !replaced.contains(&name) {
            merged.push((name, value));
        }
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&merged)
        .finish();
    target.set_query(Some(&query));
    target.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs_of(url: &str) -> Vec<(String, String)> {
        let parsed = Url::parse(url).unwrap();
        parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn forwards_attribution_and_strips_internal_params() {
        let out = launch_url(
            "utm_source=x&page=2&gclid=abc&id=7",
            "https://host/g?a=1",
        );
        let mut pairs = pairs_of(&out);
        pairs.sort();
        assert_eq!(
            pairs,
            [
                ("a".to_owned(), "1".to_owned()),
                ("gclid".to_owned(), "abc".to_owned()),
                ("utm_source".to_owned(), "x".to_owned()),
            ]
        );
    }

    #[test]
    fn internal_params_never_reach_the_target() {
        for query in ["page=3", "id=9", "url=https%3A%2F%2Fother", "page=1&id=2&url=u"] {
            let out = launch_url(query, "https://host/g");
            assert_eq!(out, "https://host/g");
        }
    }

    #[test]
    fn empty_query_leaves_target_untouched() {
        assert_eq!(launch_url("", "https://host/g?a=1"), "https://host/g?a=1");
        assert_eq!(launch_url("?", "https://host/g"), "https://host/g");
    }

    #[test]
    fn forwarded_value_overwrites_target_value() {
        let out = launch_url("utm_source=fresh", "https://host/g?utm_source=stale&a=1");
        assert_eq!(pairs_of(&out), [
            ("utm_source".to_owned(), "fresh".to_owned()),
            ("a".to_owned(), "1".to_owned()),
        ]);
    }

    #[test]
    fn repeated_incoming_name_keeps_last_value() {
        let out = launch_url("utm_source=a&utm_source=b", "https://host/g");
        assert_eq!(pairs_of(&out), [("utm_source".to_owned(), "b".to_owned())]);
    }

    #[test]
    fn unparseable_target_comes_back_unchanged() {
        assert_eq!(launch_url("utm_source=x", "not a url"), "not a url");
        assert_eq!(launch_url("utm_source=x", "/relative/path"), "/relative/path");
    }

    #[test]
    fn leading_question_mark_is_accepted() {
        let out = launch_url("?utm_medium=cpc", "https://host/g");
        assert_eq!(pairs_of(&out), [("utm_medium".to_owned(), "cpc".to_owned())]);
    }

    #[test]
    fn launch_is_idempotent_over_its_own_output() {
        let first = launch_url("utm_source=x&gclid=abc&page=4", "https://host/g?a=1");
        let query = Url::parse(&first).unwrap().query().unwrap_or_default().to_owned();
        let second = launch_url(&query, "https://host/g?a=1");
        assert_eq!(first, second);
    }

    #[test]
    fn attribution_params_drop_internal_names() {
        let params = attribution_params("utm_source=x&page=2&gclid=abc&id=7&url=u");
        assert_eq!(params, [
            ("utm_source".to_owned(), "x".to_owned()),
            ("gclid".to_owned(), "abc".to_owned()),
        ]);
    }

    #[test]
    fn query_pairs_decodes_in_source_order() {
        let pairs = query_pairs("?b=2&a=1%20x");
        assert_eq!(pairs, [
            ("b".to_owned(), "2".to_owned()),
            ("a".to_owned(), "1 x".to_owned()),
        ]);
    }
}
