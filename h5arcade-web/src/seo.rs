//! Declarative per-route SEO.
//!
//! Every route describes its metadata as a [`PageMeta`] value; one applier
//! projects that value onto `document.head` when the route changes. The
//! applier only ever touches elements it created (marked with
//! `data-arcade-seo`), so host-provided head content survives navigation.

use h5arcade_core::GameRecord;
use serde_json::{Value, json};
use yew::prelude::*;

pub const SITE_NAME: &str = "H5 Arcade";
pub const DEFAULT_TITLE: &str = "H5 Arcade - Free Mobile Games";
pub const DEFAULT_DESCRIPTION: &str =
    "Play free HTML5 games on mobile. Fast loading games optimized for mobile webview.";
pub const DEFAULT_KEYWORDS: &str =
    "HTML5 games, mobile games, free games, browser games, webview games";

/// Marker attribute on every head element the applier owns.
pub const MANAGED_ATTR: &str = "data-arcade-seo";

/// Everything a route wants in `document.head`, as one value.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// Site-relative canonical path; the applier prefixes the origin.
    pub canonical: Option<String>,
    pub og_type: &'static str,
    pub image: Option<String>,
    pub json_ld: Option<Value>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            keywords: DEFAULT_KEYWORDS.to_owned(),
            canonical: None,
            og_type: "website",
            image: None,
            json_ld: None,
        }
    }
}

/// Home page, optionally deep into pagination.
#[must_use]
pub fn home_meta(total_games: usize, page: usize) -> PageMeta {
    let (title, description) = if page > 1 {
        (
            format!("{SITE_NAME} - Page {page} | Free Mobile Games"),
            format!(
                "Browse page {page} of {total_games} free HTML5 games. \
                 Mobile-optimized games that load fast and play smooth."
            ),
        )
    } else {
        (
            DEFAULT_TITLE.to_owned(),
            format!(
                "Play {total_games} free HTML5 games on mobile. \
                 Fast loading games optimized for mobile webview."
            ),
        )
    };
    PageMeta {
        title,
        description,
        canonical: Some("/".to_owned()),
        ..PageMeta::default()
    }
}

/// A specific catalogue entry's player page.
#[must_use]
pub fn game_meta(game: &GameRecord) -> PageMeta {
    let category = game.category.as_deref().unwrap_or("HTML5");
    let description = game.description.clone().unwrap_or_else(|| {
        format!(
            "Play {}, a fun {category} game. Free HTML5 game optimized for mobile.",
            game.title
        )
    });
    PageMeta {
        title: format!("{} - Play Free HTML5 Game | {SITE_NAME}", game.title),
        description,
        keywords: format!(
            "{}, {category} games, HTML5 games, mobile games, free games",
            game.title
        ),
        canonical: Some("/game".to_owned()),
        og_type: "article",
        image: game.thumb.clone().or_else(|| game.image.clone()),
        json_ld: Some(game_json_ld(game)),
        ..PageMeta::default()
    }
}

/// The daily-game page, before and after the day's choice resolves.
#[must_use]
pub fn daily_meta(game: Option<&GameRecord>) -> PageMeta {
    let base_description = "Play a new game every day. \
         Discover exciting games selected daily from our collection.";
    match game {
        None => PageMeta {
            title: format!("Game of the Day - Daily Free HTML5 Game | {SITE_NAME}"),
            description: base_description.to_owned(),
            keywords: "daily games, random games, HTML5 games, mobile games, free games".to_owned(),
            canonical: Some("/game/random".to_owned()),
            ..PageMeta::default()
        },
        Some(game) => PageMeta {
            title: format!("{} - Today's Game | {SITE_NAME}", game.title),
            description: format!(
                "Today's game: {}. {}",
                game.title,
                game.description.as_deref().unwrap_or(base_description)
            ),
            keywords: format!("daily games, {}, HTML5 games, free games", game.title),
            canonical: Some("/game/random".to_owned()),
            og_type: "article",
            image: game.thumb.clone().or_else(|| game.image.clone()),
            json_ld: Some(game_json_ld(game)),
            ..PageMeta::default()
        },
    }
}

#[must_use]
pub fn play_meta() -> PageMeta {
    PageMeta {
        title: format!("Play Game - {SITE_NAME}"),
        description: "Play free HTML5 game. Mobile-optimized gaming experience.".to_owned(),
        keywords: "play game, HTML5 games, mobile games, free games".to_owned(),
        ..PageMeta::default()
    }
}

#[must_use]
pub fn privacy_meta() -> PageMeta {
    PageMeta {
        title: format!("Privacy Policy & Disclaimer - {SITE_NAME}"),
        description: format!(
            "Privacy policy and disclaimer for {SITE_NAME}. \
             Information about data collection and third-party content."
        ),
        keywords: "privacy policy, disclaimer, terms of service".to_owned(),
        canonical: Some("/privacy-policy".to_owned()),
        ..PageMeta::default()
    }
}

#[must_use]
pub fn not_found_meta() -> PageMeta {
    PageMeta {
        title: format!("Page Not Found - {SITE_NAME}"),
        description: "The page you are looking for does not exist.".to_owned(),
        ..PageMeta::default()
    }
}

/// Schema.org structured data for a game entry.
#[must_use]
pub fn game_json_ld(game: &GameRecord) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Game",
        "name": game.title,
        "description": game.description,
        "genre": game.category,
        "image": game.thumb.as_ref().or(game.image.as_ref()),
        "publisher": {
            "@type": "Organization",
            "name": SITE_NAME,
        },
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD",
            "availability": "https://schema.org/InStock",
        },
        "applicationCategory": "Game",
        "operatingSystem": "Web Browser",
        "gamePlatform": "Web Browser",
    })
}

/// Apply a route's metadata to `document.head`, replacing whatever the
/// previous route left there.
#[cfg(target_arch = "wasm32")]
pub fn apply(meta: &PageMeta) {
    use crate::dom;

    let document = dom::document();
    document.set_title(&meta.title);
    clear_managed();

    let Some(head) = document.head() else {
        return;
    };
    let origin = dom::window().location().origin().unwrap_or_default();

    append_tag(&head, "meta", &[("name", "description"), ("content", &meta.description)]);
    append_tag(&head, "meta", &[("name", "keywords"), ("content", &meta.keywords)]);
    append_tag(&head, "meta", &[("name", "robots"), ("content", "index, follow")]);

    append_tag(&head, "meta", &[("property", "og:type"), ("content", meta.og_type)]);
    append_tag(&head, "meta", &[("property", "og:title"), ("content", &meta.title)]);
    append_tag(
        &head,
        "meta",
        &[("property", "og:description"), ("content", &meta.description)],
    );
    append_tag(&head, "meta", &[("property", "og:site_name"), ("content", SITE_NAME)]);

    if let Some(image) = &meta.image {
        append_tag(&head, "meta", &[("property", "og:image"), ("content", image)]);
        append_tag(&head, "meta", &[("name", "twitter:image"), ("content", image)]);
    }
    append_tag(
        &head,
        "meta",
        &[("name", "twitter:card"), ("content", "summary_large_image")],
    );
    append_tag(&head, "meta", &[("name", "twitter:title"), ("content", &meta.title)]);

    if let Some(path) = &meta.canonical {
        let href = format!("{origin}{path}");
        append_tag(&head, "link", &[("rel", "canonical"), ("href", &href)]);
        append_tag(&head, "meta", &[("property", "og:url"), ("content", &href)]);
    }

    if let Some(json_ld) = &meta.json_ld
        && let Ok(serialised) = serde_json::to_string(json_ld)
    {
        let script = append_tag(&head, "script", &[("type", "application/ld+json")]);
        if let Some(script) = script {
            script.set_text_content(Some(&serialised));
        }
    }
}

/// Remove every head element this module has created.
#[cfg(target_arch = "wasm32")]
pub fn clear_managed() {
    use crate::dom;

    let selector = format!("[{MANAGED_ATTR}]");
    if let Ok(managed) = dom::document().query_selector_all(&selector) {
        for index in 0..managed.length() {
            if let Some(node) = managed.item(index) {
                use wasm_bindgen::JsCast;
                if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                    element.remove();
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn append_tag(
    head: &web_sys::HtmlHeadElement,
    tag: &str,
    attributes: &[(&str, &str)],
) -> Option<web_sys::Element> {
    use crate::dom;

    let element = dom::document().create_element(tag).ok()?;
    for (name, value) in attributes {
        element.set_attribute(name, value).ok()?;
    }
    element.set_attribute(MANAGED_ATTR, "1").ok()?;
    head.append_child(&element).ok()?;
    Some(element)
}

/// Hook: keep `document.head` in sync with the given metadata while the
/// consuming page is mounted.
#[hook]
pub fn use_page_meta(meta: PageMeta) {
    use_effect_with(meta, |meta| {
        #[cfg(target_arch = "wasm32")]
        apply(meta);
        let _ = meta;
        || {
            #[cfg(target_arch = "wasm32")]
            clear_managed();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> GameRecord {
        GameRecord {
            id: "7".to_owned(),
            title: "Neon Racer".to_owned(),
            url: "https://games.example/neon".to_owned(),
            description: Some("Drift through neon streets.".to_owned()),
            category: Some("racing".to_owned()),
            thumb: Some("https://cdn.example/neon.png".to_owned()),
            image: None,
        }
    }

    #[test]
    fn home_meta_mentions_pagination_past_page_one() {
        let first = home_meta(120, 1);
        assert_eq!(first.title, DEFAULT_TITLE);
        assert!(first.description.contains("120"));

        let third = home_meta(120, 3);
        assert!(third.title.contains("Page 3"));
        assert!(third.description.contains("page 3"));
    }

    #[test]
    fn game_meta_uses_the_record_description_when_present() {
        let meta = game_meta(&record());
        assert!(meta.title.starts_with("Neon Racer"));
        assert_eq!(meta.description, "Drift through neon streets.");
        assert_eq!(meta.og_type, "article");
        assert_eq!(meta.image.as_deref(), Some("https://cdn.example/neon.png"));
        assert!(meta.json_ld.is_some());
    }

    #[test]
    fn game_meta_falls_back_to_a_generated_description() {
        let mut game = record();
        game.description = None;
        let meta = game_meta(&game);
        assert!(meta.description.contains("Neon Racer"));
        assert!(meta.description.contains("racing"));
    }

    #[test]
    fn daily_meta_swaps_shape_once_the_game_resolves() {
        let unresolved = daily_meta(None);
        assert!(unresolved.title.contains("Game of the Day"));
        assert_eq!(unresolved.og_type, "website");

        let resolved = daily_meta(Some(&record()));
        assert!(resolved.title.contains("Neon Racer"));
        assert_eq!(resolved.og_type, "article");
    }

    #[test]
    fn game_json_ld_carries_schema_org_typing() {
        let value = game_json_ld(&record());
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Game");
        assert_eq!(value["name"], "Neon Racer");
        assert_eq!(value["offers"]["price"], "0");
    }
}
