//! URL helpers that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/arcade` for a
/// sub-directory deployment), generated URLs are prefixed accordingly.
/// Local builds without `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Site-relative location of the games catalogue resource.
#[must_use]
pub fn catalogue_path() -> String {
    asset_path("games.json")
}

/// Base path for the router (e.g., `/arcade` when hosted under a
/// subdirectory). `None` means the router anchors at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{catalogue_path, router_base};

    #[test]
    fn catalogue_lives_at_the_site_root_by_default() {
        assert_eq!(catalogue_path(), "/games.json");
    }

    #[test]
    fn asset_paths_honour_a_public_base() {
        assert_eq!(
            super::asset_path_with_base("games.json", "/arcade"),
            "/arcade/games.json"
        );
        assert_eq!(
            super::asset_path_with_base("/games.json", "/arcade/"),
            "/arcade/games.json"
        );
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_trims_trailing_slash() {
        assert_eq!(
            super::router_base_with_base("/arcade/"),
            Some(String::from("/arcade"))
        );
    }
}
