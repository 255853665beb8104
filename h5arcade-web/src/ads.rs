//! Advertising slots as opaque data.
//!
//! A slot is "render a banner of size (w, h), sandboxed, at this position".
//! Provider specifics (invocation key, script location, warm-up delay) are
//! plain configuration; nothing outside this module knows who serves the
//! banner.

/// One provider placement, fully described by data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdSlotConfig {
    pub key: &'static str,
    pub script_src: &'static str,
    pub width: u32,
    pub height: u32,
    /// Milliseconds to wait before injecting the provider script. Zero
    /// injects immediately.
    pub delay_ms: u32,
}

/// Rectangle woven into the catalogue list after the first card.
pub const LIST_RECT: AdSlotConfig = AdSlotConfig {
    key: "4c81ab3769fd20e25bfe2c71a30901dc",
    script_src: "//cdn.adformatdelivery.com/4c81ab3769fd20e25bfe2c71a30901dc/invoke.js",
    width: 300,
    height: 250,
    delay_ms: 0,
};

/// Banner strip under the per-game player; injected immediately.
pub const PLAYER_BANNER: AdSlotConfig = AdSlotConfig {
    key: "b7e55c3f0a9d12c8844fe09a61b23d77",
    script_src: "//cdn.adformatdelivery.com/b7e55c3f0a9d12c8844fe09a61b23d77/invoke.js",
    width: 320,
    height: 50,
    delay_ms: 0,
};

/// Banner strip under the daily player; delayed so the game iframe wins the
/// initial bandwidth.
pub const DAILY_BANNER: AdSlotConfig = AdSlotConfig {
    key: "b7e55c3f0a9d12c8844fe09a61b23d77",
    script_src: "//cdn.adformatdelivery.com/b7e55c3f0a9d12c8844fe09a61b23d77/invoke.js",
    width: 320,
    height: 50,
    delay_ms: 1000,
};

/// Wide strip under the direct-url player.
pub const PLAY_STRIP: AdSlotConfig = AdSlotConfig {
    key: "0d2f9b64e17c53a8b96d01c4ae85f321",
    script_src: "//cdn.adformatdelivery.com/0d2f9b64e17c53a8b96d01c4ae85f321/invoke.js",
    width: 320,
    height: 100,
    delay_ms: 0,
};

/// Build the sandboxed document a slot iframe renders. The provider script
/// runs inside the iframe only; the host page never executes it.
#[must_use]
pub fn srcdoc(config: &AdSlotConfig) -> String {
    let AdSlotConfig {
        key,
        script_src,
        width,
        height,
        delay_ms,
    } = config;
    let loader = if *delay_ms > 0 {
        format!(
            r"<script>
setTimeout(() => {{
    window.atOptions = {{ 'key': '{key}', 'format': 'iframe', 'height': {height}, 'width': {width}, 'params': {{}} }};
    const script = document.createElement('script');
    script.type = 'text/javascript';
    script.src = '{script_src}';
    document.body.appendChild(script);
}}, {delay_ms});
</script>"
        )
    } else {
        format!(
            r"<script>
window.atOptions = {{ 'key': '{key}', 'format': 'iframe', 'height': {height}, 'width': {width}, 'params': {{}} }};
</script>
<script type='text/javascript' src='{script_src}'></script>"
        )
    };
    format!(
        r"<!DOCTYPE html>
<html>
<head>
<style>
body {{ margin: 0; padding: 0; overflow: hidden; }}
* {{ max-width: 100% !important; max-height: {height}px !important; }}
</style>
</head>
<body>
{loader}
</body>
</html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_slot_includes_the_provider_script_directly() {
        let doc = srcdoc(&LIST_RECT);
        assert!(doc.contains(LIST_RECT.key));
        assert!(doc.contains(LIST_RECT.script_src));
        assert!(doc.contains("'height': 250"));
        assert!(doc.contains("'width': 300"));
        assert!(!doc.contains("setTimeout"));
    }

    #[test]
    fn delayed_slot_defers_script_injection() {
        let doc = srcdoc(&DAILY_BANNER);
        assert!(doc.contains("setTimeout"));
        assert!(doc.contains(", 1000);"));
        assert!(doc.contains(DAILY_BANNER.script_src));
    }

    #[test]
    fn slot_document_caps_content_to_the_slot_height() {
        let doc = srcdoc(&PLAY_STRIP);
        assert!(doc.contains("max-height: 100px"));
    }
}
