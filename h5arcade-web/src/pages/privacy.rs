use crate::seo;
use yew::prelude::*;

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    seo::use_page_meta(seo::privacy_meta());

    html! {
        <section class="container legal">
            <h1>{ "Privacy Policy & Disclaimer" }</h1>

            <section>
                <h2>{ "What we collect" }</h2>
                <p>{ "This site has no accounts and no server-side storage. We do not \
                      collect, store, or process personal information ourselves." }</p>
            </section>

            <section>
                <h2>{ "Third-party games" }</h2>
                <p>{ "Games are embedded from third-party providers and run inside their \
                      own frames. Their content, availability, and any data practices \
                      inside the frame are governed by the respective provider's own \
                      policies." }</p>
            </section>

            <section>
                <h2>{ "Advertising" }</h2>
                <p>{ "Advertisement units are served by third-party networks in sandboxed \
                      frames. Ad networks may use identifiers from the page URL (such as \
                      campaign parameters) to attribute visits. We forward those \
                      parameters unchanged and add nothing to them." }</p>
            </section>

            <section>
                <h2>{ "Contact" }</h2>
                <p>{ "Questions about this policy can be sent to the site operator via \
                      the address published on the hosting storefront listing." }</p>
            </section>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn policy_covers_games_and_advertising() {
        let html = block_on(LocalServerRenderer::<PrivacyPage>::new().render());
        assert!(html.contains("Privacy Policy"));
        assert!(html.contains("Third-party games"));
        assert!(html.contains("Advertising"));
    }
}
