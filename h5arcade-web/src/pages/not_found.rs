use crate::router::Route;
use crate::seo;
use yew::prelude::*;
use yew_router::prelude::*;

/// Shown when routing fails to match a known view.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let navigator = use_navigator();
    seo::use_page_meta(seo::not_found_meta());

    let go_home = Callback::from(move |_| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ "The page you are looking for does not exist or has moved." }</p>
            <button type="button" onclick={go_home}>
                { "Back to games" }
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn offers_a_way_back_home() {
        let html = block_on(LocalServerRenderer::<NotFoundPage>::new().render());
        assert!(html.contains("Page not found"));
        assert!(html.contains("Back to games"));
    }
}
