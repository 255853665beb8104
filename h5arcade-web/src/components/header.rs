use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Site chrome shown on every route. Must render inside the router.
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header role="banner">
            <div class="header-content">
                <Link<Route> classes="site-title" to={Route::Home}>{ "H5 Arcade" }</Link<Route>>
                <nav class="header-nav" aria-label="Primary">
                    <Link<Route> to={Route::Daily}>{ "Game of the Day" }</Link<Route>>
                </nav>
            </div>
        </header>
    }
}
