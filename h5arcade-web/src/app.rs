use crate::router::Route;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

/// Map a matched route to its page view.
#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <crate::pages::home::HomePage /> },
        Route::Game => html! { <crate::pages::game::GamePage /> },
        Route::Daily => html! { <crate::pages::daily::DailyPage /> },
        Route::DailyRedirect => html! { <crate::pages::daily_redirect::DailyRedirectPage /> },
        Route::Play => html! { <crate::pages::play::PlayPage /> },
        Route::Privacy => html! { <crate::pages::privacy::PrivacyPage /> },
        Route::NotFound => html! { <crate::pages::not_found::NotFoundPage /> },
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppShell />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppShell)]
fn app_shell() -> Html {
    html! {
        <>
            <crate::components::header::Header />
            <main id="main" role="main">
                <Switch<Route> render={switch} />
            </main>
            <crate::components::footer::Footer />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::switch;
    use crate::router::Route;

    #[test]
    fn every_route_maps_to_a_view() {
        let routes = [
            Route::Home,
            Route::Game,
            Route::Daily,
            Route::DailyRedirect,
            Route::Play,
            Route::Privacy,
            Route::NotFound,
        ];
        for route in routes {
            let _ = switch(route);
        }
    }
}
