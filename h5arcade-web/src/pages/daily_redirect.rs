use crate::dom;
use crate::hooks::{DailyState, use_daily_game};
use crate::router::Route;
use h5arcade_core::launch_url;
use yew::prelude::*;
use yew_router::prelude::*;

/// Resolves today's game and replaces the current history entry with its
/// launch URL, attribution parameters attached. Load failures fall back to
/// the catalogue home route, also replacing history so the dead end never
/// enters the back stack.
#[function_component(DailyRedirectPage)]
pub fn daily_redirect_page() -> Html {
    let daily = use_daily_game(None);
    let navigator = use_navigator();
    let redirected = use_mut_ref(|| false);

    {
        let navigator = navigator.clone();
        let redirected = redirected.clone();
        use_effect_with(daily.state.clone(), move |state| {
            if !*redirected.borrow() {
                match state {
                    DailyState::Ready(game) => {
                        *redirected.borrow_mut() = true;
                        let target = launch_url(&dom::location_search(), &game.url);
                        dom::replace_location(&target);
                    }
                    DailyState::Error { .. } => {
                        *redirected.borrow_mut() = true;
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.replace(&Route::Home);
                        }
                    }
                    DailyState::Loading => {}
                }
            }
            || {}
        });
    }

    if let DailyState::Error { .. } = &daily.state {
        return html! {
            <div class="container">
                <div class="error-container" role="alert">
                    <p>{ "Failed to load game. Redirecting..." }</p>
                </div>
            </div>
        };
    }
    html! {
        <div class="container">
            <div class="loading-container" role="status">
                <p>{ "Loading game..." }</p>
            </div>
        </div>
    }
}
