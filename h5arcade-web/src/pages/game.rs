use crate::ads;
use crate::components::player_frame::PlayerFrame;
use crate::components::status_view::StatusView;
use crate::hooks::use_games;
use crate::router::Route;
use crate::seo;
use h5arcade_core::{LoadState, launch_url};
use yew::prelude::*;
use yew_router::prelude::*;

/// Player for one catalogue entry, selected by the `id` query parameter.
#[function_component(GamePage)]
pub fn game_page() -> Html {
    let games = use_games();
    let navigator = use_navigator();
    let location = use_location();
    let query = location
        .as_ref()
        .map(|location| location.query_str().to_owned())
        .unwrap_or_default();
    let game_id = super::query_param(&query, "id");

    let selected = match (&games.state, &game_id) {
        (LoadState::Ready(catalogue), Some(id)) => catalogue.find_by_id(id).cloned(),
        _ => None,
    };

    seo::use_page_meta(
        selected
            .as_ref()
            .map_or_else(seo::PageMeta::default, seo::game_meta),
    );

    let more_games = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Home);
            }
        })
    };

    let loading = games.is_loading();
    let error: Option<AttrValue> = if loading {
        None
    } else if let Some(message) = games.state.error_message() {
        Some(AttrValue::from(message.to_owned()))
    } else if game_id.is_none() {
        Some(AttrValue::from("No game ID provided"))
    } else if selected.is_none() {
        Some(AttrValue::from("Game not found"))
    } else {
        None
    };

    let Some(game) = selected else {
        return html! {
            <div class="player">
                <StatusView {loading} {error} on_retry={games.retry.clone()} />
            </div>
        };
    };

    let src = AttrValue::from(launch_url(&query, &game.url));
    html! {
        <PlayerFrame
            {src}
            frame_title={game.title.clone()}
            heading={Some(AttrValue::from(game.title.clone()))}
            ad={Some(ads::PLAYER_BANNER)}
            on_more_games={more_games}
        />
    }
}
