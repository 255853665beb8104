use crate::ads;
use crate::components::player_frame::PlayerFrame;
use crate::components::status_view::StatusView;
use crate::hooks::{DailyState, use_daily_game};
use crate::router::Route;
use crate::seo;
use h5arcade_core::launch_url;
use yew::prelude::*;
use yew_router::prelude::*;

/// Today's game, chosen deterministically from the catalogue, embedded
/// full-screen.
#[function_component(DailyPage)]
pub fn daily_page() -> Html {
    let daily = use_daily_game(None);
    let navigator = use_navigator();
    let location = use_location();
    let query = location
        .as_ref()
        .map(|location| location.query_str().to_owned())
        .unwrap_or_default();

    seo::use_page_meta(seo::daily_meta(daily.state.game()));

    let more_games = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Home);
            }
        })
    };

    match &daily.state {
        DailyState::Ready(game) => {
            let src = AttrValue::from(launch_url(&query, &game.url));
            html! {
                <PlayerFrame
                    {src}
                    frame_title={game.title.clone()}
                    heading={Some(AttrValue::from("1 DAY 1 GAME"))}
                    ad={Some(ads::DAILY_BANNER)}
                    on_more_games={more_games}
                />
            }
        }
        state => {
            let error = state
                .error_message()
                .map(|message| AttrValue::from(message.to_owned()));
            html! {
                <div class="player">
                    <StatusView
                        loading={daily.is_loading()}
                        {error}
                        on_retry={daily.retry.clone()}
                    />
                </div>
            }
        }
    }
}
