use crate::ads;
use crate::components::player_frame::PlayerFrame;
use crate::router::Route;
use crate::seo;
use h5arcade_core::launch_url;
use yew::prelude::*;
use yew_router::prelude::*;

/// Player for an arbitrary embed target passed in the `url` query
/// parameter; attribution parameters ride along onto the target.
#[function_component(PlayPage)]
pub fn play_page() -> Html {
    let navigator = use_navigator();
    let location = use_location();
    let query = location
        .as_ref()
        .map(|location| location.query_str().to_owned())
        .unwrap_or_default();
    let target = super::query_param(&query, "url");

    seo::use_page_meta(seo::play_meta());

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Home);
            }
        })
    };

    let Some(target) = target.filter(|target| !target.trim().is_empty()) else {
        let back = {
            let go_home = go_home.clone();
            Callback::from(move |_| go_home.emit(()))
        };
        return html! {
            <div class="player">
                <div class="error-container" role="alert">
                    <p class="error-text">{ "Invalid game link." }</p>
                    <button type="button" class="retry-btn" onclick={back}>{ "Back to games" }</button>
                </div>
            </div>
        };
    };

    let src = AttrValue::from(launch_url(&query, &target));
    html! {
        <PlayerFrame
            {src}
            frame_title="Game"
            ad={Some(ads::PLAY_STRIP)}
            on_more_games={go_home}
        />
    }
}
