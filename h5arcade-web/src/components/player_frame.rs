use crate::ads::AdSlotConfig;
use crate::components::ad_slot::AdSlot;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Final embed URL, attribution already applied by the caller.
    pub src: AttrValue,
    pub frame_title: AttrValue,
    #[prop_or_default]
    pub heading: Option<AttrValue>,
    #[prop_or_default]
    pub ad: Option<AdSlotConfig>,
    #[prop_or_default]
    pub on_more_games: Callback<()>,
}

/// Full-screen game embed: header row with an escape hatch back to the
/// catalogue, the game iframe with a loading overlay, and an optional
/// banner strip underneath.
#[function_component(PlayerFrame)]
pub fn player_frame(props: &Props) -> Html {
    let frame_loading = use_state(|| true);
    let on_frame_load = {
        let frame_loading = frame_loading.clone();
        Callback::from(move |_| frame_loading.set(false))
    };
    let more_games = {
        let on_more_games = props.on_more_games.clone();
        Callback::from(move |_| on_more_games.emit(()))
    };

    html! {
        <div class="player">
            <div class="player-header">
                <div class="button-group">
                    { props.heading.as_ref().map(|heading| html! {
                        <div class="player-title"><span>{ heading.clone() }</span></div>
                    }).unwrap_or_default() }
                    <button type="button" class="action-btn" onclick={more_games}>
                        { "More Games" }
                    </button>
                </div>
            </div>
            <div class="player-main">
                { (*frame_loading).then(|| html! {
                    <div class="loading-overlay"><div>{ "Loading game..." }</div></div>
                }).unwrap_or_default() }
                <iframe
                    src={props.src.clone()}
                    class="player-iframe"
                    title={props.frame_title.clone()}
                    allow="autoplay; fullscreen; payment; display-capture; clipboard-read; clipboard-write"
                    allowfullscreen={true}
                    referrerpolicy="no-referrer-when-downgrade"
                    loading="eager"
                    onload={on_frame_load}
                />
            </div>
            { props.ad.map(|config| html! { <AdSlot {config} /> }).unwrap_or_default() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(props: Props) -> String {
        block_on(LocalServerRenderer::<PlayerFrame>::with_props(props).render())
    }

    #[test]
    fn frame_embeds_the_target_and_shows_the_overlay_first() {
        let html = render(Props {
            src: AttrValue::from("https://games.example/run?utm_source=x"),
            frame_title: AttrValue::from("Runner"),
            heading: Some(AttrValue::from("1 DAY 1 GAME")),
            ad: None,
            on_more_games: Callback::noop(),
        });
        assert!(html.contains("https://games.example/run?utm_source=x"));
        assert!(html.contains("1 DAY 1 GAME"));
        assert!(html.contains("Loading game..."));
        assert!(html.contains("More Games"));
    }

    #[test]
    fn banner_strip_renders_when_configured() {
        let html = render(Props {
            src: AttrValue::from("https://games.example/run"),
            frame_title: AttrValue::from("Runner"),
            heading: None,
            ad: Some(crate::ads::DAILY_BANNER),
            on_more_games: Callback::noop(),
        });
        assert!(html.contains("ad-slot"));
        assert!(!html.contains("player-title"));
    }
}
