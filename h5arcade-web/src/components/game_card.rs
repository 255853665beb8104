use h5arcade_core::GameRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub game: GameRecord,
    #[prop_or_default]
    pub on_play: Callback<GameRecord>,
}

/// One catalogue entry: thumbnail, title, expandable description, and a
/// play button. Navigation stays with the caller via `on_play`.
#[function_component(GameCard)]
pub fn game_card(props: &Props) -> Html {
    let expanded = use_state(|| false);
    let toggle_desc = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };
    let play = {
        let on_play = props.on_play.clone();
        let game = props.game.clone();
        Callback::from(move |_| on_play.emit(game.clone()))
    };
    let desc_class = if *expanded { "desc expanded" } else { "desc" };

    html! {
        <li class="card">
            <div class="media">
                <button
                    type="button"
                    onclick={play.clone()}
                    class="thumb-link"
                    aria-label={format!("Play {}", props.game.title)}
                >
                    { props.game.thumb.as_ref().map(|thumb| html! {
                        <img src={thumb.clone()} alt={props.game.title.clone()} class="thumb" loading="lazy" />
                    }).unwrap_or_default() }
                </button>
                { props.game.category.as_ref().map(|category| html! {
                    <span class="badge">{ category.clone() }</span>
                }).unwrap_or_default() }
            </div>
            <div class="content">
                <h2 class="game-title">{ &props.game.title }</h2>
                { props.game.description.as_ref().map(|description| html! {
                    <p class={desc_class} onclick={toggle_desc.clone()} role="button" aria-expanded={(*expanded).to_string()}>
                        { description.clone() }
                    </p>
                }).unwrap_or_default() }
                <div class="actions">
                    <button
                        type="button"
                        onclick={play}
                        class="play-btn"
                        aria-label={format!("Play {}", props.game.title)}
                    >
                        { "PLAY" }
                    </button>
                </div>
            </div>
        </li>
    }
}
