use crate::ads::AdSlotConfig;
use crate::components::ad_slot::AdSlot;
use crate::components::game_card::GameCard;
use h5arcade_core::GameRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub games: Vec<GameRecord>,
    #[prop_or_default]
    pub on_play: Callback<GameRecord>,
    /// Rendered after the first card when set.
    #[prop_or_default]
    pub list_ad: Option<AdSlotConfig>,
}

/// The catalogue grid, with an ad slot after the first card and an anchor
/// element every fifth position for lazily attached units.
#[function_component(GameList)]
pub fn game_list(props: &Props) -> Html {
    html! {
        <ul class="grid onecol">
            { for props.games.iter().enumerate().map(|(index, game)| {
                let ad = if index == 0 {
                    props.list_ad.map(|config| html! {
                        <li class="ad-item"><AdSlot {config} /></li>
                    })
                } else {
                    None
                };
                let anchor = ((index + 1) % 5 == 0).then(|| html! {
                    <li><div class="ad-anchor" id={format!("list-ad-{}", index + 1)} /></li>
                });
                html! {
                    <>
                        <GameCard key={game.id.clone()} game={game.clone()} on_play={props.on_play.clone()} />
                        { ad.unwrap_or_default() }
                        { anchor.unwrap_or_default() }
                    </>
                }
            }) }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn games(count: usize) -> Vec<GameRecord> {
        (1..=count)
            .map(|n| GameRecord {
                id: n.to_string(),
                title: format!("Game {n}"),
                url: format!("https://games.example/{n}"),
                description: None,
                category: None,
                thumb: None,
                image: None,
            })
            .collect()
    }

    #[test]
    fn list_renders_every_game() {
        let props = Props {
            games: games(6),
            on_play: Callback::noop(),
            list_ad: None,
        };
        let html = block_on(LocalServerRenderer::<GameList>::with_props(props).render());
        for n in 1..=6 {
            assert!(html.contains(&format!("Game {n}")));
        }
    }

    #[test]
    fn ad_slot_follows_the_first_card_when_configured() {
        let props = Props {
            games: games(2),
            on_play: Callback::noop(),
            list_ad: Some(crate::ads::LIST_RECT),
        };
        let html = block_on(LocalServerRenderer::<GameList>::with_props(props).render());
        assert!(html.contains("ad-item"));
        let first_card = html.find("Game 1").unwrap();
        let ad = html.find("ad-item").unwrap();
        let second_card = html.find("Game 2").unwrap();
        assert!(first_card < ad && ad < second_card);
    }

    #[test]
    fn anchor_appears_every_fifth_position() {
        let props = Props {
            games: games(10),
            on_play: Callback::noop(),
            list_ad: None,
        };
        let html = block_on(LocalServerRenderer::<GameList>::with_props(props).render());
        assert!(html.contains("list-ad-5"));
        assert!(html.contains("list-ad-10"));
        assert!(!html.contains("list-ad-4"));
    }
}
