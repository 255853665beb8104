use crate::ads;
use crate::components::game_list::GameList;
use crate::components::pagination::Pagination;
use crate::components::skeleton::SkeletonGrid;
use crate::components::status_view::StatusView;
use crate::hooks::use_games;
use crate::router::Route;
use crate::seo;
use h5arcade_core::{GameRecord, LoadState, query_pairs};
use yew::prelude::*;
use yew_router::prelude::*;

const PAGE_SIZE: usize = 50;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let games = use_games();
    let navigator = use_navigator();
    let location = use_location();
    let query = location
        .as_ref()
        .map(|location| location.query_str().to_owned())
        .unwrap_or_default();
    let page = super::current_page(&query);

    let (visible, total) = match &games.state {
        LoadState::Ready(catalogue) => {
            let visible: Vec<GameRecord> = catalogue
                .iter()
                .skip((page - 1) * PAGE_SIZE)
                .take(PAGE_SIZE)
                .cloned()
                .collect();
            (visible, catalogue.len())
        }
        _ => (Vec::new(), 0),
    };
    let total_pages = total.div_ceil(PAGE_SIZE);

    seo::use_page_meta(seo::home_meta(total, page));

    let on_play = {
        let navigator = navigator.clone();
        let query = query.clone();
        Callback::from(move |game: GameRecord| {
            if let Some(navigator) = navigator.as_ref() {
                super::open_play(navigator, &query, &game);
            }
        })
    };

    let on_page_change = {
        let navigator = navigator.clone();
        let query = query.clone();
        Callback::from(move |new_page: usize| {
            let Some(navigator) = navigator.as_ref() else {
                return;
            };
            let mut pairs: Vec<(String, String)> = query_pairs(&query)
                .into_iter()
                .filter(|(name, _)| name != "page")
                .collect();
            if new_page > 1 {
                pairs.push(("page".to_owned(), new_page.to_string()));
            }
            let outcome = if pairs.is_empty() {
                navigator.replace(&Route::Home);
                Ok(())
            } else {
                navigator.replace_with_query(&Route::Home, &pairs)
            };
            if outcome.is_err() {
                navigator.replace(&Route::Home);
            }
        })
    };

    let loading = games.is_loading();
    let error = games
        .state
        .error_message()
        .map(|message| AttrValue::from(message.to_owned()));
    let empty = !loading && error.is_none() && visible.is_empty();

    html! {
        <section class="container">
            <StatusView
                {loading}
                {error}
                {empty}
                on_retry={games.retry.clone()}
                loading_view={html! { <SkeletonGrid count={8} /> }}
            >
                <GameList games={visible} on_play={on_play} list_ad={Some(ads::LIST_RECT)} />
                <Pagination {page} {total_pages} on_change={on_page_change} />
            </StatusView>
        </section>
    }
}
