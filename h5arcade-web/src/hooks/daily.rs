//! The daily-view consumer surface: catalogue loader composed with the
//! deterministic daily selector.

use chrono::NaiveDate;
use h5arcade_core::GameRecord;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Daily view state. Mirrors the loader's tagged shape with the day's
/// chosen record in place of the full catalogue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DailyState {
    Loading,
    Ready(GameRecord),
    Error { message: String, retryable: bool },
}

impl DailyState {
    #[must_use]
    pub fn game(&self) -> Option<&GameRecord> {
        match self {
            Self::Ready(game) => Some(game),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct DailyHandle {
    pub state: DailyState,
    pub retry: Callback<()>,
}

impl DailyHandle {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, DailyState::Loading)
    }
}

/// Resolve today's game. `date_override` pins the calendar day (tests,
/// previews); otherwise the browser's local date decides, so the choice
/// rolls at local midnight.
///
/// Same lifecycle rules as the list surface: per-consumer fetch, retry
/// supersedes in-flight attempts, unmounted consumers never observe a
/// late result.
#[hook]
pub fn use_daily_game(date_override: Option<NaiveDate>) -> DailyHandle {
    let state = use_state(|| DailyState::Loading);
    let generation = use_mut_ref(|| 0_u32);
    let alive = use_mut_ref(|| true);

    let begin = {
        let state = state.clone();
        let generation = generation.clone();
        let alive = alive.clone();
        Callback::from(move |()| {
            let current = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            state.set(DailyState::Loading);
            spawn_daily_load(
                state.clone(),
                generation.clone(),
                alive.clone(),
                current,
                date_override,
            );
        })
    };

    {
        let alive = alive.clone();
        use_effect_with((), move |_| {
            move || {
                *alive.borrow_mut() = false;
            }
        });
    }
    {
        let begin = begin.clone();
        use_effect_with(date_override, move |_| {
            begin.emit(());
            || {}
        });
    }

    DailyHandle {
        state: (*state).clone(),
        retry: begin,
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn_daily_load(
    state: UseStateHandle<DailyState>,
    generation: Rc<RefCell<u32>>,
    alive: Rc<RefCell<bool>>,
    current: u32,
    date_override: Option<NaiveDate>,
) {
    use crate::transport::BrowserTransport;
    use h5arcade_core::{CatalogueLoader, LoaderConfig, select_for};

    wasm_bindgen_futures::spawn_local(async move {
        let loader = CatalogueLoader::with_config(
            BrowserTransport,
            LoaderConfig::for_path(crate::paths::catalogue_path()),
        );
        let outcome = loader.load().await;
        if !*alive.borrow() || *generation.borrow() != current {
            return;
        }
        match outcome {
            Ok(catalogue) => {
                let date = date_override.unwrap_or_else(crate::dom::local_today);
                match select_for(&catalogue, date) {
                    Some(game) if !game.url.trim().is_empty() => {
                        state.set(DailyState::Ready(game.clone()));
                    }
                    _ => state.set(DailyState::Error {
                        message: "Invalid game data".to_owned(),
                        retryable: true,
                    }),
                }
            }
            Err(error) => {
                log::error!("daily game load failed: {error}");
                state.set(DailyState::Error {
                    message: error.daily_message(),
                    retryable: true,
                });
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_daily_load(
    _state: UseStateHandle<DailyState>,
    _generation: Rc<RefCell<u32>>,
    _alive: Rc<RefCell<bool>>,
    _current: u32,
    _date_override: Option<NaiveDate>,
) {
    // No transport off the browser; server-side renders stay in `Loading`.
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameRecord {
        GameRecord {
            id: "1".to_owned(),
            title: "Blocks".to_owned(),
            url: "https://games.example/blocks".to_owned(),
            description: None,
            category: None,
            thumb: None,
            image: None,
        }
    }

    #[test]
    fn state_accessors_expose_the_active_variant() {
        assert!(DailyState::Loading.game().is_none());
        let ready = DailyState::Ready(game());
        assert_eq!(ready.game().unwrap().id, "1");
        let error = DailyState::Error {
            message: "No games available".to_owned(),
            retryable: true,
        };
        assert_eq!(error.error_message(), Some("No games available"));
    }
}
