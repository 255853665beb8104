//! The list-view consumer surface over the catalogue loader.

use h5arcade_core::LoadState;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// What the list view observes: the loader state plus a retry handle.
#[derive(Clone, PartialEq)]
pub struct GamesHandle {
    pub state: LoadState,
    pub retry: Callback<()>,
}

impl GamesHandle {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Idle | LoadState::Loading)
    }
}

/// Fetch the catalogue on mount and expose `{state, retry}`.
///
/// Each consumer owns its own load cycle. A retry supersedes any in-flight
/// attempt (its outcome is discarded via the generation counter), and
/// results that arrive after unmount never touch disposed state.
#[hook]
pub fn use_games() -> GamesHandle {
    let state = use_state(|| LoadState::Loading);
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
            state.set(LoadState::Loading);
            spawn_list_load(state.clone(), generation.clone(), alive.clone(), current);
        })
    };

    {
        let begin = begin.clone();
        let alive = alive.clone();
        use_effect_with((), move |_| {
            begin.emit(());
            move || {
                *alive.borrow_mut() = false;
            }
        });
    }

    GamesHandle {
        state: (*state).clone(),
        retry: begin,
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn_list_load(
    state: UseStateHandle<LoadState>,
    generation: Rc<RefCell<u32>>,
    alive: Rc<RefCell<bool>>,
    current: u32,
) {
    use crate::transport::BrowserTransport;
    use h5arcade_core::{CatalogueLoader, LoaderConfig};

    wasm_bindgen_futures::spawn_local(async move {
        let loader = CatalogueLoader::with_config(
            BrowserTransport,
            LoaderConfig::for_path(crate::paths::catalogue_path()),
        );
        let outcome = loader.load().await;
        if !*alive.borrow() || *generation.borrow() != current {
            return; // Unmounted or superseded; drop the result.
        }
        match outcome {
            Ok(catalogue) => state.set(LoadState::Ready(catalogue)),
            Err(error) => {
                log::error!("games list load failed: {error}");
                state.set(LoadState::Error {
                    message: error.list_message(),
                    retryable: true,
                });
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_list_load(
    _state: UseStateHandle<LoadState>,
    _generation: Rc<RefCell<u32>>,
    _alive: Rc<RefCell<bool>>,
    _current: u32,
) {
    // No transport off the browser; server-side renders stay in `Loading`.
}
