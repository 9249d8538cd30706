use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::insight::{InsightConfig, fetch_insight};

#[derive(Clone, PartialEq, Debug)]
pub enum InsightState {
    Loading,
    Loaded(Rc<str>),
}

impl InsightState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the text if it is loaded
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Loaded(text) => Some(&**text),
            Self::Loading => None,
        }
    }
}

/// Fetches the daily insight once per mount.
///
/// Never ends in an error state: failures resolve to the configured
/// fallback text.
#[hook]
pub fn use_insight(config: InsightConfig) -> UseStateHandle<InsightState> {
    let state = use_state(|| InsightState::Loading);

    {
        let state = state.clone();

        use_effect_with(config, move |config| {
            let config = config.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(InsightState::Loading);

            spawn_local(async move {
                let text = fetch_insight(config).await;
                if !aborted_check.get() {
                    state.set(InsightState::Loaded(Rc::from(text)));
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
