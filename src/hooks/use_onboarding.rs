use std::rc::Rc;
use yew::prelude::*;

use crate::models::onboarding::{FlagStore, OnboardingState};

/// Handle returned by `use_onboarding` hook
#[derive(Clone, PartialEq)]
pub struct OnboardingHandle {
    pub show: bool,
    pub complete: Callback<()>,
}

/// Onboarding visibility backed by an injected flag store.
///
/// The store is read on first render only; `complete` writes it once.
#[hook]
pub fn use_onboarding(store: Rc<dyn FlagStore>) -> OnboardingHandle {
    let state = use_state(|| OnboardingState::load(store.as_ref()));

    let complete = {
        let state = state.clone();
        Callback::from(move |()| {
            let mut next = *state;
            if let Err(e) = next.complete(store.as_ref()) {
                gloo::console::warn!(format!("Failed to save onboarding flag: {e}"));
            }
            state.set(next);
        })
    };

    OnboardingHandle {
        show: state.should_show(),
        complete,
    }
}
