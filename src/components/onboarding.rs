use yew::prelude::*;

use crate::models::onboarding::{ONBOARDING_STEPS, next_step};

#[derive(Properties, PartialEq)]
pub struct OnboardingProps {
    pub on_complete: Callback<()>,
}

/// First-run carousel. Finishing or skipping calls `on_complete`.
#[function_component(Onboarding)]
pub fn onboarding(props: &OnboardingProps) -> Html {
    let step = use_state(|| 0usize);
    let current = &ONBOARDING_STEPS[(*step).min(ONBOARDING_STEPS.len() - 1)];
    let is_last = next_step(*step).is_none();

    let on_next = {
        let step = step.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_: MouseEvent| match next_step(*step) {
            Some(next) => step.set(next),
            None => on_complete.emit(()),
        })
    };

    let on_skip = {
        let on_complete = props.on_complete.clone();
        Callback::from(move |_: MouseEvent| on_complete.emit(()))
    };

    let icon_class = classes!("onboarding-icon", current.dark.then_some("dark"));

    html! {
        <div class="page onboarding">
            <button class="link skip" onclick={on_skip}>{"Pular"}</button>
            <div class={icon_class}>{current.icon}</div>
            <h2>{current.title}</h2>
            <p class="muted">{current.description}</p>
            <div class="dots">
                {
                    (0..ONBOARDING_STEPS.len()).map(|i| {
                        let class = classes!("dot", (i == *step).then_some("active"));
                        html! { <span key={i} {class} /> }
                    }).collect::<Html>()
                }
            </div>
            <button class="primary" onclick={on_next}>
                { if is_last { "Começar" } else { "Próximo" } }
            </button>
        </div>
    }
}
