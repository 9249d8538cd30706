use yew::prelude::*;

use crate::hooks::use_insight::use_insight;
use crate::services::insight::InsightConfig;

#[derive(Properties, PartialEq)]
pub struct InsightCardProps {
    #[prop_or_default]
    pub config: InsightConfig,
}

/// Floating "daily update" card with a generated one-liner
#[function_component(InsightCard)]
pub fn insight_card(props: &InsightCardProps) -> Html {
    let state = use_insight(props.config.clone());
    let visible = use_state(|| true);

    if !*visible {
        return html! {};
    }

    let on_close = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    html! {
        <div class="insight-card">
            <div class="insight-icon">{"✨"}</div>
            <div class="insight-body">
                <p class="card-label">
                    {"ATUALIZAÇÃO DIÁRIA"}
                    if state.is_loading() {
                        <span class="dots" />
                    }
                </p>
                {
                    match state.text() {
                        Some(text) => html! { <p class="insight-text">{text.to_string()}</p> },
                        None => html! {
                            <div class="skeleton">
                                <div class="skeleton-line" />
                                <div class="skeleton-line short" />
                            </div>
                        },
                    }
                }
            </div>
            <button class="icon-button" onclick={on_close} aria-label="Fechar">{"✕"}</button>
        </div>
    }
}
