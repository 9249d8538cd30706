use yew::prelude::*;

use crate::models::alerts::{AlertFilter, mock_alerts};

/// Alert centre with Todos / Urgentes / Lidos tabs
#[function_component(Alerts)]
pub fn alerts() -> Html {
    let alerts = use_memo((), |_| mock_alerts());
    let filter = use_state(AlertFilter::default);
    let visible = filter.apply(&alerts);

    html! {
        <div class="page alerts">
            <header class="page-header">
                <span class="page-title">{"Centro de Alertas"}</span>
            </header>

            <div class="tabs">
                {
                    AlertFilter::all().iter().map(|&tab| {
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(tab))
                        };
                        let class = classes!("tab", (*filter == tab).then_some("active"));
                        html! { <button key={tab.label()} {class} {onclick}>{tab.label()}</button> }
                    }).collect::<Html>()
                }
            </div>

            if visible.is_empty() {
                <div class="card empty">
                    <p class="muted">{"Nenhum alerta encontrado nesta categoria."}</p>
                </div>
            } else {
                <div class="alert-list">
                    {
                        visible.into_iter().map(|alert| html! {
                            <div key={alert.id.to_string()} class={classes!("card", "alert-row", (!alert.is_read).then_some("unread"))}>
                                <div class={classes!("alert-icon", alert.level.css_class())}>{alert.level.icon()}</div>
                                <div>
                                    <div class="alert-heading">
                                        <h3>{alert.title}</h3>
                                        <span class="muted">{alert.time}</span>
                                    </div>
                                    <p class="muted">{alert.description}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}
