use std::rc::Rc;
use yew::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::components::insight_card::InsightCard;
use crate::models::production::ProductionSummary;
use crate::utils::format::{format_brl, format_pt_br};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub summary: Rc<ProductionSummary>,
    pub user_name: AttrValue,
    pub on_open_consumption: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let summary = &props.summary;
    let onclick = {
        let callback = props.on_open_consumption.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <div class="page dashboard">
            <header class="page-header">
                <h1>{format!("Olá, {}", props.user_name)}</h1>
            </header>

            <section class="card dark generation-card" {onclick}>
                <p class="card-label">{"Geração mensal"}</p>
                <div class="headline">
                    <h3><AnimatedNumber value={summary.monthly_generation} /></h3>
                    <span class="unit accent">{"kWh"}</span>
                </div>
                <div class="split">
                    <div>
                        <p class="card-label">{"Créditos"}</p>
                        <p class="figure">{format!("{} kWh", format_pt_br(summary.credits, 0))}</p>
                    </div>
                    <div class="right">
                        <p class="card-label">{"Economia"}</p>
                        <p class="figure">{format_brl(summary.savings)}</p>
                    </div>
                </div>
            </section>

            <InsightCard />
        </div>
    }
}
