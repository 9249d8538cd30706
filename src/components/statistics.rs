use std::rc::Rc;
use yew::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::components::production_chart::ProductionChart;
use crate::models::production::ProductionSummary;

const PERIODS: [&str; 3] = ["Diário", "Semanal", "Mensal"];

#[derive(Properties, PartialEq)]
pub struct StatisticsProps {
    pub summary: Rc<ProductionSummary>,
}

#[function_component(Statistics)]
pub fn statistics(props: &StatisticsProps) -> Html {
    let period = use_state(|| PERIODS[0]);

    html! {
        <div class="page statistics">
            <header class="page-header">
                <span class="page-title">{"Estatísticas"}</span>
            </header>

            <div class="tabs">
                {
                    PERIODS.iter().map(|&tab| {
                        let onclick = {
                            let period = period.clone();
                            Callback::from(move |_: MouseEvent| period.set(tab))
                        };
                        let class = classes!("tab", (*period == tab).then_some("active"));
                        html! { <button key={tab} {class} {onclick}>{tab}</button> }
                    }).collect::<Html>()
                }
            </div>

            <section class="card">
                <p class="card-label">{"Produção total"}</p>
                <h2>
                    <AnimatedNumber value={props.summary.period_total} decimals={1} suffix=" kWh" />
                </h2>
                <ProductionChart summary={props.summary.clone()} />
            </section>

            <div class="tile-grid">
                {
                    props.summary.tiles().into_iter().map(|tile| html! {
                        <div key={tile.label} class="card tile">
                            <span class="tile-icon">{tile.icon}</span>
                            <p class="card-label">{tile.label}</p>
                            <p class="figure">
                                <AnimatedNumber value={tile.value} decimals={1} prefix={tile.prefix} />
                                <span class="unit">{tile.unit}</span>
                            </p>
                            <p class="muted">{tile.description}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
