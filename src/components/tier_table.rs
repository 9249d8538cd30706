use yew::prelude::*;

use crate::models::tariff::TariffTier;
use crate::utils::format::format_pt_br;

#[derive(Properties, PartialEq)]
pub struct TierTableProps {
    pub tiers: Vec<TariffTier>,
    pub active_id: u8,
}

#[function_component(TierTable)]
pub fn tier_table(props: &TierTableProps) -> Html {
    html! {
        <section class="card tier-table">
            <div class="card-header">
                <h3 class="card-label">{"Tabela de Patamares"}</h3>
                <span class="muted">{"CIP 2024"}</span>
            </div>
            <div class="tier-list">
                {
                    props.tiers.iter().rev().map(|tier| {
                        let active = tier.id == props.active_id;
                        let row_class = classes!("tier-row", tier.css_class(), active.then_some("active"));
                        html! {
                            <div key={tier.label} class={row_class}>
                                <div>
                                    <p class="tier-id">{format!("Patamar {}", tier.id)}</p>
                                    <p class="tier-name">
                                        {tier.label}
                                        <span class="muted">{format!(" ({} kWh)", tier.range)}</span>
                                    </p>
                                </div>
                                <div class="tier-fee">
                                    <span class="currency">{"R$"}</span>
                                    <p>{format_pt_br(tier.rate, 2)}</p>
                                    if active {
                                        <p class="tier-here">{"Você está aqui"}</p>
                                    }
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
