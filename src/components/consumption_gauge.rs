use yew::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::models::tariff::{ConsumptionReading, GaugeArc};

const ARC_PATH: &str = "M 18 100 A 82 82 0 0 1 182 100";

#[derive(Properties, PartialEq)]
pub struct ConsumptionGaugeProps {
    pub reading: ConsumptionReading,
    pub spent: f64,
    pub percent_of_capacity: f64,
}

/// Semicircular grid-usage gauge coloured by the active tier
#[function_component(ConsumptionGauge)]
pub fn consumption_gauge(props: &ConsumptionGaugeProps) -> Html {
    let tier = &props.reading.tier;
    let arc = GaugeArc::new(props.reading.progress);
    let badge_class = format!("tier-badge {}", tier.css_class());

    html! {
        <section class="card gauge-card">
            <p class="card-label">{"Uso da Rede Elétrica"}</p>
            <div class="gauge">
                <svg width="240" height="130" viewBox="0 0 200 110">
                    <path d={ARC_PATH} fill="none" stroke="#F8FAFC" stroke-width="12" stroke-linecap="round" />
                    <path
                        class="gauge-fill"
                        d={ARC_PATH}
                        fill="none"
                        stroke={tier.color}
                        stroke-width="12"
                        stroke-linecap="round"
                        stroke-dasharray={arc.length.to_string()}
                        stroke-dashoffset={arc.dash_offset.to_string()}
                    />
                </svg>
                <div class="gauge-value">
                    <h2><AnimatedNumber value={props.spent} /></h2>
                    <span class="unit">{"kWh"}</span>
                    <div class={badge_class}>{format!("Status {}", tier.label)}</div>
                </div>
            </div>
            <p class="muted">
                {"Seu consumo está "}
                <strong>{format!("{:.0}%", props.percent_of_capacity)}</strong>
                {" do planejado"}
            </p>
        </section>
    }
}
