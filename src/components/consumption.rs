use yew::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::components::consumption_gauge::ConsumptionGauge;
use crate::components::status::Status;
use crate::components::tier_table::TierTable;
use crate::models::tariff::{ConsumptionSnapshot, SavingsAdvice, TariffTable};
use crate::utils::format::format_brl;

#[derive(Properties, PartialEq)]
pub struct ConsumptionProps {
    #[prop_or_default]
    pub snapshot: ConsumptionSnapshot,
}

/// Consumption breakdown: usage gauge, tier table, fee estimate, savings tip
#[function_component(Consumption)]
pub fn consumption(props: &ConsumptionProps) -> Html {
    let table = use_memo((), |_| TariffTable::default());
    let snapshot = props.snapshot;

    let reading = match table.read(&snapshot) {
        Ok(reading) => reading,
        Err(e) => {
            return html! {
                <div class="page consumption">
                    <Status message={e.to_string()} />
                </div>
            };
        }
    };

    let advice = table.savings_advice(snapshot.spent).ok();

    html! {
        <div class="page consumption">
            <header class="page-header">
                <span class="page-title">{"Resumo de Consumo"}</span>
            </header>

            <ConsumptionGauge
                reading={reading.clone()}
                spent={snapshot.spent}
                percent_of_capacity={snapshot.percent_of_capacity()}
            />

            <TierTable tiers={table.tiers().to_vec()} active_id={reading.tier.id} />

            <section class="card dark fee-card">
                <p class="card-label">{"Iluminação Pública (CIP)"}</p>
                <p class="muted">{"Estimativa baseada no consumo atual"}</p>
                <div class="fee-row">
                    <h3>
                        <span class="currency">{"R$ "}</span>
                        <AnimatedNumber value={reading.tier.rate} decimals={2} />
                    </h3>
                    <div class="fee-total">
                        <p class="card-label">{"Total na Fatura"}</p>
                        <p>{format_brl(reading.invoice_total())}</p>
                    </div>
                </div>
            </section>

            if let Some(advice) = advice {
                <section class="card savings">
                    <h4>{"Sugestão de Economia"}</h4>
                    <p class="muted">{savings_text(advice)}</p>
                </section>
            }
        </div>
    }
}

fn savings_text(advice: SavingsAdvice) -> Html {
    match advice {
        SavingsAdvice::Reduce {
            spent,
            reduce_by,
            target_label,
        } => html! {
            <>
                {"Seu gasto é de "}<strong>{format!("{spent:.0}kWh")}</strong>
                {". Se baixar "}<strong class="warn">{format!("{reduce_by:.0}kWh")}</strong>
                {" você retorna ao patamar "}<strong class="accent">{target_label}</strong>{"."}
            </>
        },
        SavingsAdvice::OnTrack { ceiling } => html! {
            <>
                {format!(
                    "Você está em uma faixa de consumo excelente. Mantenha abaixo de {ceiling:.0}kWh para garantir a menor taxa da CIP."
                )}
            </>
        },
    }
}
