use yew::prelude::*;

use crate::hooks::use_tween::use_tween;
use crate::models::tween::NumberFormat;

const PLACEHOLDER: &str = "--";

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub value: f64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(0)]
    pub decimals: usize,
}

/// Number that springs to each new `value`, rendered in pt-BR notation
#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let format = NumberFormat::new(props.decimals)
        .prefix(props.prefix.as_str())
        .suffix(props.suffix.as_str());
    let display = use_tween(props.value, format);

    html! {
        <span class="tabular-nums">{display.text_or(PLACEHOLDER)}</span>
    }
}
