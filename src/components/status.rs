use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub message: AttrValue,
}

/// Inline error card shown in place of a section that could not be computed
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    html! {
        <div class="status error">
            <p>{"❌ Erro: "}{&props.message}</p>
        </div>
    }
}
