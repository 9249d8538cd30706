use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub user_name: AttrValue,
    pub on_logout: Callback<()>,
}

#[function_component(Profile)]
pub fn profile(props: &ProfileProps) -> Html {
    let onclick = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <div class="page profile">
            <h2>{&props.user_name}</h2>
            <button class="danger" {onclick}>{"Sair da conta"}</button>
        </div>
    }
}
