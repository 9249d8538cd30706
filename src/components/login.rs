use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::session::{Credentials, LoginState};

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<()>,
}

/// Login form. Any non-empty email and password are accepted after a short
/// loading delay.
#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    let credentials = use_state(Credentials::default);
    let login_state = use_state(LoginState::default);

    let on_email = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            credentials.set(Credentials {
                email: input.value(),
                ..(*credentials).clone()
            });
        })
    };

    let on_password = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            credentials.set(Credentials {
                password: input.value(),
                ..(*credentials).clone()
            });
        })
    };

    let on_submit = {
        let credentials = credentials.clone();
        let login_state = login_state.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !credentials.is_complete() || login_state.is_submitting() {
                return;
            }

            login_state.set(LoginState::Submitting);
            let login_state = login_state.clone();
            let on_login = on_login.clone();
            spawn_local(async move {
                TimeoutFuture::new(Config::LOGIN_DELAY_MS).await;
                on_login.emit(());
                login_state.set(LoginState::Idle);
            });
        })
    };

    let submitting = login_state.is_submitting();

    html! {
        <div class="page login">
            <h1 class="brand">{"YLA Energia"}</h1>
            <form class="card login-form" onsubmit={on_submit}>
                <input
                    type="email"
                    placeholder="E-mail"
                    value={credentials.email.clone()}
                    oninput={on_email}
                />
                <input
                    type="password"
                    placeholder="Senha"
                    value={credentials.password.clone()}
                    oninput={on_password}
                />
                <button type="submit" class="primary" disabled={submitting}>
                    { if submitting { "Entrando..." } else { "Entrar" } }
                </button>
            </form>
        </div>
    }
}
