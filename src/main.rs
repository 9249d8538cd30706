use std::rc::Rc;
use yew::prelude::*;

use yla_energy::components::{
    Alerts, BottomNav, Consumption, Dashboard, Login, Onboarding, Page, Profile, Statistics,
};
use yla_energy::hooks::use_onboarding::use_onboarding;
use yla_energy::models::onboarding::FlagStore;
use yla_energy::models::production::ProductionSummary;
use yla_energy::services::storage::LocalStorageFlagStore;

const USER_NAME: &str = "Ricardo";

#[derive(Properties)]
struct AppProps {
    store: Rc<dyn FlagStore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let authenticated = use_state(|| false);
    let page = use_state(Page::default);
    let onboarding = use_onboarding(props.store.clone());
    let summary = use_memo((), |_| ProductionSummary::default());

    let on_login = {
        let authenticated = authenticated.clone();
        Callback::from(move |()| authenticated.set(true))
    };

    let on_logout = {
        let authenticated = authenticated.clone();
        let page = page.clone();
        Callback::from(move |()| {
            authenticated.set(false);
            page.set(Page::default());
        })
    };

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    let open_consumption = {
        let page = page.clone();
        Callback::from(move |()| page.set(Page::Consumption))
    };

    let content = if !*authenticated {
        html! { <Login {on_login} /> }
    } else if onboarding.show {
        html! { <Onboarding on_complete={onboarding.complete.clone()} /> }
    } else {
        let screen = match *page {
            Page::Dashboard => html! {
                <Dashboard
                    summary={summary.clone()}
                    user_name={USER_NAME}
                    on_open_consumption={open_consumption}
                />
            },
            Page::Statistics => html! { <Statistics summary={summary.clone()} /> },
            Page::Alerts => html! { <Alerts /> },
            Page::Consumption => html! { <Consumption /> },
            Page::Profile => html! { <Profile user_name={USER_NAME} {on_logout} /> },
        };

        html! {
            <>
                {screen}
                <BottomNav active={*page} {on_navigate} />
            </>
        }
    };

    html! {
        <div class="app-container">
            {content}
            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    let store: Rc<dyn FlagStore> = Rc::new(LocalStorageFlagStore::default());
    yew::Renderer::<App>::with_props(AppProps { store }).render();
}
