use yew::prelude::*;

/// Top-level screens reachable once signed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Statistics,
    Alerts,
    Profile,
    /// Reached from the dashboard's generation card, not from the nav bar
    Consumption,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "PAINEL",
            Self::Statistics => "GRÁFICOS",
            Self::Alerts => "ALERTAS",
            Self::Consumption => "CONSUMO",
            Self::Profile => "PERFIL",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Dashboard => "🏠",
            Self::Statistics => "📊",
            Self::Alerts => "🔔",
            Self::Consumption => "⚡",
            Self::Profile => "👤",
        }
    }

    /// Pages listed in the navigation bar, in display order.
    pub fn all() -> &'static [Page] {
        &[Page::Dashboard, Page::Statistics, Page::Alerts, Page::Profile]
    }
}

#[derive(Properties, PartialEq)]
pub struct BottomNavProps {
    pub active: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(BottomNav)]
pub fn bottom_nav(props: &BottomNavProps) -> Html {
    html! {
        <nav class="bottom-nav">
            {
                Page::all().iter().map(|&page| {
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
                    };
                    let class = classes!("nav-item", (page == props.active).then_some("active"));
                    html! {
                        <button key={page.label()} {class} {onclick}>
                            <span class="nav-icon">{page.icon()}</span>
                            <span class="nav-label">{page.label()}</span>
                        </button>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
