use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{BuybackPage, ManifestPage, RefineryPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Manifest {},
    #[route("/refinery")]
    Refinery {},
    #[route("/buyback")]
    Buyback {},
}

#[component]
pub fn App() -> Element {
    // The single owner of all mutable input state. Every edit goes through
    // AppState::apply and triggers one full re-evaluation on render.
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Manifest() -> Element {
    rsx! { Shell { ManifestPage {} } }
}

#[component]
pub fn Refinery() -> Element {
    rsx! { Shell { RefineryPage {} } }
}

#[component]
pub fn Buyback() -> Element {
    rsx! { Shell { BuybackPage {} } }
}
