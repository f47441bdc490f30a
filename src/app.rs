use dioxus::{prelude::*, signals::Signal};
use tracing::{info, warn};

use crate::{
    config::{
        keys::{CALCULATOR_INPUTS, THEME},
        APP_NAME,
    },
    domain::{AppState, CalculatorInputs},
    ui::{
        pages::{DayNightImportPage, HomePage, NotFoundPage},
        shell::Shell,
    },
    util::{assets, persistence::Preferences},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/calc/day-night-import")]
    DayNightImport {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| {
        let loaded = load_app_state(&Preferences::platform());
        info!(
            theme = loaded.theme.as_str(),
            loads = loaded.calculator.shiftable_loads.len(),
            "restored preferences"
        );
        loaded
    });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
    }
}

pub fn load_app_state(prefs: &Preferences) -> AppState {
    AppState {
        theme: prefs.load(&THEME),
        calculator: prefs.load(&CALCULATOR_INPUTS),
    }
}

/// Applies `apply` to the calculator inputs and writes the result straight
/// back to storage.
pub fn update_calculator(mut state: Signal<AppState>, apply: impl FnOnce(&mut CalculatorInputs)) {
    state.with_mut(|st| apply(&mut st.calculator));
    persist_calculator(&state);
}

pub fn persist_calculator(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.calculator.clone());
    if let Err(err) = Preferences::platform().save(&CALCULATOR_INPUTS, &snapshot) {
        warn!(%err, "failed to persist calculator inputs");
    }
}

pub fn toggle_theme(mut state: Signal<AppState>) {
    let theme = state.with_mut(|st| {
        st.theme = st.theme.toggled();
        st.theme
    });
    info!(theme = theme.as_str(), "theme changed");
    if let Err(err) = Preferences::platform().save(&THEME, &theme) {
        warn!(%err, "failed to persist theme");
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { title: "{APP_NAME}", HomePage {} } }
}

#[component]
pub fn DayNightImport() -> Element {
    rsx! { Shell { title: "Day/night import calculator", DayNightImportPage {} } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { Shell { title: "Page not found", NotFoundPage { path } } }
}
