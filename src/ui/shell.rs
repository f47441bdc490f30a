use dioxus::prelude::*;

use crate::config::navbar::navbar_config;
use crate::domain::AppState;
use crate::ui::navbar::SiteNavbar;
use crate::ui::theme;
use crate::util::version::version_label;

/// Page frame: navbar, title banner, content and footer, in the active theme.
#[component]
pub fn Shell(title: String, children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_theme = state.with(|st| st.theme);

    rsx! {
        div { class: "{theme::root_class(current_theme)}",
            SiteNavbar { config: navbar_config() }
            div { class: "page-banner",
                div { class: "container",
                    h1 { "{title}" }
                }
            }
            main {
                div { class: "container", {children} }
            }
            footer { class: "footer", "{version_label()}" }
        }
    }
}
