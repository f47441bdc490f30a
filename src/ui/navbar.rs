use dioxus::prelude::*;

use crate::app::{toggle_theme, Route};
use crate::domain::{build_nav, AppState, NavNode, NavbarConfig};
use crate::ui::theme;

#[component]
pub fn SiteNavbar(config: NavbarConfig) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_theme = state.with(|st| st.theme);
    let current_path = use_route::<Route>().to_string();
    let nodes = build_nav(&config);

    rsx! {
        nav { class: "navbar",
            div { class: "container",
                Link { class: "navbar-brand", to: Route::Home {}, "{config.site_name}" }
                ul { class: "navbar-nav",
                    for node in nodes {
                        li { key: "{node.key()}",
                            NavEntry { node: node.clone(), current_path: current_path.clone(), nested: false }
                        }
                    }
                }
                button {
                    class: "theme-toggle",
                    title: theme::toggle_title(current_theme),
                    onclick: move |_| toggle_theme(state),
                    "{current_theme.icon()}"
                }
            }
        }
    }
}

/// Renders one node; dropdown children recurse through this component.
#[component]
fn NavEntry(node: NavNode, current_path: String, nested: bool) -> Element {
    match node {
        NavNode::Divider { .. } => rsx! {
            div { class: "dropdown-divider", role: "separator" }
        },
        NavNode::Link { label, url, .. } => {
            let class = if nested {
                "dropdown-item"
            } else {
                theme::nav_link(url.as_deref() == Some(current_path.as_str()))
            };
            match url {
                Some(url) => rsx! {
                    Link { class: "{class}", to: url, "{label}" }
                },
                None => rsx! {
                    span { class: "{class}", "{label}" }
                },
            }
        }
        NavNode::Dropdown { label, children, .. } => rsx! {
            details { class: "nav-dropdown",
                summary { class: theme::nav_link(false), "{label}" }
                ul { class: "dropdown-menu",
                    for child in children {
                        li { key: "{child.key()}",
                            NavEntry { node: child.clone(), current_path: current_path.clone(), nested: true }
                        }
                    }
                }
            }
        },
    }
}
