use dioxus::prelude::*;

use crate::config::navbar::calculator_links;
use crate::ui::theme;

#[component]
pub fn HomePage() -> Element {
    let calculators = calculator_links();

    rsx! {
        section { class: "section",
            p {
                "A handful of calculators for working out what your electricity really costs "
                "when you have solar panels and a time-of-day tariff."
            }
        }
        section { class: "section grid",
            for (label, url) in calculators {
                div { key: "{url}", class: theme::PANEL,
                    h3 { "{label}" }
                    Link { class: "nav-link", to: url.clone(), "Open calculator →" }
                }
            }
        }
    }
}
