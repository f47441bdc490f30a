use dioxus::prelude::*;

use crate::domain::CalculationResult;
use crate::ui::theme;

pub fn format_power(kw: f64) -> String {
    format!("{kw:.1} kW")
}

pub fn format_cost(pounds: f64) -> String {
    format!("£{pounds:.2}/hr")
}

#[component]
pub fn ResultCard(title: String, subtitle: Option<String>, result: CalculationResult) -> Element {
    rsx! {
        div { class: "{theme::PANEL} result-card",
            h3 { "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "muted", "{subtitle}" }
            }
            dl {
                dt { "Daytime load" }
                dd { "{format_power(result.day_load)}" }
                dt { "Daytime net import" }
                dd { "{format_power(result.day_net_import)}" }
                dt { "Daytime cost" }
                dd { "{format_cost(result.day_cost)}" }
                dt { "Night load" }
                dd { "{format_power(result.night_load)}" }
                dt { "Night cost" }
                dd { "{format_cost(result.night_cost)}" }
                dt { class: "total", "Net cost" }
                dd { class: "total", "{format_cost(result.net_cost)}" }
            }
        }
    }
}
