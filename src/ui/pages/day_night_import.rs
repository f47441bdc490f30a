use dioxus::prelude::*;
use tracing::debug;

use crate::app::update_calculator;
use crate::domain::{calculate, AppState, LoadItem, Scenario};
use crate::ui::components::{
    load_list::LoadList,
    number_field::NumberField,
    result_card::{format_cost, ResultCard},
};
use crate::ui::theme;

#[component]
pub fn DayNightImportPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let inputs = state.with(|st| st.calculator.clone());
    // Full recompute on every change to the inputs.
    let comparison = use_memo(move || calculate(&state.read().calculator));
    let results = comparison();

    let recommendation = match results.cheaper() {
        Some(scenario) => format!(
            "{} is cheaper by {}.",
            scenario.title(),
            format_cost(results.saving())
        ),
        None => "Both options cost the same.".to_string(),
    };

    let on_add = move |item: LoadItem| {
        debug!(label = %item.label, power = item.power, "adding shiftable load");
        update_calculator(state, |c| c.add_load(item));
    };
    let on_toggle = move |idx: usize| {
        update_calculator(state, |c| {
            c.toggle_load(idx);
        })
    };
    let on_remove = move |idx: usize| {
        update_calculator(state, |c| {
            if let Some(removed) = c.remove_load(idx) {
                debug!(label = %removed.label, "removed shiftable load");
            }
        })
    };

    rsx! {
        section { class: "section",
            details { class: theme::PANEL,
                summary { "What is this calculator?" }
                p {
                    "Use this form to model what it would cost to import large loads during the day, "
                    "when solar is high but electricity is cheap, or shift your load to a more expensive "
                    "period overnight when solar is unavailable."
                }
                p { "This is useful if" }
                ol {
                    li { "You are on Octopus Agile (or another time-of-day tariff)" }
                    li { "You have solar panels and an export tariff" }
                    li { "There is a cheap period during daylight hours" }
                    li { "There is a less cheap period overnight" }
                }
            }
        }

        section { class: "section",
            h2 { "Inputs" }
            div { class: "grid",
                div {
                    label { class: theme::LABEL, "Grid import unit price" }
                    NumberField {
                        prefix: "Day",
                        unit: "p/kWh",
                        placeholder: "Day unit rate",
                        value: inputs.import_price_day,
                        on_change: move |v: f64| update_calculator(state, |c| c.import_price_day = v),
                    }
                    NumberField {
                        prefix: "Night",
                        unit: "p/kWh",
                        placeholder: "Night unit rate",
                        value: inputs.import_price_night,
                        on_change: move |v: f64| update_calculator(state, |c| c.import_price_night = v),
                    }
                }
                div {
                    label { class: theme::LABEL, "Grid export unit price" }
                    NumberField {
                        prefix: "Day",
                        unit: "p/kWh",
                        placeholder: "Day unit rate",
                        value: inputs.export_price_day,
                        on_change: move |v: f64| update_calculator(state, |c| c.export_price_day = v),
                    }
                }
            }

            div { class: "grid",
                div {
                    label { class: theme::LABEL, "Estimated PV power" }
                    NumberField {
                        prefix: "PV",
                        unit: "kW",
                        placeholder: "Estimated PV power",
                        value: inputs.pv_power,
                        non_negative: true,
                        on_change: move |v: f64| update_calculator(state, |c| c.pv_power = v),
                    }
                    small { class: theme::HELP,
                        "This is only ever an estimate, but the calculator will tell you the values "
                        em { "if" }
                        " you generate this much PV."
                    }
                }
                div {
                    label { class: theme::LABEL, "Shiftable import load" }
                    LoadList {
                        items: inputs.shiftable_loads.clone(),
                        on_add: on_add,
                        on_toggle: on_toggle,
                        on_remove: on_remove,
                    }
                    small { class: theme::HELP,
                        "This is the import load which can be shifted from day to night, if it works out "
                        "cheaper. Examples include charging the house battery, EV, hot water, etc."
                    }
                }
                div {
                    label { class: theme::LABEL, "Base load" }
                    NumberField {
                        prefix: "Base",
                        unit: "kW",
                        placeholder: "Base load",
                        value: inputs.base_load,
                        non_negative: true,
                        on_change: move |v: f64| update_calculator(state, |c| c.base_load = v),
                    }
                    small { class: theme::HELP,
                        "This is the base load that your house draws all the time, day and night. "
                        "You can set this to zero if you don't know or it's not relevant."
                    }
                }
            }
        }

        section { class: "section",
            h2 { "Results" }
            div { class: "grid",
                for scenario in [Scenario::DayImport, Scenario::NightImport] {
                    ResultCard {
                        key: "{scenario.title()}",
                        title: "{scenario.title()}",
                        subtitle: scenario.subtitle().to_string(),
                        result: *results.result(scenario),
                    }
                }
            }
            p { class: "recommendation", "{recommendation}" }
        }
    }
}
