use dioxus::prelude::*;

use crate::domain::{format_number, parse_number, parse_power, InputError};
use crate::ui::theme;

/// Numeric input with a prefix and unit addon. Only text that parses is
/// forwarded to `on_change`; anything else marks the field invalid and keeps
/// the previous value.
#[component]
pub fn NumberField(
    prefix: String,
    unit: String,
    placeholder: String,
    value: f64,
    #[props(default)] non_negative: bool,
    on_change: EventHandler<f64>,
) -> Element {
    let mut text = use_signal(|| format_number(value));
    let mut error = use_signal(|| None::<InputError>);

    let on_input = move |evt: FormEvent| {
        let raw = evt.value();
        let parsed = if non_negative {
            parse_power(&raw)
        } else {
            parse_number(&raw)
        };
        text.set(raw);
        match parsed {
            Ok(number) => {
                error.set(None);
                on_change.call(number);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    let valid = error.read().is_none();

    rsx! {
        div { class: "input-group",
            span { class: "input-addon", "{prefix}" }
            input {
                class: theme::input(valid),
                r#type: "number",
                step: "0.1",
                placeholder: "{placeholder}",
                value: "{text}",
                oninput: on_input,
            }
            span { class: "input-addon", "{unit}" }
        }
        if let Some(err) = error() {
            span { class: "help error", "{err}" }
        }
    }
}
