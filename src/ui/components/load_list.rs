use dioxus::prelude::*;

use crate::domain::{LoadItem, NewLoadDraft};
use crate::ui::components::result_card::format_power;
use crate::ui::theme;

/// Shiftable load rows with enable/remove controls plus the "add" row.
#[component]
pub fn LoadList(
    items: Vec<LoadItem>,
    on_add: EventHandler<LoadItem>,
    on_toggle: EventHandler<usize>,
    on_remove: EventHandler<usize>,
) -> Element {
    let mut draft = use_signal(NewLoadDraft::default);
    let mut draft_error = use_signal(|| None::<String>);

    let on_submit = move |_: MouseEvent| {
        let built = draft.read().to_item();
        match built {
            Ok(item) => {
                on_add.call(item);
                draft.set(NewLoadDraft::default());
                draft_error.set(None);
            }
            Err(err) => draft_error.set(Some(err.to_string())),
        }
    };

    let label_text = draft.read().label.clone();
    let power_text = draft.read().power_text.clone();

    rsx! {
        for (idx, item) in items.into_iter().enumerate() {
            div { key: "load-item-{idx}", class: "input-group",
                input { class: "input", r#type: "text", readonly: true, placeholder: "Name", value: "{item.label}" }
                input { class: "input", r#type: "text", readonly: true, value: "{format_power(item.power)}" }
                span { class: "input-addon",
                    input {
                        r#type: "checkbox",
                        title: "Include this load",
                        checked: item.enabled,
                        onchange: move |_| on_toggle.call(idx),
                    }
                }
                button { class: theme::BTN, title: "Remove", onclick: move |_| on_remove.call(idx), "X" }
            }
        }

        label { class: theme::LABEL, "Add new item" }
        div { class: "input-group",
            span { class: "input-addon", "Name" }
            input {
                class: "input",
                r#type: "text",
                placeholder: "Name",
                value: "{label_text}",
                oninput: move |evt: FormEvent| draft.with_mut(|d| d.label = evt.value()),
            }
            span { class: "input-addon", "Power" }
            input {
                class: theme::input(draft_error.read().is_none()),
                r#type: "number",
                step: "0.1",
                placeholder: "Power",
                value: "{power_text}",
                oninput: move |evt: FormEvent| draft.with_mut(|d| d.power_text = evt.value()),
            }
            span { class: "input-addon", "kW" }
            button { class: theme::BTN_PRIMARY, onclick: on_submit, "Add" }
        }
        if let Some(message) = draft_error() {
            span { class: "help error", "{message}" }
        }
    }
}
