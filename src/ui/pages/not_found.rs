use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFoundPage(path: String) -> Element {
    rsx! {
        p { "Nothing lives at " code { "{path}" } "." }
        Link { class: "nav-link", to: Route::Home {}, "Back to the home page" }
    }
}
