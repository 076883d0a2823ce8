use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "centered-page",
            div { class: "not-found",
                h2 { class: "not-found-title", "Page not found" }
                p { class: "not-found-path", "Nothing lives at /{path}" }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to Home" }
            }
        }
    }
}
