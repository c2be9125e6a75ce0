use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Title { "Not found | Artbooth" }
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl", "Page not found" }
            p { class: "font-mono", "{path}" }
            Link { to: Route::Home {}, class: "btn btn-outline", "Back to home" }
        }
    )
}
