use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

const STYLES: [&str; 6] = ["Anime", "Manga", "Real", "Pop art", "Watercolor", "Oil paint"];

#[component]
pub fn Generate() -> Element {
    rsx!(
        Title { "Create | Artbooth" }
        Page { class: "flex flex-col items-center",
            div { class: "card shadow-sm w-full max-w-128",
                div { class: "card-body",
                    h2 { class: "card-title", "Create" }
                    p { "Available styles:" }
                    ul { class: "flex flex-wrap gap-2",
                        for style in STYLES {
                            li { class: "badge badge-outline", "{style}" }
                        }
                    }
                }
            }
        }
    )
}
