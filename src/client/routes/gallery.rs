use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn Gallery() -> Element {
    rsx!(
        Title { "Gallery | Artbooth" }
        Page { class: "flex flex-col items-center",
            h2 { class: "text-xl", "Gallery" }
            p { class: "opacity-70", "Generated images will show up here." }
        }
    )
}
