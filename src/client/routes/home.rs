use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaWandMagicSparkles;
use dioxus_free_icons::Icon;

use crate::client::{components::Page, router::Route};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Artbooth" }
        Meta {
            name: "description",
            content: "Turn a portrait into anime, manga, pop art, watercolor or oil paint."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-256",
                p { class: "text-2xl",
                    "Artbooth"
                }
                p { class: "text-center",
                    "Upload a portrait, pick a style and get a stylized version back."
                }
                Link {
                    to: Route::Generate {},
                    class: "btn btn-primary flex gap-2",
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaWandMagicSparkles
                    }
                    "Start creating"
                }
            }
        }
    )
}
