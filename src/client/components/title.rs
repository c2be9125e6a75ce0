use dioxus::prelude::*;

use crate::client::router::Route;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn ArtboothTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                p { class: "text-xl",
                    "Artbooth"
                }
                p { class: "text-xs",
                    "v{VERSION}"
                }
            }
        }
    )
}
