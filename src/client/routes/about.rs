use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn About() -> Element {
    rsx!(
        Title { "About | Artbooth" }
        Page { class: "flex flex-col items-center gap-4",
            div { class: "flex flex-col gap-2 px-4 max-w-256",
                h2 { class: "text-xl", "About" }
                p {
                    "Artbooth restyles portraits with an image-to-image diffusion model. "
                    "Pick a preset style or describe your own."
                }
                ApiStatus {}
            }
        }
    )
}

#[cfg(feature = "web")]
#[component]
fn ApiStatus() -> Element {
    use dioxus_logger::tracing;

    use crate::client::util::get_api_status;

    let status = use_resource(|| async move { get_api_status().await });

    match &*status.read_unchecked() {
        Some(Ok(health)) => rsx!(
            div { class: "badge badge-success", "API online (v{health.version})" }
        ),
        Some(Err(err)) => {
            tracing::warn!("API health check failed: {}", err);

            rsx!(div { class: "badge badge-error", "API unreachable" })
        }
        None => rsx!(div { class: "skeleton h-6 w-32" }),
    }
}

#[cfg(not(feature = "web"))]
#[component]
fn ApiStatus() -> Element {
    rsx!(div { class: "badge badge-ghost", "API status unavailable" })
}
