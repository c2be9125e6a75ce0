use dioxus::prelude::*;

use crate::client::router::Route;

/// Root view; installs the history-backed router.
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
