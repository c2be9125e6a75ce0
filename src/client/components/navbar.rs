use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleInfo, FaHouse, FaImages, FaWandMagicSparkles,
};
use dioxus_free_icons::Icon;

use crate::client::components::ArtboothTitleButton;
pub use crate::client::router::Route;

#[component]
fn NavLink(to: Route, label: &'static str, children: Element) -> Element {
    rsx!(
        li {
            Link {
                to: to,
                class: "btn btn-ghost flex gap-2",
                active_class: "btn-active",
                {children}
                span { "{label}" }
            }
        }
    )
}

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                ArtboothTitleButton {}
            }
            div {
                class: "navbar-end",
                ul { class: "flex gap-1",
                    NavLink { to: Route::Home {}, label: "Home",
                        Icon { width: 18, height: 18, icon: FaHouse }
                    }
                    NavLink { to: Route::Generate {}, label: "Create",
                        Icon { width: 18, height: 18, icon: FaWandMagicSparkles }
                    }
                    NavLink { to: Route::Gallery {}, label: "Gallery",
                        Icon { width: 18, height: 18, icon: FaImages }
                    }
                    NavLink { to: Route::About {}, label: "About",
                        Icon { width: 18, height: 18, icon: FaCircleInfo }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
