use std::borrow::Cow;

use dioxus::prelude::*;
use dioxus::router::exports::percent_encoding::percent_decode_str;

use crate::client::{
    components::Navbar,
    routes::{About, Gallery, Generate, Home, NotFound},
};

/// Identifies the page view a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Generate,
    Gallery,
    About,
}

/// A path paired with the view rendered for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub view: View,
}

/// Every page the application serves, in declaration order.
///
/// Paths are literal and matched by exact equality against the path of the browser
/// location (see [`resolve`]). The [`Route`] enum below is the router-facing form of this
/// table and must stay in sync with it.
pub const ROUTE_TABLE: [RouteRecord; 4] = [
    RouteRecord {
        path: "/",
        view: View::Home,
    },
    RouteRecord {
        path: "/create",
        view: View::Generate,
    },
    RouteRecord {
        path: "/gallery",
        view: View::Gallery,
    },
    RouteRecord {
        path: "/about",
        view: View::About,
    },
];

/// Returns the view declared for `location`, or `None` when no record matches.
///
/// `location` is compared by exact equality after reducing it to its path the same way
/// [`Route`] parsing does: the fragment and query are dropped, a single trailing `/` is
/// ignored and percent-escapes are decoded. Locations that do not start with `/` never
/// match.
pub fn resolve(location: &str) -> Option<View> {
    let path = location_path(location)?;

    ROUTE_TABLE
        .iter()
        .find(|record| trim_trailing_slash(record.path) == path)
        .map(|record| record.view)
}

fn location_path(location: &str) -> Option<Cow<'_, str>> {
    if !location.starts_with('/') {
        return None;
    }

    let (path, _fragment) = location.split_once('#').unwrap_or((location, ""));
    let (path, _query) = path.split_once('?').unwrap_or((path, ""));
    let path = trim_trailing_slash(path);

    Some(
        percent_decode_str(path)
            .decode_utf8()
            .unwrap_or(Cow::Borrowed(path)),
    )
}

fn trim_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/create")]
    Generate {},

    #[route("/gallery")]
    Gallery {},

    #[route("/about")]
    About {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The table view this route renders, `None` for the fallback.
    pub fn view(&self) -> Option<View> {
        match self {
            Route::Home {} => Some(View::Home),
            Route::Generate {} => Some(View::Generate),
            Route::Gallery {} => Some(View::Gallery),
            Route::About {} => Some(View::About),
            Route::NotFound { .. } => None,
        }
    }
}
