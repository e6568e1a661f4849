//! Web client for the auth screens.
//!
//! Run with:
//!
//! ```sh
//! dx serve --platform web
//! ```

use dioxus::prelude::*;

mod routes;
pub mod views;

pub use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component: global styles plus the router.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
