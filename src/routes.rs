use dioxus::prelude::*;

use crate::views::{Login, NotFound, Register};

/// Every path the client can navigate to.
///
/// `/` has no screen of its own and forwards to the login page.
#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
