use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Login() -> Element {
    use_hook(|| debug!("mounted login"));

    rsx! {
        div { class: "container",
            h1 { "Login" }
            Link { to: Route::Register {}, "Registrieren" }
        }
    }
}
