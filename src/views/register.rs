use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::Route;

/// Placeholder shown until registration is built.
///
/// Has a single visual state; the only interaction is the link back to the login page.
#[component]
pub fn Register() -> Element {
    use_hook(|| debug!("mounted registration placeholder"));

    rsx! {
        div { class: "container",
            h1 { "Registrierung" }
            p { "Diese Komponente wird gerade entwickelt." }
            Link { to: Route::Login {}, "Zurück zum Login" }
        }
    }
}
