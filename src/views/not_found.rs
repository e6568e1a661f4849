use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    use_hook({
        let path = path.clone();
        move || warn!(%path, "no route matches")
    });

    rsx! {
        div { class: "container",
            h1 { "Seite nicht gefunden" }
            p { "{path}" }
            Link { to: Route::Login {}, "Zurück zum Login" }
        }
    }
}
