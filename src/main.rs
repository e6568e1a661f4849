use dioxus::logger::tracing::{info, Level};

fn main() {
    // only fails when a subscriber is already installed, which still gets our events
    _ = dioxus::logger::init(Level::INFO);
    info!("starting auth frontend");

    dioxus::launch(frontend::App);
}
