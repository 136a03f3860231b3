//! Portfolio - browser entry point
//!
//! Built and served with `dx serve --platform web`; the static output can be
//! hosted by the `portfolio-server` binary.

#[cfg(target_arch = "wasm32")]
use portfolio_site::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        web_sys::console::error_1(&format!("[WASM] logger init failed: {}", e).into());
    }
    dioxus::launch(App);
}

// Native builds have no renderer; point at the browser build instead
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("portfolio-site is a browser app: run `dx serve --platform web`, or build it and host the output with `portfolio-server`.");
}
