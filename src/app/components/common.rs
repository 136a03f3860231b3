use dioxus::prelude::*;

use crate::shared::utils::render_markdown;

/// Markdown paragraph rendered to HTML
#[component]
pub fn Markdown(source: String, #[props(default)] class: String) -> Element {
    let html = render_markdown(&source);
    rsx! {
        div { class: "c-prose {class}", dangerous_inner_html: "{html}" }
    }
}

/// Shown instead of the page when the content document is broken
#[component]
pub fn ContentError(message: String) -> Element {
    rsx! {
        div { class: "c-error",
            h2 { class: "c-error__title", "Portfolio content could not be loaded" }
            p { class: "c-error__text", "{message}" }
        }
    }
}
