use dioxus::prelude::*;

/// Anchor styled as a button
#[component]
pub fn LinkButton(
    href: String,
    label: String,
    /// Open in a new tab
    #[props(default = true)]
    external: bool,
) -> Element {
    if external {
        rsx! {
            a {
                class: "btn",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{label}"
            }
        }
    } else {
        rsx! {
            a { class: "btn", href: "{href}", "{label}" }
        }
    }
}
