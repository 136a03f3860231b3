use dioxus::prelude::*;

/// Full-viewport title block above the about section
#[component]
pub fn Hero(name: String, tagline: String) -> Element {
    rsx! {
        section { class: "main-graphic",
            div { class: "graphic-content",
                h1 { "{name}" }
                p { "{tagline}" }
            }
        }
    }
}
