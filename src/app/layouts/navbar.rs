use dioxus::prelude::*;

use crate::domain::models::{NavItem, SectionId};
use crate::shared::constants::NAVBAR_TRANSITION;

/// Auto-hiding top navigation bar.
///
/// `offset` is the translateY percentage from the scroll tracker; the item
/// targeting `active` is highlighted.
#[component]
pub fn Navbar(
    items: Vec<NavItem>,
    active: SectionId,
    offset: f64,
    on_select: EventHandler<NavItem>,
) -> Element {
    rsx! {
        nav {
            class: "navbar",
            style: "transform: translateY({offset}%); transition: {NAVBAR_TRANSITION};",
            div { class: "nav-icons",
                for (index, item) in items.iter().enumerate() {
                    button {
                        key: "{index}",
                        r#type: "button",
                        class: "{item.css_class(active)}",
                        "data-section": item.data_section(),
                        onclick: {
                            let item = item.clone();
                            move |_| on_select.call(item.clone())
                        },
                        "{item.label}"
                    }
                }
            }
        }
    }
}
