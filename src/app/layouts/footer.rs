use dioxus::prelude::*;

use crate::app::components::SocialLinksRow;
use crate::domain::models::{Profile, SectionId};

#[component]
pub fn Footer(profile: Profile) -> Element {
    rsx! {
        footer { id: SectionId::Contact.element_id(), class: "footer",
            div { class: "footer-content",
                div { class: "footer-contact",
                    h3 { "Contact" }
                    SocialLinksRow { links: profile.social.clone() }
                }
                p { "{profile.copyright_line()}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(non_snake_case)]
    fn Harness() -> Element {
        let profile: Profile = serde_json::from_str(
            r#"{"name": "Caleb Brost", "tagline": "Dev", "copyright_year": 2025,
                "social": {"linkedin": "https://www.linkedin.com/in/caleb"}}"#,
        )
        .unwrap();
        rsx! { Footer { profile } }
    }

    #[test]
    fn test_footer_is_contact_anchor() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("id=\"section-contact\""));
        assert!(html.contains("2025 Caleb Brost. All Rights Reserved."));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("aria-label=\"LinkedIn\""));
        assert!(html.contains("<svg"));
    }
}
