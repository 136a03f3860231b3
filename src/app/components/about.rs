use dioxus::prelude::*;

use crate::app::components::{Markdown, SocialLinksRow};
use crate::domain::models::{Profile, SectionId};

/// Bio, social links, profile picture and skills grid
#[component]
pub fn AboutSection(
    profile: Profile,
    /// Profile picture url, already resolved against the base path
    #[props(!optional)]
    picture_url: Option<String>,
) -> Element {
    rsx! {
        section { id: SectionId::About.element_id(), class: "intro-section",
            div { class: "intro-content",
                div { class: "about-me-container",
                    div { class: "about-me-text",
                        h2 { "About Me" }
                        for (index, paragraph) in profile.about.iter().enumerate() {
                            Markdown {
                                key: "{index}",
                                source: paragraph.clone(),
                                class: "about-paragraph".to_string(),
                            }
                        }
                        SocialLinksRow { links: profile.social.clone() }
                    }
                    if let Some(url) = picture_url {
                        div { class: "about-me-image",
                            img {
                                src: "{url}",
                                alt: "{profile.name}",
                                class: "profile-picture",
                            }
                        }
                    }
                }
                if !profile.skills.is_empty() {
                    div { class: "skills-container",
                        h3 { "Skills" }
                        div { class: "skills-grid",
                            for (index, skill) in profile.skills.iter().enumerate() {
                                span { key: "{index}", "{skill}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
