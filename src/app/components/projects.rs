use dioxus::prelude::*;

use crate::app::components::{LinkButton, Markdown};
use crate::domain::models::{Project, SectionId};

/// One project card; link buttons only for urls that are set
#[component]
pub fn ProjectDetails(project: Project) -> Element {
    let buttons = project.link_buttons();

    rsx! {
        div { class: "project-details",
            h2 { "{project.title}" }
            div { class: "project-tech-stack",
                for (index, tech) in project.tech_stack.iter().enumerate() {
                    span { key: "{index}", "{tech}" }
                }
            }
            Markdown {
                source: project.description.clone(),
                class: "project-description".to_string(),
            }
            if !buttons.is_empty() {
                div { class: "project-links",
                    for (label, url) in buttons.iter() {
                        LinkButton { key: "{label}", href: url.to_string(), label: label.to_string() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectSection(projects: Vec<Project>) -> Element {
    rsx! {
        section { id: SectionId::Projects.element_id(), class: "project-section",
            h2 { "My Projects" }
            for (index, project) in projects.iter().enumerate() {
                div { key: "{index}", class: "projects-container",
                    ProjectDetails { project: project.clone() }
                }
            }
        }
    }
}
