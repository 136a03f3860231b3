use dioxus::prelude::*;
use dioxus::document;

use crate::app::components::{AboutSection, ContentError, Hero, ProjectSection};
use crate::app::layouts::{Footer, Navbar};
use crate::config::site_content;
use crate::domain::models::{NavItem, SiteContent};
use crate::shared::errors::AppError;
use crate::shared::hooks::use_scroll_tracker;
use crate::shared::services::{execute, resolve_command};

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Portfolio app initialized");
    });

    // Bundled by build.rs (lightningcss)
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        {page_body(site_content())}
    }
}

/// The portfolio, or the error block when the content failed to load
fn page_body(content: std::result::Result<&SiteContent, &AppError>) -> Element {
    match content {
        Ok(content) => rsx! {
            document::Title { "{content.page_title()}" }
            Portfolio { content: content.clone() }
        },
        Err(e) => rsx! {
            ContentError { message: e.to_string() }
        },
    }
}

/// Navbar plus every content section, wired to the scroll tracker
#[component]
fn Portfolio(content: SiteContent) -> Element {
    let scroll = use_scroll_tracker();
    let state = scroll();

    let picture_url = content
        .profile
        .picture
        .as_deref()
        .map(|path| content.asset_url(path));

    let nav_content = content.clone();
    let on_select = move |item: NavItem| {
        if let Some(command) = resolve_command(&item, &nav_content) {
            execute(&command);
        }
    };

    rsx! {
        div { class: "app",
            Navbar {
                items: content.nav_items.clone(),
                active: state.active_section,
                offset: state.navbar_offset,
                on_select,
            }
            Hero {
                name: content.profile.name.clone(),
                tagline: content.profile.tagline.clone(),
            }
            AboutSection { profile: content.profile.clone(), picture_url }
            ProjectSection { projects: content.projects.clone() }
            Footer { profile: content.profile.clone() }
        }
    }
}
