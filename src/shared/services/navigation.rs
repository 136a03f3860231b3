//! Nav item click handling

use crate::domain::models::{NavAction, NavItem, SiteContent};

/// What a click on a nav item resolves to, before touching the DOM
#[derive(Debug, Clone, PartialEq)]
pub enum NavCommand {
    ScrollTo(crate::domain::models::SectionId),
    Download { href: String, file_name: String },
}

/// Resolve a nav item against the site content.
/// `None` for a download item when the profile has no résumé.
pub fn resolve_command(item: &NavItem, content: &SiteContent) -> Option<NavCommand> {
    match &item.action {
        NavAction::Navigate { section } => Some(NavCommand::ScrollTo(*section)),
        NavAction::Download => content.profile.resume.as_ref().map(|doc| NavCommand::Download {
            href: content.asset_url(&doc.path),
            file_name: doc.download_name.clone(),
        }),
    }
}

/// Run a nav command in the browser. DOM failures are logged, never raised.
#[cfg(target_arch = "wasm32")]
pub fn execute(command: &NavCommand) {
    use crate::shared::logging::{log_dom_error, LogOperation};
    use crate::shared::utils::dom::{download_document, scroll_section_into_view};

    let (operation, result) = match command {
        NavCommand::ScrollTo(section) => {
            (LogOperation::Navigation, scroll_section_into_view(*section).map(|_| ()))
        }
        NavCommand::Download { href, file_name } => {
            (LogOperation::Download, download_document(href, file_name))
        }
    };

    if let Err(e) = result {
        log_dom_error(operation, &e.to_string());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn execute(command: &NavCommand) {
    // No DOM outside the browser
    tracing::debug!(?command, "Ignoring nav command outside the browser");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SectionId;

    fn content() -> SiteContent {
        SiteContent::from_json(
            r#"{
                "profile": {
                    "name": "Caleb Brost",
                    "tagline": "Dev",
                    "resume": {"path": "documents/resume.pdf", "download_name": "Caleb_Brost_Resume.pdf"}
                },
                "nav_items": [
                    {"label": "Projects", "action": {"kind": "navigate", "section": "projects"}},
                    {"label": "Download Resume", "action": {"kind": "download"}}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_navigate_item_scrolls_to_section() {
        let content = content();
        assert_eq!(
            resolve_command(&content.nav_items[0], &content),
            Some(NavCommand::ScrollTo(SectionId::Projects))
        );
    }

    #[test]
    fn test_download_item_resolves_against_base_path() {
        let content = content();
        assert_eq!(
            resolve_command(&content.nav_items[1], &content),
            Some(NavCommand::Download {
                href: "/react-portfolio/documents/resume.pdf".to_string(),
                file_name: "Caleb_Brost_Resume.pdf".to_string(),
            })
        );
    }

    #[test]
    fn test_download_without_resume_is_none() {
        let mut content = content();
        content.profile.resume = None;
        assert_eq!(resolve_command(&NavItem::download("Resume"), &content), None);
    }
}
