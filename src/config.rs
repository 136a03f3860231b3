//! Site content configuration
//!
//! Page content lives in `content/portfolio.json` and is embedded at compile
//! time. It is parsed and validated once, on first access.

use once_cell::sync::Lazy;

use crate::domain::models::SiteContent;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_content_error, log_content_loaded};

/// Raw embedded content document
pub const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

static CONTENT: Lazy<Result<SiteContent>> = Lazy::new(|| {
    let parsed = SiteContent::from_json(PORTFOLIO_JSON);
    match &parsed {
        Ok(content) => log_content_loaded(content.projects.len(), content.nav_items.len()),
        Err(e) => log_content_error(&e.to_string()),
    }
    parsed
});

/// Validated site content, or the error that prevented loading it
pub fn site_content() -> std::result::Result<&'static SiteContent, &'static AppError> {
    Lazy::force(&CONTENT).as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{NavAction, SectionId};

    #[test]
    fn test_embedded_content_is_valid() {
        let content = site_content().unwrap();
        assert_eq!(content.profile.name, "Caleb Brost");
        assert_eq!(content.projects.len(), 3);
    }

    #[test]
    fn test_embedded_nav_covers_every_section() {
        let content = site_content().unwrap();
        for section in SectionId::ALL {
            assert!(content.nav_items.iter().any(|i| i.section() == Some(section)));
        }
        assert!(content
            .nav_items
            .iter()
            .any(|i| i.action == NavAction::Download));
    }
}
