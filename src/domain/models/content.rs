use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{NavAction, NavItem, Profile, Project, SectionId};
use crate::shared::constants::DEFAULT_BASE_PATH;
use crate::shared::errors::{AppError, Result};

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

/// Deployment settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            title: None,
        }
    }
}

/// Content document as written; `nav_items` may be left out
#[derive(Deserialize)]
struct RawSiteContent {
    #[serde(default)]
    site: SiteConfig,
    profile: Profile,
    #[serde(default)]
    nav_items: Option<Vec<NavItem>>,
    #[serde(default)]
    projects: Vec<Project>,
}

impl From<RawSiteContent> for SiteContent {
    fn from(raw: RawSiteContent) -> Self {
        let nav_items = raw
            .nav_items
            .unwrap_or_else(|| SiteContent::default_nav_items(&raw.profile));
        Self {
            site: raw.site,
            profile: raw.profile,
            nav_items,
            projects: raw.projects,
        }
    }
}

/// Everything the page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSiteContent")]
pub struct SiteContent {
    pub site: SiteConfig,
    pub profile: Profile,
    pub nav_items: Vec<NavItem>,
    pub projects: Vec<Project>,
}

impl SiteContent {
    /// One item per section in document order, plus a résumé download when
    /// the profile offers one
    pub fn default_nav_items(profile: &Profile) -> Vec<NavItem> {
        let mut items: Vec<NavItem> = SectionId::ALL
            .iter()
            .map(|&section| NavItem::navigate(section.label(), section))
            .collect();
        if profile.resume.is_some() {
            items.push(NavItem::download("Download Resume"));
        }
        items
    }

    /// Parse and validate a JSON content document
    pub fn from_json(json: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.site.base_path.starts_with('/') {
            return Err(AppError::InvalidContent(format!(
                "base_path must start with '/', got '{}'",
                self.site.base_path
            )));
        }

        if self.nav_items.is_empty() {
            return Err(AppError::InvalidContent("no nav items".to_string()));
        }

        let mut targets = HashSet::new();
        for item in &self.nav_items {
            match item.action {
                NavAction::Navigate { section } => {
                    if !targets.insert(section) {
                        return Err(AppError::InvalidContent(format!(
                            "section '{}' is targeted by more than one nav item",
                            section
                        )));
                    }
                }
                NavAction::Download => {
                    if self.profile.resume.is_none() {
                        return Err(AppError::InvalidContent(format!(
                            "nav item '{}' downloads a résumé but the profile has none",
                            item.label
                        )));
                    }
                }
            }
        }

        if let Some(index) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(AppError::InvalidContent(format!(
                "project #{} has an empty title",
                index
            )));
        }

        Ok(())
    }

    /// Resolve a site-relative asset path against the base path.
    /// Absolute URLs pass through untouched.
    pub fn asset_url(&self, path: &str) -> String {
        if path.contains("://") || path.starts_with("mailto:") {
            return path.to_string();
        }
        let base = self.site.base_path.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    pub fn page_title(&self) -> String {
        self.site
            .title
            .clone()
            .unwrap_or_else(|| format!("{} | Portfolio", self.profile.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "profile": {
            "name": "Caleb Brost",
            "tagline": "Software Developer",
            "resume": {"path": "documents/resume.pdf", "download_name": "Resume.pdf"}
        },
        "nav_items": [
            {"label": "About", "action": {"kind": "navigate", "section": "about"}},
            {"label": "Download Resume", "action": {"kind": "download"}}
        ]
    }"#;

    #[test]
    fn test_from_json_applies_defaults() {
        let content = SiteContent::from_json(MINIMAL).unwrap();
        assert_eq!(content.site.base_path, "/react-portfolio");
        assert!(content.projects.is_empty());
        assert_eq!(content.nav_items[0].section(), Some(SectionId::About));
        assert_eq!(content.page_title(), "Caleb Brost | Portfolio");
    }

    #[test]
    fn test_asset_url_joins_base_path() {
        let content = SiteContent::from_json(MINIMAL).unwrap();
        assert_eq!(
            content.asset_url("documents/resume.pdf"),
            "/react-portfolio/documents/resume.pdf"
        );
        assert_eq!(
            content.asset_url("/profile_picture.png"),
            "/react-portfolio/profile_picture.png"
        );
        assert_eq!(content.asset_url("https://cdn.dev/a.png"), "https://cdn.dev/a.png");
    }

    #[test]
    fn test_asset_url_with_root_base_path() {
        let mut content = SiteContent::from_json(MINIMAL).unwrap();
        content.site.base_path = "/".to_string();
        assert_eq!(content.asset_url("profile.png"), "/profile.png");
    }

    #[test]
    fn test_rejects_duplicate_nav_targets() {
        let mut content = SiteContent::from_json(MINIMAL).unwrap();
        content
            .nav_items
            .push(NavItem::navigate("Again", SectionId::About));
        assert!(matches!(content.validate(), Err(AppError::InvalidContent(_))));
    }

    #[test]
    fn test_rejects_download_without_resume() {
        let mut content = SiteContent::from_json(MINIMAL).unwrap();
        content.profile.resume = None;
        assert!(matches!(content.validate(), Err(AppError::InvalidContent(_))));
    }

    #[test]
    fn test_rejects_relative_base_path() {
        let mut content = SiteContent::from_json(MINIMAL).unwrap();
        content.site.base_path = "react-portfolio".to_string();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_missing_nav_items_default_to_every_section() {
        let content = SiteContent::from_json(
            r#"{
                "profile": {
                    "name": "Caleb Brost",
                    "tagline": "Software Developer",
                    "resume": {"path": "documents/resume.pdf", "download_name": "Resume.pdf"}
                }
            }"#,
        )
        .unwrap();

        let labels: Vec<&str> = content.nav_items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["About", "Projects", "Contact", "Download Resume"]);
        assert_eq!(content.nav_items[1].section(), Some(SectionId::Projects));
        assert_eq!(content.nav_items[3].action, NavAction::Download);
    }

    #[test]
    fn test_default_nav_items_skip_download_without_resume() {
        let content = SiteContent::from_json(
            r#"{"profile": {"name": "Caleb Brost", "tagline": "Software Developer"}}"#,
        )
        .unwrap();

        assert_eq!(content.nav_items.len(), SectionId::ALL.len());
        assert!(content.nav_items.iter().all(|i| i.section().is_some()));
    }

    #[test]
    fn test_rejects_explicitly_empty_nav() {
        let json = r#"{"profile": {"name": "A", "tagline": "B"}, "nav_items": []}"#;
        assert!(matches!(
            SiteContent::from_json(json),
            Err(AppError::InvalidContent(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            SiteContent::from_json("{\"profile\": 3}"),
            Err(AppError::ContentParse(_))
        ));
    }
}
