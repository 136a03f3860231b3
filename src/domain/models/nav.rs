use serde::{Deserialize, Serialize};

use super::SectionId;

/// What clicking a nav item does
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavAction {
    /// Smooth-scroll the section into view
    Navigate { section: SectionId },
    /// Download the résumé document from the profile
    Download,
}

/// One entry of the top navigation bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub action: NavAction,
}

impl NavItem {
    pub fn navigate(label: impl Into<String>, section: SectionId) -> Self {
        Self {
            label: label.into(),
            action: NavAction::Navigate { section },
        }
    }

    pub fn download(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: NavAction::Download,
        }
    }

    /// Section this item scrolls to, if any
    pub fn section(&self) -> Option<SectionId> {
        match self.action {
            NavAction::Navigate { section } => Some(section),
            NavAction::Download => None,
        }
    }

    /// Value of the `data-section` attribute
    pub fn data_section(&self) -> &'static str {
        match self.action {
            NavAction::Navigate { section } => section.as_str(),
            NavAction::Download => "resume",
        }
    }

    pub fn is_active(&self, active: SectionId) -> bool {
        self.section() == Some(active)
    }

    /// BEM-ish class list for the rendered button
    pub fn css_class(&self, active: SectionId) -> String {
        let mut class = String::from("nav-icon");
        if self.is_active(active) {
            class.push_str(" active");
        }
        if self.section() == Some(SectionId::Contact) {
            class.push_str(" contact-btn");
        }
        class
    }
}
