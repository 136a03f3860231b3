use serde::{Deserialize, Serialize};
use std::fmt;

/// Page sections that can be navigated to and highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections, in document order
    pub const ALL: [SectionId; 3] = [SectionId::About, SectionId::Projects, SectionId::Contact];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Default nav item label
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// DOM id of the element that anchors this section
    pub fn element_id(&self) -> &'static str {
        match self {
            SectionId::About => "section-about",
            SectionId::Projects => "section-projects",
            SectionId::Contact => "section-contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical span of a section's bounding rect, relative to the viewport top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub bottom: f64,
}

impl SectionSpan {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Inclusive on both edges
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}
