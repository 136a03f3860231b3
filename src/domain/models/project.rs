use serde::{Deserialize, Serialize};

/// Outbound links of a project card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Project shown in the showcase section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Inline markdown
    pub description: String,
    #[serde(default)]
    pub links: ProjectLinks,
}

impl Project {
    /// (label, url) pairs for the link buttons, skipping absent or blank urls
    pub fn link_buttons(&self) -> Vec<(&'static str, &str)> {
        [
            ("View Project", self.links.live.as_deref()),
            ("GitHub", self.links.source.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| match url {
            Some(url) if !url.trim().is_empty() => Some((label, url)),
            _ => None,
        })
        .collect()
    }
}
