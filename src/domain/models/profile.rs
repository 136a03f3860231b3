use serde::{Deserialize, Serialize};

/// Statically hosted file offered for download
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Path relative to the site base path
    pub path: String,
    /// File name suggested to the browser
    pub download_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Kind of social link, which decides its icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::Email => "Email",
        }
    }

    /// External profiles open in a new tab, mail links do not
    pub fn opens_new_tab(&self) -> bool {
        !matches!(self, SocialKind::Email)
    }
}

impl SocialLinks {
    /// (kind, href) for each configured link, in a fixed order
    pub fn entries(&self) -> Vec<(SocialKind, String)> {
        let mut entries = Vec::new();
        if let Some(url) = &self.github {
            entries.push((SocialKind::GitHub, url.clone()));
        }
        if let Some(url) = &self.linkedin {
            entries.push((SocialKind::LinkedIn, url.clone()));
        }
        if let Some(address) = &self.email {
            entries.push((SocialKind::Email, format!("mailto:{}", address)));
        }
        entries
    }
}

/// Biographical content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    /// Inline markdown, one entry per paragraph
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub resume: Option<Document>,
    /// Defaults to the current year
    #[serde(default)]
    pub copyright_year: Option<i32>,
}

impl Profile {
    pub fn copyright_line(&self) -> String {
        use chrono::Datelike;

        let year = self
            .copyright_year
            .unwrap_or_else(|| chrono::Utc::now().year());
        format!("© {} {}. All Rights Reserved.", year, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_entries_in_fixed_order() {
        let social = SocialLinks {
            github: Some("https://github.com/caleb-brost".to_string()),
            linkedin: None,
            email: Some("me@example.com".to_string()),
        };

        let entries = social.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], (SocialKind::GitHub, "https://github.com/caleb-brost".to_string()));
        assert_eq!(entries[1], (SocialKind::Email, "mailto:me@example.com".to_string()));
    }

    #[test]
    fn test_only_mail_stays_in_the_same_tab() {
        assert!(SocialKind::GitHub.opens_new_tab());
        assert!(SocialKind::LinkedIn.opens_new_tab());
        assert!(!SocialKind::Email.opens_new_tab());
        assert_eq!(SocialKind::LinkedIn.label(), "LinkedIn");
    }

    #[test]
    fn test_copyright_line_uses_configured_year() {
        let profile: Profile = serde_json::from_str(
            r#"{"name": "Caleb Brost", "tagline": "Dev", "copyright_year": 2025}"#,
        )
        .unwrap();
        assert_eq!(profile.copyright_line(), "© 2025 Caleb Brost. All Rights Reserved.");
    }

    #[test]
    fn test_copyright_line_defaults_to_current_year() {
        use chrono::Datelike;

        let profile: Profile =
            serde_json::from_str(r#"{"name": "A", "tagline": "B"}"#).unwrap();
        let year = chrono::Utc::now().year();
        assert!(profile.copyright_line().contains(&year.to_string()));
    }
}
