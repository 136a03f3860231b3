use dioxus::prelude::*;

use crate::domain::models::{SocialKind, SocialLinks};

const GITHUB_PATH: &str = "M12 .5C5.65.5.5 5.65.5 12c0 5.08 3.29 9.39 7.86 10.91.58.1.79-.25.79-.56v-1.97c-3.2.7-3.87-1.54-3.87-1.54-.52-1.33-1.28-1.69-1.28-1.69-1.04-.71.08-.7.08-.7 1.15.08 1.76 1.18 1.76 1.18 1.03 1.76 2.69 1.25 3.35.96.1-.74.4-1.25.73-1.54-2.55-.29-5.24-1.28-5.24-5.68 0-1.26.45-2.28 1.18-3.09-.12-.29-.51-1.46.11-3.04 0 0 .97-.31 3.17 1.18a11 11 0 0 1 5.77 0c2.2-1.49 3.17-1.18 3.17-1.18.63 1.58.23 2.75.11 3.04.74.81 1.18 1.83 1.18 3.09 0 4.41-2.69 5.38-5.25 5.67.41.36.78 1.06.78 2.14v3.17c0 .31.21.67.8.56A11.5 11.5 0 0 0 23.5 12C23.5 5.65 18.35.5 12 .5z";

const LINKEDIN_PATH: &str = "M20.45 20.45h-3.56v-5.57c0-1.33-.02-3.04-1.85-3.04-1.85 0-2.14 1.45-2.14 2.94v5.67H9.35V9h3.41v1.56h.05c.48-.9 1.64-1.85 3.37-1.85 3.6 0 4.27 2.37 4.27 5.46v6.28zM5.34 7.43a2.06 2.06 0 1 1 0-4.13 2.06 2.06 0 0 1 0 4.13zM7.12 20.45H3.56V9h3.56v11.45zM22.22 0H1.77C.79 0 0 .77 0 1.73v20.54C0 23.23.79 24 1.77 24h20.45c.98 0 1.78-.77 1.78-1.73V1.73C24 .77 23.2 0 22.22 0z";

/// Outline envelope
const EMAIL_PATH: &str = "M3 5h18a1 1 0 0 1 1 1v12a1 1 0 0 1-1 1H3a1 1 0 0 1-1-1V6a1 1 0 0 1 1-1zm0 1.5v.3l9 6.2 9-6.2v-.3zm18 2.1-8.43 5.8a1 1 0 0 1-1.14 0L3 8.6v8.9h18z";

fn icon_path(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::GitHub => GITHUB_PATH,
        SocialKind::LinkedIn => LINKEDIN_PATH,
        SocialKind::Email => EMAIL_PATH,
    }
}

fn icon(kind: SocialKind) -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            fill: "currentColor",
            "aria-hidden": "true",
            path { d: icon_path(kind) }
        }
    }
}

/// Icon-only links; the label is exposed through `aria-label`
#[component]
pub fn SocialLinksRow(links: SocialLinks) -> Element {
    rsx! {
        div { class: "social-icons",
            for (kind, href) in links.entries() {
                if kind.opens_new_tab() {
                    a {
                        key: "{kind.label()}",
                        class: "social-icon",
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: kind.label(),
                        title: kind.label(),
                        {icon(kind)}
                    }
                } else {
                    a {
                        key: "{kind.label()}",
                        class: "social-icon",
                        href: "{href}",
                        aria_label: kind.label(),
                        title: kind.label(),
                        {icon(kind)}
                    }
                }
            }
        }
    }
}
