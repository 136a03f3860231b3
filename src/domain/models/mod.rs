// Portfolio models
// Pure Rust, no framework dependencies

pub mod section;
pub mod nav;
pub mod project;
pub mod profile;
pub mod content;
pub mod scroll;

pub use section::{SectionId, SectionSpan};
pub use nav::{NavAction, NavItem};
pub use project::{Project, ProjectLinks};
pub use profile::{Document, Profile, SocialKind, SocialLinks};
pub use content::{SiteConfig, SiteContent};
pub use scroll::{ScrollSample, ScrollState};
