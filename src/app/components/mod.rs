pub mod button;
pub mod common;
pub mod social_links;
pub mod hero;
pub mod about;
pub mod projects;

pub use button::LinkButton;
pub use common::{ContentError, Markdown};
pub use social_links::SocialLinksRow;
pub use hero::Hero;
pub use about::AboutSection;
pub use projects::{ProjectDetails, ProjectSection};
