// Scroll-driven navigation state
pub mod navbar_controller;
pub mod scroll_tracker;

pub use navbar_controller::{clamp_offset, next_offset};
pub use scroll_tracker::resolve_active_section;
