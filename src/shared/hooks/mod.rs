// Custom Dioxus hooks
pub mod use_scroll_tracker;

pub use use_scroll_tracker::use_scroll_tracker;
