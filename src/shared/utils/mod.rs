// Utility functions
// Formatting, frame scheduling, DOM helpers

pub mod frame_slot;
pub mod markdown;

// Browser-only helpers (web-sys)
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use frame_slot::FrameSlot;
pub use markdown::render_markdown;
