// Side-effecting actions triggered from the UI
pub mod navigation;

pub use navigation::{execute, resolve_command, NavCommand};
