// Public API exports (shared between browser and native builds)
pub mod domain;
pub mod shared;
pub mod config;

pub mod app;

// Native-only modules (NOT compiled for WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod infrastructure;

pub use app::App;
