// Native-only hosting of the compiled site
pub mod static_server;

pub use static_server::{build_router, normalize_base_path, ServerArgs};
