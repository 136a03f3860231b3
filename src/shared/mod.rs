pub mod errors;
pub mod constants;
pub mod logging;
pub mod services;
pub mod utils;
pub mod hooks;
