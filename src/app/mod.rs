pub mod components;
pub mod layouts;
pub mod pages;

pub use pages::portfolio::App;
