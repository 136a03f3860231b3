// Single-page portfolio, no routing
pub mod portfolio;
