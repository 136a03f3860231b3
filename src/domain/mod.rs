// Domain models and pure scroll/navigation logic
// No DOM access here, everything is testable natively

pub mod models;
pub mod services;
