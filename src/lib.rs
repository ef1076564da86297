// Shortlife Clock Library
// Exports the calculation, countdown, and preferences engines for reuse

pub mod models;
pub mod services;
pub mod utils;
