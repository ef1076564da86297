// Module exports for models

pub mod age;
pub mod calculation;
pub mod expectancy;
pub mod preferences;
