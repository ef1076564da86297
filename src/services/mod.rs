// Service module exports

pub mod calculator;
pub mod clock;
pub mod countdown;
pub mod database;
pub mod export;
pub mod preferences;
pub mod scheduler;
