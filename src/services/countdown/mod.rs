mod engine;
mod models;

pub use engine::CountdownEngine;
pub use models::{CountdownPhase, CountdownRender, TimeBreakdown, SECONDS_PER_DAY};
