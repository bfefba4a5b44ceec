// src/scrape/mod.rs
mod pipeline;
pub mod lanes;
pub mod scores;

pub use lanes::{lane_pair, LaneLookup};
pub use pipeline::run_pipeline;
pub use scores::build_score_table;
