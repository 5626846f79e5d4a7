pub mod score;
pub mod stats;
