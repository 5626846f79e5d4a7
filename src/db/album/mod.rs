pub mod get;
pub mod patch;
