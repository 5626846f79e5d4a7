pub mod album;
pub mod rating;
