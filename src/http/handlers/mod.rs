pub mod album;
pub mod rating;
pub mod stats;

pub use album::get_album_handler;
pub use rating::{create_rating_handler, update_rating_handler, vote_on_rating_handler};
pub use stats::{album_stats_handler, user_stats_handler};
