use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Album row including the cached rating aggregate. The aggregate fields
/// (`weighted_rating`, `rating_count`, `verified_rating_count`) are written
/// only by `db::album::patch::refresh_album_rating` inside its locked
/// transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist_id: i64,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub weighted_rating: f64,
    pub rating_count: i64,
    pub verified_rating_count: i64,
}
