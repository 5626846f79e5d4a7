use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One user's evaluation of one album. Unique per (user, album);
/// `is_verified_purchase` is set at creation and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: i64,
    pub user_id: i64,
    pub album_id: i64,
    pub score: i16,
    pub is_verified_purchase: bool,
    pub review_text_length: i32,
    pub helpful_votes: i32,
    pub unhelpful_votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One user's helpfulness judgment on one rating. Unique per (rating, user);
/// re-voting is rejected rather than overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RatingVote {
    pub id: i64,
    pub rating_id: i64,
    pub user_id: i64,
    pub is_helpful: bool,
    pub created_at: DateTime<Utc>,
}

pub type ScoreDistribution = BTreeMap<i16, i64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRatingStats {
    pub album_id: i64,
    pub weighted_rating: f64,
    pub rating_count: i64,
    pub verified_rating_count: i64,
    pub rating_distribution: ScoreDistribution,
    pub verified_rating_distribution: ScoreDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRatingStats {
    pub user_id: i64,
    pub total_ratings: i64,
    pub average_rating: f64,
    pub rating_distribution: ScoreDistribution,
    pub helpful_votes_received: i64,
    pub total_review_length: i64,
}
