use sqlx::PgPool;

use crate::{
    db::user::get::user_exists,
    errors::AppError,
    models::rating::{AlbumRatingStats, Rating, UserRatingStats},
    ratings::stats,
};

const RATING_COLUMNS: &str = "id, user_id, album_id, score, is_verified_purchase, \
     review_text_length, helpful_votes, unhelpful_votes, created_at, updated_at";

pub async fn get_ratings_by_album(album_id: i64, postgres: PgPool) -> Result<Vec<Rating>, AppError> {
    let ratings = sqlx::query_as::<_, Rating>(&format!(
        "SELECT {RATING_COLUMNS} FROM ratings WHERE album_id = $1 ORDER BY created_at ASC"
    ))
    .bind(album_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch album ratings: {}", e)))?;

    Ok(ratings)
}

pub async fn get_ratings_by_user(user_id: i64, postgres: PgPool) -> Result<Vec<Rating>, AppError> {
    let ratings = sqlx::query_as::<_, Rating>(&format!(
        "SELECT {RATING_COLUMNS} FROM ratings WHERE user_id = $1 ORDER BY created_at ASC"
    ))
    .bind(user_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user ratings: {}", e)))?;

    Ok(ratings)
}

/// Fetches all of an album's ratings and folds them into the aggregate stats.
pub async fn get_album_rating_stats(
    album_id: i64,
    postgres: PgPool,
) -> Result<AlbumRatingStats, AppError> {
    if album_id < 1 {
        return Err(AppError::InvalidArgument("Album ID must be positive".into()));
    }

    let ratings = get_ratings_by_album(album_id, postgres).await?;
    stats::album_stats(album_id, &ratings, chrono::Utc::now())
}

pub async fn get_user_rating_stats(
    user_id: i64,
    postgres: PgPool,
) -> Result<UserRatingStats, AppError> {
    if user_id < 1 {
        return Err(AppError::InvalidArgument("User ID must be positive".into()));
    }

    if !user_exists(user_id, postgres.clone()).await? {
        return Err(AppError::NotFound("User not found".into()));
    }

    let ratings = get_ratings_by_user(user_id, postgres).await?;
    stats::user_stats(user_id, &ratings)
}
