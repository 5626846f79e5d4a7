use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::rating::Rating,
    ratings::score::{MAX_SCORE, MIN_SCORE},
};

/// Updates the owner's score and review length. The verified-purchase flag is
/// fixed at creation and deliberately left untouched here.
pub async fn update_rating(
    rating_id: i64,
    requester_id: i64,
    score: i16,
    review_text: Option<&str>,
    postgres: PgPool,
) -> Result<Rating, AppError> {
    if rating_id < 1 || requester_id < 1 {
        return Err(AppError::InvalidArgument(
            "Rating ID and user ID must be positive".into(),
        ));
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(AppError::InvalidArgument(format!(
            "Rating must be between {} and {}",
            MIN_SCORE, MAX_SCORE
        )));
    }

    let owner_id = sqlx::query_scalar::<_, i64>("SELECT user_id FROM ratings WHERE id = $1")
        .bind(rating_id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rating: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Rating not found".into()))?;

    if owner_id != requester_id {
        return Err(AppError::Forbidden("Not your rating".into()));
    }

    let review_text_length = review_text.map(|t| t.chars().count() as i32).unwrap_or(0);

    let rating = sqlx::query_as::<_, Rating>(
        "UPDATE ratings SET score = $1, review_text_length = $2, updated_at = NOW()
        WHERE id = $3
        RETURNING id, user_id, album_id, score, is_verified_purchase, review_text_length,
            helpful_votes, unhelpful_votes, created_at, updated_at",
    )
    .bind(score)
    .bind(review_text_length)
    .bind(rating_id)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update rating: {}", e)))?;

    Ok(rating)
}
