use sqlx::PgPool;

use crate::{
    db::{album::get::album_exists, conflict_on_unique, order::get::has_purchased_album},
    errors::AppError,
    models::rating::{Rating, RatingVote},
    ratings::score::{MAX_SCORE, MIN_SCORE},
};

pub async fn create_rating(
    user_id: i64,
    album_id: i64,
    score: i16,
    review_text: Option<&str>,
    postgres: PgPool,
) -> Result<Rating, AppError> {
    if user_id < 1 || album_id < 1 {
        return Err(AppError::InvalidArgument(
            "User ID and album ID must be positive".into(),
        ));
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(AppError::InvalidArgument(format!(
            "Rating must be between {} and {}",
            MIN_SCORE, MAX_SCORE
        )));
    }

    if !album_exists(album_id, postgres.clone()).await? {
        return Err(AppError::NotFound("Album not found".into()));
    }

    // Friendly pre-check; the unique constraint still decides races.
    let existing = sqlx::query_scalar::<_, i64>(
        "SELECT id FROM ratings WHERE user_id = $1 AND album_id = $2",
    )
    .bind(user_id)
    .bind(album_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to query rating: {}", e)))?;

    if existing.is_some() {
        return Err(AppError::Conflict("You have already rated this album".into()));
    }

    let is_verified = has_purchased_album(user_id, album_id, postgres.clone()).await?;
    let review_text_length = review_text.map(|t| t.chars().count() as i32).unwrap_or(0);

    let rating = sqlx::query_as::<_, Rating>(
        "INSERT INTO ratings (user_id, album_id, score, is_verified_purchase, review_text_length)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, album_id, score, is_verified_purchase, review_text_length,
            helpful_votes, unhelpful_votes, created_at, updated_at",
    )
    .bind(user_id)
    .bind(album_id)
    .bind(score)
    .bind(is_verified)
    .bind(review_text_length)
    .fetch_one(&postgres)
    .await
    .map_err(|e| conflict_on_unique(e, "You have already rated this album"))?;

    tracing::info!(
        "Rating created: user {} scored album {} at {}",
        user_id,
        album_id,
        score
    );

    Ok(rating)
}

/// Records a helpfulness vote and bumps the matching counter in one
/// transaction. The rating row is locked first so the counter increment and
/// the vote insert land together. Returns the vote plus the rated album's id
/// so the caller can refresh that album's aggregate.
pub async fn vote_on_rating(
    rating_id: i64,
    voter_id: i64,
    is_helpful: bool,
    postgres: PgPool,
) -> Result<(RatingVote, i64), AppError> {
    if rating_id < 1 || voter_id < 1 {
        return Err(AppError::InvalidArgument(
            "Rating ID and voter ID must be positive".into(),
        ));
    }

    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let album_id = sqlx::query_scalar::<_, i64>(
        "SELECT album_id FROM ratings WHERE id = $1 FOR UPDATE",
    )
    .bind(rating_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rating: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Rating not found".into()))?;

    let vote = sqlx::query_as::<_, RatingVote>(
        "INSERT INTO rating_votes (rating_id, user_id, is_helpful)
        VALUES ($1, $2, $3)
        RETURNING id, rating_id, user_id, is_helpful, created_at",
    )
    .bind(rating_id)
    .bind(voter_id)
    .bind(is_helpful)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| conflict_on_unique(e, "You have already voted for this rating"))?;

    let counter = if is_helpful {
        "helpful_votes"
    } else {
        "unhelpful_votes"
    };
    sqlx::query(&format!(
        "UPDATE ratings SET {counter} = {counter} + 1 WHERE id = $1"
    ))
    .bind(rating_id)
    .execute(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update vote counter: {}", e)))?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit vote: {}", e)))?;

    Ok((vote, album_id))
}
