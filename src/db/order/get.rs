use sqlx::PgPool;

use crate::errors::AppError;

/// Whether the user has a completed order containing the album. Backs the
/// verified-purchase flag set when a rating is created.
pub async fn has_purchased_album(
    user_id: i64,
    album_id: i64,
    postgres: PgPool,
) -> Result<bool, AppError> {
    let purchased = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(
            SELECT 1 FROM orders o
            JOIN order_items oi ON oi.order_id = o.id
            WHERE o.user_id = $1 AND oi.album_id = $2 AND o.status = 'completed'
        )",
    )
    .bind(user_id)
    .bind(album_id)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to query purchase history: {}", e)))?;

    Ok(purchased)
}
