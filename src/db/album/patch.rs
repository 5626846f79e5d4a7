use sqlx::PgPool;

use crate::{db::rating::get::get_album_rating_stats, errors::AppError};

/// Recomputes the album's rating aggregate and persists it.
///
/// The album row is locked with `SELECT ... FOR UPDATE` before the write so
/// two concurrent refreshes serialize and the three cached fields always come
/// from one coherent recomputation. If the album was deleted in the meantime
/// there is nothing to refresh and the call is a no-op.
pub async fn refresh_album_rating(album_id: i64, postgres: PgPool) -> Result<(), AppError> {
    if album_id < 1 {
        return Err(AppError::InvalidArgument("Album ID must be positive".into()));
    }

    let stats = get_album_rating_stats(album_id, postgres.clone()).await?;

    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let locked = sqlx::query_scalar::<_, i64>("SELECT id FROM albums WHERE id = $1 FOR UPDATE")
        .bind(album_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to lock album: {}", e)))?;

    if locked.is_none() {
        return Ok(());
    }

    sqlx::query(
        "UPDATE albums SET weighted_rating = $1, rating_count = $2, verified_rating_count = $3
        WHERE id = $4",
    )
    .bind(stats.weighted_rating)
    .bind(stats.rating_count)
    .bind(stats.verified_rating_count)
    .bind(album_id)
    .execute(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update album rating: {}", e)))?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit album rating: {}", e)))?;

    tracing::info!(
        "Album {} aggregate refreshed: weighted {} over {} ratings",
        album_id,
        stats.weighted_rating,
        stats.rating_count
    );

    Ok(())
}
