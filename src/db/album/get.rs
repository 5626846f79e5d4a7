use sqlx::PgPool;

use crate::{errors::AppError, models::album::Album};

pub async fn album_exists(album_id: i64, postgres: PgPool) -> Result<bool, AppError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM albums WHERE id = $1)")
            .bind(album_id)
            .fetch_one(&postgres)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to query album: {}", e)))?;

    Ok(exists)
}

pub async fn get_album(album_id: i64, postgres: PgPool) -> Result<Album, AppError> {
    if album_id < 1 {
        return Err(AppError::InvalidArgument("Album ID must be positive".into()));
    }

    let album = sqlx::query_as::<_, Album>(
        "SELECT id, title, artist_id, release_year, genre, price, stock,
            weighted_rating, rating_count, verified_rating_count
        FROM albums WHERE id = $1",
    )
    .bind(album_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch album: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Album not found".into()))?;

    Ok(album)
}
