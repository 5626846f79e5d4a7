use sqlx::PgPool;

use crate::errors::AppError;

pub async fn user_exists(user_id: i64, postgres: PgPool) -> Result<bool, AppError> {
    let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to query user: {}", e)))?;

    Ok(exists)
}
