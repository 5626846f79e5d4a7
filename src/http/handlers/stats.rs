use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    db::{
        album::get::album_exists,
        rating::get::{get_album_rating_stats, get_user_rating_stats},
    },
    errors::AppError,
    models::rating::{AlbumRatingStats, UserRatingStats},
    state::AppState,
};

pub async fn album_stats_handler(
    State(state): State<AppState>,
    Path(album_id): Path<i64>,
) -> Result<Json<AlbumRatingStats>, (StatusCode, String)> {
    if album_id < 1 {
        return Err(AppError::InvalidArgument("Album ID must be positive".into()).to_response());
    }

    match album_exists(album_id, state.postgres.clone()).await {
        Ok(true) => {}
        Ok(false) => return Err(AppError::NotFound("Album not found".into()).to_response()),
        Err(err) => {
            tracing::error!("Error checking album {}: {}", album_id, err);
            return Err(err.to_response());
        }
    }

    match get_album_rating_stats(album_id, state.postgres.clone()).await {
        Ok(stats) => Ok(Json(stats)),
        Err(err) => {
            tracing::error!("Error fetching album {} stats: {}", album_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn user_stats_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserRatingStats>, (StatusCode, String)> {
    match get_user_rating_stats(user_id, state.postgres.clone()).await {
        Ok(stats) => Ok(Json(stats)),
        Err(err) => {
            tracing::error!("Error fetching user {} stats: {}", user_id, err);
            Err(err.to_response())
        }
    }
}
