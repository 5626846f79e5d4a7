use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{db::album::get::get_album, models::album::Album, state::AppState};

pub async fn get_album_handler(
    State(state): State<AppState>,
    Path(album_id): Path<i64>,
) -> Result<Json<Album>, (StatusCode, String)> {
    match get_album(album_id, state.postgres.clone()).await {
        Ok(album) => Ok(Json(album)),
        Err(err) => {
            tracing::error!("Error fetching album {}: {}", album_id, err);
            Err(err.to_response())
        }
    }
}
