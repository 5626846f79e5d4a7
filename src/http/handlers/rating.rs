use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    db::{
        album::patch::refresh_album_rating,
        rating::{post::create_rating, post::vote_on_rating, put::update_rating},
    },
    models::rating::Rating,
    state::AppState,
};

// The requester's id arrives in the payload; authentication itself lives in
// front of this service.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingPayload {
    pub user_id: i64,
    pub album_id: i64,
    pub score: i16,
    pub review_text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatingPayload {
    pub user_id: i64,
    pub score: i16,
    pub review_text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotePayload {
    pub user_id: i64,
    pub is_helpful: bool,
}

pub async fn create_rating_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRatingPayload>,
) -> Result<Json<Rating>, (StatusCode, String)> {
    let result = create_rating(
        payload.user_id,
        payload.album_id,
        payload.score,
        payload.review_text.as_deref(),
        state.postgres.clone(),
    )
    .await;

    match result {
        Ok(rating) => {
            if let Err(err) = refresh_album_rating(rating.album_id, state.postgres.clone()).await {
                tracing::error!("Error refreshing album {} aggregate: {}", rating.album_id, err);
                return Err(err.to_response());
            }
            Ok(Json(rating))
        }
        Err(err) => {
            tracing::error!("Error creating rating: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn update_rating_handler(
    State(state): State<AppState>,
    Path(rating_id): Path<i64>,
    Json(payload): Json<UpdateRatingPayload>,
) -> Result<Json<Rating>, (StatusCode, String)> {
    let result = update_rating(
        rating_id,
        payload.user_id,
        payload.score,
        payload.review_text.as_deref(),
        state.postgres.clone(),
    )
    .await;

    match result {
        Ok(rating) => {
            if let Err(err) = refresh_album_rating(rating.album_id, state.postgres.clone()).await {
                tracing::error!("Error refreshing album {} aggregate: {}", rating.album_id, err);
                return Err(err.to_response());
            }
            Ok(Json(rating))
        }
        Err(err) => {
            tracing::error!("Error updating rating {}: {}", rating_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn vote_on_rating_handler(
    State(state): State<AppState>,
    Path(rating_id): Path<i64>,
    Json(payload): Json<VotePayload>,
) -> Result<Json<Value>, (StatusCode, String)> {
    match vote_on_rating(
        rating_id,
        payload.user_id,
        payload.is_helpful,
        state.postgres.clone(),
    )
    .await
    {
        Ok((vote, album_id)) => {
            // Votes change the review-quality inputs, so the cached album
            // aggregate is refreshed here as well.
            if let Err(err) = refresh_album_rating(album_id, state.postgres.clone()).await {
                tracing::error!("Error refreshing album {} aggregate: {}", album_id, err);
                return Err(err.to_response());
            }
            Ok(Json(json!({ "status": "success", "vote": vote })))
        }
        Err(err) => {
            tracing::error!("Error voting on rating {}: {}", rating_id, err);
            Err(err.to_response())
        }
    }
}
