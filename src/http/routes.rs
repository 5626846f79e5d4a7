use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{
    http::handlers::{
        album_stats_handler, create_rating_handler, get_album_handler, update_rating_handler,
        user_stats_handler, vote_on_rating_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/ratings", post(create_rating_handler))
        .route("/ratings/{rating_id}", put(update_rating_handler))
        .route("/ratings/{rating_id}/vote", post(vote_on_rating_handler))
        .route("/ratings/albums/{album_id}/stats", get(album_stats_handler))
        .route("/ratings/users/{user_id}/stats", get(user_stats_handler))
        .route("/albums/{album_id}", get(get_album_handler))
        .with_state(state)
}
