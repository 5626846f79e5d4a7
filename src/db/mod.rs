pub mod album;
pub mod order;
pub mod rating;
pub mod user;

use sqlx::PgPool;

use crate::errors::AppError;

/// Maps a Postgres unique-constraint violation to `Conflict` so concurrent
/// duplicate writes (same rater, same voter) surface as such instead of as a
/// generic database failure.
pub fn conflict_on_unique(err: sqlx::Error, conflict_msg: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(conflict_msg.into())
        }
        _ => AppError::DatabaseError(format!("Failed to write record: {}", err)),
    }
}

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        username TEXT NOT NULL UNIQUE,
        hashed_password TEXT NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        is_admin BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE TABLE IF NOT EXISTS artists (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT
    )",
    "CREATE TABLE IF NOT EXISTS albums (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        artist_id BIGINT NOT NULL REFERENCES artists(id) ON DELETE CASCADE,
        release_year INTEGER,
        genre TEXT,
        price DOUBLE PRECISION NOT NULL DEFAULT 0,
        stock INTEGER NOT NULL DEFAULT 0,
        weighted_rating DOUBLE PRECISION NOT NULL DEFAULT 0,
        rating_count BIGINT NOT NULL DEFAULT 0,
        verified_rating_count BIGINT NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        total_amount DOUBLE PRECISION NOT NULL DEFAULT 0,
        status TEXT NOT NULL DEFAULT 'pending',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE TABLE IF NOT EXISTS order_items (
        id BIGSERIAL PRIMARY KEY,
        order_id BIGINT NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
        album_id BIGINT NOT NULL REFERENCES albums(id) ON DELETE CASCADE,
        quantity INTEGER NOT NULL DEFAULT 1,
        price_at_time DOUBLE PRECISION NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS ratings (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        album_id BIGINT NOT NULL REFERENCES albums(id) ON DELETE CASCADE,
        score SMALLINT NOT NULL,
        is_verified_purchase BOOLEAN NOT NULL DEFAULT FALSE,
        review_text_length INTEGER NOT NULL DEFAULT 0,
        helpful_votes INTEGER NOT NULL DEFAULT 0,
        unhelpful_votes INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        UNIQUE (user_id, album_id)
    )",
    "CREATE TABLE IF NOT EXISTS rating_votes (
        id BIGSERIAL PRIMARY KEY,
        rating_id BIGINT NOT NULL REFERENCES ratings(id) ON DELETE CASCADE,
        user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        is_helpful BOOLEAN NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        UNIQUE (rating_id, user_id)
    )",
];

/// Creates any missing tables at startup. The unique constraints here back the
/// one-rating-per-(user, album) and one-vote-per-(user, rating) invariants.
pub async fn init_schema(postgres: &PgPool) -> Result<(), AppError> {
    for ddl in SCHEMA {
        sqlx::query(ddl)
            .execute(postgres)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to initialize schema: {}", e)))?;
    }

    tracing::info!("Database schema initialized");
    Ok(())
}
