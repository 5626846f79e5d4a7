use chrono::{DateTime, Utc};

use crate::{
    errors::AppError,
    models::rating::{AlbumRatingStats, Rating, ScoreDistribution, UserRatingStats},
    ratings::score::{MAX_SCORE, MIN_SCORE, review_quality, round2, weighted_score},
};

/// Aggregates already-fetched rating rows for one album.
///
/// Rows with an out-of-range score are treated as corrupt and excluded from
/// every figure, including `rating_count`. Age is whole days from the row's
/// `created_at` to `now`, clamped at zero for clock skew.
pub fn album_stats(
    album_id: i64,
    ratings: &[Rating],
    now: DateTime<Utc>,
) -> Result<AlbumRatingStats, AppError> {
    if album_id < 1 {
        return Err(AppError::InvalidArgument("Album ID must be positive".into()));
    }

    let mut distribution = empty_distribution();
    let mut verified_distribution = empty_distribution();
    let mut verified_count: i64 = 0;
    let mut weighted_sum = 0.0;
    let mut valid_count: i64 = 0;

    for rating in ratings {
        if !(MIN_SCORE..=MAX_SCORE).contains(&rating.score) {
            continue;
        }

        *distribution.entry(rating.score).or_insert(0) += 1;
        if rating.is_verified_purchase {
            *verified_distribution.entry(rating.score).or_insert(0) += 1;
            verified_count += 1;
        }

        let age_days = (now - rating.created_at).num_days().max(0);
        let quality = review_quality(
            rating.helpful_votes as i64,
            rating.unhelpful_votes as i64,
            rating.review_text_length as i64,
        )?;
        let total_votes = rating.helpful_votes as i64 + rating.unhelpful_votes as i64;
        weighted_sum += weighted_score(
            rating.score,
            total_votes,
            rating.is_verified_purchase,
            quality,
            age_days,
        )?;
        valid_count += 1;
    }

    let weighted_rating = if valid_count > 0 {
        round2(weighted_sum / valid_count as f64)
    } else {
        0.0
    };

    Ok(AlbumRatingStats {
        album_id,
        weighted_rating,
        rating_count: valid_count,
        verified_rating_count: verified_count,
        rating_distribution: distribution,
        verified_rating_distribution: verified_distribution,
    })
}

/// Aggregates already-fetched rating rows authored by one user. Corrupt rows
/// are excluded from every figure, `total_ratings` included.
pub fn user_stats(user_id: i64, ratings: &[Rating]) -> Result<UserRatingStats, AppError> {
    if user_id < 1 {
        return Err(AppError::InvalidArgument("User ID must be positive".into()));
    }

    let mut distribution = empty_distribution();
    let mut total_score: i64 = 0;
    let mut helpful_votes_received: i64 = 0;
    let mut total_review_length: i64 = 0;
    let mut valid_count: i64 = 0;

    for rating in ratings {
        if !(MIN_SCORE..=MAX_SCORE).contains(&rating.score) {
            continue;
        }

        *distribution.entry(rating.score).or_insert(0) += 1;
        total_score += rating.score as i64;
        helpful_votes_received += rating.helpful_votes as i64;
        total_review_length += rating.review_text_length as i64;
        valid_count += 1;
    }

    let average_rating = if valid_count > 0 {
        round2(total_score as f64 / valid_count as f64)
    } else {
        0.0
    };

    Ok(UserRatingStats {
        user_id,
        total_ratings: valid_count,
        average_rating,
        rating_distribution: distribution,
        helpful_votes_received,
        total_review_length,
    })
}

fn empty_distribution() -> ScoreDistribution {
    (MIN_SCORE..=MAX_SCORE).map(|score| (score, 0)).collect()
}
