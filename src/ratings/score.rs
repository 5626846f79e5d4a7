use crate::errors::AppError;

pub const MIN_SCORE: i16 = 1;
pub const MAX_SCORE: i16 = 5;

pub const REVIEW_MIN_LENGTH: i64 = 10;
pub const REVIEW_MAX_LENGTH: i64 = 2000;

/// Review quality in [0, 1]: 70% helpfulness-vote ratio, 30% length score.
///
/// With no votes the helpfulness ratio defaults to a neutral 0.5. The length
/// score ramps up to 1.0 at `REVIEW_MIN_LENGTH`, holds 1.0 through
/// `REVIEW_MAX_LENGTH`, and decays as `MAX / length` beyond it.
pub fn review_quality(
    helpful_votes: i64,
    unhelpful_votes: i64,
    text_length: i64,
) -> Result<f64, AppError> {
    if helpful_votes < 0 || unhelpful_votes < 0 {
        return Err(AppError::InvalidArgument("Votes cannot be negative".into()));
    }
    if text_length < 0 {
        return Err(AppError::InvalidArgument(
            "Text length cannot be negative".into(),
        ));
    }

    let total_votes = helpful_votes + unhelpful_votes;
    let helpfulness = if total_votes > 0 {
        helpful_votes as f64 / total_votes as f64
    } else {
        0.5
    };

    let length_score = if text_length == 0 {
        0.0
    } else if text_length < REVIEW_MIN_LENGTH {
        text_length as f64 / REVIEW_MIN_LENGTH as f64
    } else if text_length <= REVIEW_MAX_LENGTH {
        1.0
    } else {
        REVIEW_MAX_LENGTH as f64 / text_length as f64
    };

    Ok(round2(helpfulness * 0.7 + length_score * 0.3))
}

/// Weighted contribution of a single rating. Each factor multiplies a running
/// weight starting at 1.0: verified purchases get 1.5x, vote volume adds up to
/// +2.0 (one notch per 10 votes), review quality adds up to +1.0, and age
/// decays the weight linearly over a year down to a floor of 0.5.
///
/// The result is not clamped to [1, 5]; it is meant to be averaged across all
/// of an album's ratings, not read as a corrected per-rating score.
pub fn weighted_score(
    score: i16,
    total_votes: i64,
    verified_purchase: bool,
    review_quality: f64,
    age_days: i64,
) -> Result<f64, AppError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(AppError::InvalidArgument(format!(
            "Rating must be between {} and {}",
            MIN_SCORE, MAX_SCORE
        )));
    }

    let mut weight = 1.0;

    if verified_purchase {
        weight *= 1.5;
    }

    let votes_weight = (total_votes as f64 / 10.0).min(2.0);
    weight *= 1.0 + votes_weight;

    weight *= 1.0 + review_quality;

    let age_penalty = (1.0 - age_days as f64 / 365.0).max(0.5);
    weight *= age_penalty;

    Ok(round2(score as f64 * weight))
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
